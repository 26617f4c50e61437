/// Minimum bet accepted for any game, in points.
pub const MIN_BET: u64 = 10;

/// Maximum bet accepted for any game, in points.
pub const MAX_BET: u64 = 500;

/// Daily net win/loss ceiling per user, in points. Once the magnitude of
/// `total_won - total_lost` reaches this value, further bets are rejected
/// until the next UTC day.
pub const DAILY_LIMIT: u64 = 1_000;

/// Points granted to a newly provisioned account.
pub const STARTING_BALANCE: u64 = 1_000;

/// XP accrues at `bet_amount / XP_BET_DIVISOR` per resolved game.
pub const XP_BET_DIVISOR: u64 = 10;

/// Number of entries kept on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Lottery numbers are picked from `1..=LOTTERY_POOL_SIZE`.
pub const LOTTERY_POOL_SIZE: u8 = 49;

/// A lottery ticket is exactly this many unique numbers.
pub const LOTTERY_PICKS: usize = 6;
