use thiserror::Error;

/// Malformed or out-of-range bet parameters.
///
/// Each failure mode is its own variant so callers can surface a precise
/// message instead of coercing bad input (e.g. lottery count vs duplicate
/// numbers are distinct failures).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("dice guess must be between 1 and 6 (got {0})")]
    DiceGuessOutOfRange(u8),

    #[error("unknown roulette bet type \"{0}\"")]
    UnknownRouletteBetType(String),

    #[error("invalid value \"{value}\" for roulette bet type \"{bet_type}\"")]
    InvalidRouletteBetValue { bet_type: String, value: String },

    #[error("roulette number must be between 0 and 36 (got {0})")]
    RouletteNumberOutOfRange(u8),

    #[error("lottery requires exactly 6 numbers (got {0})")]
    LotteryNumberCount(usize),

    #[error("lottery numbers must be between 1 and 49 (got {0})")]
    LotteryNumberOutOfRange(u8),

    #[error("lottery numbers must be unique ({0} appears more than once)")]
    DuplicateLotteryNumber(u8),

    #[error("bet parameters are for {got}, not {expected}")]
    GameMismatch {
        expected: crate::GameType,
        got: crate::GameType,
    },
}

/// Everything that can go wrong with a play request.
///
/// All variants except `CommitFailed` are terminal: retrying the same
/// request cannot succeed (until, for `DailyLimitExceeded`, the next UTC
/// day). `CommitFailed` is transient and guarantees no state changed, so
/// the caller may safely retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CasinoError {
    #[error("user not found")]
    UserNotFound,

    #[error("user account is not active")]
    AccountNotActive,

    #[error("bet must be between {min} and {max} points")]
    InvalidBetAmount { min: u64, max: u64 },

    #[error("insufficient points balance")]
    InsufficientFunds,

    #[error("daily casino limit of {ceiling} points reached")]
    DailyLimitExceeded { ceiling: u64 },

    #[error(transparent)]
    InvalidParams(#[from] ParamError),

    #[error("commit failed: {0}")]
    CommitFailed(String),
}

impl CasinoError {
    /// True only for transient failures where no state changed and the
    /// caller may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CasinoError::CommitFailed(_))
    }
}
