//! Storage abstraction for player state and the audit log.
//!
//! The engine reads a per-user snapshot, builds the settled state, and
//! writes it back through a single [`Store::commit`] call. Implementations
//! must apply a commit atomically: either the whole settled play lands
//! (account, profile, daily limit, audit record) or none of it does and an
//! error is returned. That contract is what makes `CommitFailed` safely
//! retryable for callers.

use chrono::NaiveDate;
use dashmap::DashMap;
use pointhouse_types::{DailyLimit, GameRecord, PlayerProfile, UserAccount, UserId};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Per-user snapshot read at the start of a play.
///
/// `profile` and `daily` are `None` until the user's first resolved game
/// (first of the day, for `daily`): both are created lazily at settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub account: UserAccount,
    pub profile: Option<PlayerProfile>,
    pub daily: Option<DailyLimit>,
}

/// The atomic unit written at settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettledPlay {
    pub account: UserAccount,
    pub profile: PlayerProfile,
    pub daily: DailyLimit,
    pub record: GameRecord,
}

/// Player state storage.
pub trait Store: Send + Sync {
    /// Load the user's account, profile, and the daily-limit record for
    /// `today` (if one exists for that date).
    fn load(&self, user_id: &UserId, today: NaiveDate) -> anyhow::Result<Option<PlayerState>>;

    /// Atomically apply a settled play. On error, nothing may have been
    /// applied.
    fn commit(&self, play: SettledPlay) -> anyhow::Result<()>;
}

#[derive(Clone, Debug)]
struct StoredPlayer {
    account: UserAccount,
    profile: Option<PlayerProfile>,
    /// One record per day; old days are kept for audit and never rewritten.
    days: BTreeMap<NaiveDate, DailyLimit>,
}

/// In-memory store backed by a concurrent map.
///
/// Atomicity of `commit` comes from holding the user's map entry for the
/// duration of the write; the only fallible step (unknown account) happens
/// before any mutation.
#[derive(Default)]
pub struct Memory {
    players: DashMap<UserId, StoredPlayer>,
    records: Mutex<Vec<GameRecord>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style account seeding for tests and embedding hosts.
    pub fn with_account(self, account: UserAccount) -> Self {
        self.insert_account(account);
        self
    }

    /// Builder-style shorthand: an active account with the given balance.
    pub fn with_user(self, id: &str, points_balance: u64) -> Self {
        self.with_account(UserAccount::new(id, points_balance))
    }

    /// Provision an account (overwrites any previous state for the id).
    pub fn insert_account(&self, account: UserAccount) {
        self.players.insert(
            account.id.clone(),
            StoredPlayer {
                account,
                profile: None,
                days: BTreeMap::new(),
            },
        );
    }

    pub fn account(&self, user_id: &UserId) -> Option<UserAccount> {
        self.players.get(user_id).map(|p| p.account.clone())
    }

    pub fn profile(&self, user_id: &UserId) -> Option<PlayerProfile> {
        self.players.get(user_id).and_then(|p| p.profile.clone())
    }

    pub fn daily_limit(&self, user_id: &UserId, date: NaiveDate) -> Option<DailyLimit> {
        self.players
            .get(user_id)
            .and_then(|p| p.days.get(&date).cloned())
    }

    /// The full audit stream, oldest first.
    pub fn records(&self) -> Vec<GameRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The audit stream filtered to one user.
    pub fn records_for(&self, user_id: &UserId) -> Vec<GameRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl Store for Memory {
    fn load(&self, user_id: &UserId, today: NaiveDate) -> anyhow::Result<Option<PlayerState>> {
        Ok(self.players.get(user_id).map(|p| PlayerState {
            account: p.account.clone(),
            profile: p.profile.clone(),
            daily: p.days.get(&today).cloned(),
        }))
    }

    fn commit(&self, play: SettledPlay) -> anyhow::Result<()> {
        let user_id = play.account.id.clone();
        let mut player = self
            .players
            .get_mut(&user_id)
            .ok_or_else(|| anyhow::anyhow!("account {user_id} disappeared before commit"))?;
        player.account = play.account;
        player.profile = Some(play.profile);
        player.days.insert(play.daily.date, play.daily);
        drop(player);
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(play.record);
        Ok(())
    }
}
