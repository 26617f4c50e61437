use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier assigned by the account system (out of scope here).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account standing; only `Active` accounts may wager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Banned,
    Suspended,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountStatus::Active => "active",
            AccountStatus::Banned => "banned",
            AccountStatus::Suspended => "suspended",
        };
        f.write_str(label)
    }
}

/// A user's points account.
///
/// `points_balance` can never go negative (`u64` plus ledger preconditions);
/// `total_earned` is a lifetime counter that only ever grows, credited with
/// the gross payout of every winning or pushed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub points_balance: u64,
    pub total_earned: u64,
    pub status: AccountStatus,
}

impl UserAccount {
    /// A fresh active account with the given balance.
    pub fn new(id: impl Into<UserId>, points_balance: u64) -> Self {
        Self {
            id: id.into(),
            points_balance,
            total_earned: 0,
            status: AccountStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
