//! Daily win/loss limit guard.
//!
//! Each user accrues a per-UTC-day [`DailyLimit`] record; once the
//! magnitude of the day's net result reaches the configured ceiling, bets
//! are rejected until the next day. Records are created lazily with zeros
//! and a new day always starts from a fresh record (the previous day's
//! record is never modified again).

use chrono::NaiveDate;
use pointhouse_types::{CasinoError, DailyLimit};

/// The record to use for `today`: the stored one if it is current, a fresh
/// zeroed record otherwise. Idempotent, so the first play of a day and a
/// mid-day play go through the same path.
pub fn current_for_day(existing: Option<DailyLimit>, today: NaiveDate) -> DailyLimit {
    match existing {
        Some(limit) if limit.date == today => limit,
        _ => DailyLimit::fresh(today),
    }
}

/// Reject the bet when the day's net result has already reached the
/// ceiling. Called before any outcome is drawn.
pub fn check(limit: &DailyLimit, ceiling: u64) -> Result<(), CasinoError> {
    if limit.net_magnitude() >= ceiling {
        return Err(CasinoError::DailyLimitExceeded { ceiling });
    }
    Ok(())
}
