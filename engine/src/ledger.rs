//! Points ledger: the sole owner of balance-affecting mutations.
//!
//! Everything else treats `UserAccount` as read-only; the orchestrator
//! routes every balance change through [`settle_bet`] so the invariants
//! (non-negative balance, monotone `total_earned`) are enforced in exactly
//! one place.

use pointhouse_types::{CasinoError, UserAccount};

/// Preconditions for accepting a bet: account active and funded. Checked
/// before any randomness is drawn, so a rejected bet produces no outcome
/// and no audit record.
pub fn check_bet(account: &UserAccount, bet_amount: u64) -> Result<(), CasinoError> {
    if !account.is_active() {
        return Err(CasinoError::AccountNotActive);
    }
    if account.points_balance < bet_amount {
        return Err(CasinoError::InsufficientFunds);
    }
    Ok(())
}

/// Apply a resolved game to the account: deduct the stake, credit the gross
/// payout, and mirror any credited payout into the lifetime `total_earned`
/// counter. Returns the new balance.
pub fn settle_bet(
    account: &mut UserAccount,
    bet_amount: u64,
    win_amount: u64,
) -> Result<u64, CasinoError> {
    check_bet(account, bet_amount)?;
    account.points_balance -= bet_amount;
    account.points_balance = account.points_balance.saturating_add(win_amount);
    if win_amount > 0 {
        account.total_earned = account.total_earned.saturating_add(win_amount);
    }
    Ok(account.points_balance)
}
