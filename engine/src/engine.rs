//! Game session orchestration.
//!
//! [`CasinoEngine`] is the façade every game variant goes through. A play
//! request moves through validation, limit checking, outcome resolution,
//! and settlement; the variants only contribute their
//! `(validate, draw, payout)` triple, so the settlement logic exists
//! exactly once.
//!
//! Settlement for a given user is serialized with a per-user lock held from
//! state load to commit: concurrent bets from one user can never validate
//! against a stale balance. Different users never contend.

use crate::config::EngineConfig;
use crate::games;
use crate::ledger;
use crate::limits;
use crate::rng::GameRng;
use crate::store::{SettledPlay, Store};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use pointhouse_types::{
    BetParams, CasinoError, GameRecord, GameType, Leaderboard, Outcome, PlayResult, UserId,
};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info};

/// Outcome source for one play: live randomness, or a pre-resolved outcome
/// (deterministic replay and tests).
enum Draw<'a> {
    Rng(&'a mut GameRng),
    Resolved(Outcome),
}

/// The casino game engine: validates bets, resolves outcomes, and settles
/// them atomically against the points ledger.
pub struct CasinoEngine<S: Store> {
    store: S,
    config: EngineConfig,
    locks: DashMap<UserId, Arc<Mutex<()>>>,
    leaderboard: Mutex<Leaderboard>,
}

impl<S: Store> CasinoEngine<S> {
    /// An engine with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            locks: DashMap::new(),
            leaderboard: Mutex::new(Leaderboard::default()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current top players by balance.
    pub fn leaderboard(&self) -> Leaderboard {
        self.leaderboard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Play one game with OS randomness. This is the engine's external
    /// call contract; transport layers (bot commands, HTTP handlers) call
    /// nothing else.
    pub fn play(
        &self,
        user_id: &UserId,
        game: GameType,
        bet_amount: u64,
        params: BetParams,
    ) -> Result<PlayResult, CasinoError> {
        let mut rng = GameRng::from_entropy();
        self.play_with_rng(user_id, game, bet_amount, params, &mut rng)
    }

    /// Play one game drawing from the caller's RNG (deterministic replay).
    pub fn play_with_rng(
        &self,
        user_id: &UserId,
        game: GameType,
        bet_amount: u64,
        params: BetParams,
        rng: &mut GameRng,
    ) -> Result<PlayResult, CasinoError> {
        self.play_at(Utc::now(), user_id, game, bet_amount, params, Draw::Rng(rng))
    }

    /// Test seam: run the full request path with a forced outcome and
    /// clock, skipping only the draw itself.
    pub(crate) fn play_resolved_at(
        &self,
        now: DateTime<Utc>,
        user_id: &UserId,
        game: GameType,
        bet_amount: u64,
        params: BetParams,
        outcome: Outcome,
    ) -> Result<PlayResult, CasinoError> {
        self.play_at(now, user_id, game, bet_amount, params, Draw::Resolved(outcome))
    }

    fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        self.locks
            .entry(user_id.clone())
            .or_default()
            .clone()
    }

    fn check_bet_amount(&self, bet_amount: u64) -> Result<(), CasinoError> {
        if bet_amount < self.config.min_bet || bet_amount > self.config.max_bet {
            return Err(CasinoError::InvalidBetAmount {
                min: self.config.min_bet,
                max: self.config.max_bet,
            });
        }
        Ok(())
    }

    fn play_at(
        &self,
        now: DateTime<Utc>,
        user_id: &UserId,
        game: GameType,
        bet_amount: u64,
        params: BetParams,
        draw: Draw<'_>,
    ) -> Result<PlayResult, CasinoError> {
        // Pure validation first: a rejected bet never reads state, consumes
        // randomness, or leaves an audit record.
        games::validate_params(game, &params).map_err(|e| rejected(user_id, game, e.into()))?;
        self.check_bet_amount(bet_amount)
            .map_err(|e| rejected(user_id, game, e))?;

        // Hold the user's lock from load to commit so concurrent bets from
        // the same user settle one at a time.
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let today = now.date_naive();
        let state = self
            .store
            .load(user_id, today)
            .map_err(|e| {
                error!(user = %user_id, error = %e, "failed to load player state");
                CasinoError::CommitFailed(format!("loading player state: {e}"))
            })?
            .ok_or_else(|| rejected(user_id, game, CasinoError::UserNotFound))?;

        ledger::check_bet(&state.account, bet_amount)
            .map_err(|e| rejected(user_id, game, e))?;

        let mut daily = limits::current_for_day(state.daily, today);
        limits::check(&daily, self.config.daily_limit)
            .map_err(|e| rejected(user_id, game, e))?;

        // Resolve: one draw, then a pure payout computation.
        let outcome = match draw {
            Draw::Rng(rng) => games::draw_outcome(&params, rng),
            Draw::Resolved(outcome) => outcome,
        };
        let win_amount = games::resolve_payout(bet_amount, &params, &outcome);
        let description = games::describe_outcome(&params, &outcome);

        // Settle: ledger, daily limit, profile, and audit record commit as
        // one unit or not at all.
        let mut account = state.account;
        let new_balance = ledger::settle_bet(&mut account, bet_amount, win_amount)?;
        daily.apply(bet_amount, win_amount);
        let mut profile = state.profile.unwrap_or_default();
        profile.record_game(game, bet_amount, win_amount);
        let record = GameRecord::new(
            user_id.clone(),
            game,
            bet_amount,
            win_amount,
            description.clone(),
            now,
        );

        self.store
            .commit(SettledPlay {
                account,
                profile,
                daily,
                record,
            })
            .map_err(|e| {
                error!(
                    user = %user_id,
                    game = %game,
                    bet = bet_amount,
                    win = win_amount,
                    error = %e,
                    "settlement commit failed; no state was applied"
                );
                CasinoError::CommitFailed(e.to_string())
            })?;

        self.leaderboard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .update(user_id, new_balance);

        info!(
            user = %user_id,
            game = %game,
            bet = bet_amount,
            win = win_amount,
            balance = new_balance,
            "game settled"
        );

        Ok(PlayResult {
            game_type: game,
            outcome,
            outcome_description: description,
            bet_amount,
            win_amount,
            new_balance,
        })
    }
}

fn rejected(user_id: &UserId, game: GameType, error: CasinoError) -> CasinoError {
    debug!(user = %user_id, game = %game, reason = %error, "bet rejected");
    error
}
