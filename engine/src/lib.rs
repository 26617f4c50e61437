//! Pointhouse game engine.
//!
//! This crate contains the casino game engine and points ledger: random
//! outcome generation, per-game payout resolution, daily win/loss limits,
//! and atomic settlement of balances, statistics, and audit records.
//!
//! ## Determinism requirements
//! - Payout resolution is pure: given a drawn outcome, the win amount is a
//!   function of the bet and parameters alone.
//! - All validation happens before any randomness is drawn, so a rejected
//!   bet never consumes entropy or produces an audit record.
//! - The orchestrator core takes its clock and RNG as inputs; wall-clock
//!   time and OS entropy enter only at the public `play` boundary.
//!
//! ## Settlement invariants
//! The `Settling` step (ledger write + daily limit update + audit record
//! append) commits through a single [`Store::commit`] call. A failed commit
//! leaves no observable change, so callers may safely retry on
//! `CasinoError::CommitFailed`. Bets from the same user are serialized; bets
//! from different users proceed in parallel.
//!
//! The primary entrypoint is [`CasinoEngine`].

pub mod config;
pub mod engine;
pub mod games;
pub mod ledger;
pub mod limits;
pub mod rng;
pub mod store;

pub use config::EngineConfig;
pub use engine::CasinoEngine;
pub use rng::GameRng;
pub use store::{Memory, PlayerState, SettledPlay, Store};
