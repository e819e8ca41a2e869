//! # bg-escrow
//!
//! An authoritative backgammon match engine with a stake escrow.
//!
//! ## Design Principles
//!
//! 1. **Closed State Machine**: every transition is derived from the prior
//!    state and the incoming action. Nothing is left to client
//!    interpretation.
//!
//! 2. **All-or-Nothing**: an action either commits in full or is rejected
//!    with the first rule it broke, leaving state untouched.
//!
//! 3. **One Rule Table**: white and black share every rule. Their
//!    differences (direction, home, bar, exit) live on `Side`.
//!
//! ## Architecture
//!
//! - **Copy-then-commit**: transitions run on a clone of `MatchState`;
//!   persistent data structures (`im`) keep the clone cheap.
//!
//! - **Reproducible Dice**: dice come from a ChaCha8 stream seeded with host
//!   entropy, so any observer holding the seed can replay the match.
//!
//! ## Modules
//!
//! - `core`: sides, addresses, configuration, actions, RNG, errors
//! - `board`: checker counts per position and side
//! - `dice`: turn tracking and dice sources
//! - `rules`: move validation, bear-off, legal move enumeration
//! - `escrow`: seats, stake custody, one-shot payout
//! - `engine`: `BackgammonMatch`, the atomic action dispatcher
//! - `query`: read-only projections

pub mod board;
pub mod core;
pub mod dice;
pub mod engine;
pub mod escrow;
pub mod query;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Address, ConfigError, DiceRng, DiceRoll, EngineError, MatchConfig,
    MoveOutcome, Outcome, Payout, Position, Side, SideMap, SnapshotError, CHECKERS_PER_SIDE,
    MAX_STAKE,
};

pub use crate::board::Board;

pub use crate::dice::{DiceSource, ScriptedDice, TurnPhase, TurnTracker};

pub use crate::rules::{MoveValidator, Resolution};

pub use crate::escrow::{Escrow, MatchPhase};

pub use crate::engine::{BackgammonMatch, MatchBuilder, MatchState};

pub use crate::query::{MatchView, SideView, Winner};
