//! Core engine types: sides, addresses, configuration, actions, RNG, errors.
//!
//! Everything here is plain data. Rules live in `rules`, turn bookkeeping in
//! `dice`, escrow in `escrow`.

pub mod action;
pub mod address;
pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use action::{Action, ActionRecord, DiceRoll, MoveOutcome, Outcome, Payout};
pub use address::Address;
pub use config::{MatchConfig, MAX_STAKE};
pub use error::{ConfigError, EngineError, SnapshotError};
pub use rng::{DiceRng, DiceRngState};
pub use side::{
    is_playable, Position, Side, SideMap, CHECKERS_PER_SIDE, HIGH_END, LOW_END, POSITION_COUNT,
};
