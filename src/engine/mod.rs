//! Match engine.
//!
//! `BackgammonMatch` is the single entry point for writes. Each action goes
//! through the same gates in order:
//!
//! 1. lifecycle: finished? started? caller seated?
//! 2. turn: caller's side active? dice rolled?
//! 3. rules: `MoveValidator`
//!
//! and is then committed atomically.

mod game;
mod snapshot;
mod state;

pub use game::{BackgammonMatch, MatchBuilder};
pub use state::MatchState;
