//! Match/escrow lifecycle.
//!
//! Seats the two players, holds both stakes, and releases them to the
//! winner exactly once.

mod lifecycle;

pub use lifecycle::{Escrow, MatchPhase};
