//! Dice & turn tracking.
//!
//! - `TurnTracker`: active side, rolled flags, remaining distances
//! - `DiceSource`: where rolls come from (`DiceRng` or `ScriptedDice`)

mod source;
mod tracker;

pub use source::{DiceSource, ScriptedDice};
pub use tracker::{TurnPhase, TurnTracker, DICE_SLOTS};
