//! Write actions and their outcomes.
//!
//! Every state change is one of four actions submitted by an address:
//! - `RollDice`: the active player rolls for the turn
//! - `Move { from, to }`: move one checker
//! - `Pass`: forfeit remaining dice when none can be played
//! - `Deposit { amount }`: fund transfer into the escrow
//!
//! Accepted actions are appended to the match history as `ActionRecord`s.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::address::Address;
use super::side::{Position, Side};

/// Distances rolled in one turn. Four on a double, otherwise two.
pub type DiceRoll = SmallVec<[u8; 4]>;

/// A state-changing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RollDice,
    Move { from: Position, to: Position },
    Pass,
    Deposit { amount: u128 },
}

/// Escrow release to the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub winner: Side,
    pub recipient: Address,
    pub amount: u128,
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub side: Side,
    pub from: Position,
    pub to: Position,
    /// Die consumed. Larger than the pip count for an overkill bear-off.
    pub distance: u8,
    /// An opposing blot was sent to the bar.
    pub captured: bool,
    /// The move used the last die and the turn passed.
    pub turn_ended: bool,
    /// Set on the move that bore off the fifteenth checker.
    pub payout: Option<Payout>,
}

/// Result of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Rolled { side: Side, dice: DiceRoll },
    Moved(MoveOutcome),
    Passed { side: Side, forfeited: DiceRoll },
    Joined { black: Address },
}

/// An accepted action, as recorded in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Address that submitted the action.
    pub caller: Address,

    /// The action taken.
    pub action: Action,

    /// Dice produced, for roll actions.
    pub dice: DiceRoll,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(caller: Address, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            caller,
            action,
            dice: DiceRoll::new(),
            turn,
            sequence,
        }
    }

    /// Attach the dice produced by a roll.
    #[must_use]
    pub fn with_dice(mut self, dice: &[u8]) -> Self {
        self.dice = SmallVec::from_slice(dice);
        self
    }
}
