//! Authoritative match state.
//!
//! Board, turn tracker, escrow and history are one unit: a transition
//! works on a clone and replaces the whole value only on success. The
//! history is an `im::Vector`, so cloning stays O(1) as it grows.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::action::{Action, ActionRecord};
use crate::core::address::Address;
use crate::core::side::Side;
use crate::dice::TurnTracker;
use crate::escrow::Escrow;

/// Everything a match knows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub board: Board,
    pub turn: TurnTracker,
    pub escrow: Escrow,
    pub history: Vector<ActionRecord>,
}

impl MatchState {
    /// Fresh state: white to roll, nothing recorded.
    #[must_use]
    pub fn new(board: Board, escrow: Escrow) -> Self {
        Self {
            board,
            turn: TurnTracker::new(Side::White),
            escrow,
            history: Vector::new(),
        }
    }

    /// Append an accepted action to the history.
    pub fn record(&mut self, caller: Address, action: Action, turn: u32, dice: &[u8]) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(caller, action, turn, sequence).with_dice(dice));
    }
}
