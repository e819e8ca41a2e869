//! Whose turn it is and what dice are left.
//!
//! Per side: `AwaitingRoll -> MovesAvailable -> (exhausted) -> AwaitingRoll`
//! for the other side. Remaining distances are a small multiset, removed by
//! value; the fixed 4-slot view only exists at the query edge.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::source::DiceSource;
use crate::core::action::DiceRoll;
use crate::core::error::EngineError;
use crate::core::side::{Side, SideMap};

/// Slots in the query-surface view of the remaining dice.
pub const DICE_SLOTS: usize = 4;

/// Where a side is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Not this side's turn.
    Waiting,
    /// This side's turn, dice not rolled yet.
    AwaitingRoll,
    /// Dice rolled, at least one distance left.
    MovesAvailable,
}

/// Turn and dice bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTracker {
    active: Side,
    rolled: SideMap<bool>,
    moves: SideMap<DiceRoll>,
    turn_number: u32,
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new(Side::White)
    }
}

impl TurnTracker {
    /// Start with `first` to roll.
    #[must_use]
    pub fn new(first: Side) -> Self {
        Self {
            active: first,
            rolled: SideMap::with_value(false),
            moves: SideMap::with_value(SmallVec::new()),
            turn_number: 1,
        }
    }

    // === Reads ===

    /// Side whose turn it is.
    #[must_use]
    pub fn active(&self) -> Side {
        self.active
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Whether `side` has rolled this turn.
    #[must_use]
    pub fn has_rolled(&self, side: Side) -> bool {
        self.rolled[side]
    }

    /// Remaining distances for `side`, in roll order.
    #[must_use]
    pub fn available(&self, side: Side) -> &[u8] {
        &self.moves[side]
    }

    /// Remaining distances as fixed slots, zero meaning unused.
    #[must_use]
    pub fn slots(&self, side: Side) -> [u8; DICE_SLOTS] {
        let mut slots = [0; DICE_SLOTS];
        for (slot, &distance) in slots.iter_mut().zip(self.moves[side].iter()) {
            *slot = distance;
        }
        slots
    }

    /// Whether `distance` is among `side`'s remaining dice.
    #[must_use]
    pub fn has_distance(&self, side: Side, distance: u8) -> bool {
        self.moves[side].contains(&distance)
    }

    /// Smallest remaining die strictly larger than `distance`.
    #[must_use]
    pub fn smallest_above(&self, side: Side, distance: u8) -> Option<u8> {
        self.moves[side]
            .iter()
            .copied()
            .filter(|&d| d > distance)
            .min()
    }

    /// Where `side` is in its turn cycle.
    #[must_use]
    pub fn phase(&self, side: Side) -> TurnPhase {
        if side != self.active {
            TurnPhase::Waiting
        } else if self.rolled[side] {
            TurnPhase::MovesAvailable
        } else {
            TurnPhase::AwaitingRoll
        }
    }

    /// Check `side` may submit a move right now.
    pub fn ensure_can_move(&self, side: Side) -> Result<(), EngineError> {
        if side != self.active {
            return Err(EngineError::OutOfTurn(side));
        }
        if !self.rolled[side] {
            return Err(EngineError::DiceNotRolled(side));
        }
        Ok(())
    }

    // === Transitions ===

    /// Roll for `side`. A double yields four moves.
    pub fn roll_dice(
        &mut self,
        side: Side,
        source: &mut impl DiceSource,
    ) -> Result<DiceRoll, EngineError> {
        if side != self.active {
            return Err(EngineError::OutOfTurn(side));
        }
        if self.rolled[side] {
            return Err(EngineError::AlreadyRolled(side));
        }

        let (a, b) = source.roll();
        let roll: DiceRoll = if a == b {
            SmallVec::from_slice(&[a; 4])
        } else {
            SmallVec::from_slice(&[a, b])
        };

        self.moves[side] = roll.clone();
        self.rolled[side] = true;
        Ok(roll)
    }

    /// Remove one die showing `distance` from `side`'s remaining moves.
    pub fn consume_move(&mut self, side: Side, distance: u8) -> Result<(), EngineError> {
        let moves = &mut self.moves[side];
        match moves.iter().position(|&d| d == distance) {
            Some(index) => {
                moves.remove(index);
                Ok(())
            }
            None => Err(EngineError::NoMatchingDiceDistance { distance }),
        }
    }

    /// Hand the turn over once the active side has no dice left.
    ///
    /// Returns whether the turn changed.
    pub fn end_turn_if_exhausted(&mut self) -> bool {
        let side = self.active;
        if !self.rolled[side] || !self.moves[side].is_empty() {
            return false;
        }
        self.hand_over();
        true
    }

    /// Drop `side`'s remaining dice and hand the turn over.
    ///
    /// Returns the dice that were dropped.
    pub fn forfeit_remaining(&mut self, side: Side) -> DiceRoll {
        let dropped = std::mem::take(&mut self.moves[side]);
        self.hand_over();
        dropped
    }

    fn hand_over(&mut self) {
        let old = self.active;
        self.moves[old].clear();
        self.rolled[old] = false;

        self.active = old.opponent();
        self.rolled[self.active] = false;
        self.turn_number += 1;
    }
}
