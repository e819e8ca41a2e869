//! Serializable snapshot of everything the read surface exposes.

use serde::{Deserialize, Serialize};

use crate::core::address::Address;
use crate::core::side::{Side, SideMap, POSITION_COUNT};
use crate::dice::DICE_SLOTS;
use crate::engine::MatchState;
use crate::escrow::MatchPhase;

/// Winner indicator as exposed to readers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[default]
    None,
    White,
    Black,
}

impl From<Option<Side>> for Winner {
    fn from(side: Option<Side>) -> Self {
        match side {
            None => Winner::None,
            Some(Side::White) => Winner::White,
            Some(Side::Black) => Winner::Black,
        }
    }
}

/// One side's public state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    /// Seated address, `Address::ZERO` when empty.
    pub player: Address,
    /// Checker counts for positions 0..=25.
    pub counts: [u8; POSITION_COUNT],
    pub dice_rolled: bool,
    /// Remaining distances, zero meaning unused.
    pub available_moves: [u8; DICE_SLOTS],
}

/// Read-only projection of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub white: SideView,
    pub black: SideView,
    pub active_side: Side,
    pub turn_number: u32,
    pub stake: u128,
    pub escrow_balance: u128,
    pub game_started: bool,
    pub phase: MatchPhase,
    pub winner: Winner,
}

impl MatchView {
    /// Project `state`.
    #[must_use]
    pub fn from_state(state: &MatchState) -> Self {
        let sides = SideMap::new(|side| SideView {
            player: state.escrow.player(side).unwrap_or(Address::ZERO),
            counts: *state.board.counts(side),
            dice_rolled: state.turn.has_rolled(side),
            available_moves: state.turn.slots(side),
        });

        Self {
            white: sides[Side::White].clone(),
            black: sides[Side::Black].clone(),
            active_side: state.turn.active(),
            turn_number: state.turn.turn_number(),
            stake: state.escrow.stake(),
            escrow_balance: state.escrow.balance(),
            game_started: state.escrow.game_started(),
            phase: state.escrow.phase(),
            winner: state.escrow.winner().into(),
        }
    }

    /// The view for `side`.
    #[must_use]
    pub fn side(&self, side: Side) -> &SideView {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }
}
