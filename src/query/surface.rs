//! Side-effect-free reads on a live match.

use super::view::{MatchView, Winner};
use crate::core::address::Address;
use crate::core::side::{Position, Side};
use crate::dice::{DiceSource, DICE_SLOTS};
use crate::engine::BackgammonMatch;
use crate::escrow::MatchPhase;

impl<D: DiceSource> BackgammonMatch<D> {
    /// Checkers `side` has at `position` (0..=25).
    #[must_use]
    pub fn position_count(&self, side: Side, position: Position) -> u8 {
        self.state.board.count(side, position)
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.state.turn.active()
    }

    #[must_use]
    pub fn dice_rolled(&self, side: Side) -> bool {
        self.state.turn.has_rolled(side)
    }

    /// Remaining distances for `side` as fixed slots, zero meaning unused.
    #[must_use]
    pub fn available_moves(&self, side: Side) -> [u8; DICE_SLOTS] {
        self.state.turn.slots(side)
    }

    #[must_use]
    pub fn white_player(&self) -> Address {
        self.player(Side::White)
    }

    /// `Address::ZERO` until the second deposit arrives.
    #[must_use]
    pub fn black_player(&self) -> Address {
        self.player(Side::Black)
    }

    #[must_use]
    pub fn player(&self, side: Side) -> Address {
        self.state.escrow.player(side).unwrap_or(Address::ZERO)
    }

    #[must_use]
    pub fn stake_amount(&self) -> u128 {
        self.state.escrow.stake()
    }

    #[must_use]
    pub fn escrow_balance(&self) -> u128 {
        self.state.escrow.balance()
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.state.escrow.game_started()
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.state.escrow.phase()
    }

    #[must_use]
    pub fn winner(&self) -> Winner {
        self.state.escrow.winner().into()
    }

    /// Everything above in one value.
    #[must_use]
    pub fn view(&self) -> MatchView {
        MatchView::from_state(&self.state)
    }
}
