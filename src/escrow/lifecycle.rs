//! Player registration, stake custody and payout.
//!
//! `AwaitingSecondPlayer -> InProgress -> Finished`
//!
//! The creator's stake is escrowed when the match is created. The first
//! other account to deposit exactly the stake takes the black seat and
//! starts the match in the same transition. When a side bears off its last
//! checker the whole balance goes to that side's address, once.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::action::Payout;
use crate::core::address::Address;
use crate::core::error::EngineError;
use crate::core::side::Side;

/// Where the match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    AwaitingSecondPlayer,
    InProgress,
    Finished,
}

/// Seats, stake and escrowed balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escrow {
    white: Address,
    black: Option<Address>,
    stake: u128,
    /// What each address has paid in.
    deposits: FxHashMap<Address, u128>,
    balance: u128,
    winner: Option<Side>,
    /// One-shot payout guard.
    paid_out: bool,
}

impl Escrow {
    /// Open an escrow holding the creator's stake.
    #[must_use]
    pub fn open(creator: Address, stake: u128) -> Self {
        let mut deposits = FxHashMap::default();
        deposits.insert(creator, stake);
        Self {
            white: creator,
            black: None,
            stake,
            deposits,
            balance: stake,
            winner: None,
            paid_out: false,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.winner.is_some() {
            MatchPhase::Finished
        } else if self.black.is_some() {
            MatchPhase::InProgress
        } else {
            MatchPhase::AwaitingSecondPlayer
        }
    }

    /// Address seated as `side`, if any.
    #[must_use]
    pub fn player(&self, side: Side) -> Option<Address> {
        match side {
            Side::White => Some(self.white),
            Side::Black => self.black,
        }
    }

    /// Which side `address` plays, if it is seated.
    #[must_use]
    pub fn side_of(&self, address: Address) -> Option<Side> {
        if address == self.white {
            Some(Side::White)
        } else if Some(address) == self.black {
            Some(Side::Black)
        } else {
            None
        }
    }

    #[must_use]
    pub fn stake(&self) -> u128 {
        self.stake
    }

    /// Funds currently held.
    #[must_use]
    pub fn balance(&self) -> u128 {
        self.balance
    }

    /// Amount `address` has paid in.
    #[must_use]
    pub fn deposited_by(&self, address: Address) -> u128 {
        self.deposits.get(&address).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.black.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn is_paid_out(&self) -> bool {
        self.paid_out
    }

    /// Check moves and rolls are allowed.
    pub fn ensure_in_progress(&self) -> Result<(), EngineError> {
        match self.phase() {
            MatchPhase::Finished => Err(EngineError::GameFinished),
            MatchPhase::AwaitingSecondPlayer => Err(EngineError::GameNotStarted),
            MatchPhase::InProgress => Ok(()),
        }
    }

    // === Transitions ===

    /// Take a deposit. The right amount from a new account fills the black
    /// seat and starts the match.
    pub fn deposit(&mut self, from: Address, amount: u128) -> Result<Address, EngineError> {
        if self.black.is_some() {
            return Err(EngineError::SecondSlotAlreadyFilled);
        }
        if from.is_zero() {
            return Err(EngineError::ZeroDepositor);
        }
        if from == self.white {
            return Err(EngineError::CreatorCannotJoin);
        }
        if amount != self.stake {
            return Err(EngineError::StakeMismatch {
                expected: self.stake,
                got: amount,
            });
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(EngineError::EscrowOverflow)?;

        self.black = Some(from);
        self.deposits.insert(from, amount);
        self.balance = balance;
        Ok(from)
    }

    /// Record the winner and release the balance.
    ///
    /// Returns `None` if the escrow was already paid out.
    pub(crate) fn settle(&mut self, winner: Side) -> Option<Payout> {
        if self.paid_out {
            return None;
        }
        self.paid_out = true;
        self.winner = Some(winner);

        let amount = std::mem::take(&mut self.balance);
        Some(Payout {
            winner,
            recipient: self.player(winner).unwrap_or(Address::ZERO),
            amount,
        })
    }
}
