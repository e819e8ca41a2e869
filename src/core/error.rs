//! Rejection reasons.
//!
//! Every write action returns either an outcome or exactly one
//! `EngineError`: the first rule the action violated. A rejected action
//! never changes state. `kind()` gives a stable identifier the boundary
//! layer can map to user-facing text.

use thiserror::Error;

use super::address::Address;
use super::side::{Position, Side};

/// Why an action was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    // === Turn ===
    #[error("it is not {0}'s turn")]
    OutOfTurn(Side),
    #[error("{0} must roll the dice first")]
    DiceNotRolled(Side),
    #[error("{0} already rolled this turn")]
    AlreadyRolled(Side),

    // === Movement ===
    #[error("position {0} is outside 0..=25")]
    InvalidPosition(Position),
    #[error("{side} has {count} checker(s) on the bar that must re-enter first")]
    MandatoryReentryPending { side: Side, count: u8 },
    #[error("{side} has no checker at position {from}")]
    NoCheckersAtSource { side: Side, from: Position },
    #[error("source and destination are both {0}")]
    SameSourceAndDestination(Position),
    #[error("{side} cannot move from {from} to {to}: wrong direction")]
    InvalidDirection { side: Side, from: Position, to: Position },
    #[error("no remaining die shows {distance}")]
    NoMatchingDiceDistance { distance: u8 },
    #[error("point {to} is held by {holders} opposing checkers")]
    DestinationBlocked { to: Position, holders: u8 },
    #[error("{side} still has a legal move and cannot pass")]
    LegalMoveAvailable { side: Side },

    // === Bear-off ===
    #[error("{side} cannot bear off while a checker is on the bar")]
    BearOffBlockedByBar { side: Side },
    #[error("{side} cannot bear off until every checker is home")]
    NotAllCheckersHome { side: Side },
    #[error("{side} cannot bear off from {from}: not in the home range")]
    InvalidBearOffSource { side: Side, from: Position },
    #[error("no remaining die can bear off from {from}")]
    NoDiceForBearOff { from: Position },
    #[error("a larger die may only bear off the checker furthest from home (at {furthest})")]
    OverkillMustUseFurthestChecker { furthest: Position },

    // === Lifecycle / escrow ===
    #[error("the match is finished")]
    GameFinished,
    #[error("the match has not started")]
    GameNotStarted,
    #[error("{0} is not a player in this match")]
    NotAParticipant(Address),
    #[error("deposit of {got} does not match the stake of {expected}")]
    StakeMismatch { expected: u128, got: u128 },
    #[error("the second player slot is already filled")]
    SecondSlotAlreadyFilled,
    #[error("the match creator cannot take the second seat")]
    CreatorCannotJoin,
    #[error("the zero address cannot take a seat")]
    ZeroDepositor,
    #[error("escrow balance would overflow")]
    EscrowOverflow,
}

impl EngineError {
    /// Stable machine-readable identifier.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::OutOfTurn(_) => "OutOfTurn",
            EngineError::DiceNotRolled(_) => "DiceNotRolled",
            EngineError::AlreadyRolled(_) => "AlreadyRolled",
            EngineError::InvalidPosition(_) => "InvalidPosition",
            EngineError::MandatoryReentryPending { .. } => "MandatoryReentryPending",
            EngineError::NoCheckersAtSource { .. } => "NoCheckersAtSource",
            EngineError::SameSourceAndDestination(_) => "SameSourceAndDestination",
            EngineError::InvalidDirection { .. } => "InvalidDirection",
            EngineError::NoMatchingDiceDistance { .. } => "NoMatchingDiceDistance",
            EngineError::DestinationBlocked { .. } => "DestinationBlocked",
            EngineError::LegalMoveAvailable { .. } => "LegalMoveAvailable",
            EngineError::BearOffBlockedByBar { .. } => "BearOffBlockedByBar",
            EngineError::NotAllCheckersHome { .. } => "NotAllCheckersHome",
            EngineError::InvalidBearOffSource { .. } => "InvalidBearOffSource",
            EngineError::NoDiceForBearOff { .. } => "NoDiceForBearOff",
            EngineError::OverkillMustUseFurthestChecker { .. } => "OverkillMustUseFurthestChecker",
            EngineError::GameFinished => "GameFinished",
            EngineError::GameNotStarted => "GameNotStarted",
            EngineError::NotAParticipant(_) => "NotAParticipant",
            EngineError::StakeMismatch { .. } => "StakeMismatch",
            EngineError::SecondSlotAlreadyFilled => "SecondSlotAlreadyFilled",
            EngineError::CreatorCannotJoin => "CreatorCannotJoin",
            EngineError::ZeroDepositor => "ZeroDepositor",
            EngineError::EscrowOverflow => "EscrowOverflow",
        }
    }
}

/// Invalid match configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stake must be greater than zero")]
    ZeroStake,
    #[error("stake {stake} exceeds the maximum of {max}")]
    StakeTooLarge { stake: u128, max: u128 },
    #[error("creator address must not be the zero address")]
    ZeroCreator,
    #[error("{side} has {count} checkers, expected {expected}")]
    CheckerCount { side: Side, count: u32, expected: u8 },
    #[error("point {0} holds both colours")]
    SharedPoint(Position),
    #[error("{0} starts with every checker already borne off")]
    AllBorneOff(Side),
    #[error("dice script is empty")]
    EmptyDiceScript,
    #[error("die value {0} is outside 1..=6")]
    DieOutOfRange(u8),
}

/// Failure to decode a match snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
    #[error("snapshot holds an invalid board: {0}")]
    InvalidBoard(#[from] ConfigError),
}
