//! Move legality.
//!
//! `MoveValidator` checks a requested `(from, to)` against the board and the
//! turn tracker in a fixed order and reports the first rule that fails:
//!
//! 1. the side is active and has rolled
//! 2. both positions are on the board
//! 3. bar checkers re-enter before anything else moves
//! 4. `from` holds a checker of the side
//! 5. `from != to`
//! 6. forward direction (bear-off handled separately)
//! 7. a remaining die matches the distance
//! 8. the destination is not held by two or more opponents
//!
//! Lifecycle gates (finished, not started) are applied by the engine before
//! the validator is consulted.

use serde::{Deserialize, Serialize};

use super::bear_off::bear_off_distance;
use crate::board::Board;
use crate::core::error::EngineError;
use crate::core::side::{Position, Side, HIGH_END, POSITION_COUNT};
use crate::dice::TurnTracker;

/// An accepted move, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub side: Side,
    pub from: Position,
    pub to: Position,
    /// Die this move consumes.
    pub distance: u8,
    /// The checker leaves the board.
    pub bear_off: bool,
    /// An opposing blot is hit.
    pub captures: bool,
}

/// Read-only view over the state a move is judged against.
#[derive(Clone, Copy, Debug)]
pub struct MoveValidator<'a> {
    board: &'a Board,
    turn: &'a TurnTracker,
}

impl<'a> MoveValidator<'a> {
    #[must_use]
    pub fn new(board: &'a Board, turn: &'a TurnTracker) -> Self {
        Self { board, turn }
    }

    /// Decide whether `side` may move a checker from `from` to `to`.
    pub fn validate(
        &self,
        side: Side,
        from: Position,
        to: Position,
    ) -> Result<Resolution, EngineError> {
        self.turn.ensure_can_move(side)?;

        for position in [from, to] {
            if position > HIGH_END {
                return Err(EngineError::InvalidPosition(position));
            }
        }

        let on_bar = self.board.bar_count(side);
        if on_bar > 0 && from != side.bar() {
            return Err(EngineError::MandatoryReentryPending { side, count: on_bar });
        }

        // Borne-off checkers are out of play
        if from == side.exit() || self.board.count(side, from) == 0 {
            return Err(EngineError::NoCheckersAtSource { side, from });
        }

        if from == to {
            return Err(EngineError::SameSourceAndDestination(from));
        }

        if to == side.exit() {
            let distance = bear_off_distance(self.board, self.turn, side, from)?;
            return Ok(Resolution {
                side,
                from,
                to,
                distance,
                bear_off: true,
                captures: false,
            });
        }

        let delta = i16::from(to) - i16::from(from);
        if delta.signum() != i16::from(side.forward()) {
            return Err(EngineError::InvalidDirection { side, from, to });
        }

        let distance = delta.unsigned_abs() as u8;
        if !self.turn.has_distance(side, distance) {
            return Err(EngineError::NoMatchingDiceDistance { distance });
        }

        let holders = self.board.count(side.opponent(), to);
        if holders >= 2 {
            return Err(EngineError::DestinationBlocked { to, holders });
        }

        Ok(Resolution {
            side,
            from,
            to,
            distance,
            bear_off: false,
            captures: holders == 1,
        })
    }

    /// Validate and compute the board that results from the move.
    pub fn validate_and_resolve(
        &self,
        side: Side,
        from: Position,
        to: Position,
    ) -> Result<(Board, Resolution), EngineError> {
        let resolution = self.validate(side, from, to)?;
        let mut next = *self.board;
        next.apply_move(side, from, to);
        Ok((next, resolution))
    }

    /// Every move `side` could make right now, one entry per `(from, to)`.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Resolution> {
        if self.turn.ensure_can_move(side).is_err() {
            return Vec::new();
        }

        let mut distances: Vec<u8> = self.turn.available(side).to_vec();
        distances.sort_unstable();
        distances.dedup();

        let mut moves: Vec<Resolution> = Vec::new();
        for from in 0..POSITION_COUNT as Position {
            if self.board.count(side, from) == 0 {
                continue;
            }
            for &distance in &distances {
                let to = side.advance(from, distance);
                if let Ok(resolution) = self.validate(side, from, to) {
                    if !moves.iter().any(|m| m.from == from && m.to == to) {
                        moves.push(resolution);
                    }
                }
            }
        }
        moves
    }

    /// Whether `side` has any playable die.
    #[must_use]
    pub fn has_legal_move(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn rolled(side: Side, pair: (u8, u8)) -> TurnTracker {
        let mut turn = TurnTracker::new(side);
        turn.roll_dice(side, &mut ScriptedDice::new(vec![pair]).unwrap()).unwrap();
        turn
    }

    #[test]
    fn test_simple_forward_move() {
        let board = Board::standard();
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        let res = validator.validate(Side::White, 13, 10).unwrap();
        assert_eq!(res.distance, 3);
        assert!(!res.bear_off);
        assert!(!res.captures);
    }

    #[test]
    fn test_not_rolled() {
        let board = Board::standard();
        let turn = TurnTracker::new(Side::White);
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 13, 10),
            Err(EngineError::DiceNotRolled(Side::White))
        );
        assert_eq!(
            validator.validate(Side::Black, 12, 15),
            Err(EngineError::OutOfTurn(Side::Black))
        );
    }

    #[test]
    fn test_out_of_range_positions() {
        let board = Board::standard();
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 30, 27),
            Err(EngineError::InvalidPosition(30))
        );
        assert_eq!(
            validator.validate(Side::White, 13, 26),
            Err(EngineError::InvalidPosition(26))
        );
    }

    #[test]
    fn test_wrong_direction() {
        let board = Board::standard();
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 13, 16),
            Err(EngineError::InvalidDirection { side: Side::White, from: 13, to: 16 })
        );
        // Moving onto your own bar is backwards too
        assert_eq!(
            validator.validate(Side::White, 24, 25),
            Err(EngineError::InvalidDirection { side: Side::White, from: 24, to: 25 })
        );
    }

    #[test]
    fn test_no_checker_at_source() {
        let board = Board::standard();
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 12, 9),
            Err(EngineError::NoCheckersAtSource { side: Side::White, from: 12 })
        );
    }

    #[test]
    fn test_same_source_and_destination() {
        let board = Board::standard();
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 13, 13),
            Err(EngineError::SameSourceAndDestination(13))
        );
    }

    #[test]
    fn test_distance_not_rolled() {
        let board = Board::standard();
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 13, 9),
            Err(EngineError::NoMatchingDiceDistance { distance: 4 })
        );
    }

    #[test]
    fn test_destination_blocked() {
        let board = Board::standard();
        // Black holds 12 with five checkers; white 13 -> 12 needs a 1
        let turn = rolled(Side::White, (1, 2));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 13, 12),
            Err(EngineError::DestinationBlocked { to: 12, holders: 5 })
        );
    }

    #[test]
    fn test_hit_resolves_capture() {
        let mut board = Board::standard();
        board.set(Side::Black, 12, 4);
        board.set(Side::Black, 10, 1);
        let turn = rolled(Side::White, (3, 5));
        let validator = MoveValidator::new(&board, &turn);

        let (next, res) = validator.validate_and_resolve(Side::White, 13, 10).unwrap();
        assert!(res.captures);
        assert_eq!(next.bar_count(Side::Black), 1);
        assert_eq!(next.count(Side::White, 10), 1);
        // Original untouched
        assert_eq!(board.count(Side::Black, 10), 1);
    }

    #[test]
    fn test_bar_must_enter_first() {
        let mut board = Board::standard();
        board.set(Side::Black, 1, 0);
        board.set(Side::Black, Side::Black.bar(), 2);
        let turn = rolled(Side::Black, (3, 4));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::Black, 12, 15),
            Err(EngineError::MandatoryReentryPending { side: Side::Black, count: 2 })
        );
        let res = validator.validate(Side::Black, 0, 3).unwrap();
        assert_eq!(res.distance, 3);
    }

    #[test]
    fn test_entry_onto_blocked_point() {
        let mut board = Board::standard();
        board.set(Side::Black, 1, 0);
        board.set(Side::Black, Side::Black.bar(), 2);
        // White owns black's 6-point
        let turn = rolled(Side::Black, (6, 6));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::Black, 0, 6),
            Err(EngineError::DestinationBlocked { to: 6, holders: 5 })
        );
        assert!(!validator.has_legal_move(Side::Black));
    }

    #[test]
    fn test_bear_off_from_bar_is_blocked() {
        let mut board = Board::empty();
        board.set(Side::White, 3, 14);
        board.set(Side::White, Side::White.bar(), 1);
        board.set(Side::Black, 24, 15);
        let turn = rolled(Side::White, (3, 2));
        let validator = MoveValidator::new(&board, &turn);

        assert_eq!(
            validator.validate(Side::White, 3, 0),
            Err(EngineError::MandatoryReentryPending { side: Side::White, count: 1 })
        );
        assert_eq!(
            validator.validate(Side::White, 25, 0),
            Err(EngineError::BearOffBlockedByBar { side: Side::White })
        );
    }

    #[test]
    fn test_legal_moves_opening() {
        let board = Board::standard();
        let turn = rolled(Side::White, (6, 5));
        let validator = MoveValidator::new(&board, &turn);

        let moves = validator.legal_moves(Side::White);
        let pairs: Vec<_> = moves.iter().map(|m| (m.from, m.to)).collect();

        // 24 -> 18 (6) and 24 -> 19 blocked by black's 5 on 19
        assert!(pairs.contains(&(24, 18)));
        assert!(!pairs.contains(&(24, 19)));
        assert!(pairs.contains(&(13, 7)));
        assert!(pairs.contains(&(13, 8)));
        assert!(pairs.contains(&(8, 2)));
        assert!(pairs.contains(&(8, 3)));
        // Black holds 1 with two checkers
        assert!(!pairs.contains(&(6, 1)));
        // Every listed move validates
        for m in &moves {
            assert_eq!(validator.validate(Side::White, m.from, m.to).as_ref(), Ok(m));
        }
    }

    #[test]
    fn test_legal_moves_empty_when_not_turn() {
        let board = Board::standard();
        let turn = rolled(Side::White, (6, 5));
        let validator = MoveValidator::new(&board, &turn);

        assert!(validator.legal_moves(Side::Black).is_empty());
    }
}
