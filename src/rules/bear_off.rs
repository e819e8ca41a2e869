//! Bear-off legality.
//!
//! A checker may leave the board only when the side has nothing on the bar
//! and every checker still in play sits in its home range. The exact die is
//! used when available. Otherwise the smallest larger die ("overkill") may
//! be used, but only on the checker furthest from home.

use crate::board::Board;
use crate::core::error::EngineError;
use crate::core::side::{Position, Side};
use crate::dice::TurnTracker;

/// Pick the die that bears off the checker at `from`, or explain why none can.
pub(crate) fn bear_off_distance(
    board: &Board,
    turn: &TurnTracker,
    side: Side,
    from: Position,
) -> Result<u8, EngineError> {
    if board.bar_count(side) > 0 {
        return Err(EngineError::BearOffBlockedByBar { side });
    }
    if !side.is_home(from) {
        return Err(EngineError::InvalidBearOffSource { side, from });
    }
    if !board.all_home(side) {
        return Err(EngineError::NotAllCheckersHome { side });
    }

    let exact = side.distance_to_exit(from);
    if turn.has_distance(side, exact) {
        return Ok(exact);
    }

    let overkill = turn
        .smallest_above(side, exact)
        .ok_or(EngineError::NoDiceForBearOff { from })?;

    if let Some(furthest) = board.furthest_checker(side) {
        if side.distance_to_exit(furthest) > exact {
            return Err(EngineError::OverkillMustUseFurthestChecker { furthest });
        }
    }

    Ok(overkill)
}
