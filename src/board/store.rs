//! Checker counts per position and side.
//!
//! `Board` is a pure data mutator. It assumes moves were validated by
//! `rules::MoveValidator` and performs no legality checks of its own.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::side::{
    is_playable, Position, Side, SideMap, CHECKERS_PER_SIDE, POSITION_COUNT,
};

/// Standard opening, as (position, count) pairs for white.
/// Black's opening is the mirror image (`25 - position`).
const WHITE_OPENING: [(Position, u8); 4] = [(24, 2), (13, 5), (8, 3), (6, 5)];

/// Two parallel `position -> count` mappings, one per side.
///
/// ## Usage
///
/// ```
/// use bg_escrow::board::Board;
/// use bg_escrow::core::Side;
///
/// let mut board = Board::standard();
/// assert_eq!(board.count(Side::White, 13), 5);
///
/// let captured = board.apply_move(Side::White, 13, 10);
/// assert!(!captured);
/// assert_eq!(board.count(Side::White, 13), 4);
/// assert_eq!(board.count(Side::White, 10), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    counts: SideMap<[u8; POSITION_COUNT]>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no checkers at all. Fill it with `set`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            counts: SideMap::with_value([0; POSITION_COUNT]),
        }
    }

    /// The standard backgammon opening.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (position, count) in WHITE_OPENING {
            board.set(Side::White, position, count);
            board.set(Side::Black, 25 - position, count);
        }
        board
    }

    // === Reads ===

    /// Checkers `side` has at `position`. Out-of-range positions hold none.
    #[must_use]
    pub fn count(&self, side: Side, position: Position) -> u8 {
        self.counts[side]
            .get(position as usize)
            .copied()
            .unwrap_or(0)
    }

    /// All 26 counts for `side`.
    #[must_use]
    pub fn counts(&self, side: Side) -> &[u8; POSITION_COUNT] {
        &self.counts[side]
    }

    /// Checkers waiting on `side`'s bar.
    #[must_use]
    pub fn bar_count(&self, side: Side) -> u8 {
        self.count(side, side.bar())
    }

    /// Checkers `side` has borne off.
    #[must_use]
    pub fn borne_off(&self, side: Side) -> u8 {
        self.count(side, side.exit())
    }

    /// Total checkers `side` owns across all 26 positions.
    #[must_use]
    pub fn checker_total(&self, side: Side) -> u32 {
        self.counts[side].iter().map(|&c| u32::from(c)).sum()
    }

    /// Whether every checker of `side` still in play is in its home range.
    ///
    /// Bar checkers are in play and never home.
    #[must_use]
    pub fn all_home(&self, side: Side) -> bool {
        self.counts[side]
            .iter()
            .enumerate()
            .all(|(pos, &count)| {
                let pos = pos as Position;
                count == 0 || pos == side.exit() || side.is_home(pos)
            })
    }

    /// The in-play position of `side` furthest from its exit, if any.
    ///
    /// The bar counts as the furthest possible position.
    #[must_use]
    pub fn furthest_checker(&self, side: Side) -> Option<Position> {
        (0..POSITION_COUNT as Position)
            .filter(|&pos| pos != side.exit() && self.count(side, pos) > 0)
            .max_by_key(|&pos| side.distance_to_exit(pos))
    }

    /// Whether the opponent of `side` holds `to` with two or more checkers.
    #[must_use]
    pub fn is_blocked(&self, side: Side, to: Position) -> bool {
        is_playable(to) && self.count(side.opponent(), to) >= 2
    }

    // === Writes ===

    /// Overwrite a single count. Used to build layouts.
    pub fn set(&mut self, side: Side, position: Position, count: u8) {
        self.counts[side][position as usize] = count;
    }

    /// Move one checker of `side` from `from` to `to`.
    ///
    /// Landing on a single opposing checker sends it to the opponent's bar.
    /// Returns whether a capture happened.
    pub fn apply_move(&mut self, side: Side, from: Position, to: Position) -> bool {
        debug_assert!(self.count(side, from) > 0, "no {side} checker at {from}");
        debug_assert!(!self.is_blocked(side, to), "{to} is blocked for {side}");

        let from_slot = &mut self.counts[side][from as usize];
        *from_slot = from_slot.saturating_sub(1);

        let opponent = side.opponent();
        let captured = is_playable(to) && self.count(opponent, to) == 1;
        if captured {
            self.counts[opponent][to as usize] = 0;
            self.counts[opponent][opponent.bar() as usize] += 1;
        }

        self.counts[side][to as usize] += 1;
        captured
    }

    // === Invariants ===

    /// First playable point occupied by both sides, if any.
    #[must_use]
    pub fn shared_point(&self) -> Option<Position> {
        (1..=24).find(|&pos| {
            self.count(Side::White, pos) > 0 && self.count(Side::Black, pos) > 0
        })
    }

    /// Check the conservation and occupancy invariants.
    pub fn check_invariants(&self) -> Result<(), ConfigError> {
        for side in Side::ALL {
            let count = self.checker_total(side);
            if count != u32::from(CHECKERS_PER_SIDE) {
                return Err(ConfigError::CheckerCount {
                    side,
                    count,
                    expected: CHECKERS_PER_SIDE,
                });
            }
        }
        match self.shared_point() {
            Some(pos) => Err(ConfigError::SharedPoint(pos)),
            None => Ok(()),
        }
    }

    /// Check the board is a legal starting position: invariants hold and
    /// neither side has already won.
    pub fn validate_opening(&self) -> Result<(), ConfigError> {
        self.check_invariants()?;
        for side in Side::ALL {
            if self.borne_off(side) == CHECKERS_PER_SIDE {
                return Err(ConfigError::AllBorneOff(side));
            }
        }
        Ok(())
    }
}
