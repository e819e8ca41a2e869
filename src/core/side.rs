//! Sides and per-side data storage.
//!
//! ## Side
//!
//! The two colours share one `0..=25` index space but travel in opposite
//! directions. Everything that differs between them (direction, home range,
//! bar, exit) comes from the constant table on `Side`, so no rule is written
//! twice.
//!
//! | | White | Black |
//! |---|---|---|
//! | forward | decreasing | increasing |
//! | home range | 1–6 | 19–24 |
//! | bar | 25 | 0 |
//! | exit | 0 | 25 |
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

/// A board index in `0..=25`.
pub type Position = u8;

/// Lowest index (bar or exit depending on side).
pub const LOW_END: Position = 0;

/// Highest index (bar or exit depending on side).
pub const HIGH_END: Position = 25;

/// Number of slots in a side's board mapping.
pub const POSITION_COUNT: usize = 26;

/// Checkers each side owns for the whole match.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// One of the two colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, white first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Sign of forward movement along the index space.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Where this side's captured checkers wait for re-entry.
    #[must_use]
    pub const fn bar(self) -> Position {
        match self {
            Side::White => HIGH_END,
            Side::Black => LOW_END,
        }
    }

    /// Where this side's borne-off checkers are kept.
    #[must_use]
    pub const fn exit(self) -> Position {
        match self {
            Side::White => LOW_END,
            Side::Black => HIGH_END,
        }
    }

    /// The six points nearest the exit.
    #[must_use]
    pub const fn home_range(self) -> RangeInclusive<Position> {
        match self {
            Side::White => 1..=6,
            Side::Black => 19..=24,
        }
    }

    /// Whether `position` is inside this side's home range.
    #[must_use]
    pub fn is_home(self, position: Position) -> bool {
        self.home_range().contains(&position)
    }

    /// Pips between `position` and this side's exit.
    #[must_use]
    pub const fn distance_to_exit(self, position: Position) -> u8 {
        match self {
            Side::White => position,
            Side::Black => HIGH_END - position,
        }
    }

    /// Destination after travelling `distance` pips forward from `from`.
    ///
    /// Overshooting the exit lands on the exit.
    #[must_use]
    pub fn advance(self, from: Position, distance: u8) -> Position {
        let target = i16::from(from) + i16::from(self.forward()) * i16::from(distance);
        target.clamp(i16::from(LOW_END), i16::from(HIGH_END)) as Position
    }

    /// Array index for `SideMap` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Whether `position` is one of the 24 playable points.
#[must_use]
pub fn is_playable(position: Position) -> bool {
    (1..=24).contains(&position)
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use bg_escrow::core::{Side, SideMap};
///
/// let mut rolled = SideMap::with_value(false);
/// rolled[Side::Black] = true;
/// assert!(!rolled[Side::White]);
/// assert!(rolled[Side::Black]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
