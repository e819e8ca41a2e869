//! Where dice come from.
//!
//! The engine only needs "give me two dice". Production matches use the
//! seeded `DiceRng`; `ScriptedDice` replays a fixed sequence for tests and
//! for re-running recorded histories.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::rng::DiceRng;

/// Source of dice pairs.
pub trait DiceSource {
    /// Roll two dice, each in `1..=6`.
    fn roll(&mut self) -> (u8, u8);
}

impl DiceSource for DiceRng {
    fn roll(&mut self) -> (u8, u8) {
        self.roll_pair()
    }
}

/// Replays a fixed list of pairs, cycling when it runs out.
///
/// ```
/// use bg_escrow::dice::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![(3, 5), (6, 6)]).unwrap();
/// assert_eq!(dice.roll(), (3, 5));
/// assert_eq!(dice.roll(), (6, 6));
/// assert_eq!(dice.roll(), (3, 5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedDice {
    script: Vec<(u8, u8)>,
    next: usize,
}

impl ScriptedDice {
    /// Create a scripted source. The script must be non-empty and every
    /// value in `1..=6`.
    pub fn new(script: Vec<(u8, u8)>) -> Result<Self, ConfigError> {
        if script.is_empty() {
            return Err(ConfigError::EmptyDiceScript);
        }
        if let Some(face) = script
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .find(|face| !(1..=6).contains(face))
        {
            return Err(ConfigError::DieOutOfRange(face));
        }
        Ok(Self { script, next: 0 })
    }

    /// Pairs handed out so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> (u8, u8) {
        let pair = self.script[self.next % self.script.len()];
        self.next += 1;
        pair
    }
}
