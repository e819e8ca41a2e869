//! Deterministic dice randomness.
//!
//! ## Key Features
//!
//! - **Deterministic**: the host ledger supplies an entropy seed when the
//!   match is created; the same seed produces the same sequence of rolls.
//! - **Verifiable**: anyone holding the seed can re-derive every roll and
//!   check the match history against it.
//! - **Serializable**: O(1) state capture and restore for snapshots.
//!
//! ```
//! use bg_escrow::core::DiceRng;
//!
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! assert_eq!(a.roll_pair(), b.roll_pair());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Domain tag mixed into the seed so dice never share a stream with other
/// consumers of the same host entropy.
const DICE_DOMAIN: u64 = 0x6267_6469_6365_0001;

/// Seeded ChaCha8 dice stream.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    rolls: u64,
}

impl DiceRng {
    /// Create a dice stream from host-supplied entropy.
    #[must_use]
    pub fn new(entropy_seed: u64) -> Self {
        let seed = entropy_seed ^ DICE_DOMAIN;
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            rolls: 0,
        }
    }

    /// Roll one die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Roll two dice.
    pub fn roll_pair(&mut self) -> (u8, u8) {
        self.rolls += 1;
        (self.roll_die(), self.roll_die())
    }

    /// Number of pairs rolled so far.
    #[must_use]
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            rolls: self.rolls,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            rolls: state.rolls,
        }
    }
}

/// Serializable dice stream position.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// rolls have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Domain-separated seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    /// Pairs rolled so far.
    pub rolls: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_pair(), rng2.roll_pair());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DiceRng::new(1);
        let mut rng2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_pair()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_pair()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_dice_in_range_and_all_faces_appear() {
        let mut rng = DiceRng::new(99);
        let mut seen = [false; 7];

        for _ in 0..500 {
            let die = rng.roll_die();
            assert!((1..=6).contains(&die));
            seen[die as usize] = true;
        }

        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_roll_counter() {
        let mut rng = DiceRng::new(5);
        rng.roll_pair();
        rng.roll_pair();
        assert_eq!(rng.rolls(), 2);
    }

    #[test]
    fn test_state_restore_continues_sequence() {
        let mut rng = DiceRng::new(42);
        for _ in 0..37 {
            rng.roll_pair();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_pair()).collect();

        let mut restored = DiceRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_pair()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.rolls(), rng.rolls());
    }

    #[test]
    fn test_state_serde() {
        let state = DiceRngState {
            seed: 42,
            word_pos: 12345,
            rolls: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DiceRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
