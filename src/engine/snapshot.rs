//! Binary snapshots of a running match.
//!
//! A snapshot carries the configuration, the full state and the dice stream
//! position, so a restored match rolls exactly the dice the original would
//! have rolled next.

use serde::{Deserialize, Serialize};

use super::game::BackgammonMatch;
use super::state::MatchState;
use crate::core::config::MatchConfig;
use crate::core::error::SnapshotError;
use crate::core::rng::{DiceRng, DiceRngState};

#[derive(Serialize, Deserialize)]
struct Snapshot {
    config: MatchConfig,
    state: MatchState,
    dice: DiceRngState,
}

impl BackgammonMatch<DiceRng> {
    /// Encode the match with `bincode`.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        let snapshot = Snapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            dice: self.dice.state(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a match from `snapshot` output.
    ///
    /// The decoded board must still satisfy the checker invariants.
    pub fn restore(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        snapshot.state.board.check_invariants()?;

        Ok(Self {
            config: snapshot.config,
            state: snapshot.state,
            dice: DiceRng::from_state(&snapshot.dice),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Address;
    use crate::engine::MatchBuilder;

    #[test]
    fn test_restore_continues_with_same_dice() {
        let white = Address::repeat_byte(1);
        let black = Address::repeat_byte(2);

        let mut game = MatchBuilder::new()
            .stake(10)
            .entropy_seed(2024)
            .build(white)
            .unwrap();
        game.deposit(black, 10).unwrap();
        game.roll_dice(white).unwrap();

        let bytes = game.snapshot().unwrap();
        let restored = BackgammonMatch::<DiceRng>::restore(&bytes).unwrap();

        assert_eq!(restored.state(), game.state());
        assert_eq!(restored.config(), game.config());

        let mut original_dice = game.dice().clone();
        let mut restored_dice = restored.dice().clone();
        for _ in 0..5 {
            assert_eq!(original_dice.roll_pair(), restored_dice.roll_pair());
        }
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(BackgammonMatch::<DiceRng>::restore(&[1, 2, 3]).is_err());
    }
}
