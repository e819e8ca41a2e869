//! Match configuration.
//!
//! A match is configured once, at creation, by the creator:
//! - `stake`: the amount each side escrows. Fixed for the life of the match.
//! - `entropy_seed`: host-supplied entropy the dice stream is derived from.
//! - `layout`: optional starting board. Defaults to the standard opening.
//!
//! Use `MatchBuilder` (in `engine`) rather than filling this in by hand.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::Board;

/// Largest stake whose two deposits still fit in the escrow balance.
pub const MAX_STAKE: u128 = u128::MAX / 2;

/// Configuration fixed at match creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Amount each side deposits.
    pub stake: u128,

    /// Host entropy for the dice stream.
    pub entropy_seed: u64,

    /// Starting board. `None` for the standard opening.
    pub layout: Option<Board>,
}

impl MatchConfig {
    /// Configuration with the standard opening.
    #[must_use]
    pub fn new(stake: u128, entropy_seed: u64) -> Self {
        Self {
            stake,
            entropy_seed,
            layout: None,
        }
    }

    /// Set a custom starting board.
    #[must_use]
    pub fn with_layout(mut self, layout: Board) -> Self {
        self.layout = Some(layout);
        self
    }

    /// The board the match starts from.
    #[must_use]
    pub fn starting_board(&self) -> Board {
        self.layout.unwrap_or_else(Board::standard)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stake == 0 {
            return Err(ConfigError::ZeroStake);
        }
        if self.stake > MAX_STAKE {
            return Err(ConfigError::StakeTooLarge {
                stake: self.stake,
                max: MAX_STAKE,
            });
        }
        if let Some(layout) = &self.layout {
            layout.validate_opening()?;
        }
        Ok(())
    }
}
