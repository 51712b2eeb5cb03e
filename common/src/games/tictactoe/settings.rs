use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 500;
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    /// Pause before the computer's reply is played.
    pub computer_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}
