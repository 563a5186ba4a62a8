//! Engine Configuration
//!
//! Board size and seed chosen by the caller, plus the cap used by the
//! demo runner. The 3–10 size bound lives here, not in the engine.

use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::error::{EngineError, EngineResult};
use crate::game::state::{GameState, initialize_session};
use crate::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Configuration for starting sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the board.
    pub board_size: usize,
    /// Seed for tile placement.
    pub seed: u64,
    /// Move cap for automated play.
    pub max_moves: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: 0,
            max_moves: 10_000,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the board size against the supported range.
    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(EngineError::InvalidBoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }

    /// Copy with a different board size, validated.
    pub fn with_board_size(&self, board_size: usize) -> EngineResult<Self> {
        let next = Self {
            board_size,
            ..self.clone()
        };
        next.validate()?;
        Ok(next)
    }

    /// Validate, then start a session.
    pub fn new_session(&self) -> EngineResult<GameState> {
        self.validate()?;
        Ok(initialize_session(self.board_size, self.seed))
    }
}
