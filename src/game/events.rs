//! Game Events
//!
//! Events generated by an accepted move, for presentation layers and replay
//! logs. Events never feed back into the rules.

use serde::{Serialize, Deserialize};

use crate::game::grid::Tile;
use crate::game::input::Direction;

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEventData {
    /// Tiles slid (and possibly merged) in a direction
    TilesShifted {
        direction: Direction,
        score_gained: u64,
    },

    /// A new tile appeared after the move
    TileSpawned {
        row: usize,
        col: usize,
        value: Tile,
    },

    /// The winning tile appeared for the first time this session
    TargetReached {
        tile: Tile,
    },

    /// No further moves are possible
    GameOver {
        score: u64,
        highest_tile: Tile,
    },
}

/// A game event stamped with the move that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Accepted-move counter after the move (1 for the first move)
    pub moves: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(moves: u32, data: GameEventData) -> Self {
        Self { moves, data }
    }

    /// Create tiles shifted event.
    pub fn tiles_shifted(moves: u32, direction: Direction, score_gained: u64) -> Self {
        Self::new(moves, GameEventData::TilesShifted { direction, score_gained })
    }

    /// Create tile spawned event.
    pub fn tile_spawned(moves: u32, row: usize, col: usize, value: Tile) -> Self {
        Self::new(moves, GameEventData::TileSpawned { row, col, value })
    }

    /// Create target reached event.
    pub fn target_reached(moves: u32, tile: Tile) -> Self {
        Self::new(moves, GameEventData::TargetReached { tile })
    }

    /// Create game over event.
    pub fn game_over(moves: u32, score: u64, highest_tile: Tile) -> Self {
        Self::new(moves, GameEventData::GameOver { score, highest_tile })
    }

    /// True for events that end or decide the session.
    pub fn is_milestone(&self) -> bool {
        matches!(
            self.data,
            GameEventData::TargetReached { .. } | GameEventData::GameOver { .. }
        )
    }
}
