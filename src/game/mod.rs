//! Game Logic Module
//!
//! The board engine. 100% deterministic given a seed.
//!
//! ## Module Structure
//!
//! - `grid`: Grid value type, spawning, rotation, terminal/win queries
//! - `line`: Single-line slide and merge
//! - `shift`: Directional moves built on `line`
//! - `input`: Move directions
//! - `state`: Session snapshot
//! - `tick`: Move transition and replay
//! - `events`: Events emitted by accepted moves

pub mod grid;
pub mod line;
pub mod shift;
pub mod input;
pub mod state;
pub mod tick;
pub mod events;

// Re-export key types
pub use grid::{Grid, Tile, SpawnedTile, create_grid, grids_equal, spawn_tile, spawn_tile_at};
pub use line::reduce_line;
pub use shift::apply_direction;
pub use input::{Direction, ParseDirectionError};
pub use state::{GameState, SessionPhase, initialize_session};
pub use tick::{StepResult, replay_session, step, transition};
pub use events::{GameEvent, GameEventData};
