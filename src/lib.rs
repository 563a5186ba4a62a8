//! # Grid2048 Engine
//!
//! Deterministic rules engine for the 2048 tile-merging puzzle.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     GRID2048 ENGINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Seeded tile placement and values          │
//! │  └── hash.rs     - Snapshot fingerprints for replay checks   │
//! │                                                              │
//! │  game/           - Board engine (deterministic)              │
//! │  ├── grid.rs     - Grid type, spawning, rotation, queries    │
//! │  ├── line.rs     - Single-line slide and merge               │
//! │  ├── shift.rs    - Directional moves via rotation            │
//! │  ├── input.rs    - Move directions                           │
//! │  ├── state.rs    - Session snapshot                          │
//! │  ├── tick.rs     - Move transition and replay                │
//! │  └── events.rs   - Events for presentation/replay            │
//! │                                                              │
//! │  config.rs       - Board size / seed configuration           │
//! │  error.rs        - Error types                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Every call takes a snapshot and returns a new one; nothing is stored
//! inside the engine. The RNG state travels inside the snapshot, so given
//! the same seed and the same directions the engine produces identical
//! sessions on any platform.
//!
//! ```
//! use grid2048::{Direction, initialize_session, transition};
//!
//! let state = initialize_session(4, 2024);
//! let next = transition(&state, Direction::Down);
//! assert_eq!(state.grid.size(), next.grid.size());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use crate::core::rng::DeterministicRng;
pub use crate::core::hash::StateHash;
pub use game::grid::{Grid, Tile};
pub use game::input::Direction;
pub use game::state::{GameState, SessionPhase, initialize_session};
pub use game::tick::{StepResult, replay_session, step, transition};
pub use game::events::{GameEvent, GameEventData};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tile value that wins the game
pub const WIN_TILE: Tile = 2048;

/// Smallest board size accepted by `EngineConfig`
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board size accepted by `EngineConfig`
pub const MAX_BOARD_SIZE: usize = 10;

/// Board size used when none is configured
pub const DEFAULT_BOARD_SIZE: usize = 4;
