//! Game State Definitions
//!
//! An immutable snapshot of a session. Every accepted move produces a new
//! snapshot; the previous one stays valid and is never edited in place.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::hash::{StateHash, StateHasher};
use crate::core::rng::DeterministicRng;
use crate::game::grid::{Grid, Tile, spawn_tile};
use crate::game::input::Direction;
use crate::game::shift::changes_grid;

// =============================================================================
// SESSION PHASE
// =============================================================================

/// Whether a session still accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// At least one move may change the grid
    Active,
    /// No move is possible; absorbing
    Terminal,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of a session.
///
/// The caller owns the current snapshot and passes it into every call;
/// the engine keeps nothing between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Tile values
    pub grid: Grid,

    /// Cumulative score (sum of every merge result)
    pub score: u64,

    /// No further moves are possible
    pub terminal: bool,

    /// Some tile has reached the winning value at least once (sticky)
    pub victory: bool,

    /// Seed the session was started with (for verification)
    pub seed: u64,

    /// Deterministic RNG state, advanced only by spawns
    pub rng: DeterministicRng,

    /// Number of accepted (grid-changing) moves
    pub moves: u32,
}

impl GameState {
    /// Start a session: empty grid plus two spawned tiles.
    ///
    /// ```
    /// use grid2048::GameState;
    ///
    /// let state = GameState::new(4, 7);
    /// assert_eq!(state.grid.tile_count(), 2);
    /// assert_eq!(state.score, 0);
    /// assert!(!state.terminal && !state.victory);
    /// ```
    pub fn new(size: usize, seed: u64) -> Self {
        let mut rng = DeterministicRng::new(seed);
        let grid = Grid::new(size);
        let grid = spawn_tile(&grid, &mut rng);
        let grid = spawn_tile(&grid, &mut rng);

        debug!(
            "Session started: size {}, seed {}, {} tiles",
            size,
            seed,
            grid.tile_count()
        );

        Self {
            grid,
            score: 0,
            terminal: false,
            victory: false,
            seed,
            rng,
            moves: 0,
        }
    }

    /// Resume from an arbitrary grid (puzzles, tests, imported positions).
    ///
    /// Flags are derived from the grid; the score starts at zero.
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            terminal: !grid.is_move_possible(),
            victory: grid.has_reached_target(),
            grid,
            score: 0,
            seed,
            rng: DeterministicRng::new(seed),
            moves: 0,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> SessionPhase {
        if self.terminal {
            SessionPhase::Terminal
        } else {
            SessionPhase::Active
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Largest tile currently on the board.
    #[inline]
    pub fn highest_tile(&self) -> Tile {
        self.grid.highest_tile()
    }

    /// Directions that would change the grid, in `Direction::ALL` order.
    ///
    /// Empty once the session is terminal.
    pub fn legal_directions(&self) -> Vec<Direction> {
        if self.terminal {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&dir| changes_grid(&self.grid, dir))
            .collect()
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::new();
        hasher.update_session(self.seed, self.moves);
        hasher.update_grid(&self.grid);
        hasher.update_score(self.score);
        hasher.update_flags(self.terminal, self.victory);
        hasher.finalize()
    }
}

/// Start (or restart, or resize) a session.
///
/// Board size is not range-checked here; see `EngineConfig::validate`.
#[inline]
pub fn initialize_session(size: usize, seed: u64) -> GameState {
    GameState::new(size, seed)
}

// =============================================================================
// TESTS
// =============================================================================
