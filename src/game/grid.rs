//! Grid Value Type
//!
//! Square board of tile values stored as a flat row-major buffer.
//! The side length is fixed at construction, so a jagged or non-square
//! grid cannot be represented.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::core::rng::DeterministicRng;
use crate::error::{EngineError, EngineResult};
use crate::WIN_TILE;

/// Value held by a single cell (0 = empty, otherwise a power of two).
pub type Tile = u64;

/// Value of a freshly spawned tile in the common case.
pub const SPAWN_LOW: Tile = 2;

/// Value of a freshly spawned tile in the rare case.
pub const SPAWN_HIGH: Tile = 4;

/// Chance (out of 10) that a spawned tile is `SPAWN_LOW`.
pub const SPAWN_LOW_WEIGHT: u32 = 9;

// =============================================================================
// GRID
// =============================================================================

/// An N×N matrix of tile values.
///
/// Serializes as nested rows so presentation layers can render it directly.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an all-empty grid with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from nested rows, rejecting empty or non-square input.
    ///
    /// ```
    /// use grid2048::game::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert!(Grid::from_rows(vec![vec![2, 4], vec![4]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> EngineResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(EngineError::NonSquareGrid {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Assemble a grid from already-validated rows of length `size`.
    pub(crate) fn from_lines<I>(size: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = Vec<Tile>>,
    {
        let mut cells = Vec::with_capacity(size * size);
        for line in lines {
            debug_assert_eq!(line.len(), size);
            cells.extend(line);
        }
        Self { size, cells }
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Value at (row, col). Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size + col]
    }

    /// Copy of this grid with one cell replaced. Panics if out of bounds.
    pub(crate) fn with_tile(&self, row: usize, col: usize, value: Tile) -> Self {
        let mut next = self.clone();
        next.cells[row * self.size + col] = value;
        next
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks(0) panics; an empty buffer yields nothing either way
        self.cells.chunks(self.size.max(1))
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Coordinates of every empty cell, in row-major scan order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if some cell holds at least the winning tile value.
    pub fn has_reached_target(&self) -> bool {
        self.cells.iter().any(|&v| v >= WIN_TILE)
    }

    /// True if at least one of the four directional moves would change the grid.
    ///
    /// That is the case exactly when a cell is empty or two orthogonal
    /// neighbours hold the same value.
    pub fn is_move_possible(&self) -> bool {
        let n = self.size;
        if self.cells.contains(&0) {
            return true;
        }

        for row in 0..n {
            for col in 0..n {
                let value = self.get(row, col);
                if col + 1 < n && self.get(row, col + 1) == value {
                    return true;
                }
                if row + 1 < n && self.get(row + 1, col) == value {
                    return true;
                }
            }
        }

        false
    }

    /// Rotate 90° clockwise: new (r, c) = old (N-1-c, r).
    pub fn rotate_clockwise(&self) -> Self {
        let n = self.size;
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..n {
            for c in 0..n {
                cells.push(self.get(n - 1 - c, r));
            }
        }
        Self { size: n, cells }
    }

    /// Rotate 90° counter-clockwise: new (r, c) = old (c, N-1-r).
    pub fn rotate_counter_clockwise(&self) -> Self {
        let n = self.size;
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..n {
            for c in 0..n {
                cells.push(self.get(c, n - 1 - r));
            }
        }
        Self { size: n, cells }
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Tile>>) -> EngineResult<Self> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("rows", &self.to_rows())
            .finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = format!("+{}", "------+".repeat(self.size));
        writeln!(f, "{}", divider)?;
        for row in self.rows() {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", divider)?;
        }
        Ok(())
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// A tile placed by [`spawn_tile_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    /// Row of the new tile
    pub row: usize,
    /// Column of the new tile
    pub col: usize,
    /// Value placed (2 or 4)
    pub value: Tile,
}

/// Create an all-empty N×N grid.
#[inline]
pub fn create_grid(size: usize) -> Grid {
    Grid::new(size)
}

/// Structural equality of two grids.
#[inline]
pub fn grids_equal(a: &Grid, b: &Grid) -> bool {
    a == b
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
///
/// Returns a new grid; the input is untouched. A full grid comes back unchanged.
pub fn spawn_tile(grid: &Grid, rng: &mut DeterministicRng) -> Grid {
    spawn_tile_at(grid, rng).0
}

/// Like [`spawn_tile`], but also reports the placed tile.
///
/// Draw order is fixed (cell first, then value) so seeded sessions replay exactly.
pub fn spawn_tile_at(grid: &Grid, rng: &mut DeterministicRng) -> (Grid, Option<SpawnedTile>) {
    let Some((row, col)) = rng.pick_cell(&grid.empty_cells()) else {
        return (grid.clone(), None);
    };
    let value = rng.spawn_value();

    (grid.with_tile(row, col, value), Some(SpawnedTile { row, col, value }))
}

// =============================================================================
// TESTS
// =============================================================================
