//! Seeded Tile RNG
//!
//! Every random decision the engine makes goes through `DeterministicRng`:
//! which empty cell receives a new tile, and whether that tile is a 2 or a 4.
//! The generator is Xorshift128+, seeded through SplitMix64, so a seed fully
//! determines the sequence of spawns on every platform.

use serde::{Serialize, Deserialize};

use crate::game::grid::{Tile, SPAWN_HIGH, SPAWN_LOW, SPAWN_LOW_WEIGHT};

/// Golden-ratio increment used by the SplitMix64 seeder.
const SPLITMIX_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded generator for tile placement.
///
/// Lives inside `GameState`, so cloning a snapshot clones the exact
/// point in the spawn sequence.
///
/// ```
/// use grid2048::core::rng::DeterministicRng;
///
/// let cells = [(0, 1), (2, 3), (3, 0)];
/// let mut a = DeterministicRng::new(12345);
/// let mut b = DeterministicRng::new(12345);
/// assert_eq!(a.pick_cell(&cells), b.pick_cell(&cells));
/// assert_eq!(a.spawn_value(), b.spawn_value());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    lo: u64,
    hi: u64,
}

impl DeterministicRng {
    /// Seed a generator for one session.
    pub fn new(seed: u64) -> Self {
        let mut cursor = seed;
        let lo = splitmix_next(&mut cursor);
        let hi = splitmix_next(&mut cursor);

        // Xorshift never leaves the all-zero state
        if lo | hi == 0 {
            Self { lo: 1, hi: 1 }
        } else {
            Self { lo, hi }
        }
    }

    /// Raw 64-bit output (Xorshift128+ step).
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let (a, mut b) = (self.lo, self.hi);
        let out = a.wrapping_add(b);
        b ^= a;
        self.lo = a.rotate_left(24) ^ b ^ (b << 16);
        self.hi = b.rotate_left(37);
        out
    }

    /// Uniform index in `0..len` via multiply-shift on the high word.
    #[inline]
    fn below(&mut self, len: usize) -> usize {
        let word = self.next_u64() >> 32;
        ((word * len as u64) >> 32) as usize
    }

    /// Choose one of the given cells uniformly.
    ///
    /// An empty slice (full board) returns `None` without consuming a draw.
    pub fn pick_cell(&mut self, cells: &[(usize, usize)]) -> Option<(usize, usize)> {
        if cells.is_empty() {
            return None;
        }
        Some(cells[self.below(cells.len())])
    }

    /// Value for a freshly spawned tile: `SPAWN_LOW` nine times in ten,
    /// `SPAWN_HIGH` otherwise.
    pub fn spawn_value(&mut self) -> Tile {
        if self.below(10) < SPAWN_LOW_WEIGHT as usize {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        }
    }
}

/// Advance a SplitMix64 cursor and return its mixed output.
#[inline]
fn splitmix_next(cursor: &mut u64) -> u64 {
    *cursor = cursor.wrapping_add(SPLITMIX_STEP);
    let mut z = *cursor;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
