//! Snapshot Fingerprints
//!
//! SHA-256 digests of game snapshots, used to check that a replay ends in
//! exactly the same position as the original session.
//!
//! Layout fed to the digest, in order:
//! domain tag, seed, move counter, side length, every cell row-major,
//! score, flag byte (bit 0 terminal, bit 1 victory).

use sha2::{Sha256, Digest};

use crate::game::grid::Grid;

/// Digest output (32 bytes).
pub type StateHash = [u8; 32];

/// Domain tag; bump the suffix if the layout changes.
const STATE_DOMAIN: &[u8] = b"GRID2048_STATE_V1";

const FLAG_TERMINAL: u8 = 0b01;
const FLAG_VICTORY: u8 = 0b10;

/// Incremental hasher for one snapshot.
///
/// Call the `update_*` methods in the documented layout order, then `finalize`.
pub struct StateHasher {
    digest: Sha256,
}

impl StateHasher {
    /// Start a digest tagged for game snapshots.
    pub fn new() -> Self {
        let mut digest = Sha256::new();
        digest.update(STATE_DOMAIN);
        Self { digest }
    }

    /// Session identity: the seed and how many moves were accepted.
    pub fn update_session(&mut self, seed: u64, moves: u32) {
        self.digest.update(seed.to_le_bytes());
        self.digest.update(moves.to_le_bytes());
    }

    /// Side length followed by every cell, row-major.
    pub fn update_grid(&mut self, grid: &Grid) {
        self.digest.update((grid.size() as u32).to_le_bytes());
        for &cell in grid.cells() {
            self.digest.update(cell.to_le_bytes());
        }
    }

    /// Cumulative score.
    pub fn update_score(&mut self, score: u64) {
        self.digest.update(score.to_le_bytes());
    }

    /// Terminal and victory flags packed into one byte.
    pub fn update_flags(&mut self, terminal: bool, victory: bool) {
        let mut bits = 0u8;
        if terminal {
            bits |= FLAG_TERMINAL;
        }
        if victory {
            bits |= FLAG_VICTORY;
        }
        self.digest.update([bits]);
    }

    /// Finish and return the digest.
    pub fn finalize(self) -> StateHash {
        self.digest.finalize().into()
    }
}

impl Default for StateHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<u64>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn grid_hash(g: &Grid) -> StateHash {
        let mut hasher = StateHasher::new();
        hasher.update_grid(g);
        hasher.finalize()
    }

    #[test]
    fn test_equal_grids_equal_hash() {
        let a = grid(vec![vec![2, 4], vec![0, 8]]);
        let b = grid(vec![vec![2, 4], vec![0, 8]]);
        assert_eq!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn test_single_cell_change_changes_hash() {
        let a = grid(vec![vec![2, 4], vec![0, 8]]);
        let b = a.with_tile(1, 0, 2);
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn test_rotated_grid_hashes_differently() {
        let a = grid(vec![vec![2, 0, 0], vec![0, 0, 0], vec![0, 0, 4]]);
        assert_ne!(grid_hash(&a), grid_hash(&a.rotate_clockwise()));
    }

    #[test]
    fn test_size_is_part_of_hash() {
        // Same (empty) cell values, different board
        assert_ne!(grid_hash(&Grid::new(3)), grid_hash(&Grid::new(4)));
    }

    #[test]
    fn test_flags_are_distinguished() {
        let g = grid(vec![vec![2, 4], vec![4, 2]]);
        let with_flags = |terminal, victory| {
            let mut hasher = StateHasher::new();
            hasher.update_grid(&g);
            hasher.update_flags(terminal, victory);
            hasher.finalize()
        };

        let all = [
            with_flags(false, false),
            with_flags(true, false),
            with_flags(false, true),
            with_flags(true, true),
        ];
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }

    #[test]
    fn test_session_identity_matters() {
        let g = grid(vec![vec![2, 0], vec![0, 0]]);
        let snapshot = |seed, moves| {
            let mut hasher = StateHasher::new();
            hasher.update_session(seed, moves);
            hasher.update_grid(&g);
            hasher.finalize()
        };

        assert_eq!(snapshot(7, 3), snapshot(7, 3));
        assert_ne!(snapshot(7, 3), snapshot(8, 3));
        assert_ne!(snapshot(7, 3), snapshot(7, 4));
    }
}
