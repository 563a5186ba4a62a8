//! Line Reduction
//!
//! Slides one row toward index 0 and merges equal neighbours. Every
//! direction is reduced through this single primitive (see `shift`).

use super::grid::Tile;

/// Slide and merge a single line toward its start.
///
/// Zeros are dropped, then equal neighbours are merged in one left-to-right
/// pass. A merged tile is never merged again in the same call, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and not `[8, 0, 0, 0]`.
/// The result is right-padded with zeros to the input length.
///
/// Returns the new line and the sum of all merged values. Tile values and
/// the sum saturate at `u64::MAX` instead of wrapping.
///
/// ```
/// use grid2048::game::line::reduce_line;
///
/// assert_eq!(reduce_line(&[2, 0, 2, 0]), (vec![4, 0, 0, 0], 4));
/// assert_eq!(reduce_line(&[2, 2, 2]), (vec![4, 2, 0], 4));
/// ```
pub fn reduce_line(line: &[Tile]) -> (Vec<Tile>, u64) {
    let filtered: Vec<Tile> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = Vec::with_capacity(line.len());
    let mut gained: u64 = 0;
    let mut i = 0;
    while i < filtered.len() {
        if i + 1 < filtered.len() && filtered[i] == filtered[i + 1] {
            let merged = filtered[i].saturating_mul(2);
            out.push(merged);
            gained = gained.saturating_add(merged);
            i += 2;
        } else {
            out.push(filtered[i]);
            i += 1;
        }
    }

    out.resize(line.len(), 0);
    (out, gained)
}
