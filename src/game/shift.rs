//! Directional Moves
//!
//! All four directions reuse the left-move. Right reverses each row
//! around it; up and down rotate the grid so the target edge becomes the
//! left edge, reduce, and rotate back.

use super::grid::Grid;
use super::input::Direction;
use super::line::reduce_line;

/// Slide and merge every row toward column 0.
fn shift_left(grid: &Grid) -> (Grid, u64) {
    let mut gained = 0;
    let lines: Vec<_> = grid
        .rows()
        .map(|row| {
            let (line, score) = reduce_line(row);
            gained += score;
            line
        })
        .collect();
    (Grid::from_lines(grid.size(), lines), gained)
}

/// Slide and merge every row toward the last column.
fn shift_right(grid: &Grid) -> (Grid, u64) {
    let mut gained = 0;
    let lines: Vec<_> = grid
        .rows()
        .map(|row| {
            let reversed: Vec<_> = row.iter().rev().copied().collect();
            let (mut line, score) = reduce_line(&reversed);
            gained += score;
            line.reverse();
            line
        })
        .collect();
    (Grid::from_lines(grid.size(), lines), gained)
}

/// Apply a move to a grid without spawning anything.
///
/// Returns the moved grid and the score gained from merges. The input grid
/// is not modified, so callers can compare old and new afterwards.
///
/// ```
/// use grid2048::game::{grid::Grid, input::Direction, shift::apply_direction};
///
/// let grid = Grid::from_rows(vec![vec![2, 0], vec![2, 4]]).unwrap();
/// let (up, gained) = apply_direction(&grid, Direction::Up);
/// assert_eq!(up.to_rows(), vec![vec![4, 4], vec![0, 0]]);
/// assert_eq!(gained, 4);
/// ```
pub fn apply_direction(grid: &Grid, direction: Direction) -> (Grid, u64) {
    match direction {
        Direction::Left => shift_left(grid),
        Direction::Right => shift_right(grid),
        Direction::Up => {
            let (moved, gained) = shift_left(&grid.rotate_counter_clockwise());
            (moved.rotate_clockwise(), gained)
        }
        Direction::Down => {
            let (moved, gained) = shift_left(&grid.rotate_clockwise());
            (moved.rotate_counter_clockwise(), gained)
        }
    }
}

/// True if moving in `direction` would change the grid.
#[inline]
pub fn changes_grid(grid: &Grid, direction: Direction) -> bool {
    apply_direction(grid, direction).0 != *grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Tile;

    fn grid(rows: &[&[Tile]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_left_and_right_on_single_row() {
        let g = grid(&[&[2, 0, 2, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);

        let (left, gained) = apply_direction(&g, Direction::Left);
        assert_eq!(left.to_rows()[0], vec![4, 0, 0, 0]);
        assert_eq!(gained, 4);

        let (right, gained) = apply_direction(&g, Direction::Right);
        assert_eq!(right.to_rows()[0], vec![0, 0, 0, 4]);
        assert_eq!(gained, 4);
    }

    #[test]
    fn test_up_and_down() {
        let g = grid(&[&[2, 0, 0], &[2, 4, 0], &[4, 4, 8]]);

        let (up, gained) = apply_direction(&g, Direction::Up);
        assert_eq!(up, grid(&[&[4, 8, 8], &[4, 0, 0], &[0, 0, 0]]));
        assert_eq!(gained, 12);

        let (down, gained) = apply_direction(&g, Direction::Down);
        assert_eq!(down, grid(&[&[0, 0, 0], &[4, 0, 0], &[4, 8, 8]]));
        assert_eq!(gained, 12);
    }

    #[test]
    fn test_merge_toward_moving_edge() {
        // Three in a column: the pair nearest the target edge merges
        let g = grid(&[&[2, 0, 0], &[2, 0, 0], &[2, 0, 0]]);

        let (up, _) = apply_direction(&g, Direction::Up);
        assert_eq!(up, grid(&[&[4, 0, 0], &[2, 0, 0], &[0, 0, 0]]));

        let (down, _) = apply_direction(&g, Direction::Down);
        assert_eq!(down, grid(&[&[0, 0, 0], &[2, 0, 0], &[4, 0, 0]]));
    }

    #[test]
    fn test_left_matches_per_row_reduce() {
        let g = grid(&[&[2, 2, 4, 4], &[0, 8, 0, 8], &[16, 0, 0, 2], &[2, 4, 8, 16]]);
        let (left, gained) = apply_direction(&g, Direction::Left);

        let mut expected_gain = 0;
        for (row, moved) in g.rows().zip(left.rows()) {
            let (line, score) = reduce_line(row);
            assert_eq!(moved, line.as_slice());
            expected_gain += score;
        }
        assert_eq!(gained, expected_gain);
    }

    #[test]
    fn test_blocked_move_is_identity() {
        let g = grid(&[&[2, 4, 0], &[8, 16, 0], &[2, 4, 0]]);
        let (left, gained) = apply_direction(&g, Direction::Left);
        assert_eq!(left, g);
        assert_eq!(gained, 0);
        assert!(!changes_grid(&g, Direction::Left));
        assert!(changes_grid(&g, Direction::Right));
    }

    #[test]
    fn test_input_grid_untouched() {
        let g = grid(&[&[2, 2], &[0, 0]]);
        let snapshot = g.clone();
        let _ = apply_direction(&g, Direction::Left);
        assert_eq!(g, snapshot);
    }
}
