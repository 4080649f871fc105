//! Three-axis addressing for the hexagonal board
//!
//! Cells live on a 15x15 (col, row) grid; the hexagonal shape is carved out
//! of its corners. Every cell can be addressed along three axes, each pairing
//! a fixed "file" with a varying "position":
//! - RISING: fixed row, position runs along columns
//! - FALLING: fixed diagonal index, position runs along columns
//! - DOWN: fixed column, position runs along rows

use serde::{Deserialize, Serialize};

/// Side length of the (col, row) addressing grid
pub const BOARD_WIDTH: i32 = 15;

/// The designated starting cell
pub const CENTER: (i32, i32) = (BOARD_WIDTH / 2, BOARD_WIDTH / 2);

/// One of the three word-forming directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Rising,
    Falling,
    Down,
}

/// All three axes, in the order they are probed
pub const AXES: [Axis; 3] = [Axis::Rising, Axis::Falling, Axis::Down];

impl Axis {
    /// (col, row) delta for one step of increasing position
    pub const fn step(self) -> (i32, i32) {
        match self {
            Axis::Rising => (1, 0),
            Axis::Falling => (1, 1),
            Axis::Down => (0, 1),
        }
    }
}

/// Diagonal index of a cell, its file on the FALLING axis
pub const fn dia(col: i32, row: i32) -> i32 {
    BOARD_WIDTH / 2 + col - row
}

/// Convert (axis, file, pos) to grid coordinates
pub const fn to_col_row(axis: Axis, file: i32, pos: i32) -> (i32, i32) {
    match axis {
        Axis::Rising => (pos, file),
        Axis::Falling => (pos, BOARD_WIDTH / 2 + pos - file),
        Axis::Down => (file, pos),
    }
}

/// Convert grid coordinates to (file, pos) along the given axis
pub const fn to_file_pos(axis: Axis, col: i32, row: i32) -> (i32, i32) {
    match axis {
        Axis::Rising => (row, col),
        Axis::Falling => (dia(col, row), col),
        Axis::Down => (col, row),
    }
}

/// Whether (col, row) names a cell of the hexagonal playing area.
///
/// The hexagon is exactly the set of grid cells whose diagonal index also
/// falls inside [0, BOARD_WIDTH).
pub const fn is_on_board(col: i32, row: i32) -> bool {
    col >= 0
        && col < BOARD_WIDTH
        && row >= 0
        && row < BOARD_WIDTH
        && dia(col, row) >= 0
        && dia(col, row) < BOARD_WIDTH
}

/// The six neighbouring cells: one step either way along each axis
pub const fn neighbors(col: i32, row: i32) -> [(i32, i32); 6] {
    [
        (col + 1, row),
        (col - 1, row),
        (col, row + 1),
        (col, row - 1),
        (col + 1, row + 1),
        (col - 1, row - 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_cell() {
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                if !is_on_board(col, row) {
                    continue;
                }
                for axis in AXES {
                    let (file, pos) = to_file_pos(axis, col, row);
                    assert_eq!(
                        to_col_row(axis, file, pos),
                        (col, row),
                        "round trip failed on {axis:?} at ({col}, {row})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_file_pos_values() {
        // Center cell sits on file 7 of every axis
        let (col, row) = CENTER;
        assert_eq!(to_file_pos(Axis::Rising, col, row), (7, 7));
        assert_eq!(to_file_pos(Axis::Falling, col, row), (7, 7));
        assert_eq!(to_file_pos(Axis::Down, col, row), (7, 7));

        assert_eq!(to_file_pos(Axis::Rising, 3, 5), (5, 3));
        assert_eq!(to_file_pos(Axis::Falling, 3, 5), (5, 3));
        assert_eq!(to_file_pos(Axis::Down, 3, 5), (3, 5));
    }

    #[test]
    fn test_board_shape() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 0));
        assert!(is_on_board(14, 14));
        assert!(is_on_board(7, 14));
        // Corners cut off by the diagonal limit
        assert!(!is_on_board(8, 0)); // dia = 15
        assert!(!is_on_board(0, 8)); // dia = -1
        assert!(!is_on_board(14, 0));
        assert!(!is_on_board(0, 14));
        // Outside the grid entirely
        assert!(!is_on_board(-1, 3));
        assert!(!is_on_board(3, 15));
    }

    #[test]
    fn test_step_matches_position_increment() {
        for axis in AXES {
            let (file, pos) = to_file_pos(axis, 6, 6);
            let (dc, dr) = axis.step();
            assert_eq!(to_col_row(axis, file, pos + 1), (6 + dc, 6 + dr));
        }
    }

    #[test]
    fn test_neighbors_are_adjacent_on_some_axis() {
        let (col, row) = CENTER;
        for (nc, nr) in neighbors(col, row) {
            assert!(is_on_board(nc, nr));
            let adjacent = AXES.iter().any(|&axis| {
                let (file, pos) = to_file_pos(axis, col, row);
                let (nf, np) = to_file_pos(axis, nc, nr);
                file == nf && (pos - np).abs() == 1
            });
            assert!(adjacent, "({nc}, {nr}) not adjacent to center");
        }
    }
}
