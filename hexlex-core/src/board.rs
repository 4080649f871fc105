//! Board state: cell contents, the static bonus layout, and strands

use crate::coords::{self, Axis, BOARD_WIDTH};
use serde::{Deserialize, Serialize};

const W: usize = BOARD_WIDTH as usize;

/// A tile resting on a cell. Blanks carry the letter they were played as but
/// score zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub blank: bool,
}

impl Tile {
    pub const fn letter(letter: char) -> Self {
        Self { letter, blank: false }
    }

    pub const fn blank_as(letter: char) -> Self {
        Self { letter, blank: true }
    }
}

/// Content of one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Outside the hexagonal playing area
    Void,
    /// Playable, no tile yet
    Empty,
    /// Holds a tile
    Tile(Tile),
}

/// Per-cell score modifier, consumed the first time a tile lands on the cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bonus {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    Void,
}

impl Bonus {
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    pub const fn word_multiplier(self) -> u32 {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

// Shorthand for the layout table below
const NB: Bonus = Bonus::None;
const DL: Bonus = Bonus::DoubleLetter;
const TL: Bonus = Bonus::TripleLetter;
const DW: Bonus = Bonus::DoubleWord;
const TW: Bonus = Bonus::TripleWord;
const VD: Bonus = Bonus::Void;

/// Bonus layout, indexed [row][col]. Fixed for the whole session; every board
/// shares it. Void entries line up exactly with the cut-off grid corners.
static BONUS_LAYOUT: [[Bonus; W]; W] = [
    [TW, NB, NB, NB, NB, DL, NB, TW, VD, VD, VD, VD, VD, VD, VD],
    [NB, NB, DL, NB, DW, NB, NB, NB, NB, VD, VD, VD, VD, VD, VD],
    [NB, DL, NB, NB, NB, NB, TL, NB, NB, DL, VD, VD, VD, VD, VD],
    [NB, NB, NB, TL, NB, DW, NB, NB, TL, NB, NB, VD, VD, VD, VD],
    [NB, DW, NB, NB, NB, NB, NB, DL, NB, NB, DW, NB, VD, VD, VD],
    [DL, NB, NB, DW, NB, NB, DL, NB, NB, DW, NB, NB, NB, VD, VD],
    [NB, NB, TL, NB, NB, DL, NB, NB, DL, NB, NB, NB, DL, NB, VD],
    [TW, NB, NB, NB, DL, NB, NB, DW, NB, NB, NB, TL, NB, NB, TW],
    [VD, NB, NB, TL, NB, NB, DL, NB, NB, DL, NB, NB, NB, DL, NB],
    [VD, VD, DL, NB, NB, DW, NB, NB, DL, NB, NB, DW, NB, NB, NB],
    [VD, VD, VD, NB, DW, NB, NB, NB, NB, NB, DL, NB, NB, DW, NB],
    [VD, VD, VD, VD, NB, NB, NB, TL, NB, DW, NB, NB, TL, NB, NB],
    [VD, VD, VD, VD, VD, NB, DL, NB, NB, NB, NB, TL, NB, NB, DL],
    [VD, VD, VD, VD, VD, VD, NB, NB, DL, NB, DW, NB, NB, NB, NB],
    [VD, VD, VD, VD, VD, VD, VD, TW, NB, NB, NB, NB, DL, NB, TW],
];

/// Bonus code at (col, row); Void for anything off the playing area
pub fn bonus_at(col: i32, row: i32) -> Bonus {
    if coords::is_on_board(col, row) {
        BONUS_LAYOUT[row as usize][col as usize]
    } else {
        Bonus::Void
    }
}

/// Why a tentative placement was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    OutOfBounds,
    CellOccupied,
}

/// The grid of cells. Cloning yields a fully independent copy, which is what
/// the validator relies on for its apply-or-reject transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; W]; W],
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; W]; W];
        for (row, row_cells) in cells.iter_mut().enumerate() {
            for (col, cell) in row_cells.iter_mut().enumerate() {
                if !coords::is_on_board(col as i32, row as i32) {
                    *cell = Cell::Void;
                }
            }
        }
        Self { cells }
    }

    /// Cell content; Void for coordinates off the grid
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        if (0..BOARD_WIDTH).contains(&col) && (0..BOARD_WIDTH).contains(&row) {
            self.cells[row as usize][col as usize]
        } else {
            Cell::Void
        }
    }

    /// The tile at (col, row), if one has been placed there
    pub fn tile_at(&self, col: i32, row: i32) -> Option<Tile> {
        match self.cell_at(col, row) {
            Cell::Tile(tile) => Some(tile),
            _ => None,
        }
    }

    /// True only for a playable cell that holds no tile
    pub fn is_empty(&self, col: i32, row: i32) -> bool {
        self.cell_at(col, row) == Cell::Empty
    }

    /// True for any playable cell, occupied or not
    pub fn is_valid(&self, col: i32, row: i32) -> bool {
        !matches!(self.cell_at(col, row), Cell::Void)
    }

    /// Whether any tile has been placed yet
    pub fn has_tiles(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| matches!(cell, Cell::Tile(_)))
    }

    /// Put a tile on an empty playable cell; on failure nothing changes
    pub fn try_place(&mut self, tile: Tile, col: i32, row: i32) -> Result<(), PlaceError> {
        match self.cell_at(col, row) {
            Cell::Void => Err(PlaceError::OutOfBounds),
            Cell::Tile(_) => Err(PlaceError::CellOccupied),
            Cell::Empty => {
                self.cells[row as usize][col as usize] = Cell::Tile(tile);
                Ok(())
            }
        }
    }

    /// Independent deep copy, safe to mutate speculatively
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A contiguous run of cells along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strand {
    pub axis: Axis,
    pub file: i32,
    pub start: i32,
    pub len: i32,
}

impl Strand {
    /// Grid coordinates of the strand's cells, in position order
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (axis, file, start) = (self.axis, self.file, self.start);
        (0..self.len).map(move |i| coords::to_col_row(axis, file, start + i))
    }

    /// Whether (col, row) lies on this strand
    pub fn contains(&self, col: i32, row: i32) -> bool {
        let (file, pos) = coords::to_file_pos(self.axis, col, row);
        file == self.file && pos >= self.start && pos < self.start + self.len
    }

    /// Decode the strand's letters off a board. Blanks contribute the letter
    /// they were played as.
    pub fn word(&self, board: &Board) -> String {
        self.cells()
            .filter_map(|(col, row)| board.tile_at(col, row))
            .map(|tile| tile.letter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CENTER;

    #[test]
    fn test_new_board_shape() {
        let board = Board::new();
        assert!(board.is_empty(CENTER.0, CENTER.1));
        assert!(board.is_valid(0, 0));
        assert!(!board.is_valid(8, 0)); // cut corner
        assert!(!board.is_valid(-1, 5));
        assert!(!board.is_empty(15, 5));
        assert!(!board.has_tiles());
    }

    #[test]
    fn test_bonus_layout_matches_board_shape() {
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                assert_eq!(
                    bonus_at(col, row) == Bonus::Void,
                    !coords::is_on_board(col, row),
                    "bonus/void mismatch at ({col}, {row})"
                );
            }
        }
        assert_eq!(bonus_at(CENTER.0, CENTER.1), Bonus::DoubleWord);
        assert_eq!(bonus_at(0, 0), Bonus::TripleWord);
        assert_eq!(bonus_at(5, 0), Bonus::DoubleLetter);
        assert_eq!(bonus_at(20, 3), Bonus::Void);
    }

    #[test]
    fn test_try_place() {
        let mut board = Board::new();
        assert_eq!(board.try_place(Tile::letter('A'), 7, 7), Ok(()));
        assert_eq!(board.tile_at(7, 7), Some(Tile::letter('A')));

        // Occupied cell refuses and keeps its tile
        assert_eq!(
            board.try_place(Tile::letter('B'), 7, 7),
            Err(PlaceError::CellOccupied)
        );
        assert_eq!(board.tile_at(7, 7), Some(Tile::letter('A')));

        // Void and off-grid cells are out of bounds
        assert_eq!(
            board.try_place(Tile::letter('B'), 8, 0),
            Err(PlaceError::OutOfBounds)
        );
        assert_eq!(
            board.try_place(Tile::letter('B'), 40, 2),
            Err(PlaceError::OutOfBounds)
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new();
        board.try_place(Tile::letter('Q'), 6, 6).unwrap();

        let mut copy = board.snapshot();
        copy.try_place(Tile::letter('Z'), 7, 7).unwrap();

        assert_eq!(board.cell_at(7, 7), Cell::Empty);
        assert_eq!(copy.tile_at(7, 7), Some(Tile::letter('Z')));
        assert_eq!(copy.tile_at(6, 6), Some(Tile::letter('Q')));
    }

    #[test]
    fn test_strand_cells() {
        let rising = Strand { axis: Axis::Rising, file: 7, start: 5, len: 3 };
        assert_eq!(rising.cells().collect::<Vec<_>>(), vec![(5, 7), (6, 7), (7, 7)]);

        let falling = Strand { axis: Axis::Falling, file: 7, start: 4, len: 3 };
        assert_eq!(falling.cells().collect::<Vec<_>>(), vec![(4, 4), (5, 5), (6, 6)]);

        let down = Strand { axis: Axis::Down, file: 2, start: 1, len: 2 };
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2)]);

        assert!(rising.contains(6, 7));
        assert!(!rising.contains(6, 8));
        assert!(!rising.contains(4, 7));
    }

    #[test]
    fn test_strand_word_decodes_blanks() {
        let mut board = Board::new();
        board.try_place(Tile::letter('H'), 5, 7).unwrap();
        board.try_place(Tile::blank_as('E'), 6, 7).unwrap();
        board.try_place(Tile::letter('X'), 7, 7).unwrap();

        let strand = Strand { axis: Axis::Rising, file: 7, start: 5, len: 3 };
        assert_eq!(strand.word(&board), "HEX");
    }
}
