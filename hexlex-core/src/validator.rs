//! Move validation and scoring
//!
//! A move is a set of tiles placed in one turn. Validation runs against an
//! independent copy of the board; the authoritative board is swapped only if
//! every check passes, so a rejection can never leave partial state behind.

use crate::board::{self, Board, PlaceError, Strand, Tile};
use crate::coords::{self, Axis, AXES, CENTER};
use crate::dictionary::Dictionary;
use crate::tiles::letter_value;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One proposed tile of a move. For a blank, `letter` is the letter the
/// wildcard is played as and `blank` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub letter: char,
    pub col: i32,
    pub row: i32,
    pub blank: bool,
}

impl Placement {
    pub const fn new(letter: char, col: i32, row: i32) -> Self {
        Self { letter, col, row, blank: false }
    }

    pub const fn blank_as(letter: char, col: i32, row: i32) -> Self {
        Self { letter, col, row, blank: true }
    }

    const fn tile(&self) -> Tile {
        if self.blank {
            Tile::blank_as(self.letter)
        } else {
            Tile::letter(self.letter)
        }
    }
}

/// Why a move was refused. Exactly one reason is reported per rejection.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("no tiles were placed")]
    EmptyMove,

    #[error("({col}, {row}) is outside the playing area")]
    OutOfBounds { col: i32, row: i32 },

    #[error("({col}, {row}) already holds a tile")]
    CellOccupied { col: i32, row: i32 },

    #[error("placed tiles do not lie on one line")]
    NotLinear,

    #[error("move does not connect to the board")]
    NotConnected,

    #[error("'{0}' is not in the lexicon")]
    InvalidWord(String),
}

/// A fully checked move, ready to commit
#[derive(Clone, Debug)]
pub struct ValidatedMove {
    /// Board copy with the move applied; becomes authoritative on commit
    pub board: Board,
    /// Every strand the move forms or extends, main strand first
    pub strands: Vec<Strand>,
    /// Decoded words, parallel to `strands`
    pub words: Vec<String>,
    /// Turn score under the single-use multiplier rules
    pub score: u32,
}

/// Validate a proposed move against the current board and lexicon.
///
/// The board passed in is never mutated; on success the returned
/// `ValidatedMove` carries the applied copy.
pub fn validate(
    board: &Board,
    dictionary: &Dictionary,
    placements: &[Placement],
) -> Result<ValidatedMove, RejectReason> {
    if placements.is_empty() {
        return Err(RejectReason::EmptyMove);
    }

    // Tentative application on a deep copy; first failure aborts the move
    let mut next = board.snapshot();
    for p in placements {
        next.try_place(p.tile(), p.col, p.row).map_err(|err| match err {
            PlaceError::OutOfBounds => RejectReason::OutOfBounds { col: p.col, row: p.row },
            PlaceError::CellOccupied => RejectReason::CellOccupied { col: p.col, row: p.row },
        })?;
    }

    let strands = collect_strands(&next, placements)?;

    // Connectivity / first-move rule
    if board.has_tiles() {
        let touches = placements.iter().any(|p| {
            coords::neighbors(p.col, p.row)
                .into_iter()
                .any(|(col, row)| board.tile_at(col, row).is_some())
        });
        if !touches {
            return Err(RejectReason::NotConnected);
        }
    } else {
        let covers_center = strands.iter().any(|s| s.contains(CENTER.0, CENTER.1));
        if !covers_center {
            return Err(RejectReason::NotConnected);
        }
    }

    // Length-1 strands carry no word; everything longer must be in the lexicon
    let mut kept = Vec::new();
    let mut words = Vec::new();
    for strand in strands {
        if strand.len < 2 {
            continue;
        }
        let word = strand.word(&next);
        if !dictionary.contains(&word) {
            return Err(RejectReason::InvalidWord(word));
        }
        kept.push(strand);
        words.push(word);
    }

    let new_cells: FxHashSet<(i32, i32)> =
        placements.iter().map(|p| (p.col, p.row)).collect();
    let score = score_move(&next, &kept, &new_cells);

    Ok(ValidatedMove { board: next, strands: kept, words, score })
}

/// Every strand the move forms: the main strand along the move's axis plus
/// perpendicular strands through each placed tile. A lone tile is ambiguous
/// and is probed along all three axes.
fn collect_strands(applied: &Board, placements: &[Placement]) -> Result<Vec<Strand>, RejectReason> {
    let mut strands = Vec::new();

    if placements.len() == 1 {
        let p = &placements[0];
        for axis in AXES {
            let (file, pos) = coords::to_file_pos(axis, p.col, p.row);
            strands.push(extend(applied, axis, file, pos, pos));
        }
        return Ok(strands);
    }

    let axis = infer_axis(&placements[0], &placements[1]).ok_or(RejectReason::NotLinear)?;

    let (file, first_pos) = coords::to_file_pos(axis, placements[0].col, placements[0].row);
    let mut min_pos = first_pos;
    let mut max_pos = first_pos;
    for p in &placements[1..] {
        let (f, pos) = coords::to_file_pos(axis, p.col, p.row);
        if f != file {
            return Err(RejectReason::NotLinear);
        }
        min_pos = min_pos.min(pos);
        max_pos = max_pos.max(pos);
    }

    let main = extend(applied, axis, file, min_pos, max_pos);

    // The span between the outermost placed tiles must be solid; a hole means
    // the move is two separate groups
    if main.cells().any(|(col, row)| applied.tile_at(col, row).is_none()) {
        return Err(RejectReason::NotConnected);
    }
    strands.push(main);

    for p in placements {
        for cross in AXES.into_iter().filter(|&a| a != axis) {
            let (f, pos) = coords::to_file_pos(cross, p.col, p.row);
            strands.push(extend(applied, cross, f, pos, pos));
        }
    }

    Ok(strands)
}

/// Axis shared by the first two tiles: same row, same diagonal, or same column
fn infer_axis(a: &Placement, b: &Placement) -> Option<Axis> {
    if a.row == b.row {
        Some(Axis::Rising)
    } else if coords::dia(a.col, a.row) == coords::dia(b.col, b.row) {
        Some(Axis::Falling)
    } else if a.col == b.col {
        Some(Axis::Down)
    } else {
        None
    }
}

/// Grow [min_pos, max_pos] outward through occupied cells, stopping at the
/// first empty, void, or off-grid position on each side
fn extend(applied: &Board, axis: Axis, file: i32, mut min_pos: i32, mut max_pos: i32) -> Strand {
    loop {
        let (col, row) = coords::to_col_row(axis, file, min_pos - 1);
        if applied.tile_at(col, row).is_none() {
            break;
        }
        min_pos -= 1;
    }
    loop {
        let (col, row) = coords::to_col_row(axis, file, max_pos + 1);
        if applied.tile_at(col, row).is_none() {
            break;
        }
        max_pos += 1;
    }
    Strand { axis, file, start: min_pos, len: max_pos - min_pos + 1 }
}

/// Score all accepted strands of the turn
fn score_move(applied: &Board, strands: &[Strand], new_cells: &FxHashSet<(i32, i32)>) -> u32 {
    strands
        .iter()
        .map(|strand| score_strand(applied, strand, new_cells))
        .sum()
}

/// Letter values with multipliers on cells placed this turn; cells from
/// earlier turns contribute face value, their bonus already spent
fn score_strand(applied: &Board, strand: &Strand, new_cells: &FxHashSet<(i32, i32)>) -> u32 {
    let mut letters = 0u32;
    let mut word_multiplier = 1u32;

    for (col, row) in strand.cells() {
        let Some(tile) = applied.tile_at(col, row) else {
            continue;
        };
        let value = if tile.blank { 0 } else { letter_value(tile.letter) };

        if new_cells.contains(&(col, row)) {
            let bonus = board::bonus_at(col, row);
            letters += value * bonus.letter_multiplier();
            word_multiplier *= bonus.word_multiplier();
        } else {
            letters += value;
        }
    }

    letters * word_multiplier
}
