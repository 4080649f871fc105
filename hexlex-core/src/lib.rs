//! HEXLEX Core - rules engine for a hexagonal word-placement game
//!
//! This crate provides the game logic:
//! - Three-axis coordinate math on the hexagonal board
//! - Board state with the static bonus layout
//! - Tile bag with weighted draws, and fixed-capacity racks
//! - Pre-sorted lexicon with length-then-lexicographic lookup
//! - Move validation and scoring with atomic apply-or-reject semantics
//!
//! Rendering, input handling and asset loading live elsewhere; callers drive
//! the engine through [`Session`] and read state back through its accessors.

pub mod board;
pub mod coords;
pub mod dictionary;
pub mod error;
pub mod session;
pub mod tiles;
pub mod validator;

// Re-exports for convenient access
pub use board::{bonus_at, Board, Bonus, Cell, Strand, Tile};
pub use coords::{Axis, AXES, BOARD_WIDTH, CENTER};
pub use dictionary::Dictionary;
pub use error::EngineError;
pub use session::{AcceptedMove, Session, Verdict};
pub use tiles::{letter_value, Rack, TileBag, BLANK, RACK_SIZE};
pub use validator::{validate, Placement, RejectReason, ValidatedMove};
