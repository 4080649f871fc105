//! Fatal-tier engine errors
//!
//! Move rejections are ordinary values (`validator::RejectReason`); errors
//! here mean the caller misused the engine or a session cannot exist at all.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read lexicon {path}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon contains no words")]
    EmptyLexicon,

    #[error("session requires at least one player")]
    NoPlayers,

    #[error("no player with index {0}")]
    NoSuchPlayer(usize),

    #[error("tile '{0}' is not on the rack")]
    TileNotOnRack(char),
}
