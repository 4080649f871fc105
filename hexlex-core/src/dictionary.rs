//! Word list with length-then-lexicographic binary search
//!
//! The input is assumed already sorted by (length, lexicographic) ascending.
//! That is a documented precondition of the lexicon file format, not
//! something enforced at runtime; lookups on unsorted input are unreliable.

use crate::error::EngineError;
use std::cmp::Ordering;
use std::path::Path;

/// Comparison used by the lexicon order: length first, letters only on ties
fn length_lex(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Immutable, shared word list
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Wrap a pre-sorted word list
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Read one word per whitespace-separated token. Fails if the file is
    /// unreadable or holds no words; a session must never start without a
    /// usable lexicon.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|source| EngineError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> = content
            .split_whitespace()
            .map(|token| token.to_ascii_uppercase())
            .collect();

        if words.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }
        Ok(Self::from_words(words))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test, case-insensitive. Fails closed on an empty query or
    /// an empty word list.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word = word.to_ascii_uppercase();
        self.words
            .binary_search_by(|entry| length_lex(entry, &word))
            .is_ok()
    }
}
