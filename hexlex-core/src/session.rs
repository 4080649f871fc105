//! Game session: authoritative board, bag, racks, scores, and history
//!
//! One move is validated and applied at a time. Validation always runs on a
//! deep copy of the board; the copy is swapped in only on acceptance and the
//! displaced board is pushed onto the undo history.

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::EngineError;
use crate::tiles::{Rack, TileBag, BLANK};
use crate::validator::{self, Placement, RejectReason};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of a committed move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedMove {
    pub words: Vec<String>,
    pub score: u32,
}

/// Move-tier outcome: both branches are routine results, not errors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted(AcceptedMove),
    Rejected(RejectReason),
}

/// A running game. Owns every piece of mutable state; the dictionary is
/// shared and read-only for the session's lifetime.
#[derive(Clone, Debug)]
pub struct Session {
    dictionary: Arc<Dictionary>,
    board: Board,
    history: Vec<Board>,
    bag: TileBag,
    racks: Vec<Rack>,
    scores: Vec<u32>,
    rng: ChaCha8Rng,
}

impl Session {
    /// Start a session with the standard bag and an entropy-seeded RNG
    pub fn new(dictionary: Arc<Dictionary>, num_players: usize) -> Result<Self, EngineError> {
        Self::with_parts(dictionary, num_players, TileBag::new(), ChaCha8Rng::from_entropy())
    }

    /// Seeded variant; the same seed reproduces the same draw sequence
    pub fn with_seed(
        dictionary: Arc<Dictionary>,
        num_players: usize,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::with_parts(dictionary, num_players, TileBag::new(), ChaCha8Rng::seed_from_u64(seed))
    }

    /// Custom bag variant, for reduced tile sets
    pub fn with_bag(
        dictionary: Arc<Dictionary>,
        num_players: usize,
        bag: TileBag,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::with_parts(dictionary, num_players, bag, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_parts(
        dictionary: Arc<Dictionary>,
        num_players: usize,
        bag: TileBag,
        rng: ChaCha8Rng,
    ) -> Result<Self, EngineError> {
        if dictionary.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }
        if num_players == 0 {
            return Err(EngineError::NoPlayers);
        }

        let mut session = Self {
            dictionary,
            board: Board::new(),
            history: Vec::new(),
            bag,
            racks: vec![Rack::new(); num_players],
            scores: vec![0; num_players],
            rng,
        };
        for player in 0..num_players {
            session.refill_rack(player)?;
        }
        Ok(session)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn num_players(&self) -> usize {
        self.racks.len()
    }

    pub fn rack(&self, player: usize) -> Result<&Rack, EngineError> {
        self.racks.get(player).ok_or(EngineError::NoSuchPlayer(player))
    }

    pub fn score(&self, player: usize) -> Result<u32, EngineError> {
        self.scores
            .get(player)
            .copied()
            .ok_or(EngineError::NoSuchPlayer(player))
    }

    pub fn tiles_remaining(&self) -> u32 {
        self.bag.remaining()
    }

    /// Committed moves available to undo
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    // ========================================================================
    // TILE FLOW
    // ========================================================================

    /// Draw one tile from the bag; None once the bag is exhausted
    pub fn draw_tile(&mut self) -> Option<char> {
        self.bag.draw(&mut self.rng)
    }

    /// Top up a player's rack. Ok(false) means the bag ran dry mid-refill.
    pub fn refill_rack(&mut self, player: usize) -> Result<bool, EngineError> {
        let rack = self
            .racks
            .get_mut(player)
            .ok_or(EngineError::NoSuchPlayer(player))?;
        Ok(rack.refill(&mut self.bag, &mut self.rng))
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Validate and, if legal, commit a move for one player.
    ///
    /// Rejections come back as `Verdict::Rejected` with the board, racks and
    /// scores untouched. `Err` is reserved for caller mistakes: a bad player
    /// index or playing tiles the rack does not hold.
    pub fn propose_move(
        &mut self,
        player: usize,
        placements: &[Placement],
    ) -> Result<Verdict, EngineError> {
        if player >= self.racks.len() {
            return Err(EngineError::NoSuchPlayer(player));
        }

        // The rack must cover the move; blanks are spent as the '?' tile
        let mut needed: FxHashMap<char, usize> = FxHashMap::default();
        for p in placements {
            let spent = if p.blank { BLANK } else { p.letter };
            *needed.entry(spent).or_default() += 1;
        }
        for (&letter, &count) in &needed {
            if self.racks[player].count_of(letter) < count {
                return Err(EngineError::TileNotOnRack(letter));
            }
        }

        let validated = match validator::validate(&self.board, &self.dictionary, placements) {
            Ok(validated) => validated,
            Err(reason) => return Ok(Verdict::Rejected(reason)),
        };

        // Commit: swap boards, push the old one for undo, settle tiles/score
        let previous = std::mem::replace(&mut self.board, validated.board);
        self.history.push(previous);

        for p in placements {
            let spent = if p.blank { BLANK } else { p.letter };
            self.racks[player].take(spent);
        }
        self.scores[player] += validated.score;
        self.racks[player].refill(&mut self.bag, &mut self.rng);

        Ok(Verdict::Accepted(AcceptedMove {
            words: validated.words,
            score: validated.score,
        }))
    }

    /// Rewind the board to before the last committed move. Racks, scores and
    /// the bag are not rewound; history holds board snapshots only.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(board) => {
                self.board = board;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{ALPHABET, RACK_SIZE};

    fn lexicon() -> Arc<Dictionary> {
        let words = ["AH", "AX", "EH", "EX", "HA", "HE", "OX", "AXE", "HAG", "HEX"];
        Arc::new(Dictionary::from_words(words.iter().map(|w| w.to_string()).collect()))
    }

    #[test]
    fn test_new_session_deals_full_racks() {
        let session = Session::with_seed(lexicon(), 2, 42).unwrap();
        assert_eq!(session.num_players(), 2);
        assert_eq!(session.rack(0).unwrap().len(), RACK_SIZE);
        assert_eq!(session.rack(1).unwrap().len(), RACK_SIZE);
        assert_eq!(session.tiles_remaining(), 75 - 2 * RACK_SIZE as u32);
        assert_eq!(session.score(0).unwrap(), 0);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Session::with_seed(lexicon(), 1, 7).unwrap();
        let b = Session::with_seed(lexicon(), 1, 7).unwrap();
        assert_eq!(a.rack(0).unwrap(), b.rack(0).unwrap());
    }

    #[test]
    fn test_empty_lexicon_is_fatal() {
        let empty = Arc::new(Dictionary::from_words(vec![]));
        assert!(matches!(Session::new(empty, 1), Err(EngineError::EmptyLexicon)));
    }

    #[test]
    fn test_zero_players_is_fatal() {
        assert!(matches!(Session::new(lexicon(), 0), Err(EngineError::NoPlayers)));
    }

    #[test]
    fn test_draw_from_empty_bag() {
        let mut session =
            Session::with_bag(lexicon(), 1, TileBag::from_counts([0; ALPHABET]), 1).unwrap();
        assert_eq!(session.draw_tile(), None);
        assert_eq!(session.tiles_remaining(), 0);
    }

    #[test]
    fn test_bad_player_index() {
        let mut session = Session::with_seed(lexicon(), 1, 1).unwrap();
        assert!(matches!(session.rack(3), Err(EngineError::NoSuchPlayer(3))));
        assert!(matches!(
            session.propose_move(5, &[]),
            Err(EngineError::NoSuchPlayer(5))
        ));
    }
}
