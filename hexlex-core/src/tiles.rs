//! Tile bag and player racks

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The wildcard tile, playable as any letter, worth nothing
pub const BLANK: char = '?';

/// Tiles a player holds at once
pub const RACK_SIZE: usize = 6;

/// Bag slots: blank first, then A through Z
pub const ALPHABET: usize = 27;

/// Starting tile counts per slot (75 tiles in total)
const STARTING_COUNTS: [u8; ALPHABET] = [
    2, // ?
    7, 2, 2, 3, 9, 1, 2, 2, 6, 1, 1, 3, 2, // A-M
    4, 5, 2, 1, 4, 4, 4, 3, 1, 1, 1, 1, 1, // N-Z
];

/// Point value per letter A-Z
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
];

/// Point value of a letter; the blank and anything non-alphabetic score zero
pub fn letter_value(letter: char) -> u32 {
    match letter {
        'A'..='Z' => LETTER_VALUES[letter as usize - 'A' as usize],
        _ => 0,
    }
}

fn slot_index(letter: char) -> Option<usize> {
    match letter {
        BLANK => Some(0),
        'A'..='Z' => Some(letter as usize - '@' as usize),
        _ => None,
    }
}

fn slot_letter(slot: usize) -> char {
    if slot == 0 {
        BLANK
    } else {
        (b'@' + slot as u8) as char
    }
}

/// The pool of undrawn tiles, tracked as a remaining count per letter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    counts: [u8; ALPHABET],
    total: u32,
}

impl TileBag {
    /// Full standard distribution
    pub fn new() -> Self {
        Self::from_counts(STARTING_COUNTS)
    }

    /// Custom distribution, e.g. for reduced test games
    pub fn from_counts(counts: [u8; ALPHABET]) -> Self {
        let total = counts.iter().map(|&c| u32::from(c)).sum();
        Self { counts, total }
    }

    pub fn remaining(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Undrawn copies of one letter (`?` for the blank)
    pub fn count_of(&self, letter: char) -> u8 {
        slot_index(letter).map_or(0, |slot| self.counts[slot])
    }

    /// Draw one tile, weighted by remaining frequency. Returns None without
    /// mutating anything once the bag is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<char> {
        if self.total == 0 {
            return None;
        }

        let target = rng.gen_range(0..self.total);
        let mut seen = 0u32;
        for slot in 0..ALPHABET {
            seen += u32::from(self.counts[slot]);
            if seen > target {
                self.counts[slot] -= 1;
                self.total -= 1;
                return Some(slot_letter(slot));
            }
        }
        // counts always sum to total
        unreachable!("tile bag counts diverged from total");
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

/// A player's hand: fixed-capacity slots, each empty or holding a letter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    slots: [Option<char>; RACK_SIZE],
}

impl Rack {
    pub fn new() -> Self {
        Self { slots: [None; RACK_SIZE] }
    }

    pub fn slots(&self) -> &[Option<char>; RACK_SIZE] {
        &self.slots
    }

    /// Letters currently held, in slot order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies of one letter on the rack
    pub fn count_of(&self, letter: char) -> usize {
        self.letters().filter(|&held| held == letter).count()
    }

    /// Remove one copy of a letter; false if none is held
    pub fn take(&mut self, letter: char) -> bool {
        for slot in &mut self.slots {
            if *slot == Some(letter) {
                *slot = None;
                return true;
            }
        }
        false
    }

    /// Put a letter into the first free slot; false if the rack is full
    pub fn put(&mut self, letter: char) -> bool {
        for slot in &mut self.slots {
            if slot.is_none() {
                *slot = Some(letter);
                return true;
            }
        }
        false
    }

    /// Draw from the bag until every slot is filled. Returns false if the bag
    /// ran dry first, leaving the rack partially filled. The rack is sorted
    /// afterwards either way; the order carries no game meaning.
    pub fn refill<R: Rng>(&mut self, bag: &mut TileBag, rng: &mut R) -> bool {
        let mut filled = true;
        for slot in &mut self.slots {
            if slot.is_none() {
                match bag.draw(rng) {
                    Some(letter) => *slot = Some(letter),
                    None => {
                        filled = false;
                        break;
                    }
                }
            }
        }
        self.sort();
        filled
    }

    /// Canonical order: letters ascending (blank sorts first), gaps at the end
    fn sort(&mut self) {
        let mut letters: Vec<char> = self.letters().collect();
        letters.sort_unstable();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = letters.get(i).copied();
        }
    }
}

impl Default for Rack {
    fn default() -> Self {
        Self::new()
    }
}
