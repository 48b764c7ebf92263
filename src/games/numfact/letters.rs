//! Letters of the guessing alphabet and compact sets of them.

use serde::{Deserialize, Serialize};

/// Number of letters a player can guess.
pub const ALPHABET_LEN: usize = 26;

/// A single guessable letter, always lowercase `a`-`z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from an ASCII alphabetic character (either case).
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            None
        }
    }

    /// Iterates over the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }

    /// Returns the lowercase character for this letter.
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    fn bit(self) -> u32 {
        1 << self.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters stored as a 26-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

    /// Creates an empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// Creates the set holding every letter.
    pub fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    /// Collects the distinct ASCII letters appearing in `text`, ignoring case.
    pub fn from_text(text: &str) -> Self {
        text.chars().filter_map(Letter::new).collect()
    }

    /// Returns true if the letter is in the set.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// Adds a letter, returning true if it was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let fresh = !self.contains(letter);
        self.0 |= letter.bit();
        fresh
    }

    /// Number of letters in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no letter is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if all 26 letters are in the set.
    pub fn is_full(&self) -> bool {
        self.0 == Self::FULL_MASK
    }

    /// Letters in `self` that are not in `other`.
    pub fn difference(&self, other: LetterSet) -> LetterSet {
        Self(self.0 & !other.0)
    }

    /// Iterates over the members in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(move |l| self.contains(*l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
