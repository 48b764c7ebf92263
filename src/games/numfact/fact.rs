//! The fact a round is played on.

use super::letters::{Letter, LetterSet};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Text of the fact used when every source has failed.
pub const FALLBACK_TEXT: &str = "is the number of degrees in a circle";

/// Number of the fact used when every source has failed.
pub const FALLBACK_NUMBER: i64 = 360;

/// A number paired with a sentence describing it.
///
/// The text never contains the number itself and is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    text: String,
    number: i64,
}

impl Fact {
    /// Creates a fact from already-normalized text.
    ///
    /// # Errors
    ///
    /// Returns [`FactError`] if the text is blank.
    #[instrument(skip(text))]
    pub fn new(text: impl Into<String>, number: i64) -> Result<Self, FactError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(FactError::new(format!("Fact for {} has no text", number)));
        }
        Ok(Self { text, number })
    }

    /// Creates a fact from raw trivia text such as `"7 is the number of days in a week."`.
    ///
    /// See [`normalize_trivia`] for the rewriting applied.
    pub fn from_trivia(raw: &str, number: i64) -> Result<Self, FactError> {
        Self::new(normalize_trivia(raw, number), number)
    }

    /// The last-resort fact used when no source produces one.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_string(),
            number: FALLBACK_NUMBER,
        }
    }

    /// The sentence the player reveals.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The number the player must name.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Distinct letters of the text.
    pub fn letters(&self) -> LetterSet {
        LetterSet::from_text(&self.text)
    }

    /// Returns true if the letter occurs in the text, ignoring case.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters().contains(letter)
    }
}

/// Strips the numeral and trailing period from raw trivia text.
///
/// Removes the first `"{number} "` (or bare `"{number}"` when no spaced form
/// occurs), then one trailing period, then surrounding whitespace.
pub fn normalize_trivia(raw: &str, number: i64) -> String {
    let numeral = number.to_string();
    let spaced = format!("{} ", numeral);
    let without_number = if raw.contains(&spaced) {
        raw.replacen(&spaced, "", 1)
    } else {
        raw.replacen(&numeral, "", 1)
    };
    let trimmed = without_number.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).trim().to_string()
}

/// Raw `{text, number}` entry as served by the numbers API and the local cache.
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaEntry {
    /// Unnormalized trivia sentence.
    pub text: String,
    /// The number the sentence describes.
    pub number: i64,
}

impl TriviaEntry {
    /// Normalizes the entry into a [`Fact`].
    pub fn into_fact(self) -> Result<Fact, FactError> {
        Fact::from_trivia(&self.text, self.number)
    }
}

/// Error producing a fact.
#[derive(Debug, Clone, Display, Error)]
#[display("Fact error: {} at {}:{}", message, file, line)]
pub struct FactError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FactError {
    /// Creates a new fact error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for FactError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request error: {}", err))
    }
}

impl From<serde_json::Error> for FactError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed payload: {}", err))
    }
}

impl From<std::io::Error> for FactError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}
