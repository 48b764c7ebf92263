//! Scoring rules for the fact guessing game.
//!
//! Pure functions over scores, letter sets and player input. The round
//! engine composes these; nothing here holds state.

use super::fact::Fact;
use super::letters::{ALPHABET_LEN, Letter, LetterSet};
use tracing::instrument;

/// Score every round starts with.
pub const STARTING_SCORE: f64 = 26.0;

/// Added to the score when both the fact and the number are right.
pub const BOTH_CORRECT_BONUS: f64 = 4.0;

/// The score is divided by this when exactly one guess is right.
pub const ONE_CORRECT_DIVISOR: f64 = 2.0;

/// Highest score a round can end with.
pub const MAX_SCORE: f64 = STARTING_SCORE + BOTH_CORRECT_BONUS;

/// Placeholder shown for letters not yet guessed.
pub const MASK_CHAR: char = '_';

/// Renders `text` with every unguessed ASCII letter replaced by [`MASK_CHAR`].
pub fn mask(text: &str, guessed: LetterSet) -> String {
    text.chars()
        .map(|c| match Letter::new(c) {
            Some(letter) if !guessed.contains(letter) => MASK_CHAR,
            _ => c,
        })
        .collect()
}

/// Count of letters that can never be right for a fact with these letters.
pub fn wrong_pool_size(fact_letters: LetterSet) -> usize {
    ALPHABET_LEN - fact_letters.len()
}

/// Points lost per wrong letter, or `None` when no letter can be wrong.
///
/// Scaled so that guessing every wrong letter costs the whole starting score.
pub fn penalty(wrong_pool_size: usize) -> Option<f64> {
    if wrong_pool_size == 0 {
        None
    } else {
        Some(STARTING_SCORE / wrong_pool_size as f64)
    }
}

/// Applies one wrong-letter penalty to `score`.
///
/// Scores strictly between 0.01 and 1 drop straight to zero; otherwise the
/// penalty is subtracted and the result floored at zero.
pub fn deduct(score: f64, penalty: f64) -> f64 {
    if score > 0.01 && score < 1.0 {
        0.0
    } else {
        (score - penalty).max(0.0)
    }
}

/// Parses a number guess the lenient way a browser number field does.
///
/// Leading whitespace and a sign are accepted, then the longest run of
/// digits; anything after it is ignored (`"7.9"` is 7, `"12abc"` is 12).
/// Returns `None` when no digits lead the input.
pub fn parse_number_guess(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// True when the fact guess matches the fact text, ignoring case and
/// surrounding whitespace.
pub fn fact_matches(fact: &Fact, guess: &str) -> bool {
    guess.trim().to_lowercase() == fact.text().trim().to_lowercase()
}

/// Outcome of judging a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// The number guess parsed to the fact's number.
    pub number_correct: bool,
    /// The fact guess matched the fact text.
    pub fact_correct: bool,
    /// The parsed number guess, if any digits were given.
    pub guessed_number: Option<i64>,
    /// Score after applying the submission rule.
    pub score: f64,
}

/// Judges a submission against the fact and computes the final score.
///
/// Both right adds [`BOTH_CORRECT_BONUS`], one right halves the score,
/// neither right zeroes it.
#[instrument(skip(fact, user_fact), fields(number = fact.number()))]
pub fn judge(fact: &Fact, user_fact: &str, user_number: Option<&str>, score: f64) -> Verdict {
    let guessed_number = user_number.and_then(parse_number_guess);
    let number_correct = guessed_number == Some(fact.number());
    let fact_correct = fact_matches(fact, user_fact);

    let score = match (number_correct, fact_correct) {
        (true, true) => score + BOTH_CORRECT_BONUS,
        (true, false) | (false, true) => score / ONE_CORRECT_DIVISOR,
        (false, false) => 0.0,
    };

    Verdict {
        number_correct,
        fact_correct,
        guessed_number,
        score,
    }
}

/// Cleans a fact guess for the score record: periods removed, then trimmed.
pub fn clean_fact_guess(guess: &str) -> String {
    guess.replace('.', "").trim().to_string()
}

/// Short rendering of a running score, at most four characters.
pub fn score_display(score: f64) -> String {
    score.to_string().chars().take(4).collect()
}

/// Coarse bucket of a running score, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ScoreBand {
    /// Below 5.
    Low,
    /// 5 up to 15.
    Medium,
    /// 15 and above.
    High,
}

impl ScoreBand {
    /// Buckets a score.
    pub fn of(score: f64) -> Self {
        if score < 5.0 {
            ScoreBand::Low
        } else if score < 15.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }
}
