//! Hangman-style number fact game.

mod fact;
mod history;
mod invariants;
mod letters;
mod round;
mod scoring;

pub use fact::{FALLBACK_NUMBER, FALLBACK_TEXT, Fact, FactError, TriviaEntry, normalize_trivia};
pub use history::{ScoreHistory, ScoreRecord, SortDirection, SortKey, SortState};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, RoundInvariants, ScoreInRange,
    ScoreWithinPenaltyBudget,
};
pub use letters::{ALPHABET_LEN, Letter, LetterSet};
pub use round::{LetterStatus, Phase, RoundEngine, RoundState};
pub use scoring::{
    BOTH_CORRECT_BONUS, MASK_CHAR, MAX_SCORE, ONE_CORRECT_DIVISOR, STARTING_SCORE, ScoreBand,
    Verdict, clean_fact_guess, deduct, fact_matches, judge, mask, parse_number_guess, penalty,
    score_display, wrong_pool_size,
};
