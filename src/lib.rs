//! Fact Guess library - hangman-style number fact game
//!
//! The player reveals a hidden sentence about a number letter by letter,
//! then guesses both the sentence and the number.
//!
//! # Architecture
//!
//! - **Games**: round engine, scoring rules and score history
//! - **Provider**: fact sources (numbers API, local cache) with a fallback chain
//! - **Config**: TOML configuration
//! - **TUI**: terminal front end
//!
//! # Example
//!
//! ```
//! use fact_guess::{Fact, Letter, Phase, RoundEngine};
//!
//! let mut engine = RoundEngine::new();
//! engine.start_round(Fact::new("is the number of days in a week", 7).unwrap());
//! engine.guess_letter(Letter::new('w').unwrap());
//! assert_eq!(engine.masked_fact(), "__ ___ ______ __ ____ __ _ w___");
//!
//! engine.set_user_fact("is the number of days in a week");
//! engine.set_user_number("7");
//! let record = engine.submit().unwrap();
//! assert_eq!(record.score(), 30.0);
//! assert_eq!(engine.phase(), Phase::Scored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod provider;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Fact sources
pub use provider::{FactProvider, FactSource, LocalCache, NumbersApi};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Command, Focus, command_for, run_tui};

// Crate-level exports - Game types
pub use games::numfact::{
    ALPHABET_LEN, BOTH_CORRECT_BONUS, FALLBACK_NUMBER, FALLBACK_TEXT, Fact, FactError, Invariant,
    InvariantSet, InvariantViolation, Letter, LetterSet, LetterStatus, MASK_CHAR, MAX_SCORE,
    ONE_CORRECT_DIVISOR, Phase, RoundEngine, RoundInvariants, RoundState, STARTING_SCORE,
    ScoreBand, ScoreHistory, ScoreInRange, ScoreRecord, ScoreWithinPenaltyBudget, SortDirection,
    SortKey, SortState, TriviaEntry, Verdict, clean_fact_guess, deduct, fact_matches, judge, mask,
    normalize_trivia, parse_number_guess, penalty, score_display, wrong_pool_size,
};
