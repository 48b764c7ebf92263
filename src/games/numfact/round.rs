//! Round engine: the state machine for one play-through.
//!
//! A round starts with a fact and 26 points, loses points for wrong letter
//! guesses, and ends when the player submits guesses for the fact and its
//! number. Operations called in the wrong phase are ignored.

use super::fact::Fact;
use super::history::{ScoreHistory, ScoreRecord};
use super::invariants::assert_invariants;
use super::letters::{Letter, LetterSet};
use super::scoring::{self, STARTING_SCORE, ScoreBand};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Phase of the game as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Phase {
    /// No round has been started yet.
    Welcome,
    /// A round is accepting guesses.
    Playing,
    /// The round has been submitted and scored.
    Scored,
}

/// How a letter button should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LetterStatus {
    /// Not guessed yet.
    Unguessed,
    /// Guessed and present in the fact.
    Correct,
    /// Guessed and absent from the fact.
    Incorrect,
}

/// Mutable state of the current round.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub(super) fact: Fact,
    pub(super) score: f64,
    pub(super) guessed_letters: LetterSet,
    pub(super) user_fact: String,
    pub(super) user_number: Option<String>,
    pub(super) phase: Phase,
}

impl RoundState {
    /// Fresh round state for a fact.
    fn new(fact: Fact) -> Self {
        Self {
            fact,
            score: STARTING_SCORE,
            guessed_letters: LetterSet::new(),
            user_fact: String::new(),
            user_number: None,
            phase: Phase::Playing,
        }
    }

    /// The fact being guessed.
    pub fn fact(&self) -> &Fact {
        &self.fact
    }

    /// Running score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Letters guessed so far.
    pub fn guessed_letters(&self) -> LetterSet {
        self.guessed_letters
    }

    /// Current fact guess.
    pub fn user_fact(&self) -> &str {
        &self.user_fact
    }

    /// Current number guess, if one has been entered.
    pub fn user_number(&self) -> Option<&str> {
        self.user_number.as_deref()
    }

    /// Phase of this round.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The fact text with unguessed letters masked.
    pub fn masked_fact(&self) -> String {
        scoring::mask(self.fact.text(), self.guessed_letters)
    }

    /// Display status of a letter.
    pub fn letter_status(&self, letter: Letter) -> LetterStatus {
        if !self.guessed_letters.contains(letter) {
            LetterStatus::Unguessed
        } else if self.fact.contains(letter) {
            LetterStatus::Correct
        } else {
            LetterStatus::Incorrect
        }
    }

    fn guess_letter(&mut self, letter: Letter) {
        if !self.guessed_letters.insert(letter) {
            debug!(%letter, "Letter already guessed");
            return;
        }

        let fact_letters = self.fact.letters();
        if fact_letters.contains(letter) {
            debug!(%letter, "Correct letter");
            return;
        }

        let pool = scoring::wrong_pool_size(fact_letters);
        match scoring::penalty(pool) {
            Some(penalty) => {
                let before = self.score;
                self.score = scoring::deduct(self.score, penalty);
                debug!(%letter, pool, penalty, before, after = self.score, "Wrong letter");
            }
            None => debug!(%letter, "Fact uses every letter, no penalty"),
        }
    }

    fn reveal_all(&mut self) {
        self.guessed_letters = LetterSet::full();
        self.score = 0.0;
        self.user_fact = self.fact.text().to_string();
    }

    fn submit(&mut self) -> ScoreRecord {
        let verdict = scoring::judge(
            &self.fact,
            &self.user_fact,
            self.user_number.as_deref(),
            self.score,
        );
        self.score = verdict.score;
        self.phase = Phase::Scored;

        info!(
            number_correct = verdict.number_correct,
            fact_correct = verdict.fact_correct,
            score = self.score,
            "Round scored"
        );

        ScoreRecord::new(
            self.score,
            self.fact.text().to_string(),
            self.fact.number(),
            scoring::clean_fact_guess(&self.user_fact),
            verdict.guessed_number,
            Utc::now(),
        )
    }
}

/// Owns the current round and the session's score history.
#[derive(Debug, Default)]
pub struct RoundEngine {
    round: Option<RoundState>,
    history: ScoreHistory,
}

impl RoundEngine {
    /// Creates an engine in the welcome phase with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new round on `fact`, replacing any previous round.
    #[instrument(skip(self, fact), fields(number = fact.number()))]
    pub fn start_round(&mut self, fact: Fact) -> &RoundState {
        info!(text = %fact.text(), "Starting round");
        self.round.insert(RoundState::new(fact))
    }

    /// Current phase; [`Phase::Welcome`] before the first round.
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Welcome, RoundState::phase)
    }

    /// The current round, if one has been started.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Running score of the current round.
    pub fn score(&self) -> Option<f64> {
        self.round.as_ref().map(RoundState::score)
    }

    /// Masked fact text; empty before the first round.
    pub fn masked_fact(&self) -> String {
        self.round
            .as_ref()
            .map(RoundState::masked_fact)
            .unwrap_or_default()
    }

    /// Display status of a letter; unguessed before the first round.
    pub fn letter_status(&self, letter: Letter) -> LetterStatus {
        self.round
            .as_ref()
            .map_or(LetterStatus::Unguessed, |r| r.letter_status(letter))
    }

    /// Guesses a letter. Ignored unless playing.
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, letter: Letter) {
        if let Some(round) = self.playing_mut("guess_letter") {
            round.guess_letter(letter);
            assert_invariants(round);
        }
    }

    /// Reveals every letter, zeroes the score and fills in the fact guess.
    /// Ignored unless playing.
    #[instrument(skip(self))]
    pub fn reveal_all(&mut self) {
        if let Some(round) = self.playing_mut("reveal_all") {
            round.reveal_all();
            info!("All letters revealed");
            assert_invariants(round);
        }
    }

    /// Replaces the fact guess. Ignored unless playing.
    #[instrument(skip(self, text))]
    pub fn set_user_fact(&mut self, text: impl Into<String>) {
        if let Some(round) = self.playing_mut("set_user_fact") {
            round.user_fact = text.into();
        }
    }

    /// Replaces the number guess. Ignored unless playing.
    #[instrument(skip(self, text))]
    pub fn set_user_number(&mut self, text: impl Into<String>) {
        if let Some(round) = self.playing_mut("set_user_number") {
            round.user_number = Some(text.into());
        }
    }

    /// True when playing and both guess fields hold something.
    pub fn can_submit(&self) -> bool {
        self.round.as_ref().is_some_and(|r| {
            r.phase == Phase::Playing
                && !r.user_fact.is_empty()
                && r.user_number.as_deref().is_some_and(|n| !n.is_empty())
        })
    }

    /// True when every letter has been guessed or revealed.
    pub fn is_fully_revealed(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|r| r.guessed_letters.is_full())
    }

    /// Short score text for the status line.
    pub fn score_display(&self) -> String {
        self.score().map(scoring::score_display).unwrap_or_default()
    }

    /// Colour bucket of the running score.
    pub fn score_band(&self) -> Option<ScoreBand> {
        self.score().map(ScoreBand::of)
    }

    /// Scores the round, records it in the history and returns the record.
    ///
    /// Returns `None` (and changes nothing) unless playing.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Option<ScoreRecord> {
        let round = self.playing_mut("submit")?;
        let record = round.submit();
        assert_invariants(round);
        self.history.append(record);
        self.history.records().last().cloned()
    }

    /// Finished rounds of this session.
    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Mutable history, for changing the scoreboard sort.
    pub fn history_mut(&mut self) -> &mut ScoreHistory {
        &mut self.history
    }

    fn playing_mut(&mut self, operation: &'static str) -> Option<&mut RoundState> {
        let phase = self.phase();
        match self.round.as_mut() {
            Some(round) if round.phase == Phase::Playing => Some(round),
            _ => {
                debug!(operation, %phase, "Ignoring operation outside of play");
                None
            }
        }
    }
}
