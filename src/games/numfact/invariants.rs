//! Invariants of a round in progress.
//!
//! Checked after every mutation in debug builds and testable on their own.

use super::round::{Phase, RoundState};
use super::scoring::{MAX_SCORE, STARTING_SCORE, penalty, wrong_pool_size};

const TOLERANCE: f64 = 1e-9;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the score is finite, never negative, and never above what the
/// current phase allows.
pub struct ScoreInRange;

impl Invariant<RoundState> for ScoreInRange {
    fn holds(round: &RoundState) -> bool {
        let score = round.score();
        let ceiling = match round.phase() {
            Phase::Scored => MAX_SCORE,
            Phase::Welcome | Phase::Playing => STARTING_SCORE,
        };
        score.is_finite() && (0.0..=ceiling).contains(&score)
    }

    fn description() -> &'static str {
        "Score stays within 0 and the phase ceiling"
    }
}

/// Invariant: while playing, the score never exceeds the starting score less
/// the fixed penalty for each wrong letter guessed so far.
pub struct ScoreWithinPenaltyBudget;

impl Invariant<RoundState> for ScoreWithinPenaltyBudget {
    fn holds(round: &RoundState) -> bool {
        if round.phase() != Phase::Playing {
            return true;
        }
        let fact_letters = round.fact().letters();
        let Some(per_miss) = penalty(wrong_pool_size(fact_letters)) else {
            return round.score() <= STARTING_SCORE;
        };
        let misses = round.guessed_letters().difference(fact_letters).len() as f64;
        let budget = (STARTING_SCORE - misses * per_miss).max(0.0);
        round.score() <= budget + TOLERANCE
    }

    fn description() -> &'static str {
        "Score never exceeds the starting score less wrong-letter penalties"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (ScoreInRange, ScoreWithinPenaltyBudget);

/// Asserts that all round invariants hold (panics on violation in debug builds).
pub fn assert_invariants(round: &RoundState) {
    if let Err(violations) = RoundInvariants::check_all(round) {
        debug_assert!(false, "Round invariants violated: {:?}", violations);
        tracing::warn!(?violations, "Round invariants violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::numfact::{Fact, Letter, RoundEngine};

    fn engine() -> RoundEngine {
        let mut engine = RoundEngine::new();
        engine.start_round(Fact::new("is the number of days in a week", 7).expect("valid fact"));
        engine
    }

    #[test]
    fn test_invariants_hold_at_start() {
        let engine = engine();
        let round = engine.round().expect("round started");
        assert!(RoundInvariants::check_all(round).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_misses_and_reveal() {
        let mut engine = engine();
        for c in ['c', 'g', 'j', 'e'] {
            engine.guess_letter(Letter::new(c).expect("letter"));
        }
        assert!(RoundInvariants::check_all(engine.round().expect("round")).is_ok());
        engine.reveal_all();
        assert!(RoundInvariants::check_all(engine.round().expect("round")).is_ok());
    }

    #[test]
    fn test_budget_detects_unpenalized_miss() {
        let mut engine = engine();
        engine.guess_letter(Letter::new('z').expect("letter"));
        let mut round = engine.round().expect("round").clone();
        round.score = STARTING_SCORE;
        assert!(!ScoreWithinPenaltyBudget::holds(&round));
        assert!(ScoreInRange::holds(&round));
    }

    #[test]
    fn test_range_detects_negative_score() {
        let mut round = engine().round().expect("round").clone();
        round.score = -1.0;
        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, ScoreInRange::description());
    }
}
