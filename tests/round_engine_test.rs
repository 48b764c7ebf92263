//! Tests for the round engine state machine and its scoring.

use fact_guess::{
    Fact, InvariantSet, Letter, LetterStatus, Phase, RoundEngine, RoundInvariants, STARTING_SCORE,
};

const EPSILON: f64 = 1e-9;

fn week() -> Fact {
    Fact::new("is the number of days in a week", 7).expect("valid fact")
}

fn letter(c: char) -> Letter {
    Letter::new(c).expect("ascii letter")
}

fn started(fact: Fact) -> RoundEngine {
    let mut engine = RoundEngine::new();
    engine.start_round(fact);
    engine
}

fn score(engine: &RoundEngine) -> f64 {
    engine.score().expect("round started")
}

#[test]
fn test_round_lifecycle() {
    let mut engine = RoundEngine::new();
    assert_eq!(engine.phase(), Phase::Welcome);

    engine.start_round(week());
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(score(&engine), STARTING_SCORE);

    engine.set_user_fact("is the number of days in a week");
    engine.set_user_number("7");
    let record = engine.submit().expect("submitted while playing");
    assert_eq!(engine.phase(), Phase::Scored);
    assert_eq!(record.score(), 30.0);
    assert_eq!(engine.history().len(), 1);

    engine.start_round(Fact::fallback());
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_wrong_letters_use_fixed_pool() {
    // "is the number of days in a week" uses 17 distinct letters.
    let wrong = ['c', 'g', 'j', 'l', 'p', 'q', 'v', 'x', 'z'];
    let penalty = 26.0 / wrong.len() as f64;
    let mut engine = started(week());

    let mut expected = STARTING_SCORE;
    for (i, c) in wrong.iter().enumerate() {
        engine.guess_letter(letter(*c));
        expected = if expected > 0.01 && expected < 1.0 {
            0.0
        } else {
            (expected - penalty).max(0.0)
        };
        assert!(
            (score(&engine) - expected).abs() < EPSILON,
            "after {} wrong guesses: {} != {}",
            i + 1,
            score(&engine),
            expected
        );
    }

    assert!(score(&engine) < EPSILON);
    assert!(score(&engine) >= 0.0);
}

#[test]
fn test_correct_letters_cost_nothing() {
    let mut engine = started(week());
    for c in "isthenumber".chars() {
        engine.guess_letter(letter(c));
    }
    assert_eq!(score(&engine), STARTING_SCORE);
    assert_eq!(engine.masked_fact(), "is the number __ ___s in _ _ee_");
}

#[test]
fn test_score_never_negative() {
    let mut engine = started(week());
    for l in Letter::all() {
        engine.guess_letter(l);
        assert!(score(&engine) >= 0.0);
    }
    assert!(score(&engine) < EPSILON);
    assert!(engine.is_fully_revealed());
}

#[test]
fn test_small_score_drops_to_zero() {
    // 22 distinct letters leaves a pool of 4, so each miss costs 6.5 points.
    let fact = Fact::new("quick brown fox jumps over the dog", 1).expect("valid fact");
    let pool: Vec<Letter> = Letter::all().filter(|l| !fact.contains(*l)).collect();
    assert_eq!(pool.len(), 4);

    let mut engine = started(fact);
    for l in &pool[..3] {
        engine.guess_letter(*l);
    }
    assert!((score(&engine) - 6.5).abs() < EPSILON);
    engine.guess_letter(pool[3]);
    assert!(score(&engine).abs() < EPSILON);
}

#[test]
fn test_pangram_has_no_penalty() {
    let mut engine = started(
        Fact::new("the quick brown fox jumps over the lazy dog", 1).expect("valid fact"),
    );
    for l in Letter::all() {
        engine.guess_letter(l);
    }
    assert_eq!(score(&engine), STARTING_SCORE);
}

#[test]
fn test_reveal_all_zeroes_and_fills_fact() {
    let mut engine = started(week());
    engine.guess_letter(letter('e'));
    engine.set_user_number("9");
    engine.reveal_all();

    let round = engine.round().expect("round");
    assert_eq!(round.score(), 0.0);
    assert_eq!(round.guessed_letters().len(), 26);
    assert_eq!(round.user_fact(), "is the number of days in a week");
    assert_eq!(round.user_number(), Some("9"));
    assert_eq!(engine.masked_fact(), "is the number of days in a week");
    assert_eq!(engine.letter_status(letter('z')), LetterStatus::Incorrect);
}

#[test]
fn test_reveal_then_correct_submit_scores_four() {
    let mut engine = started(week());
    engine.reveal_all();
    engine.set_user_number("7");
    let record = engine.submit().expect("submitted");
    assert_eq!(record.score(), 4.0);
}

#[test]
fn test_submit_one_correct_halves() {
    let mut engine = started(week());
    engine.guess_letter(letter('z'));
    let before = score(&engine);
    engine.set_user_fact("is the number of weeks in a year");
    engine.set_user_number("7");
    let record = engine.submit().expect("submitted");
    assert!((record.score() - before / 2.0).abs() < EPSILON);
}

#[test]
fn test_submit_neither_correct_zeroes() {
    let mut engine = started(week());
    engine.set_user_fact("wrong");
    engine.set_user_number("six");
    let record = engine.submit().expect("submitted");
    assert_eq!(record.score(), 0.0);
    assert_eq!(record.guessed_number(), None);
}

#[test]
fn test_submit_record_contents() {
    let mut engine = started(week());
    engine.set_user_fact("  Is the number of days in a week.  ");
    engine.set_user_number("7");
    let record = engine.submit().expect("submitted");

    assert_eq!(record.fact(), "is the number of days in a week");
    assert_eq!(record.number(), 7);
    assert_eq!(record.guessed_fact(), "Is the number of days in a week");
    assert_eq!(record.guessed_number(), Some(7));
    // Trailing period makes the fact guess wrong, number alone halves.
    assert_eq!(record.score(), 13.0);
    assert!(record.is_correct());
}

#[test]
fn test_out_of_phase_operations_are_ignored() {
    let mut engine = RoundEngine::new();
    engine.guess_letter(letter('a'));
    engine.reveal_all();
    engine.set_user_fact("x");
    assert!(engine.submit().is_none());
    assert_eq!(engine.phase(), Phase::Welcome);

    engine.start_round(week());
    engine.set_user_fact("is the number of days in a week");
    engine.set_user_number("7");
    let record = engine.submit().expect("submitted");

    engine.guess_letter(letter('z'));
    engine.reveal_all();
    assert!(engine.submit().is_none());
    assert_eq!(engine.score(), Some(record.score()));
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.phase(), Phase::Scored);
}

#[test]
fn test_invariants_hold_through_a_round() {
    let mut engine = started(week());
    for c in "zeqxa".chars() {
        engine.guess_letter(letter(c));
        assert!(RoundInvariants::check_all(engine.round().expect("round")).is_ok());
    }
    engine.set_user_number("7");
    engine.reveal_all();
    engine.submit();
    assert!(RoundInvariants::check_all(engine.round().expect("round")).is_ok());
}
