//! Tests for score history ordering and sorting.

use chrono::{TimeZone, Utc};
use fact_guess::{ScoreHistory, ScoreRecord, SortDirection, SortKey};

fn record(score: f64, number: i64, fact: &str, second: u32) -> ScoreRecord {
    ScoreRecord::new(
        score,
        fact.to_string(),
        number,
        String::new(),
        None,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, second).unwrap(),
    )
}

/// Scores 10, 5, 5, 20 inserted in that order; the two fives are told
/// apart by their numbers.
fn ten_five_five_twenty() -> ScoreHistory {
    let mut history = ScoreHistory::new();
    history.append(record(10.0, 1, "ten", 0));
    history.append(record(5.0, 2, "first five", 1));
    history.append(record(5.0, 3, "second five", 2));
    history.append(record(20.0, 4, "twenty", 3));
    history
}

fn numbers(view: &[&ScoreRecord]) -> Vec<i64> {
    view.iter().map(|r| r.number()).collect()
}

#[test]
fn test_ascending_ties_keep_insertion_order() {
    let history = ten_five_five_twenty();
    let view = history.sorted_view(SortKey::Score, SortDirection::Asc);
    let scores: Vec<f64> = view.iter().map(|r| r.score()).collect();
    assert_eq!(scores, vec![5.0, 5.0, 10.0, 20.0]);
    assert_eq!(numbers(&view), vec![2, 3, 1, 4]);
}

#[test]
fn test_descending_ties_are_reversed() {
    let history = ten_five_five_twenty();
    let view = history.sorted_view(SortKey::Score, SortDirection::Desc);
    let scores: Vec<f64> = view.iter().map(|r| r.score()).collect();
    assert_eq!(scores, vec![20.0, 10.0, 5.0, 5.0]);
    assert_eq!(numbers(&view), vec![4, 1, 3, 2]);
}

#[test]
fn test_sorting_never_reorders_storage() {
    let history = ten_five_five_twenty();
    let _ = history.sorted_view(SortKey::Fact, SortDirection::Asc);
    let _ = history.sorted_view(SortKey::Number, SortDirection::Desc);
    let stored: Vec<i64> = history.records().iter().map(|r| r.number()).collect();
    assert_eq!(stored, vec![1, 2, 3, 4]);
}

#[test]
fn test_view_is_a_permutation() {
    let history = ten_five_five_twenty();
    for key in [SortKey::Score, SortKey::Number, SortKey::Fact] {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut got = numbers(&history.sorted_view(key, direction));
            got.sort_unstable();
            assert_eq!(got, vec![1, 2, 3, 4], "{} {}", key, direction);
        }
    }
}

#[test]
fn test_number_sort_reversed_twice_is_original() {
    let history = ten_five_five_twenty();
    let mut view = numbers(&history.sorted_view(SortKey::Number, SortDirection::Desc));
    view.reverse();
    assert_eq!(view, vec![1, 2, 3, 4]);
}

#[test]
fn test_toggle_drives_view() {
    let mut history = ten_five_five_twenty();
    assert_eq!(numbers(&history.view()), vec![4, 1, 3, 2]);

    history.toggle_sort(SortKey::Score);
    assert_eq!(numbers(&history.view()), vec![2, 3, 1, 4]);

    history.toggle_sort(SortKey::Fact);
    let facts: Vec<&str> = history.view().iter().map(|r| r.fact()).collect();
    assert_eq!(facts, vec!["twenty", "ten", "second five", "first five"]);
}

#[test]
fn test_empty_history() {
    let history = ScoreHistory::new();
    assert!(history.is_empty());
    assert!(history.view().is_empty());
}
