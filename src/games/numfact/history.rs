//! Score history for a play session.
//!
//! Records are kept in the order rounds finished. Sorting produces a new
//! view and never touches that order.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Immutable snapshot of one finished round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    score: f64,
    fact: String,
    number: i64,
    guessed_fact: String,
    guessed_number: Option<i64>,
    timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    /// Creates a record.
    pub fn new(
        score: f64,
        fact: String,
        number: i64,
        guessed_fact: String,
        guessed_number: Option<i64>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            score,
            fact,
            number,
            guessed_fact,
            guessed_number,
            timestamp,
        }
    }

    /// Final score of the round.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Text of the fact that was played.
    pub fn fact(&self) -> &str {
        &self.fact
    }

    /// Number of the fact that was played.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// The player's fact guess, periods removed and trimmed.
    pub fn guessed_fact(&self) -> &str {
        &self.guessed_fact
    }

    /// The player's number guess; `None` if it was not a number.
    pub fn guessed_number(&self) -> Option<i64> {
        self.guessed_number
    }

    /// When the round was submitted.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether both guesses were right, as shown in the scoreboard.
    pub fn is_correct(&self) -> bool {
        self.guessed_number == Some(self.number)
            && self.guessed_fact.to_lowercase() == self.fact.to_lowercase()
    }

    /// Score with two decimals.
    pub fn score_fixed(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Column a history can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum SortKey {
    /// Final score.
    Score,
    /// The fact's number.
    Number,
    /// The fact's text, case-insensitive.
    Fact,
}

impl SortKey {
    fn compare(self, a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
        match self {
            SortKey::Score => a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal),
            SortKey::Number => a.number.cmp(&b.number),
            SortKey::Fact => a.fact.to_lowercase().cmp(&b.fact.to_lowercase()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first (the ascending order reversed).
    Desc,
}

impl SortDirection {
    /// The other direction.
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Which column the scoreboard is sorted by, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    key: SortKey,
    direction: SortDirection,
}

impl SortState {
    /// Creates a sort state.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Active column.
    pub fn key(&self) -> SortKey {
        self.key
    }

    /// Active direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Selects a column: the same column flips direction, a new one starts descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Desc;
        }
    }

    /// Arrow for a column header; blank for inactive columns.
    pub fn indicator(&self, key: SortKey) -> &'static str {
        if self.key != key {
            return " ";
        }
        match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::Score, SortDirection::Desc)
    }
}

/// Append-only log of finished rounds.
#[derive(Debug, Clone, Default)]
pub struct ScoreHistory {
    records: Vec<ScoreRecord>,
    sort: SortState,
}

impl ScoreHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    ///
    /// Timestamps are kept strictly increasing: a record stamped no later
    /// than its predecessor is moved one microsecond past it.
    #[instrument(skip(self, record), fields(score = record.score, len = self.records.len()))]
    pub fn append(&mut self, mut record: ScoreRecord) {
        if let Some(last) = self.records.last()
            && record.timestamp <= last.timestamp
        {
            record.timestamp = last.timestamp + Duration::microseconds(1);
            debug!(timestamp = %record.timestamp, "Bumped record timestamp");
        }
        self.records.push(record);
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no round has finished yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted by `key`.
    ///
    /// The sort is stable ascending; descending is that order reversed, so
    /// equal keys come out in reverse insertion order.
    #[instrument(skip(self))]
    pub fn sorted_view(&self, key: SortKey, direction: SortDirection) -> Vec<&ScoreRecord> {
        let mut view: Vec<&ScoreRecord> = self.records.iter().collect();
        view.sort_by(|a, b| key.compare(a, b));
        if direction == SortDirection::Desc {
            view.reverse();
        }
        view
    }

    /// Current scoreboard sort state.
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Selects a scoreboard column; see [`SortState::toggle`].
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        debug!(key = %self.sort.key, direction = %self.sort.direction, "Sort changed");
    }

    /// Records sorted by the current sort state.
    pub fn view(&self) -> Vec<&ScoreRecord> {
        self.sorted_view(self.sort.key, self.sort.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(score: f64, number: i64, fact: &str) -> ScoreRecord {
        ScoreRecord::new(
            score,
            fact.to_string(),
            number,
            String::new(),
            None,
            Utc::now(),
        )
    }

    #[test]
    fn test_toggle_same_key_flips() {
        let mut sort = SortState::default();
        assert_eq!(sort.direction(), SortDirection::Desc);
        sort.toggle(SortKey::Score);
        assert_eq!(sort.direction(), SortDirection::Asc);
        sort.toggle(SortKey::Score);
        assert_eq!(sort.direction(), SortDirection::Desc);
    }

    #[test]
    fn test_toggle_new_key_resets_to_desc() {
        let mut sort = SortState::new(SortKey::Score, SortDirection::Asc);
        sort.toggle(SortKey::Fact);
        assert_eq!(sort.key(), SortKey::Fact);
        assert_eq!(sort.direction(), SortDirection::Desc);
    }

    #[test]
    fn test_indicator() {
        let sort = SortState::new(SortKey::Number, SortDirection::Asc);
        assert_eq!(sort.indicator(SortKey::Number), "↑");
        assert_eq!(sort.indicator(SortKey::Score), " ");
    }

    #[test]
    fn test_fact_sort_ignores_case() {
        let mut history = ScoreHistory::new();
        history.append(record(1.0, 1, "banana"));
        history.append(record(2.0, 2, "Apple"));
        history.append(record(3.0, 3, "cherry"));
        let facts: Vec<&str> = history
            .sorted_view(SortKey::Fact, SortDirection::Asc)
            .iter()
            .map(|r| r.fact())
            .collect();
        assert_eq!(facts, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_append_keeps_timestamps_increasing() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut history = ScoreHistory::new();
        for _ in 0..3 {
            history.append(ScoreRecord::new(1.0, "x".into(), 1, String::new(), None, instant));
        }
        let stamps: Vec<_> = history.records().iter().map(|r| r.timestamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_is_correct() {
        let right = ScoreRecord::new(30.0, "Is Pi".into(), 3, "is pi".into(), Some(3), Utc::now());
        let wrong = ScoreRecord::new(0.0, "is pi".into(), 3, "is pi".into(), None, Utc::now());
        assert!(right.is_correct());
        assert!(!wrong.is_correct());
        assert_eq!(right.score_fixed(), "30.00");
    }
}
