//! High-score persistence collaborator
//!
//! The simulation only needs a synchronous check/record/list contract. Where
//! the scores are kept (a file, browser storage...) is up to the host, which
//! constructs a store once and hands it to the game.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Number of scores kept
pub const MAX_SCORES: usize = 10;

/// One recorded score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Points scored
    pub value: u32,

    /// Seconds since the Unix epoch when the score was recorded
    pub timestamp: u64,
}

/// Contract between the score system and high-score storage
pub trait HighScoreStore: Send + Sync {
    /// Whether `value` would enter the table
    fn is_high_score(&self, value: u32) -> bool;

    /// Record a score, keeping only the best [`MAX_SCORES`]
    fn add_score(&self, value: u32);

    /// Recorded scores, best first
    fn top_scores(&self) -> Vec<ScoreEntry>;
}

/// In-memory high-score table
#[derive(Debug, Default)]
pub struct HighScoreTable {
    scores: Mutex<Vec<ScoreEntry>>,
}

impl HighScoreTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table restored from previously persisted entries
    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        let table = Self {
            scores: Mutex::new(entries),
        };
        table.with_scores(normalize);
        table
    }

    /// Record a score with an explicit timestamp
    pub fn add_score_at(&self, value: u32, timestamp: u64) {
        self.with_scores(|scores| {
            scores.push(ScoreEntry { value, timestamp });
            normalize(scores);
        });
    }

    fn with_scores<R>(&self, f: impl FnOnce(&mut Vec<ScoreEntry>) -> R) -> R {
        let mut scores = self.scores.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut scores)
    }
}

impl HighScoreStore for HighScoreTable {
    fn is_high_score(&self, value: u32) -> bool {
        self.with_scores(|scores| {
            scores.len() < MAX_SCORES || scores.last().is_some_and(|lowest| value > lowest.value)
        })
    }

    fn add_score(&self, value: u32) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        self.add_score_at(value, timestamp);
    }

    fn top_scores(&self) -> Vec<ScoreEntry> {
        self.with_scores(|scores| scores.clone())
    }
}

/// Sort best first (stable, so ties keep insertion order) and cap
fn normalize(scores: &mut Vec<ScoreEntry>) {
    scores.sort_by(|a, b| b.value.cmp(&a.value));
    scores.truncate(MAX_SCORES);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_accepts_anything() {
        let table = HighScoreTable::new();
        assert!(table.is_high_score(0));
    }

    #[test]
    fn test_sorted_and_capped() {
        let table = HighScoreTable::new();
        for value in [30, 10, 90, 50, 70, 20, 80, 40, 60, 100, 5, 110] {
            table.add_score(value);
        }

        let scores = table.top_scores();
        assert_eq!(scores.len(), MAX_SCORES);
        assert_eq!(scores[0].value, 110);
        assert!(scores.windows(2).all(|w| w[0].value >= w[1].value));
        assert!(scores.iter().all(|entry| entry.value != 5));
    }

    #[test]
    fn test_full_table_requires_beating_lowest() {
        let table = HighScoreTable::new();
        for value in 1..=10 {
            table.add_score_at(value * 10, 0);
        }
        assert!(!table.is_high_score(10));
        assert!(table.is_high_score(11));
    }

    #[test]
    fn test_with_entries_normalizes() {
        let entries = (0..15).map(|value| ScoreEntry { value, timestamp: 0 }).collect();
        let table = HighScoreTable::with_entries(entries);
        let scores = table.top_scores();
        assert_eq!(scores.len(), MAX_SCORES);
        assert_eq!(scores[0].value, 14);
    }
}
