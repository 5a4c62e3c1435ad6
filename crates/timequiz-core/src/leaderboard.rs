//! High score persistence.
//!
//! Scores live in a flat key-value store under a single key, the way a
//! browser keeps them in local storage. [`KeyValueStore`] is that store;
//! [`Leaderboard`] is the typed view over the one key this crate owns.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Key the high score list is stored under.
pub const HIGHSCORES_KEY: &str = "highscores";

/// Current layout version written by [`Leaderboard::append`].
pub const LAYOUT_VERSION: u32 = 1;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Free-form player name, stored as entered.
    pub name: String,
    /// Clock value when the quiz ended. May be zero or negative.
    pub score: i64,
    /// When the score was submitted. Absent in records written before
    /// timestamps were kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
            recorded_at: None,
        }
    }

    pub fn recorded_now(mut self) -> Self {
        self.recorded_at = Some(Utc::now());
        self
    }
}

/// A synchronous, string-keyed local store.
pub trait KeyValueStore {
    /// Read the value under `key`; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, QuizError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), QuizError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, QuizError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), QuizError> {
        (**self).remove(key)
    }
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, QuizError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), QuizError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedScores {
    version: u32,
    scores: Vec<ScoreRecord>,
}

/// Both layouts ever written under [`HIGHSCORES_KEY`].
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredScores {
    Versioned(PersistedScores),
    Legacy(Vec<ScoreRecord>),
}

/// Ordered list of score records backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct Leaderboard<S> {
    store: S,
}

impl<S: KeyValueStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All records in insertion order.
    ///
    /// A missing key, a `null` value and an unreadable value all read as an
    /// empty list. Only a failing store is an error.
    pub fn list(&self) -> Result<Vec<ScoreRecord>, QuizError> {
        let Some(raw) = self.store.get(HIGHSCORES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<StoredScores>>(&raw) {
            Ok(Some(StoredScores::Versioned(persisted))) => Ok(persisted.scores),
            Ok(Some(StoredScores::Legacy(scores))) => Ok(scores),
            Ok(None) => Ok(Vec::new()),
            Err(e) => {
                tracing::warn!("ignoring unreadable high scores: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Records ordered by score, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Result<Vec<ScoreRecord>, QuizError> {
        let mut scores = self.list()?;
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scores)
    }

    /// Append `record` to the end of the list.
    ///
    /// This rewrites the whole list; concurrent writers would race.
    pub fn append(&mut self, record: ScoreRecord) -> Result<(), QuizError> {
        let mut scores = self.list()?;
        scores.push(record);

        let persisted = PersistedScores {
            version: LAYOUT_VERSION,
            scores,
        };
        let raw = serde_json::to_string(&persisted)
            .map_err(|e| QuizError::StorageUnavailable(e.to_string()))?;
        self.store.set(HIGHSCORES_KEY, &raw)
    }

    /// Remove every record. Other keys in the store are left alone.
    pub fn clear(&mut self) -> Result<(), QuizError> {
        self.store.remove(HIGHSCORES_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A store whose backend refuses every operation.
    struct Unavailable;

    impl KeyValueStore for Unavailable {
        fn get(&self, _: &str) -> Result<Option<String>, QuizError> {
            Err(QuizError::StorageUnavailable("disabled".into()))
        }
        fn set(&mut self, _: &str, _: &str) -> Result<(), QuizError> {
            Err(QuizError::StorageUnavailable("disabled".into()))
        }
        fn remove(&mut self, _: &str) -> Result<(), QuizError> {
            Err(QuizError::StorageUnavailable("disabled".into()))
        }
    }

    #[test]
    fn fresh_store_lists_empty() {
        let board = Leaderboard::new(MemoryStore::new());
        assert!(board.list().unwrap().is_empty());
    }

    #[test]
    fn append_puts_record_last() {
        let mut board = Leaderboard::new(MemoryStore::new());
        board.append(ScoreRecord::new("BOB", 12)).unwrap();
        board.append(ScoreRecord::new("AAA", 55)).unwrap();
        board.append(ScoreRecord::new("BOB", 12)).unwrap();

        let scores = board.list().unwrap();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[1], ScoreRecord::new("AAA", 55));
        assert_eq!(scores.last(), Some(&ScoreRecord::new("BOB", 12)));
    }

    #[test]
    fn clear_only_touches_highscores() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        let mut board = Leaderboard::new(store);
        board.append(ScoreRecord::new("AAA", 55)).unwrap();

        board.clear().unwrap();
        assert!(board.list().unwrap().is_empty());
        assert_eq!(
            board.store().get("theme").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn writes_versioned_layout() {
        let mut board = Leaderboard::new(MemoryStore::new());
        board.append(ScoreRecord::new("AAA", 55)).unwrap();
        let raw = board.store().get(HIGHSCORES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["scores"][0]["name"], "AAA");
        assert_eq!(value["scores"][0]["score"], 55);
        assert!(value["scores"][0].get("recorded_at").is_none());
    }

    #[test]
    fn reads_legacy_bare_array() {
        let mut store = MemoryStore::new();
        store
            .set(HIGHSCORES_KEY, r#"[{"name":"JS","score":42}]"#)
            .unwrap();
        let mut board = Leaderboard::new(store);
        assert_eq!(board.list().unwrap(), vec![ScoreRecord::new("JS", 42)]);

        board.append(ScoreRecord::new("RS", 50)).unwrap();
        let names: Vec<_> = board.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["JS", "RS"]);
    }

    #[test]
    fn malformed_or_null_value_reads_empty() {
        for raw in ["not json", "null", r#"{"version":1}"#] {
            let mut store = MemoryStore::new();
            store.set(HIGHSCORES_KEY, raw).unwrap();
            let board = Leaderboard::new(store);
            assert!(board.list().unwrap().is_empty(), "raw = {raw}");
        }
    }

    #[test]
    fn ranked_orders_by_score_and_keeps_ties_stable() {
        let mut board = Leaderboard::new(MemoryStore::new());
        for (name, score) in [("A", 10), ("B", 70), ("C", 10), ("D", -3)] {
            board.append(ScoreRecord::new(name, score)).unwrap();
        }
        let names: Vec<_> = board
            .ranked()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn failing_store_surfaces_storage_errors() {
        let mut board = Leaderboard::new(Unavailable);
        assert!(board.list().unwrap_err().is_storage());
        assert!(board.append(ScoreRecord::new("X", 1)).unwrap_err().is_storage());
        assert!(board.clear().unwrap_err().is_storage());
    }

    #[test]
    fn timestamps_round_trip() {
        let mut board = Leaderboard::new(MemoryStore::new());
        let record = ScoreRecord::new("T", 5).recorded_now();
        board.append(record.clone()).unwrap();
        assert_eq!(board.list().unwrap(), vec![record]);
    }
}
