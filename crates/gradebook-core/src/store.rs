//! The bounded student record store.
//!
//! A [`StudentStore`] is an insertion-ordered collection with an explicit
//! capacity fixed at construction. Every record it holds has passed the
//! validation rules in [`crate::model`], and ids are unique. There are no
//! delete or update operations; records live until the store is dropped.

use crate::error::StoreError;
use crate::model::{validate_name, validate_score, StudentRecord, DEFAULT_CAPACITY, MAX_NAME_LEN};
use crate::statistics::{self, ScoreStatistics};

/// A bounded, insertion-ordered collection of student records.
#[derive(Debug, Clone)]
pub struct StudentStore {
    records: Vec<StudentRecord>,
    capacity: usize,
}

impl StudentStore {
    /// Create an empty store with the default capacity of
    /// [`DEFAULT_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store that holds at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The fixed maximum number of records this store holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All records in their current order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Validate and append a new record.
    ///
    /// Checks run in order: capacity, duplicate id, name, score. On any
    /// failure the store is left unchanged. On success the name is silently
    /// truncated to [`MAX_NAME_LEN`] characters and the record is appended at
    /// the end of the sequence.
    pub fn add(&mut self, id: u32, name: &str, score: f64) -> Result<(), StoreError> {
        if self.records.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if self.records.iter().any(|r| r.id == id) {
            return Err(StoreError::DuplicateId(id));
        }

        if !validate_name(name) {
            let reason = if name.is_empty() {
                "name is empty".to_string()
            } else {
                format!("'{name}' contains a character other than letters, spaces, and hyphens")
            };
            return Err(StoreError::InvalidName(reason));
        }

        if !validate_score(score) {
            return Err(StoreError::InvalidScore(score));
        }

        // Validation sees the full input; only the stored copy is truncated.
        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        tracing::debug!(id, %name, score, "record added");
        self.records.push(StudentRecord { id, name, score });

        Ok(())
    }

    /// Find a record by id. Linear scan in insertion order.
    pub fn find_by_id(&self, id: u32) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Find a record by name, case-insensitively.
    ///
    /// Names are not required to be unique; the first match in store order
    /// wins. An empty query matches nothing.
    pub fn find_by_name(&self, name: &str) -> Option<&StudentRecord> {
        if name.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Sort records in place from highest to lowest score.
    ///
    /// The relative order of records with equal scores is unspecified.
    pub fn sort_by_score_descending(&mut self) {
        if self.records.len() <= 1 {
            return;
        }
        self.records.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    /// Arithmetic mean of all scores, or 0.0 for an empty store.
    pub fn average_score(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: f64 = self.records.iter().map(|r| r.score).sum();
        total / self.records.len() as f64
    }

    /// Aggregate score statistics, or `None` for an empty store.
    pub fn statistics(&self) -> Option<ScoreStatistics> {
        statistics::compute(&self.records)
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> StudentStore {
        let mut store = StudentStore::new();
        store.add(101, "Glen", 70.2).unwrap();
        store.add(102, "John", 90.9).unwrap();
        store.add(103, "Alice", 85.5).unwrap();
        store.add(104, "Bob", 67.8).unwrap();
        store.add(105, "Charlie", 95.0).unwrap();
        store
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let store = sample_store();
        assert_eq!(store.len(), 5);
        let ids: Vec<u32> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut store = sample_store();
        let err = store.add(101, "Eve", 50.0).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(101));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn add_rejects_out_of_range_score() {
        let mut store = StudentStore::new();
        assert_eq!(
            store.add(1, "Eve", 150.0).unwrap_err(),
            StoreError::InvalidScore(150.0)
        );
        assert_eq!(
            store.add(1, "Eve", -1.0).unwrap_err(),
            StoreError::InvalidScore(-1.0)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_invalid_name() {
        let mut store = StudentStore::new();
        assert!(matches!(
            store.add(1, "John3", 50.0),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            store.add(1, "", 50.0),
            Err(StoreError::InvalidName(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn add_accepts_boundary_scores() {
        let mut store = StudentStore::new();
        store.add(1, "Low", 0.0).unwrap();
        store.add(2, "High", 100.0).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_truncates_long_name() {
        let mut store = StudentStore::new();
        let long_name = "a".repeat(80);
        store.add(1, &long_name, 50.0).unwrap();
        assert_eq!(store.records()[0].name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut store = StudentStore::with_capacity(100);
        for i in 0..100 {
            store.add(i, "Student", 50.0).unwrap();
        }
        let err = store.add(1000, "Overflow", 50.0).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { capacity: 100 });
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn capacity_check_runs_before_validation() {
        // A full store rejects even invalid input with CapacityExceeded.
        let mut store = StudentStore::with_capacity(1);
        store.add(1, "Only", 50.0).unwrap();
        let err = store.add(2, "John3", 150.0).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { capacity: 1 });
    }

    #[test]
    fn find_by_id_hit_and_miss() {
        let store = sample_store();
        let record = store.find_by_id(103).unwrap();
        assert_eq!(record.name, "Alice");
        assert!((record.score - 85.5).abs() < f64::EPSILON);
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let store = sample_store();
        assert_eq!(store.find_by_name("CHARLIE").unwrap().id, 105);
        assert_eq!(store.find_by_name("alice").unwrap().id, 103);
        assert!(store.find_by_name("Mallory").is_none());
    }

    #[test]
    fn find_by_name_empty_query_matches_nothing() {
        let store = sample_store();
        assert!(store.find_by_name("").is_none());
    }

    #[test]
    fn find_by_name_first_match_wins() {
        let mut store = StudentStore::new();
        store.add(1, "Sam", 40.0).unwrap();
        store.add(2, "sam", 80.0).unwrap();
        assert_eq!(store.find_by_name("SAM").unwrap().id, 1);
    }

    #[test]
    fn sort_orders_scores_descending() {
        let mut store = sample_store();
        store.sort_by_score_descending();
        let scores: Vec<f64> = store.records().iter().map(|r| r.score).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "scores out of order: {scores:?}");
        }
        assert_eq!(store.records()[0].id, 105);
        assert_eq!(store.records()[4].id, 104);
    }

    #[test]
    fn sort_is_a_noop_for_tiny_stores() {
        let mut store = StudentStore::new();
        store.sort_by_score_descending();
        assert!(store.is_empty());
        store.add(1, "Solo", 50.0).unwrap();
        store.sort_by_score_descending();
        assert_eq!(store.records()[0].id, 1);
    }

    #[test]
    fn average_score_empty_store() {
        let store = StudentStore::new();
        assert_eq!(store.average_score(), 0.0);
    }

    #[test]
    fn average_score_known_values() {
        let store = sample_store();
        let avg = store.average_score();
        assert!((avg - 81.88).abs() < 1e-9, "expected 81.88, got {avg}");
    }

    #[test]
    fn statistics_empty_store_is_none() {
        let store = StudentStore::new();
        assert!(store.statistics().is_none());
    }
}
