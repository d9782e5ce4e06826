//! Store error types.
//!
//! These errors represent rejected operations on a [`StudentStore`]. Defined
//! as an enum so callers can match on the failure kind instead of string
//! matching, and none of them are fatal: the store declines the mutation and
//! the caller decides how to report it.
//!
//! [`StudentStore`]: crate::store::StudentStore

use thiserror::Error;

/// Errors that can occur when operating on a student store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store already holds its maximum number of records.
    #[error("store is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    /// A record with this id already exists.
    #[error("id {0} is already in use")]
    DuplicateId(u32),

    /// The name is empty or contains a disallowed character.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The score falls outside the 0.0..=100.0 range.
    #[error("score {0} is outside the valid range 0.0..=100.0")]
    InvalidScore(f64),

    /// A lookup found no matching record.
    #[error("student not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Returns `true` if this error rejects an attempted mutation
    /// (as opposed to a failed lookup).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            StoreError::CapacityExceeded { capacity: 100 }.to_string(),
            "store is full (100 records)"
        );
        assert_eq!(
            StoreError::DuplicateId(101).to_string(),
            "id 101 is already in use"
        );
        assert!(StoreError::InvalidScore(150.0)
            .to_string()
            .contains("0.0..=100.0"));
    }

    #[test]
    fn rejection_classification() {
        assert!(StoreError::DuplicateId(1).is_rejection());
        assert!(StoreError::CapacityExceeded { capacity: 100 }.is_rejection());
        assert!(!StoreError::NotFound("id 7".into()).is_rejection());
    }
}
