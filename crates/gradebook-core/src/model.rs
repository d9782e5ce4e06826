//! Core data model types for gradebook.
//!
//! These are the fundamental types the entire gradebook system uses to
//! represent student records, score bands, and rosters loaded from disk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from a student name.
///
/// Longer names are accepted by [`StudentStore::add`] and silently truncated
/// to this length.
///
/// [`StudentStore::add`]: crate::store::StudentStore::add
pub const MAX_NAME_LEN: usize = 49;

/// Default maximum number of records a store holds.
pub const DEFAULT_CAPACITY: usize = 100;

/// A single student record.
///
/// Records held by a [`StudentStore`] always satisfy the validation rules:
/// unique `id`, valid `name` of at most [`MAX_NAME_LEN`] characters, and a
/// `score` within `0.0..=100.0`.
///
/// [`StudentStore`]: crate::store::StudentStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique identifier for this student.
    pub id: u32,
    /// Student name.
    pub name: String,
    /// Score in the range 0.0..=100.0.
    pub score: f64,
}

impl StudentRecord {
    /// The score band this record falls into.
    pub fn band(&self) -> Band {
        Band::classify(self.score)
    }
}

/// Checks that a name is non-empty and contains only ASCII alphabetic
/// characters, spaces, and hyphens.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-')
}

/// Checks that a score lies within the closed interval 0.0..=100.0.
///
/// NaN is rejected by the range comparison.
pub fn validate_score(score: f64) -> bool {
    (0.0..=100.0).contains(&score)
}

/// The four score categories used by listings and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    /// Scores in 85.0..=100.0.
    Excellent,
    /// Scores in 70.0..85.0.
    Good,
    /// Scores in 60.0..70.0.
    Fair,
    /// Scores below 60.0.
    NeedsImprovement,
}

impl Band {
    /// All bands, highest first. Matches the order statistics are reported in.
    pub const ALL: [Band; 4] = [
        Band::Excellent,
        Band::Good,
        Band::Fair,
        Band::NeedsImprovement,
    ];

    /// Classify a score into its band.
    ///
    /// Boundaries are inclusive at the lower end, so 85.0 is `Excellent` and
    /// 84.99 is `Good`. The top band is closed on both ends.
    pub fn classify(score: f64) -> Band {
        if score >= 85.0 {
            Band::Excellent
        } else if score >= 70.0 {
            Band::Good
        } else if score >= 60.0 {
            Band::Fair
        } else {
            Band::NeedsImprovement
        }
    }

    /// Human-readable band name.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::Fair => "Fair",
            Band::NeedsImprovement => "Needs Improvement",
        }
    }

    /// The score range this band covers, for display next to the label.
    pub fn range_label(&self) -> &'static str {
        match self {
            Band::Excellent => "85-100",
            Band::Good => "70-84",
            Band::Fair => "60-69",
            Band::NeedsImprovement => "<60",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.range_label())
    }
}

/// A named collection of student entries loaded from a roster file.
///
/// Entries are unvalidated at this stage; they pass through the store's
/// validation when the roster is built into a [`StudentStore`] via
/// [`parser::build_store`].
///
/// [`StudentStore`]: crate::store::StudentStore
/// [`parser::build_store`]: crate::parser::build_store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Human-readable roster name (e.g. a class name).
    pub name: String,
    /// Description of this roster.
    #[serde(default)]
    pub description: String,
    /// Maximum number of records the resulting store holds.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// The student entries in file order.
    #[serde(default)]
    pub students: Vec<RosterEntry>,
}

/// One unvalidated student entry in a roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub score: f64,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}
