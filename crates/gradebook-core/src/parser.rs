//! Roster TOML parser.
//!
//! Loads rosters from TOML files and directories, lints them for common
//! issues, and builds validated stores from them. A roster file is input
//! only; the CLI never writes a mutated store back.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{
    validate_name, validate_score, Roster, RosterEntry, DEFAULT_CAPACITY, MAX_NAME_LEN,
};
use crate::store::StudentStore;

/// Intermediate TOML structure for parsing roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    roster: TomlRosterHeader,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlRosterHeader {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    id: u32,
    name: String,
    score: f64,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Parse a single TOML file into a `Roster`.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a TOML string into a `Roster` (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| RosterEntry {
            id: s.id,
            name: s.name,
            score: s.score,
        })
        .collect();

    Ok(Roster {
        name: parsed.roster.name,
        description: parsed.roster.description,
        capacity: parsed.roster.capacity,
        students,
    })
}

/// Recursively load all `.toml` roster files from a directory.
pub fn load_roster_directory(dir: &Path) -> Result<Vec<Roster>> {
    let mut rosters = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            rosters.extend(load_roster_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_roster(&path) {
                Ok(roster) => rosters.push(roster),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(rosters)
}

/// Build a validated store from a roster.
///
/// Every entry goes through `StudentStore::add`, so the store invariants
/// hold for loaded data. The first invalid entry fails the whole load.
pub fn build_store(roster: &Roster) -> Result<StudentStore> {
    let mut store = StudentStore::with_capacity(roster.capacity);

    for entry in &roster.students {
        store
            .add(entry.id, &entry.name, entry.score)
            .with_context(|| format!("invalid roster entry (id {})", entry.id))?;
    }

    Ok(store)
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student id the warning applies to, if any.
    pub student_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Lint a roster for common issues without building a store.
///
/// Unlike [`build_store`] this reports every problem, not just the first.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate ids
    let mut seen_ids = std::collections::HashSet::new();
    for student in &roster.students {
        if !seen_ids.insert(student.id) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: format!("duplicate student id: {}", student.id),
            });
        }
    }

    // Invalid names and scores
    for student in &roster.students {
        if !validate_name(&student.name) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: format!("invalid name: '{}'", student.name),
            });
        } else if student.name.chars().count() > MAX_NAME_LEN {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: format!(
                    "name longer than {MAX_NAME_LEN} characters will be truncated"
                ),
            });
        }

        if !validate_score(student.score) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: format!("score {} is outside 0.0..=100.0", student.score),
            });
        }
    }

    // More students than the store can hold
    if roster.students.len() > roster.capacity {
        warnings.push(ValidationWarning {
            student_id: None,
            message: format!(
                "{} students exceed the roster capacity of {}",
                roster.students.len(),
                roster.capacity
            ),
        });
    }

    warnings
}
