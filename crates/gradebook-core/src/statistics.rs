//! Aggregate score statistics.
//!
//! Pure functions over record slices; the store delegates here. The empty
//! case is reported distinctly (`None`) so callers can render it as a
//! message instead of a degenerate table.

use serde::Serialize;

use crate::model::{Band, StudentRecord};

/// Aggregate statistics for a set of records.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreStatistics {
    /// Number of records the statistics cover.
    pub count: usize,
    /// Arithmetic mean of all scores.
    pub mean: f64,
    /// The highest-scoring record (first one wins ties).
    pub highest: Extreme,
    /// The lowest-scoring record (first one wins ties).
    pub lowest: Extreme,
    /// One tally per band, highest band first.
    pub distribution: Vec<BandTally>,
}

/// A score extreme and the student who achieved it.
#[derive(Debug, Clone, Serialize)]
pub struct Extreme {
    pub name: String,
    pub score: f64,
}

/// How many records fall into one band.
#[derive(Debug, Clone, Serialize)]
pub struct BandTally {
    pub band: Band,
    pub count: usize,
    /// Share of all records in this band, 0.0..=100.0.
    pub percentage: f64,
}

/// Compute statistics over a record slice, or `None` if it is empty.
///
/// Extremes use strict comparisons, so among tied records the earliest one
/// in the slice is reported.
pub fn compute(records: &[StudentRecord]) -> Option<ScoreStatistics> {
    let (first, rest) = records.split_first()?;

    let mut highest = Extreme {
        name: first.name.clone(),
        score: first.score,
    };
    let mut lowest = Extreme {
        name: first.name.clone(),
        score: first.score,
    };
    for record in rest {
        if record.score > highest.score {
            highest = Extreme {
                name: record.name.clone(),
                score: record.score,
            };
        }
        if record.score < lowest.score {
            lowest = Extreme {
                name: record.name.clone(),
                score: record.score,
            };
        }
    }

    let mut counts = [0usize; 4];
    for record in records {
        let slot = match record.band() {
            Band::Excellent => 0,
            Band::Good => 1,
            Band::Fair => 2,
            Band::NeedsImprovement => 3,
        };
        counts[slot] += 1;
    }

    let total = records.len();
    let distribution = Band::ALL
        .iter()
        .zip(counts)
        .map(|(&band, count)| BandTally {
            band,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    let mean = records.iter().map(|r| r.score).sum::<f64>() / total as f64;

    Some(ScoreStatistics {
        count: total,
        mean,
        highest,
        lowest,
        distribution,
    })
}
