//! The `gradebook stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::statistics::ScoreStatistics;

pub fn execute(roster_path: PathBuf, format: String) -> Result<()> {
    let store = super::load_store(&roster_path)?;

    let Some(stats) = store.statistics() else {
        println!("No records to report statistics for.");
        return Ok(());
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => render_tables(&stats),
    }

    Ok(())
}

fn render_tables(stats: &ScoreStatistics) {
    let mut summary = Table::new();
    summary.set_header(vec!["Students", "Highest", "Lowest", "Average"]);
    summary.add_row(vec![
        Cell::new(stats.count),
        Cell::new(format!("{:.2} ({})", stats.highest.score, stats.highest.name)),
        Cell::new(format!("{:.2} ({})", stats.lowest.score, stats.lowest.name)),
        Cell::new(format!("{:.2}", stats.mean)),
    ]);
    println!("{summary}");

    let mut distribution = Table::new();
    distribution.set_header(vec!["Band", "Students", "Share"]);
    for tally in &stats.distribution {
        distribution.add_row(vec![
            Cell::new(tally.band.to_string()),
            Cell::new(tally.count),
            Cell::new(format!("{:.1}%", tally.percentage)),
        ]);
    }
    println!("{distribution}");
}
