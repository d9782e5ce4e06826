//! Subcommand implementations, one module per command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use gradebook_core::parser;
use gradebook_core::store::StudentStore;

pub mod add;
pub mod average;
pub mod find;
pub mod init;
pub mod list;
pub mod sort;
pub mod stats;
pub mod validate;

/// Load a roster file and build a validated store from it.
fn load_store(path: &Path) -> Result<StudentStore> {
    let roster = parser::parse_roster(path)?;
    let store = parser::build_store(&roster)
        .with_context(|| format!("failed to load roster: {}", path.display()))?;
    tracing::debug!(
        "loaded {} record(s) from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// Render the full listing as a table, with the position, id, name, score,
/// and band of every record in store order.
fn render_listing(store: &StudentStore) {
    println!("Students: {}", store.len());

    let mut table = Table::new();
    table.set_header(vec!["No.", "ID", "Name", "Score", "Rating"]);

    for (i, record) in store.records().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.id),
            Cell::new(&record.name),
            Cell::new(format!("{:.2}", record.score)),
            Cell::new(record.band().label()),
        ]);
    }

    println!("{table}");
}
