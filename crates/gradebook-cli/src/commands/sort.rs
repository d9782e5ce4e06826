//! The `gradebook sort` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let mut store = super::load_store(&roster_path)?;

    if store.is_empty() {
        println!("No student records available.");
        return Ok(());
    }

    store.sort_by_score_descending();
    println!("Students sorted by score (highest to lowest).");
    super::render_listing(&store);

    Ok(())
}
