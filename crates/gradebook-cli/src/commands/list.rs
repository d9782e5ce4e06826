//! The `gradebook list` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(roster_path: PathBuf, format: String) -> Result<()> {
    let store = super::load_store(&roster_path)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(store.records())?);
        }
        _ => {
            if store.is_empty() {
                println!("No student records available.");
                return Ok(());
            }
            super::render_listing(&store);
        }
    }

    Ok(())
}
