//! The `gradebook average` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let store = super::load_store(&roster_path)?;

    println!("Average score: {:.2}", store.average_score());

    Ok(())
}
