//! The `gradebook add` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(roster_path: PathBuf, id: u32, name: String, score: f64) -> Result<()> {
    let mut store = super::load_store(&roster_path)?;

    store.add(id, &name, score)?;

    println!("Student '{name}' added.");
    println!(
        "Store now holds {} record(s); the roster file is left unchanged.",
        store.len()
    );

    Ok(())
}
