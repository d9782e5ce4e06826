//! The `gradebook find` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::error::StoreError;
use gradebook_core::model::StudentRecord;

pub fn execute(roster_path: PathBuf, id: Option<u32>, name: Option<String>) -> Result<()> {
    let store = super::load_store(&roster_path)?;

    let record: &StudentRecord = match (id, name.as_deref()) {
        (Some(_), Some(_)) | (None, None) => {
            anyhow::bail!("provide exactly one of --id and --name")
        }
        (Some(id), None) => store
            .find_by_id(id)
            .ok_or_else(|| StoreError::NotFound(format!("id {id}")))?,
        (None, Some(name)) => store
            .find_by_name(name)
            .ok_or_else(|| StoreError::NotFound(format!("name '{name}'")))?,
    };

    println!("Student found:");
    println!("  ID     : {}", record.id);
    println!("  Name   : {}", record.name);
    println!("  Score  : {:.2}", record.score);
    println!("  Rating : {}", record.band());

    Ok(())
}
