//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::parser;

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let rosters = if roster_path.is_dir() {
        parser::load_roster_directory(&roster_path)?
    } else {
        vec![parser::parse_roster(&roster_path)?]
    };

    let mut total_warnings = 0;

    for roster in &rosters {
        println!("Roster: {} ({} students)", roster.name, roster.students.len());

        let warnings = parser::validate_roster(roster);
        for w in &warnings {
            let prefix = w
                .student_id
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All rosters valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
