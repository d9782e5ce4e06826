//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("rosters")?;

    let example_path = std::path::Path::new("rosters/example.toml");
    if example_path.exists() {
        println!("rosters/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ROSTER)?;
        println!("Created rosters/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit rosters/example.toml with your students");
    println!("  2. Run: gradebook validate --roster rosters/example.toml");
    println!("  3. Run: gradebook list --roster rosters/example.toml");
    println!("  4. Run: gradebook stats --roster rosters/example.toml");

    Ok(())
}

const EXAMPLE_ROSTER: &str = r#"[roster]
name = "Example Class"
description = "A small example roster to get started"
capacity = 100

[[students]]
id = 101
name = "Glen"
score = 70.2

[[students]]
id = 102
name = "John"
score = 90.9

[[students]]
id = 103
name = "Alice"
score = 85.5

[[students]]
id = 104
name = "Bob"
score = 67.8

[[students]]
id = 105
name = "Charlie"
score = 95.0
"#;
