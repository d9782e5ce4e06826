//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student records manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student to a loaded roster
    Add {
        /// Path to a .toml roster file
        #[arg(long)]
        roster: PathBuf,

        /// Unique student id
        #[arg(long)]
        id: u32,

        /// Student name (letters, spaces, and hyphens)
        #[arg(long)]
        name: String,

        /// Score between 0 and 100
        #[arg(long)]
        score: f64,
    },

    /// List all students
    List {
        /// Path to a .toml roster file
        #[arg(long)]
        roster: PathBuf,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Find a student by id or name
    Find {
        /// Path to a .toml roster file
        #[arg(long)]
        roster: PathBuf,

        /// Student id to look up
        #[arg(long)]
        id: Option<u32>,

        /// Student name to look up (case-insensitive)
        #[arg(long)]
        name: Option<String>,
    },

    /// Sort students by score, highest first
    Sort {
        /// Path to a .toml roster file
        #[arg(long)]
        roster: PathBuf,
    },

    /// Show score statistics
    Stats {
        /// Path to a .toml roster file
        #[arg(long)]
        roster: PathBuf,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Compute the average score
    Average {
        /// Path to a .toml roster file
        #[arg(long)]
        roster: PathBuf,
    },

    /// Validate roster TOML files
    Validate {
        /// Path to a roster file or directory
        #[arg(long)]
        roster: PathBuf,
    },

    /// Create an example roster file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            roster,
            id,
            name,
            score,
        } => commands::add::execute(roster, id, name, score),
        Commands::List { roster, format } => commands::list::execute(roster, format),
        Commands::Find { roster, id, name } => commands::find::execute(roster, id, name),
        Commands::Sort { roster } => commands::sort::execute(roster),
        Commands::Stats { roster, format } => commands::stats::execute(roster, format),
        Commands::Average { roster } => commands::average::execute(roster),
        Commands::Validate { roster } => commands::validate::execute(roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
