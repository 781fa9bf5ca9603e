//! `hanzi`: build and query the Hanzi character knowledge base.
//!
//! # Usage
//!
//! ```
//! hanzi import --source data/dictionary.txt --reference data/hsk_reference.json
//! hanzi lookup 好
//! hanzi decompose 好
//! hanzi snapshot
//! ```
//!
//! Settings come from `hanzi.toml` (or `--config`) and `HANZI_*` environment
//! variables; flags override both.

mod commands;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use settings::{Settings, flag_or};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "hanzi", author, version, about = "Hanzi character knowledge base")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "hanzi.toml")]
  config: PathBuf,

  /// SQLite database to use instead of `database_path` from the config.
  #[arg(long, value_name = "FILE")]
  database: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Replace the character table with a fresh import.
  Import {
    /// Line-delimited JSON dictionary.
    #[arg(long, value_name = "FILE")]
    source:    Option<PathBuf>,
    /// JSON reference table of levels, scripts, strokes and decompositions.
    #[arg(long, value_name = "FILE")]
    reference: Option<PathBuf>,
  },
  /// Show everything known about one character.
  Lookup { character: String },
  /// Resolve a character's stored decomposition into its components.
  Decompose { character: String },
  /// Resolve an explicit decomposition descriptor, e.g. `⿰女子`.
  Resolve { descriptor: String },
  /// Write a consistent copy of the database.
  Snapshot {
    /// Destination file; defaults to a timestamped file in `snapshot_dir`.
    dest: Option<PathBuf>,
  },
  /// Print the number of committed characters.
  Status,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  settings.database_path = flag_or(cli.database, &settings.database_path);

  match cli.command {
    Command::Import { source, reference } => {
      commands::import(&settings, source, reference).await
    }
    Command::Lookup { character } => commands::lookup(&settings, &character).await,
    Command::Decompose { character } => commands::decompose(&settings, &character).await,
    Command::Resolve { descriptor } => commands::resolve(&settings, &descriptor).await,
    Command::Snapshot { dest } => commands::snapshot(&settings, dest).await,
    Command::Status => commands::status(&settings).await,
  }
}
