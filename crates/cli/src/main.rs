//! `officevisit` — command-line front end for the inventory totals engine and
//! the SCCM bulk-paste ingestor.
//!
//! ## Commands
//!
//! - `officevisit ingest-sccm <file>` - parse pasted SCCM text, print CSV (or `--json`)
//! - `officevisit totals <rows.json>` - normalise inventory rows, print totals CSV (or `--json`)
//! - `officevisit template` - print the standard inventory sheet as JSON to fill in
//!
//! `-` reads from stdin. Logs go to stderr, filtered by `RUST_LOG`.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use officevisit_observability::LogFormat;

#[derive(Parser)]
#[command(name = "officevisit")]
#[command(about = "Office-visit inventory totals and SCCM import")]
struct Cli {
    /// Human-readable logs instead of JSON
    #[arg(long, global = true)]
    text_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse pasted SCCM / Excel / CSV text into computer records
    IngestSccm {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Days since last logon that still count as active; overrides
        /// `OFFICEVISIT_ACTIVE_WINDOW_DAYS`
        #[arg(long)]
        window_days: Option<i64>,

        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Compute row totals and the sheet summary for inventory rows (JSON array)
    Totals {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Print JSON (rows with totals plus summary) instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Print the standard inventory sheet as JSON
    Template,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    officevisit_observability::init(if cli.text_logs {
        LogFormat::Text
    } else {
        LogFormat::Json
    });

    let output = match cli.command {
        Commands::IngestSccm {
            file,
            window_days,
            json,
        } => commands::ingest_sccm(&file, window_days, json)?,
        Commands::Totals { file, json } => commands::totals(&file, json)?,
        Commands::Template => commands::template()?,
    };

    print!("{output}");
    Ok(())
}
