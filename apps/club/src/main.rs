//! club — replays one day of the club from a day file.
//!
//! Prints the transcript and per-table settlement on stdout; logs go to
//! stderr.
//!
//! ```text
//! cargo run --release -p club -- apps/club/data/sample.txt
//! cargo run --release -p club -- day.txt --csv-dir output/day
//! RUST_LOG=club_sim=debug cargo run -p club -- day.txt
//! ```
//!
//! If the day file has a malformed line, that line alone is printed and the
//! process exits with status 1.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use club_input::{load_day_path, InputError};
use club_output::{CsvWriter, ReportObserver, Tee, TextWriter};
use club_sim::Club;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "club",
    version,
    about = "Replay one day of club events and settle each table's revenue"
)]
struct Cli {
    /// Day file: table count, opening hours, hourly rate, then one event per line.
    input: PathBuf,

    /// Also write `transcript.csv` and `profits.csv` into this directory.
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // 1. Load and validate the whole day before printing anything.
    let day = match load_day_path(&cli.input) {
        Ok(day) => day,
        Err(InputError::Malformed { line, number }) => {
            info!(line = number, "rejecting day file");
            println!("{line}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", cli.input.display()));
        }
    };
    day.config.validate().context("invalid day configuration")?;

    // 2. Set up output: stdout always, CSV on request.
    let csv = match &cli.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            Some(CsvWriter::new(dir).context("failed to open CSV report")?)
        }
        None => None,
    };
    let text = TextWriter::new(BufWriter::new(io::stdout().lock()));
    let mut obs = ReportObserver::new(Tee::new(text, csv));

    // 3. Run.
    let mut club = Club::new(day.config);
    let summary = club.run(&day.events, &mut obs);
    if let Some(e) = obs.take_error() {
        return Err(e).context("failed to write report");
    }

    info!(
        events  = summary.events,
        errors  = summary.errors,
        forced  = summary.forced,
        revenue = summary.revenue,
        "done"
    );
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
