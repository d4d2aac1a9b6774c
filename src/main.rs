use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

mod error;
mod logging;
mod parse;
mod record;
mod render;

use parse::ParseOutcome;
use record::MeasurementRecord;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "perftidy")]
#[command(about = "Tidy process-timing and Spark logs into tables", long_about = None)]
struct Cli {
    /// Show debug-level diagnostics on stderr.
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all diagnostics.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a measurement from `/usr/bin/time --verbose` output.
    Time {
        #[arg(long)]
        log: String,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Extract a measurement from a Spark stderr log.
    Spark {
        #[arg(long)]
        log: String,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Format {
    Csv,
    Html,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.cmd {
        Commands::Time { log, format } => {
            let blob = std::fs::read_to_string(&log)
                .with_context(|| format!("read time log {log}"))?;
            report(parse::time::parse_report(&blob, &log), format)
        }
        Commands::Spark { log, format } => {
            let blob = std::fs::read_to_string(&log)
                .with_context(|| format!("read spark log {log}"))?;
            report(parse::spark::parse_report(&blob, &log), format)
        }
    }
}

/// Log the failure, if any, then emit the record. A failed parse still
/// produces a structurally complete header/row pair on stdout.
fn report(outcome: ParseOutcome, format: Format) -> Result<()> {
    if let Some(failure) = &outcome.failure {
        log::error!("{failure}");
    }
    emit(&outcome.record, format)
}

fn emit(record: &MeasurementRecord, format: Format) -> Result<()> {
    match format {
        Format::Csv => {
            println!("{}", render::csv::header(record));
            print!("{}", render::csv::row(record));
        }
        Format::Html => {
            print!("{}", render::html::header(record, None));
            print!("{}", render::html::row(record, None, None));
        }
        Format::Json => {
            println!("{}", serde_json::to_string(record)?);
        }
    }
    Ok(())
}
