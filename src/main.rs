#![forbid(unsafe_code)]
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use shift_payroll::PayrollService;
use shift_payroll::config::{ConfigLoader, LoadOptions};
use shift_payroll::input::RecordReader;
use shift_payroll::models::PayCalculation;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Computes weekly pay for every employee line of an input file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input file, one `NAME=DAYHH:MM-HH:MM,...` line per employee
    file: PathBuf,

    /// YAML payroll configuration (built-in shifts and rates if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail when a configured day has no rate for a configured shift
    #[arg(long)]
    strict_rates: bool,

    /// Stop at the first malformed line instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One sentence per employee
    Text,
    /// One JSON object per employee
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Payroll run aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::load_with(
            path,
            LoadOptions {
                strict_rates: cli.strict_rates,
            },
        )?,
        None => ConfigLoader::builtin()?,
    };
    let service = PayrollService::new(loader.into_config());

    let mut processed = 0usize;
    let mut skipped = 0usize;
    for (index, line) in RecordReader::open(&cli.file)?.enumerate() {
        let line = line?;
        match service.process_line(&line) {
            Ok(calculation) => {
                print_calculation(&calculation, cli.format)?;
                processed += 1;
            }
            Err(err) if !cli.fail_fast => {
                warn!(line = index + 1, error = %err, "Skipping malformed line");
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(processed, skipped, "Payroll run finished");
    Ok(())
}

fn print_calculation(calculation: &PayCalculation, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => println!(
            "The amount to pay {} is: {} {}",
            calculation.employee.as_deref().unwrap_or_default(),
            calculation.total.normalize(),
            calculation.currency
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string(calculation)?),
    }
    Ok(())
}
