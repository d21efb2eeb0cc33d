#![forbid(unsafe_code)]
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use shift_payroll::PayrollService;
use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::{ConfigLoader, LoadOptions};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Serves the payroll calculation API over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// YAML payroll configuration (built-in shifts and rates if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail when a configured day has no rate for a configured shift
    #[arg(long)]
    strict_rates: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load_with(
            path,
            LoadOptions {
                strict_rates: cli.strict_rates,
            },
        )?,
        None => ConfigLoader::builtin()?,
    };
    let state = AppState::new(PayrollService::new(loader.into_config()));

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    info!(addr = %cli.addr, "Payroll API listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
