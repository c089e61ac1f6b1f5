//! # VALOR - demo binary
//!
//! Runs one query against the demo business service and prints the outcome.
//!
//! ## Startup Sequence
//!
//! 1. **Tracing** - `RUST_LOG` filter, `info` by default
//! 2. **Configuration** - defaults, config file, `VALOR_*` environment
//! 3. **Layers** - data layer, then the business service on top of it
//! 4. **Failure injection** - optional, from `--fail`
//!
//! ## Error Handling
//!
//! A failed query is returned from `main` as an error, so the process exits
//! non-zero with the domain message.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use valor::cli::Cli;
use valor::commands;
use valor::demo::{BusinessService, DbManager};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = valor::demo::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!(?config, "configuration ready");

    let db_manager = DbManager::new(config.database);
    let service = BusinessService::new(&db_manager);

    if let Some(kind) = cli.fail {
        commands::inject_failure(kind, &db_manager, &service);
    }

    info!(command = cli.command.name(), "running");
    let rendered = commands::execute(&cli.command, &db_manager, &service)
        .into_result()
        .with_context(|| format!("{} failed", cli.command.name()))?;

    println!("{rendered}");
    Ok(())
}

/// Initialize tracing subscriber for structured logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
