//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// VALOR - value-or-error demo
#[derive(Parser, Debug)]
#[command(name = "valor")]
#[command(version)]
#[command(about = "Query the demo customer store and watch errors travel between layers")]
#[command(
    long_about = "VALOR runs a business service on top of an in-memory customer store. Errors can be injected into either layer with --fail; they reach the caller unchanged and make the command exit non-zero."
)]
pub struct Cli {
    /// Config file (defaults to ./valor.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inject a failure before running the command
    #[arg(long, value_enum, global = true)]
    pub fail: Option<FailureKind>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Look up a customer by id
    Customer {
        /// Customer id (position in the store)
        id: usize,
    },

    /// Check whether the active customer is authorized
    Auth,

    /// Check whether the active customer is an admin
    Admin,

    /// List all customers
    Customers,
}

impl Commands {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Customer { .. } => "customer lookup",
            Self::Auth => "authorization check",
            Self::Admin => "admin check",
            Self::Customers => "customer listing",
        }
    }
}

/// Failures that can be injected, and the layer each one is raised in.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Data layer: no open database
    NoOpenDb,
    /// Data layer: generic "device or resource busy"
    DbBusy,
    /// Business layer: operation canceled
    Canceled,
    /// Business layer: generic "device or resource busy"
    ServiceBusy,
}
