#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # VALOR
//!
//! Value-or-error outcomes that refuse to be silently dropped.
//!
//! This library re-exports the workspace crates and holds the `valor`
//! binary's command layer.

pub use valor_core;
pub use valor_demo as demo;

pub mod cli;
pub mod commands;
pub mod prelude;
