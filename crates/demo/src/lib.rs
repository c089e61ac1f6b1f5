//! # VALOR Demo
//!
//! A two-layer example application built on [`valor_core::ValueOrError`]:
//! an in-memory [`DbManager`] and a [`BusinessService`] on top of it, each
//! with its own error domain, plus the configuration that seeds the store.
//!
//! Errors from either layer, or a generic [`valor_core::Errno`], flow
//! unchanged to the caller and compare equal to the enumerator that
//! produced them.

mod business_error;
mod business_service;
pub mod config;
mod db_error;
mod db_manager;
mod error;

pub use business_error::BusinessServiceError;
pub use business_service::BusinessService;
pub use config::{Config, DatabaseConfig, load_config};
pub use db_error::DbError;
pub use db_manager::DbManager;
pub use error::{Error, Result};
