//! Configuration loading for the demonstration data layer
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file: the explicit path, or `valor.toml` in the working directory
//! 3. Environment variables: `VALOR_*`
//!
//! The result is validated before it is handed out.
//!
//! # Example Config
//!
//! ```toml
//! [database]
//! customers = ["John", "Steve", "Ada"]
//! active_customer = "Ada"
//! authorized = ["John", "Ada"]
//! admins = ["Ada"]
//! interrupt_queries = false
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "valor.toml";

pub const ENV_ACTIVE_CUSTOMER: &str = "VALOR_ACTIVE_CUSTOMER";
pub const ENV_INTERRUPT_QUERIES: &str = "VALOR_INTERRUPT_QUERIES";

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Contents of the in-memory customer store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Customer names; a customer's id is its index.
    pub customers: Vec<String>,
    /// Customer of the current session. `None` means no session is open.
    pub active_customer: Option<String>,
    pub authorized: Vec<String>,
    pub admins: Vec<String>,
    /// Every query fails with `QueryInterrupted` when set.
    pub interrupt_queries: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            customers: vec!["John".to_string(), "Steve".to_string()],
            active_customer: Some("John".to_string()),
            authorized: vec!["John".to_string(), "Steve".to_string()],
            admins: vec!["John".to_string()],
            interrupt_queries: false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy
///
/// `path` names a config file that must exist. Without it, `valor.toml` in
/// the working directory is used when present.
///
/// # Errors
///
/// Returns error if:
/// - The config file cannot be read or is malformed TOML
/// - An environment override has an invalid value
/// - The merged config fails validation
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => load_toml_file(path)?,
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if local.exists() {
                load_toml_file(&local)?
            } else {
                Config::default()
            }
        }
    };

    let config = config.apply_env_with(|key| std::env::var(key).ok())?;
    config.validate()?;

    tracing::debug!(
        customers = config.database.customers.len(),
        interrupt_queries = config.database.interrupt_queries,
        "configuration loaded"
    );
    Ok(config)
}

impl Config {
    /// Parse a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `TomlParseFailed` if the document is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::toml_parse_failed(e.to_string()))
    }

    /// Apply `VALOR_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if an override has an unparsable value.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_ACTIVE_CUSTOMER) {
            self.database.active_customer = Some(value).filter(|name| !name.is_empty());
        }

        if let Some(value) = lookup(ENV_INTERRUPT_QUERIES) {
            self.database.interrupt_queries = value.parse().map_err(|e| {
                Error::invalid_config(format!("Invalid {ENV_INTERRUPT_QUERIES} value: {e}"))
            })?;
        }

        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a name is empty or duplicated, or if the
    /// active, authorized, or admin customers are not known customers.
    pub fn validate(&self) -> Result<()> {
        let db = &self.database;

        if db.customers.iter().any(String::is_empty) {
            return Err(Error::invalid_config("customer names must not be empty"));
        }

        let known: HashSet<&str> = db.customers.iter().map(String::as_str).collect();
        if known.len() != db.customers.len() {
            return Err(Error::invalid_config("customer names must be unique"));
        }

        if let Some(active) = db.active_customer.as_deref() {
            if !known.contains(active) {
                return Err(Error::invalid_config(format!(
                    "active customer '{active}' is not a known customer"
                )));
            }
        }

        db.authorized
            .iter()
            .map(|name| ("authorized", name))
            .chain(db.admins.iter().map(|name| ("admin", name)))
            .find(|(_, name)| !known.contains(name.as_str()))
            .map_or(Ok(()), |(role, name)| {
                Err(Error::invalid_config(format!(
                    "{role} customer '{name}' is not a known customer"
                )))
            })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HELPER FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Load a TOML file into a Config
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - TOML is malformed
fn load_toml_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config_read_failed(path, e.to_string()))?;

    Config::from_toml_str(&content).map_err(|e| match e {
        Error::TomlParseFailed { reason } => {
            Error::toml_parse_failed(format!("{}: {reason}", path.display()))
        }
        other => other,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
