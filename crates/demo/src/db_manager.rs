//! In-memory customer store standing in for a database layer.
//!
//! Every query first reports an injected error, if one is set, then the
//! `QueryInterrupted` failure when queries are configured to be interrupted.

use std::cell::Cell;

use valor_core::{ErrorCode, ValueOrError};

use crate::config::DatabaseConfig;
use crate::db_error::DbError;

#[derive(Debug, Default)]
pub struct DbManager {
    config: DatabaseConfig,
    current_error: Cell<Option<ErrorCode>>,
}

impl DbManager {
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            current_error: Cell::new(None),
        }
    }

    /// A manager whose every query is interrupted.
    #[must_use]
    pub fn interrupted() -> Self {
        Self::new(DatabaseConfig {
            interrupt_queries: true,
            ..DatabaseConfig::default()
        })
    }

    /// Make every following query fail with `error`. A code of `0` clears it.
    pub fn set_current_error(&self, error: impl Into<ErrorCode>) {
        let error = error.into();
        self.current_error.set(error.is_error().then_some(error));
    }

    pub fn clear_current_error(&self) {
        self.current_error.set(None);
    }

    fn check(&self) -> Option<ErrorCode> {
        self.current_error.get().or_else(|| {
            self.config
                .interrupt_queries
                .then(|| DbError::QueryInterrupted.into())
        })
    }

    /// All customer names; a customer's id is its index.
    pub fn get_customers(&self) -> ValueOrError<Vec<String>> {
        if let Some(error) = self.check() {
            return error.into();
        }
        ValueOrError::from_value(self.config.customers.clone())
    }

    /// The customer of the current session, `NoActiveSession` if there is none.
    pub fn get_active_customer(&self) -> ValueOrError<String> {
        if let Some(error) = self.check() {
            return error.into();
        }
        self.config
            .active_customer
            .clone()
            .map_or_else(|| DbError::NoActiveSession.into(), |name| ValueOrError::from_value(name))
    }

    pub fn is_auth(&self, customer: &str) -> ValueOrError<bool> {
        if let Some(error) = self.check() {
            return error.into();
        }
        ValueOrError::from_value(self.config.authorized.iter().any(|name| name == customer))
    }

    pub fn is_admin(&self, customer: &str) -> ValueOrError<bool> {
        if let Some(error) = self.check() {
            return error.into();
        }
        ValueOrError::from_value(self.config.admins.iter().any(|name| name == customer))
    }
}
