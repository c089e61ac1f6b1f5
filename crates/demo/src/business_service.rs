//! Business rules over [`DbManager`], written in both consumption styles:
//! chaining with `then` and early return with `try_extract!`.

use std::cell::Cell;

use tracing::debug;
use valor_core::{ErrorCode, ValueOrError, try_extract};

use crate::business_error::BusinessServiceError;
use crate::db_manager::DbManager;

#[derive(Debug)]
pub struct BusinessService<'a> {
    db_manager: &'a DbManager,
    current_error: Cell<Option<ErrorCode>>,
}

impl<'a> BusinessService<'a> {
    #[must_use]
    pub const fn new(db_manager: &'a DbManager) -> Self {
        Self {
            db_manager,
            current_error: Cell::new(None),
        }
    }

    /// Make every following call fail with `error`. A code of `0` clears it.
    pub fn set_current_error(&self, error: impl Into<ErrorCode>) {
        let error = error.into();
        self.current_error.set(error.is_error().then_some(error));
    }

    /// Customer whose id (index) is `id`, or `ItemNotFound`.
    pub fn get_customer_by_id(&self, id: usize) -> ValueOrError<String> {
        if let Some(error) = self.current_error.get() {
            return error.into();
        }

        let customers = try_extract!(self.db_manager.get_customers());
        customers.into_iter().nth(id).map_or_else(
            || {
                debug!(id, "customer lookup missed");
                BusinessServiceError::ItemNotFound.into()
            },
            |customer| ValueOrError::from_value(customer),
        )
    }

    pub fn is_current_customer_auth(&self) -> ValueOrError<bool> {
        if let Some(error) = self.current_error.get() {
            return error.into();
        }

        self.db_manager
            .get_active_customer()
            .then(|customer| self.db_manager.is_auth(&customer))
    }

    pub fn is_current_customer_admin(&self) -> ValueOrError<bool> {
        if let Some(error) = self.current_error.get() {
            return error.into();
        }

        let active_customer = try_extract!(self.db_manager.get_active_customer());
        self.db_manager.is_admin(&active_customer)
    }
}
