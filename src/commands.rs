//! Command execution against the demo layers.
//!
//! Every command yields a `ValueOrError<String>` so the caller decides how to
//! report a failure; nothing here prints.

use valor_core::{Errno, ValueOrError};
use valor_demo::{BusinessService, BusinessServiceError, DbError, DbManager};

use crate::cli::{Commands, FailureKind};

/// Arm the layer that `kind` belongs to with its error.
pub fn inject_failure(kind: FailureKind, db_manager: &DbManager, service: &BusinessService<'_>) {
    tracing::info!(?kind, "injecting failure");
    match kind {
        FailureKind::NoOpenDb => db_manager.set_current_error(DbError::NoOpenDb),
        FailureKind::DbBusy => db_manager.set_current_error(Errno::DeviceOrResourceBusy),
        FailureKind::Canceled => {
            service.set_current_error(BusinessServiceError::OperationCanceled);
        }
        FailureKind::ServiceBusy => service.set_current_error(Errno::DeviceOrResourceBusy),
    }
}

/// Run `command` and render its value.
pub fn execute(
    command: &Commands,
    db_manager: &DbManager,
    service: &BusinessService<'_>,
) -> ValueOrError<String> {
    match command {
        Commands::Customer { id } => service.get_customer_by_id(*id),
        Commands::Auth => service
            .is_current_customer_auth()
            .map(|flag| verdict(flag, "authorized")),
        Commands::Admin => service
            .is_current_customer_admin()
            .map(|flag| verdict(flag, "an admin")),
        Commands::Customers => db_manager.get_customers().map(|customers| {
            customers
                .iter()
                .enumerate()
                .map(|(id, name)| format!("{id}: {name}"))
                .collect::<Vec<_>>()
                .join("\n")
        }),
    }
}

fn verdict(flag: bool, role: &str) -> String {
    if flag {
        format!("active customer is {role}")
    } else {
        format!("active customer is not {role}")
    }
}
