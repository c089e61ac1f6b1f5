//! Bridging between `std::result::Result` and [`ValueOrError`].
//!
//! Code that already speaks `Result` can hand its outcome to a
//! `ValueOrError` and back without matching by hand.

use crate::code::ErrorCode;
use crate::value_or_error::ValueOrError;

/// Extension trait for `std::result::Result` values whose error converts to
/// an [`ErrorCode`].
pub trait ResultExt<T> {
    /// Move the outcome into a [`ValueOrError`].
    fn into_value_or_error(self) -> ValueOrError<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: Into<ErrorCode>> ResultExt<T> for Result<T, E> {
    fn into_value_or_error(self) -> ValueOrError<T> {
        self.into()
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                let code: ErrorCode = e.into();
                tracing::error!(
                    category = code.category().name(),
                    code = code.value(),
                    "Operation failed, using default: {code}"
                );
                default
            }
        }
    }
}

impl<T, E: Into<ErrorCode>> From<Result<T, E>> for ValueOrError<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(e) => Self::from_error(e),
        }
    }
}
