//! Sequencing fallible steps.
//!
//! Two idioms, matching the two ways callers usually write the same thing:
//!
//! ```
//! use valor_core::{Errno, ValueOrError, try_extract};
//!
//! fn parse(input: &str) -> ValueOrError<i32> {
//!     input
//!         .parse::<i32>()
//!         .map_or_else(|_| Errno::InvalidArgument.into(), |n| ValueOrError::from_value(n))
//! }
//!
//! fn halve(n: i32) -> ValueOrError<i32> {
//!     if n % 2 == 0 {
//!         ValueOrError::from_value(n / 2)
//!     } else {
//!         Errno::InvalidArgument.into()
//!     }
//! }
//!
//! // Combinator style: each step receives the previous step's value.
//! let chained = parse("84").then(halve).then(halve);
//! assert_eq!(chained.into_result(), Ok(21));
//!
//! // Early-return style.
//! fn quarter(input: &str) -> ValueOrError<i32> {
//!     let n = try_extract!(parse(input));
//!     let half = try_extract!(halve(n));
//!     halve(half)
//! }
//! let failed = quarter("6");
//! assert!(failed == Errno::InvalidArgument);
//!
//! // The same, exiting through a standard `Result`.
//! fn quarter_std(input: &str) -> Result<i32, valor_core::ErrorCode> {
//!     let n = try_extract!(parse(input));
//!     let half = try_extract!(halve(n));
//!     halve(half).into_result()
//! }
//! assert_eq!(quarter_std("84"), Ok(21));
//! assert!(quarter_std("x").unwrap_err() == Errno::InvalidArgument);
//! ```

use tracing::debug;

use crate::code::ErrorCode;
use crate::value_or_error::{State, ValueOrError};

impl<T> ValueOrError<T> {
    /// Run `step` on the value, or pass the error through untouched.
    ///
    /// The step receives the unwrapped value by move and its outcome is
    /// returned as is. An error short-circuits: `step` is not called and the
    /// returned container carries the same error, acknowledgement, and hook.
    /// An empty container stays empty.
    pub fn then<R, F>(self, step: F) -> ValueOrError<R>
    where
        F: FnOnce(T) -> ValueOrError<R>,
    {
        let (state, acknowledged, on_unobserved) = self.into_parts();
        match state {
            State::Value(value) => step(value),
            State::Error(code) => {
                debug!(
                    category = code.category().name(),
                    code = code.value(),
                    "chain short-circuited"
                );
                ValueOrError::from_parts(State::Error(code), acknowledged, on_unobserved)
            }
            State::Empty => ValueOrError::from_parts(State::Empty, acknowledged, on_unobserved),
        }
    }
}

/// Evaluate to the value of a [`ValueOrError`], or return its error from the
/// enclosing function.
///
/// The enclosing function may return a `ValueOrError<_>` or a `Result<_, E>`
/// whose `E` is `From<ErrorCode>` (`ErrorCode` itself, `anyhow::Error`,
/// `Box<dyn Error>`). An empty container returns
/// [`ContainerError::EmptyResult`].
///
/// [`ValueOrError`]: crate::ValueOrError
/// [`ContainerError::EmptyResult`]: crate::ContainerError::EmptyResult
#[macro_export]
macro_rules! try_extract {
    ($expr:expr $(,)?) => {
        match $crate::ValueOrError::into_result($expr) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return $crate::FromErrorCode::from_error_code(error);
            }
        }
    };
}

/// Return types `try_extract!` can exit through.
#[doc(hidden)]
pub trait FromErrorCode {
    fn from_error_code(error: ErrorCode) -> Self;
}

impl<R> FromErrorCode for ValueOrError<R> {
    fn from_error_code(error: ErrorCode) -> Self {
        Self::from_error(error)
    }
}

impl<R, E: From<ErrorCode>> FromErrorCode for Result<R, E> {
    fn from_error_code(error: ErrorCode) -> Self {
        Err(E::from(error))
    }
}
