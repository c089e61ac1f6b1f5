//! # VALOR Core
//!
//! A value-or-error outcome type that makes forgetting an error a loud,
//! immediate fault instead of a silent one.
//!
//! ## Laws
//!
//! - A [`ValueOrError`] is exactly one of: empty, an error, a value
//! - An error must be acknowledged (`is_ok`, `error`, `==`, `Display`, or
//!   `ignore`) before the container is dropped, or the unobserved-error
//!   policy fires: the instance's hook, or `std::process::abort`
//! - Misuse (reading a value that is not there) is a [`LogicFault`], returned
//!   as `Err` - never a panic
//!
//! ## Error Handling
//!
//! Producers return `ValueOrError<T>` built from a value or from any
//! [`ErrorDomain`] enumerator. Consumers:
//! - check with `is_ok()` / `error()` and then `extract()`
//! - chain with [`ValueOrError::then`]
//! - propagate with [`try_extract!`]
//! - convert to a `std::result::Result` with [`ValueOrError::into_result`]

mod chain;
mod code;
mod domain;
mod errno;
mod error;
mod render;
mod result;
mod value_or_error;

#[doc(hidden)]
pub use chain::FromErrorCode;
pub use code::{Category, ErrorCode};
pub use domain::{ContainerError, ErrorDomain};
pub use errno::Errno;
pub use error::LogicFault;
pub use render::{EMPTY_MARKER, Render, VALUE_PLACEHOLDER, is_renderable};
pub use result::ResultExt;
pub use value_or_error::{UnobservedHook, ValueOrError};
