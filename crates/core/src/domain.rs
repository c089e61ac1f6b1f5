//! The contract an error enumeration implements to be carried by a
//! [`ValueOrError`](crate::ValueOrError).
//!
//! A domain is a fieldless enum with a stable name, an integer code per
//! enumerator (`0` meaning "no error"), and a message per code. Enumerators
//! are usually declared with `strum` derives so that `Display` gives the
//! message, `FromRepr` gives the integer lookup, and `EnumString` gives the
//! reverse string lookup:
//!
//! ```
//! use strum::{Display, EnumString, FromRepr};
//! use valor_core::{ErrorDomain, ValueOrError};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, FromRepr)]
//! #[repr(i32)]
//! pub enum CacheError {
//!     #[strum(to_string = "Success")]
//!     Success = 0,
//!     #[strum(to_string = "Cache miss")]
//!     Miss = 1,
//! }
//!
//! impl ErrorDomain for CacheError {
//!     const NAME: &'static str = "CacheError";
//!
//!     fn to_code(self) -> i32 {
//!         self as i32
//!     }
//!
//!     fn from_code(code: i32) -> Option<Self> {
//!         Self::from_repr(code)
//!     }
//! }
//!
//! valor_core::impl_error_domain!(CacheError);
//!
//! let outcome: ValueOrError<u32> = CacheError::Miss.into();
//! assert!(outcome == CacheError::Miss);
//! assert_eq!(outcome.error().message(), "Cache miss");
//! ```

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumString, FromRepr, IntoStaticStr};

use crate::code::{Category, ErrorCode};

/// An enumerated set of errors sharing one category.
pub trait ErrorDomain: Copy + fmt::Display + 'static {
    /// Stable, process-unique name of the domain.
    const NAME: &'static str;

    /// Integer code of this enumerator.
    fn to_code(self) -> i32;

    /// Enumerator for `code`, if the domain defines one.
    fn from_code(code: i32) -> Option<Self>;

    /// Message for an arbitrary code of this domain.
    #[must_use]
    fn message(code: i32) -> String {
        Self::from_code(code).map_or_else(|| format!("Unknown error {code}"), |e| e.to_string())
    }

    #[must_use]
    fn category() -> Category {
        Category::new(Self::NAME, Self::message)
    }

    /// Canonical error value for this enumerator.
    #[must_use]
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self.to_code(), Self::category())
    }

    /// Reverse lookup from the enumerator's string form.
    #[must_use]
    fn from_name(name: &str) -> Option<Self>
    where
        Self: FromStr,
    {
        name.parse().ok()
    }
}

/// Registers the conversions that let a domain enumerator be used wherever an
/// [`ErrorCode`] or a [`ValueOrError`](crate::ValueOrError) is expected.
#[macro_export]
macro_rules! impl_error_domain {
    ($($domain:ty),+ $(,)?) => {
        $(
            impl ::core::convert::From<$domain> for $crate::ErrorCode {
                fn from(error: $domain) -> Self {
                    $crate::ErrorDomain::make_error_code(error)
                }
            }

            impl<T> ::core::convert::From<$domain> for $crate::ValueOrError<T> {
                fn from(error: $domain) -> Self {
                    Self::from_error(error)
                }
            }
        )+
    };
}

/// Errors raised by the container itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, FromRepr, IntoStaticStr)]
#[repr(i32)]
pub enum ContainerError {
    #[strum(to_string = "Success")]
    Success = 0,

    /// An empty container was propagated where a value was required.
    #[strum(to_string = "Value is not stored")]
    EmptyResult = 1,
}

impl ErrorDomain for ContainerError {
    const NAME: &'static str = "ValueOrError";

    fn to_code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }
}

crate::impl_error_domain!(ContainerError);
