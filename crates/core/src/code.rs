//! Error codes and the categories that give them meaning.
//!
//! An [`ErrorCode`] is a plain `(category, code)` pair. The category knows the
//! domain's stable name and how to turn a code into a human-readable message,
//! so an error code can be compared, copied, and rendered without knowing the
//! enum it came from.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::ErrorDomain;
use crate::errno::Errno;

/// Identity and message lookup for one error domain.
///
/// Two categories are the same category when their names match, so domain
/// names must be unique within a process.
#[derive(Clone, Copy)]
pub struct Category {
    name: &'static str,
    message: fn(i32) -> String,
}

impl Category {
    /// Create a category from a stable name and a message-by-code function.
    #[must_use]
    pub const fn new(name: &'static str, message: fn(i32) -> String) -> Self {
        Self { name, message }
    }

    /// The stable name of the domain.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable message for `code` within this domain.
    #[must_use]
    pub fn message(&self, code: i32) -> String {
        (self.message)(code)
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Category").field(&self.name).finish()
    }
}

/// A domain error: an integer code qualified by its category.
///
/// Code `0` is "no error" in every domain; [`ErrorCode::none`] is the
/// canonical sentinel returned when there is nothing to report.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    code: i32,
    category: Category,
}

impl ErrorCode {
    #[must_use]
    pub const fn new(code: i32, category: Category) -> Self {
        Self { code, category }
    }

    /// The "no error" sentinel (code 0 in the `generic` domain).
    #[must_use]
    pub fn none() -> Self {
        Errno::Success.make_error_code()
    }

    /// Raw integer code.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Message rendered by the owning category.
    #[must_use]
    pub fn message(&self) -> String {
        self.category.message(self.code)
    }

    /// `true` for any non-zero code.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code != 0
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("category", &self.category.name)
            .field("code", &self.code)
            .field("message", &self.message())
            .finish()
    }
}

impl std::error::Error for ErrorCode {}

impl<D: ErrorDomain> PartialEq<D> for ErrorCode {
    fn eq(&self, other: &D) -> bool {
        *self == other.make_error_code()
    }
}

impl From<std::io::ErrorKind> for ErrorCode {
    fn from(kind: std::io::ErrorKind) -> Self {
        Errno::from(kind).make_error_code()
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(err: std::io::Error) -> Self {
        Self::from(err.kind())
    }
}
