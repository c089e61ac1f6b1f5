//! Logic faults: misuse of a container, as opposed to the domain errors it
//! carries.
//!
//! A logic fault is a programming mistake at the call site. It is returned as
//! an `Err` instead of panicking so the caller decides how loud to be.

use thiserror::Error;

use crate::code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicFault {
    /// The value was requested but the container holds an error.
    #[error("cannot get value: error is already stored ({error})")]
    ErrorStored { error: ErrorCode },

    /// The value was requested but the container is empty, either never
    /// filled or already extracted.
    #[error("value is not stored")]
    ValueNotStored,
}

impl LogicFault {
    /// The domain error behind the fault, if there is one.
    #[must_use]
    pub const fn stored_error(&self) -> Option<ErrorCode> {
        match self {
            Self::ErrorStored { error } => Some(*error),
            Self::ValueNotStored => None,
        }
    }
}
