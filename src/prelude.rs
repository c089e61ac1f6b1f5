//! Prelude module - common imports for VALOR
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use valor::prelude::*;
//! ```

// Re-export the container and its error model
pub use valor_core::{
    ContainerError, Errno, ErrorCode, ErrorDomain, LogicFault, Render, ResultExt, ValueOrError,
    try_extract,
};
