//! Error domain of the data-access layer.

use strum::{Display, EnumString, FromRepr, IntoStaticStr};
use valor_core::ErrorDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, FromRepr, IntoStaticStr)]
#[repr(i32)]
pub enum DbError {
    #[strum(to_string = "Success")]
    Success = 0,

    #[strum(to_string = "No Open DB")]
    NoOpenDb = 1,

    #[strum(to_string = "Query Interrupted")]
    QueryInterrupted = 2,

    #[strum(to_string = "No Active Session")]
    NoActiveSession = 3,
}

impl ErrorDomain for DbError {
    const NAME: &'static str = "DBError";

    fn to_code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }
}

valor_core::impl_error_domain!(DbError);
