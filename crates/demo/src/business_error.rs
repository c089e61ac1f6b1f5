//! Error domain of the business-service layer.

use strum::{Display, EnumString, FromRepr, IntoStaticStr};
use valor_core::ErrorDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, FromRepr, IntoStaticStr)]
#[repr(i32)]
pub enum BusinessServiceError {
    #[strum(to_string = "Success")]
    Success = 0,

    #[strum(to_string = "Item not found")]
    ItemNotFound = 1,

    #[strum(to_string = "Operation canceled")]
    OperationCanceled = 2,
}

impl ErrorDomain for BusinessServiceError {
    const NAME: &'static str = "BusinessServiceCategory";

    fn to_code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }
}

valor_core::impl_error_domain!(BusinessServiceError);
