//! The `generic` domain: portable POSIX error conditions.
//!
//! Platform I/O failures enter the container through this domain. Codes
//! follow the Linux `errno` numbering; `std::io::ErrorKind` is mapped onto
//! them so the mapping is the same on every platform.

use std::io::ErrorKind;

use strum::{Display, EnumString, FromRepr, IntoStaticStr};

use crate::domain::ErrorDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, FromRepr, IntoStaticStr)]
#[repr(i32)]
pub enum Errno {
    #[strum(to_string = "Success")]
    Success = 0,

    #[strum(to_string = "Operation not permitted")]
    OperationNotPermitted = 1,

    #[strum(to_string = "No such file or directory")]
    NoSuchFileOrDirectory = 2,

    #[strum(to_string = "Interrupted system call")]
    Interrupted = 4,

    #[strum(to_string = "Input/output error")]
    Io = 5,

    #[strum(to_string = "Resource temporarily unavailable")]
    ResourceUnavailableTryAgain = 11,

    #[strum(to_string = "Permission denied")]
    PermissionDenied = 13,

    #[strum(to_string = "Device or resource busy")]
    DeviceOrResourceBusy = 16,

    #[strum(to_string = "File exists")]
    FileExists = 17,

    #[strum(to_string = "Invalid argument")]
    InvalidArgument = 22,

    #[strum(to_string = "Broken pipe")]
    BrokenPipe = 32,

    #[strum(to_string = "Operation not supported")]
    NotSupported = 95,

    #[strum(to_string = "Address already in use")]
    AddressInUse = 98,

    #[strum(to_string = "Connection reset by peer")]
    ConnectionReset = 104,

    #[strum(to_string = "Transport endpoint is not connected")]
    NotConnected = 107,

    #[strum(to_string = "Connection timed out")]
    TimedOut = 110,

    #[strum(to_string = "Connection refused")]
    ConnectionRefused = 111,

    #[strum(to_string = "Operation canceled")]
    OperationCanceled = 125,
}

impl ErrorDomain for Errno {
    const NAME: &'static str = "generic";

    fn to_code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }
}

crate::impl_error_domain!(Errno);

impl From<ErrorKind> for Errno {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => Self::NoSuchFileOrDirectory,
            ErrorKind::PermissionDenied => Self::PermissionDenied,
            ErrorKind::ConnectionRefused => Self::ConnectionRefused,
            ErrorKind::ConnectionReset => Self::ConnectionReset,
            ErrorKind::NotConnected => Self::NotConnected,
            ErrorKind::AddrInUse => Self::AddressInUse,
            ErrorKind::BrokenPipe => Self::BrokenPipe,
            ErrorKind::AlreadyExists => Self::FileExists,
            ErrorKind::WouldBlock => Self::ResourceUnavailableTryAgain,
            ErrorKind::InvalidInput => Self::InvalidArgument,
            ErrorKind::TimedOut => Self::TimedOut,
            ErrorKind::Interrupted => Self::Interrupted,
            ErrorKind::Unsupported => Self::NotSupported,
            ErrorKind::ResourceBusy => Self::DeviceOrResourceBusy,
            _ => Self::Io,
        }
    }
}
