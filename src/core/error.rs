//! Error types for halcore
//!
//! Peripherals report failures through `HalResult`. Each variant carries a
//! stable numeric code matching the POSIX errno it corresponds to, so codes
//! can be forwarded over wire protocols or compared in tests.

use thiserror::Error;

/// Peripheral error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum HalError {
    /// Operation not permitted in the current state
    #[error("operation not permitted")]
    OperationNotPermitted = 1,

    /// Low level I/O failure
    #[error("input/output error")]
    Io = 5,

    /// Device or resource busy
    #[error("device or resource busy")]
    DeviceBusy = 16,

    /// Peripheral has not been initialized
    #[error("no such device")]
    NotInitialized = 19,

    /// A setting or argument is out of range
    #[error("invalid argument")]
    InvalidArgument = 22,

    /// The peripheral does not support the requested operation
    #[error("operation not supported")]
    NotSupported = 95,

    /// Operation timed out
    #[error("operation timed out")]
    TimedOut = 110,
}

/// Result type alias for peripheral operations
pub type HalResult<T> = Result<T, HalError>;

impl HalError {
    /// Numeric error code
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }
}
