//! Logging macros for halcore
//!
//! Forwards to `defmt` on targets, to `log` on the host, and compiles to
//! nothing when neither backend is enabled.

/// Debug message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

/// Info message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

/// Error message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { defmt::error!($($arg)*) };
}

/// Trace message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

/// Warning message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

// Host backend
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[doc(hidden)]
pub use ::log as __log;

/// Debug message
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log::__log::debug!($($arg)*) };
}

/// Info message
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log::__log::info!($($arg)*) };
}

/// Error message
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log::__log::error!($($arg)*) };
}

/// Trace message
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { $crate::log::__log::trace!($($arg)*) };
}

/// Warning message
#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log::__log::warn!($($arg)*) };
}

// No-op versions when no backend is enabled
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[macro_export]
macro_rules! debug { ($($arg:tt)*) => {}; }
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[macro_export]
macro_rules! info { ($($arg:tt)*) => {}; }
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[macro_export]
macro_rules! error { ($($arg:tt)*) => {}; }
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[macro_export]
macro_rules! trace { ($($arg:tt)*) => {}; }
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[macro_export]
macro_rules! warn { ($($arg:tt)*) => {}; }
