//! Assertion helpers for peripheral tests

/// Assert that an expression fails with a specific error
///
/// Fails with a dedicated message when the expression succeeds, and with the
/// usual `assert_eq!` output when it fails with a different error.
///
/// ```
/// use halcore::{assert_error, HalError, SystemTimerSettings, Hertz};
///
/// let settings = SystemTimerSettings {
///     frequency: Hertz::hz(0),
///     ..Default::default()
/// };
/// assert_error!(settings.validate(), HalError::InvalidArgument);
/// ```
#[macro_export]
macro_rules! assert_error {
    ($expression:expr, $error:expr $(,)?) => {
        match $expression {
            ::core::result::Result::Ok(_) => {
                ::core::panic!(
                    "error was NOT returned when it should have been (expected {:?})",
                    $error
                )
            }
            ::core::result::Result::Err(err) => {
                ::core::assert_eq!(err, $error);
            }
        }
    };
}
