//! Compile-time configuration for halcore
//!
//! These constants provide the defaults used by peripheral settings and the
//! testing harness.

use core::time::Duration;

/// Default system timer frequency in Hz (1 ms tick)
pub const CFG_SYSTEM_TIMER_FREQUENCY_HZ: u32 = 1_000;

/// Interrupt priority meaning "let the platform pick"
pub const CFG_INTERRUPT_PRIORITY_DEFAULT: i32 = -1;

/// Default grace period for polling verification
///
/// Long enough for a polling loop to be observed blocking on a loaded host,
/// short enough to keep test suites fast.
pub const CFG_POLL_GRACE_PERIOD: Duration = Duration::from_millis(5);
