//! Polling verification harness
//!
//! Drivers often spin on a register until the hardware reports it is ready.
//! Such a loop cannot be instrumented from outside, so the harness observes
//! it by timing alone:
//!
//! 1. `arm` puts the simulated hardware in a state where `poll` must block.
//! 2. `poll` runs on the calling thread while a watchdog thread sleeps for
//!    one grace period and checks that `poll` has not returned.
//! 3. The watchdog runs `release`, sleeps again, and checks that `poll` has
//!    now returned.
//!
//! The watchdog is a scoped thread and is always joined before returning.
//! Whether `poll` has returned is only known to within a grace period; a
//! loaded host can in principle produce a false report. `poll` is never
//! cancelled, so a loop that never exits hangs the calling test.
//!
//! A panic in `release` is re-raised from `verify` once `poll` has returned.
//! If `poll` is still blocked one grace period after the panic, nothing can
//! unblock it and the process is aborted.
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use halcore::testing::PollVerification;
//!
//! let ready = AtomicBool::new(true);
//!
//! PollVerification::new(
//!     || ready.store(false, Ordering::SeqCst),
//!     || while !ready.load(Ordering::SeqCst) { std::hint::spin_loop() },
//!     || ready.store(true, Ordering::SeqCst),
//! )
//! .verify()
//! .unwrap();
//! ```

use core::panic::Location;
use std::panic::{self, AssertUnwindSafe};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::CFG_POLL_GRACE_PERIOD;

/// Call site a verification failure is reported against
pub type SourceLocation = &'static Location<'static>;

/// Result of one verification
pub type VerificationOutcome = Result<(), VerifyError>;

/// Ways a polling verification can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// `poll` returned before the first grace period elapsed
    #[error(
        "{file}:{line}: locking_function() did not result in the polling_function() locking. Failing this test!",
        file = .location.file(),
        line = .location.line()
    )]
    LockNotEstablished { location: SourceLocation },

    /// `poll` was still running one grace period after `release`
    #[error(
        "{file}:{line}: polling_function() was not released by release_function(). Failing this test!",
        file = .location.file(),
        line = .location.line()
    )]
    NotReleased { location: SourceLocation },
}

impl VerifyError {
    /// Call site the failure is reported against
    pub fn location(&self) -> SourceLocation {
        match self {
            VerifyError::LockNotEstablished { location } => *location,
            VerifyError::NotReleased { location } => *location,
        }
    }
}

/// One polling verification
///
/// Each operation runs exactly once. `arm` and `poll` run on the calling
/// thread, `release` runs on the watchdog thread.
pub struct PollVerification<A, P, R> {
    /// Sets up the environment so that `poll` blocks
    pub arm: A,

    /// The polling loop under test
    pub poll: P,

    /// Changes the environment so that `poll` returns
    ///
    /// May assert on the state `poll` left behind before releasing it. A
    /// panic here is propagated to the caller of `verify`, or aborts the
    /// process if `poll` stays blocked.
    pub release: R,

    /// Delay before each of the two checks
    pub grace_period: Duration,
}

impl<A, P, R> PollVerification<A, P, R>
where
    A: FnOnce(),
    P: FnOnce(),
    R: FnOnce() + Send,
{
    /// Create a verification using the default grace period
    pub fn new(arm: A, poll: P, release: R) -> Self {
        PollVerification {
            arm,
            poll,
            release,
            grace_period: CFG_POLL_GRACE_PERIOD,
        }
    }

    /// Override the grace period
    pub fn grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Run the verification, reporting failures against the caller
    #[track_caller]
    pub fn verify(self) -> VerificationOutcome {
        verify(self, Location::caller())
    }
}

/// Run a polling verification
///
/// Returns once `poll` has returned and the watchdog has made both checks.
/// The added time is about two grace periods beyond what `poll` itself takes.
///
/// # Returns
/// * `Ok(())` - `poll` blocked until `release` ran
/// * `Err(VerifyError::LockNotEstablished)` - `poll` did not block
/// * `Err(VerifyError::NotReleased)` - `poll` did not return after `release`
pub fn verify<A, P, R>(
    request: PollVerification<A, P, R>,
    location: SourceLocation,
) -> VerificationOutcome
where
    A: FnOnce(),
    P: FnOnce(),
    R: FnOnce() + Send,
{
    let PollVerification {
        arm,
        poll,
        release,
        grace_period,
    } = request;

    let still_polling = AtomicBool::new(true);

    crate::debug!("{}:{}: arming poll", location.file(), location.line());
    arm();

    let watchdog_result = thread::scope(|scope| {
        let watchdog =
            scope.spawn(|| watch(&still_polling, release, grace_period, location));

        poll();
        still_polling.store(false, Ordering::Release);

        watchdog.join()
    });

    match watchdog_result {
        Ok(outcome) => outcome,
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Run a polling verification and panic on failure
///
/// The panic message names the caller's file and line.
#[track_caller]
pub fn assert_polling<A, P, R>(request: PollVerification<A, P, R>)
where
    A: FnOnce(),
    P: FnOnce(),
    R: FnOnce() + Send,
{
    if let Err(err) = verify(request, Location::caller()) {
        panic!("{err}");
    }
}

fn watch<R>(
    still_polling: &AtomicBool,
    release: R,
    grace_period: Duration,
    location: SourceLocation,
) -> VerificationOutcome
where
    R: FnOnce(),
{
    thread::sleep(grace_period);

    let locked = still_polling.load(Ordering::Acquire);
    if !locked {
        crate::error!(
            "{}:{}: locking_function() did not result in the polling_function() locking",
            location.file(),
            location.line()
        );
    }

    // Release even after a lock failure so the environment is left clean.
    crate::debug!("{}:{}: releasing poll", location.file(), location.line());
    let release_result = panic::catch_unwind(AssertUnwindSafe(release));

    thread::sleep(grace_period);

    let released = !still_polling.load(Ordering::Acquire);

    if let Err(payload) = release_result {
        if !released {
            crate::error!(
                "{}:{}: release_function() panicked while polling_function() was polling, aborting",
                location.file(),
                location.line()
            );
            process::abort();
        }
        // Picked up by the join in `verify`
        panic::resume_unwind(payload);
    }

    if !released {
        crate::error!(
            "{}:{}: polling_function() was not released by release_function()",
            location.file(),
            location.line()
        );
    }

    if !locked {
        Err(VerifyError::LockNotEstablished { location })
    } else if !released {
        Err(VerifyError::NotReleased { location })
    } else {
        Ok(())
    }
}
