//! Host-side testing support
//!
//! Helpers for unit testing drivers against simulated hardware. Requires the
//! `std` feature since the harness coordinates real threads.

pub mod assertions;
pub mod polling;

pub use polling::{
    assert_polling, verify, PollVerification, SourceLocation, VerificationOutcome, VerifyError,
};
