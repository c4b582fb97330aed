//! Core abstractions
//!
//! Contains configuration, errors, units, and the peripheral module lifecycle.

pub mod config;
pub mod error;
pub mod inactive;
pub mod module;
pub mod units;
