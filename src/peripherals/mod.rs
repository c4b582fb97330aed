//! Peripheral interfaces
//!
//! Contains interrupt callback storage, register access, and the system timer.

pub mod interrupt;
pub mod register;
pub mod system_timer;
