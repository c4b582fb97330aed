//! Hardware abstraction scaffold for embedded Rust
//!
//! Provides:
//! - A generic module lifecycle for peripherals (settings, initialize, configure)
//! - Inactive "null object" peripherals that do nothing when used
//! - Frequency units used by peripheral settings
//! - A host-side harness for verifying polling loops (`std` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

#[cfg(all(target_arch = "arm", not(feature = "std")))]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;

pub mod core;
pub mod peripherals;

#[cfg(feature = "std")]
pub mod testing;

// ============ Re-exports ============

pub use crate::core::config;
pub use crate::core::config::*;
pub use crate::core::error;
pub use crate::core::error::{HalError, HalResult};
pub use crate::core::inactive;
pub use crate::core::inactive::{inactive, HasInactive};
pub use crate::core::module;
pub use crate::core::module::Module;
pub use crate::core::units;
pub use crate::core::units::{Hertz, RateExt};

pub use crate::peripherals::interrupt;
pub use crate::peripherals::register;
pub use crate::peripherals::system_timer;
pub use crate::peripherals::system_timer::{SystemTimer, SystemTimerSettings};
