//! 32-bit peripheral register
//!
//! Atomic storage with the access patterns drivers use on real registers.
//! Tests use it as simulated hardware shared between the code under test and
//! the thread playing the role of the device.

use portable_atomic::{AtomicU32, Ordering};

use crate::error::{HalError, HalResult};

/// A 32-bit register
#[derive(Debug, Default)]
pub struct Register {
    value: AtomicU32,
}

impl Register {
    /// Create a register with a reset value
    pub const fn new(reset_value: u32) -> Self {
        Register {
            value: AtomicU32::new(reset_value),
        }
    }

    #[inline]
    pub fn read(&self) -> u32 {
        self.value.load(Ordering::Acquire)
    }

    #[inline]
    pub fn write(&self, value: u32) {
        self.value.store(value, Ordering::Release);
    }

    /// Set every bit in `mask`, returning the previous value
    #[inline]
    pub fn set_bits(&self, mask: u32) -> u32 {
        self.value.fetch_or(mask, Ordering::AcqRel)
    }

    /// Clear every bit in `mask`, returning the previous value
    #[inline]
    pub fn clear_bits(&self, mask: u32) -> u32 {
        self.value.fetch_and(!mask, Ordering::AcqRel)
    }

    /// Read-modify-write, returning the new value
    pub fn modify<F>(&self, mut f: F) -> u32
    where
        F: FnMut(u32) -> u32,
    {
        let mut new = 0;
        match self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |old| {
                new = f(old);
                Some(new)
            }) {
            Ok(_) | Err(_) => new,
        }
    }

    /// True when every bit in `mask` is set
    #[inline]
    pub fn is_set(&self, mask: u32) -> bool {
        self.read() & mask == mask
    }

    /// True when every bit in `mask` is clear
    #[inline]
    pub fn is_clear(&self, mask: u32) -> bool {
        self.read() & mask == 0
    }

    /// Spin until every bit in `mask` is set
    pub fn wait_until_set(&self, mask: u32) {
        while !self.is_set(mask) {
            spin_hint();
        }
    }

    /// Spin until every bit in `mask` is clear
    pub fn wait_until_clear(&self, mask: u32) {
        while !self.is_clear(mask) {
            spin_hint();
        }
    }

    /// Spin until every bit in `mask` is set, giving up after
    /// `max_iterations` reads
    pub fn wait_until_set_for(&self, mask: u32, max_iterations: u32) -> HalResult<()> {
        for _ in 0..max_iterations {
            if self.is_set(mask) {
                return Ok(());
            }
            spin_hint();
        }
        if self.is_set(mask) {
            Ok(())
        } else {
            crate::debug!("register wait timed out");
            Err(HalError::TimedOut)
        }
    }
}

#[inline(always)]
fn spin_hint() {
    #[cfg(target_arch = "arm")]
    cortex_m::asm::nop();

    #[cfg(not(target_arch = "arm"))]
    core::hint::spin_loop();
}
