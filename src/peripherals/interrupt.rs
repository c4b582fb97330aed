//! Interrupt callbacks
//!
//! Peripherals hand user callbacks to their interrupt handler through a
//! [`CallbackSlot`], which can be shared between thread mode and the ISR.

use core::cell::Cell;

use critical_section::Mutex;

/// Function run from interrupt context
pub type InterruptCallback = fn();

/// Callback that does nothing
pub fn noop_callback() {}

/// Interrupt safe storage for one callback
pub struct CallbackSlot {
    callback: Mutex<Cell<InterruptCallback>>,
}

impl CallbackSlot {
    /// Create a slot holding [`noop_callback`]
    pub const fn new() -> Self {
        CallbackSlot {
            callback: Mutex::new(Cell::new(noop_callback as InterruptCallback)),
        }
    }

    /// Replace the stored callback
    pub fn register(&self, callback: InterruptCallback) {
        critical_section::with(|cs| self.callback.borrow(cs).set(callback));
    }

    /// Remove the stored callback, leaving [`noop_callback`] in its place
    pub fn take(&self) -> InterruptCallback {
        critical_section::with(|cs| self.callback.borrow(cs).replace(noop_callback))
    }

    /// Run the stored callback
    ///
    /// The callback runs outside the critical section so it may itself
    /// register a new callback.
    #[inline]
    pub fn invoke(&self) {
        let callback = critical_section::with(|cs| self.callback.borrow(cs).get());
        callback();
    }
}

impl Default for CallbackSlot {
    fn default() -> Self {
        Self::new()
    }
}
