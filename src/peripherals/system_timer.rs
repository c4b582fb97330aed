//! System timer
//!
//! A system timer raises an interrupt at a fixed rate, typically 1 ms or
//! 10 ms, and is commonly used to hand control back to a scheduler.

use crate::config::{CFG_INTERRUPT_PRIORITY_DEFAULT, CFG_SYSTEM_TIMER_FREQUENCY_HZ};
use crate::error::{HalError, HalResult};
use crate::inactive::HasInactive;
use crate::interrupt::{noop_callback, InterruptCallback};
use crate::module::Module;
use crate::units::Hertz;

/// Settings for a system timer
#[derive(Debug, Clone, Copy)]
pub struct SystemTimerSettings {
    /// How often the callback runs. 1 kHz runs it every 1 ms.
    pub frequency: Hertz,

    /// Run on every tick
    pub callback: InterruptCallback,

    /// Interrupt priority, negative for the platform default
    pub priority: i32,
}

impl Default for SystemTimerSettings {
    fn default() -> Self {
        SystemTimerSettings {
            frequency: Hertz::hz(CFG_SYSTEM_TIMER_FREQUENCY_HZ),
            callback: noop_callback,
            priority: CFG_INTERRUPT_PRIORITY_DEFAULT,
        }
    }
}

impl SystemTimerSettings {
    /// Check the settings can be applied
    ///
    /// # Returns
    /// * `Ok(())` - Settings are usable
    /// * `Err(HalError::InvalidArgument)` - Frequency is zero
    pub fn validate(&self) -> HalResult<()> {
        if self.frequency.is_zero() {
            return Err(HalError::InvalidArgument);
        }
        Ok(())
    }

    /// True when the platform should choose the interrupt priority
    #[inline]
    pub fn uses_default_priority(&self) -> bool {
        self.priority < 0
    }
}

/// Fixed rate tick source
pub trait SystemTimer: Module<Settings = SystemTimerSettings> {}

crate::inactive_module! {
    /// System timer that never ticks
    pub struct InactiveSystemTimer: SystemTimerSettings;
}

impl SystemTimer for InactiveSystemTimer {}

impl HasInactive for dyn SystemTimer {
    type Inactive = InactiveSystemTimer;
}
