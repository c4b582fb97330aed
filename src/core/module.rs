//! Peripheral module lifecycle
//!
//! Every peripheral owns a settings value. Callers adjust the settings with
//! [`Module::configure`] and then apply them with [`Module::initialize`].
//! Initialization may be repeated to apply new settings.

use crate::error::HalResult;

/// Generic lifecycle shared by all peripherals
pub trait Module {
    /// Peripheral specific settings
    type Settings: Default;

    /// Current settings
    fn settings(&self) -> &Self::Settings;

    /// Mutable access to the settings
    fn settings_mut(&mut self) -> &mut Self::Settings;

    /// Apply the current settings to the hardware
    ///
    /// Implemented by each peripheral. Callers use [`Module::initialize`].
    fn module_initialize(&mut self) -> HalResult<()>;

    /// Initialize the peripheral with its current settings
    fn initialize(&mut self) -> HalResult<()> {
        crate::trace!("module initialize");
        let result = self.module_initialize();
        if result.is_err() {
            crate::warn!("module initialize failed");
        }
        result
    }

    /// Modify the settings in place
    ///
    /// Returns `self` so configuration can be chained before
    /// [`Module::initialize`].
    fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self::Settings),
        Self: Sized,
    {
        f(self.settings_mut());
        self
    }

    /// Replace the settings with their defaults
    fn reset_settings(&mut self) {
        *self.settings_mut() = Self::Settings::default();
    }
}
