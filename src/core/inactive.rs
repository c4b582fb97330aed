//! Inactive peripherals
//!
//! Drivers that depend on an optional peripheral take it as a trait object.
//! When the board has no such peripheral, hand the driver an inactive one:
//! it accepts every setting and initializes successfully without touching
//! hardware.
//!
//! ```
//! use halcore::{inactive, Module, SystemTimer};
//!
//! let mut timer = inactive::<dyn SystemTimer>();
//! assert!(timer.initialize().is_ok());
//! ```

/// Maps a peripheral interface to its inactive implementation
///
/// Implemented for the trait object type of each peripheral interface,
/// e.g. `dyn SystemTimer`.
pub trait HasInactive {
    /// The do-nothing implementation of the interface
    type Inactive: Default;
}

/// Create a fresh inactive instance of peripheral interface `T`
#[inline]
pub fn inactive<T>() -> T::Inactive
where
    T: ?Sized + HasInactive,
{
    T::Inactive::default()
}

/// Generate an inactive module type for a settings type
///
/// The generated struct stores its settings so callers can still configure
/// it, and its `module_initialize` always succeeds.
///
/// ```
/// use halcore::{inactive_module, Module};
///
/// #[derive(Default)]
/// pub struct AdcSettings {
///     pub channel: u8,
/// }
///
/// inactive_module! {
///     /// ADC that never converts
///     pub struct InactiveAdc: AdcSettings;
/// }
///
/// let mut adc = InactiveAdc::default();
/// adc.configure(|s| s.channel = 3);
/// assert_eq!(adc.settings().channel, 3);
/// assert!(adc.initialize().is_ok());
/// ```
#[macro_export]
macro_rules! inactive_module {
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $settings:ty;) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            settings: $settings,
        }

        impl $crate::module::Module for $name {
            type Settings = $settings;

            fn settings(&self) -> &$settings {
                &self.settings
            }

            fn settings_mut(&mut self) -> &mut $settings {
                &mut self.settings
            }

            fn module_initialize(&mut self) -> $crate::error::HalResult<()> {
                Ok(())
            }
        }
    };
}
