//! Units of measure
//!
//! Only the quantities peripheral settings need. Durations use
//! `core::time::Duration`.

use core::fmt;
use core::time::Duration;

/// Frequency in hertz
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hertz(u32);

impl Hertz {
    /// Frequency from a value in Hz
    #[inline]
    pub const fn hz(value: u32) -> Self {
        Hertz(value)
    }

    /// Frequency from a value in kHz
    ///
    /// Clamped to `u32::MAX` Hz when out of range, see [`Hertz::checked_khz`].
    #[inline]
    pub const fn khz(value: u32) -> Self {
        Hertz(value.saturating_mul(1_000))
    }

    /// Frequency from a value in MHz
    ///
    /// Clamped to `u32::MAX` Hz when out of range, see [`Hertz::checked_mhz`].
    #[inline]
    pub const fn mhz(value: u32) -> Self {
        Hertz(value.saturating_mul(1_000_000))
    }

    /// Frequency from a value in kHz, `None` if it does not fit in u32 Hz
    #[inline]
    pub const fn checked_khz(value: u32) -> Option<Self> {
        match value.checked_mul(1_000) {
            Some(hz) => Some(Hertz(hz)),
            None => None,
        }
    }

    /// Frequency from a value in MHz, `None` if it does not fit in u32 Hz
    #[inline]
    pub const fn checked_mhz(value: u32) -> Option<Self> {
        match value.checked_mul(1_000_000) {
            Some(hz) => Some(Hertz(hz)),
            None => None,
        }
    }

    /// Raw value in Hz
    #[inline]
    pub const fn to_hz(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Period of one cycle, `None` for a zero frequency
    ///
    /// Rounded down to the nanosecond.
    pub const fn period(self) -> Option<Duration> {
        if self.0 == 0 {
            return None;
        }
        Some(Duration::from_nanos(1_000_000_000 / self.0 as u64))
    }
}

impl fmt::Display for Hertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Frequency literals: `1.khz()`, `48.mhz()`
///
/// Out of range values clamp like [`Hertz::khz`] and [`Hertz::mhz`].
pub trait RateExt {
    fn hz(self) -> Hertz;
    fn khz(self) -> Hertz;
    fn mhz(self) -> Hertz;
}

impl RateExt for u32 {
    #[inline]
    fn hz(self) -> Hertz {
        Hertz::hz(self)
    }

    #[inline]
    fn khz(self) -> Hertz {
        Hertz::khz(self)
    }

    #[inline]
    fn mhz(self) -> Hertz {
        Hertz::mhz(self)
    }
}
