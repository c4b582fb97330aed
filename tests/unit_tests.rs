//! Unit tests for the peripheral scaffold
//!
//! These tests run on the host (not embedded target) to verify
//! the lifecycle, inactive peripherals, and register helpers.

#[cfg(test)]
mod error_tests {
    use halcore::error::HalError;

    #[test]
    fn test_error_codes() {
        assert_eq!(HalError::OperationNotPermitted.code(), 1);
        assert_eq!(HalError::Io.code(), 5);
        assert_eq!(HalError::DeviceBusy.code(), 16);
        assert_eq!(HalError::InvalidArgument.code(), 22);
        assert_eq!(HalError::TimedOut.code(), 110);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(HalError::InvalidArgument.to_string(), "invalid argument");
        assert_eq!(HalError::TimedOut.to_string(), "operation timed out");
    }

    #[test]
    fn test_assert_error_matches() {
        let result: Result<(), HalError> = Err(HalError::DeviceBusy);
        halcore::assert_error!(result, HalError::DeviceBusy);
    }

    #[test]
    #[should_panic(expected = "error was NOT returned")]
    fn test_assert_error_on_success() {
        let result: Result<u32, HalError> = Ok(7);
        halcore::assert_error!(result, HalError::Io);
    }

    #[test]
    #[should_panic]
    fn test_assert_error_on_wrong_error() {
        let result: Result<(), HalError> = Err(HalError::Io);
        halcore::assert_error!(result, HalError::TimedOut);
    }
}

#[cfg(test)]
mod config_tests {
    use core::time::Duration;
    use halcore::config::*;

    #[test]
    fn test_config_values() {
        assert_eq!(CFG_SYSTEM_TIMER_FREQUENCY_HZ, 1_000);
        assert!(CFG_INTERRUPT_PRIORITY_DEFAULT < 0, "Default priority must mean 'unset'");

        assert!(CFG_POLL_GRACE_PERIOD >= Duration::from_millis(1), "Grace period too short");
        assert!(CFG_POLL_GRACE_PERIOD <= Duration::from_millis(100), "Grace period too long");
    }
}

#[cfg(test)]
mod units_tests {
    use core::time::Duration;
    use halcore::units::{Hertz, RateExt};

    #[test]
    fn test_constructors() {
        assert_eq!(Hertz::khz(1), Hertz::hz(1_000));
        assert_eq!(Hertz::mhz(48).to_hz(), 48_000_000);
        assert_eq!(1.khz(), Hertz::hz(1_000));
        assert_eq!(12.mhz(), 12_000.khz());
        assert_eq!(5.hz().to_hz(), 5);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let first_overflow = u32::MAX / 1_000_000 + 1;
        assert_eq!(Hertz::mhz(first_overflow).to_hz(), u32::MAX);
        assert_eq!(first_overflow.mhz().to_hz(), u32::MAX);
        assert_eq!(Hertz::mhz(first_overflow - 1).to_hz(), (first_overflow - 1) * 1_000_000);

        assert_eq!(Hertz::khz(u32::MAX / 1_000 + 1).to_hz(), u32::MAX);
        assert_eq!(5_000.mhz(), Hertz::hz(u32::MAX));
    }

    #[test]
    fn test_checked_constructors() {
        let first_overflow = u32::MAX / 1_000_000 + 1;
        assert_eq!(Hertz::checked_mhz(first_overflow), None);
        assert_eq!(Hertz::checked_mhz(first_overflow - 1), Some(Hertz::mhz(first_overflow - 1)));

        assert_eq!(Hertz::checked_khz(u32::MAX / 1_000 + 1), None);
        assert_eq!(Hertz::checked_khz(48), Some(48.khz()));
    }

    #[test]
    fn test_period() {
        assert_eq!(1.khz().period(), Some(Duration::from_millis(1)));
        assert_eq!(100.hz().period(), Some(Duration::from_millis(10)));
        assert_eq!(3.hz().period(), Some(Duration::from_nanos(333_333_333)));
        assert_eq!(0.hz().period(), None);
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(1.khz() < 1.mhz());
        assert!(Hertz::default().is_zero());
        assert_eq!(format!("{}", 1.khz()), "1000 Hz");
    }
}

#[cfg(test)]
mod module_tests {
    use halcore::error::{HalError, HalResult};
    use halcore::module::Module;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct UartSettings {
        baud_rate: u32,
        parity: bool,
    }

    #[derive(Default)]
    struct FakeUart {
        settings: UartSettings,
        applied: Vec<UartSettings>,
    }

    impl Module for FakeUart {
        type Settings = UartSettings;

        fn settings(&self) -> &UartSettings {
            &self.settings
        }

        fn settings_mut(&mut self) -> &mut UartSettings {
            &mut self.settings
        }

        fn module_initialize(&mut self) -> HalResult<()> {
            if self.settings.baud_rate == 0 {
                return Err(HalError::InvalidArgument);
            }
            self.applied.push(self.settings.clone());
            Ok(())
        }
    }

    #[test]
    fn test_configure_then_initialize() {
        let mut uart = FakeUart::default();

        uart.configure(|s| s.baud_rate = 115_200)
            .configure(|s| s.parity = true)
            .initialize()
            .unwrap();

        assert_eq!(
            uart.applied,
            vec![UartSettings { baud_rate: 115_200, parity: true }]
        );
    }

    #[test]
    fn test_initialize_error_propagates() {
        let mut uart = FakeUart::default();
        assert_eq!(uart.initialize(), Err(HalError::InvalidArgument));
        assert!(uart.applied.is_empty());
    }

    #[test]
    fn test_reinitialize_with_new_settings() {
        let mut uart = FakeUart::default();
        uart.configure(|s| s.baud_rate = 9_600).initialize().unwrap();
        uart.configure(|s| s.baud_rate = 38_400).initialize().unwrap();

        assert_eq!(uart.applied.len(), 2);
        assert_eq!(uart.applied[1].baud_rate, 38_400);
    }

    #[test]
    fn test_reset_settings() {
        let mut uart = FakeUart::default();
        uart.configure(|s| {
            s.baud_rate = 9_600;
            s.parity = true;
        });
        uart.reset_settings();
        assert_eq!(uart.settings(), &UartSettings::default());
    }
}

#[cfg(test)]
mod inactive_tests {
    use halcore::inactive::{inactive, HasInactive};
    use halcore::module::Module;

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct PwmSettings {
        pub duty_cycle: u8,
    }

    pub trait Pwm: Module<Settings = PwmSettings> {}

    halcore::inactive_module! {
        /// PWM that never drives a pin
        pub struct InactivePwm: PwmSettings;
    }

    impl Pwm for InactivePwm {}

    impl HasInactive for dyn Pwm {
        type Inactive = InactivePwm;
    }

    fn start(pwm: &mut dyn Pwm) -> halcore::HalResult<()> {
        pwm.settings_mut().duty_cycle = 50;
        pwm.initialize()
    }

    #[test]
    fn test_inactive_accepts_settings() {
        let mut pwm = inactive::<dyn Pwm>();
        pwm.configure(|s| s.duty_cycle = 25);
        assert_eq!(pwm.settings().duty_cycle, 25);
        assert!(pwm.initialize().is_ok());
    }

    #[test]
    fn test_inactive_as_trait_object() {
        let mut pwm = inactive::<dyn Pwm>();
        assert!(start(&mut pwm).is_ok());
        assert_eq!(pwm.settings().duty_cycle, 50);
    }

    #[test]
    fn test_inactive_instances_are_independent() {
        let mut first = inactive::<dyn Pwm>();
        let second = inactive::<dyn Pwm>();
        first.configure(|s| s.duty_cycle = 99);
        assert_eq!(second.settings(), &PwmSettings::default());
    }
}

#[cfg(test)]
mod interrupt_tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use halcore::interrupt::{noop_callback, CallbackSlot};

    static FIRED: AtomicU32 = AtomicU32::new(0);
    static RE_REGISTERED: AtomicU32 = AtomicU32::new(0);
    static SLOT: CallbackSlot = CallbackSlot::new();

    fn count_fire() {
        FIRED.fetch_add(1, Ordering::SeqCst);
    }

    fn swap_self_out() {
        RE_REGISTERED.fetch_add(1, Ordering::SeqCst);
        SLOT.register(noop_callback);
    }

    #[test]
    fn test_register_and_invoke() {
        let slot = CallbackSlot::new();
        slot.invoke();
        assert_eq!(FIRED.load(Ordering::SeqCst), 0);

        slot.register(count_fire);
        slot.invoke();
        slot.invoke();
        assert_eq!(FIRED.load(Ordering::SeqCst), 2);

        let _ = slot.take();
        slot.invoke();
        assert_eq!(FIRED.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_may_register() {
        SLOT.register(swap_self_out);
        SLOT.invoke();
        SLOT.invoke();
        assert_eq!(RE_REGISTERED.load(Ordering::SeqCst), 1);
    }
}

#[cfg(test)]
mod register_tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use halcore::error::HalError;
    use halcore::register::Register;

    const READY: u32 = 1 << 0;
    const BUSY: u32 = 1 << 7;

    #[test]
    fn test_bit_operations() {
        let reg = Register::new(0x0000_00F0);

        assert_eq!(reg.set_bits(READY), 0xF0);
        assert!(reg.is_set(READY));
        assert!(reg.is_set(READY | BUSY));

        assert_eq!(reg.clear_bits(BUSY), 0xF1);
        assert!(reg.is_clear(BUSY));
        assert!(!reg.is_set(READY | BUSY));

        reg.write(0);
        assert_eq!(reg.read(), 0);
    }

    #[test]
    fn test_modify() {
        let reg = Register::new(0b1010);
        let new = reg.modify(|v| (v & !0b0011) | 0b0001);
        assert_eq!(new, 0b1001);
        assert_eq!(reg.read(), 0b1001);
    }

    #[test]
    fn test_wait_until_set_from_other_thread() {
        let reg = Arc::new(Register::new(0));
        let device = {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(2));
                reg.set_bits(READY);
            })
        };

        reg.wait_until_set(READY);
        assert!(reg.is_set(READY));
        device.join().unwrap();
    }

    #[test]
    fn test_wait_until_clear() {
        let reg = Register::new(0);
        reg.wait_until_clear(BUSY);
    }

    #[test]
    fn test_wait_until_set_for_times_out() {
        let reg = Register::new(0);
        assert_eq!(reg.wait_until_set_for(READY, 100), Err(HalError::TimedOut));

        reg.set_bits(READY);
        assert_eq!(reg.wait_until_set_for(READY, 0), Ok(()));
    }
}

#[cfg(test)]
mod system_timer_tests {
    use halcore::config::{CFG_INTERRUPT_PRIORITY_DEFAULT, CFG_SYSTEM_TIMER_FREQUENCY_HZ};
    use halcore::error::HalError;
    use halcore::inactive;
    use halcore::module::Module;
    use halcore::system_timer::{SystemTimer, SystemTimerSettings};
    use halcore::units::RateExt;

    fn tick() {}

    #[test]
    fn test_default_settings() {
        let settings = SystemTimerSettings::default();
        assert_eq!(settings.frequency.to_hz(), CFG_SYSTEM_TIMER_FREQUENCY_HZ);
        assert_eq!(settings.priority, CFG_INTERRUPT_PRIORITY_DEFAULT);
        assert!(settings.uses_default_priority());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_frequency() {
        let settings = SystemTimerSettings {
            frequency: 0.hz(),
            ..Default::default()
        };
        halcore::assert_error!(settings.validate(), HalError::InvalidArgument);
    }

    #[test]
    fn test_inactive_system_timer() {
        let mut timer = inactive::<dyn SystemTimer>();
        timer.configure(|s| {
            s.frequency = 10.khz();
            s.callback = tick;
            s.priority = 3;
        });

        assert!(timer.initialize().is_ok());
        assert_eq!(timer.settings().frequency, 10.khz());
        assert!(!timer.settings().uses_default_priority());

        let timer: &mut dyn SystemTimer = &mut timer;
        assert!(timer.initialize().is_ok());
    }
}
