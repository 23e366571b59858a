//! GPIO pin abstractions
//!
//! Buttons are read through this trait so the debounce logic in the core
//! stays independent of the chip HAL.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. A pressed button reads high.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

/// Input pin whose level is set by software
///
/// Used by simulators and tests to stand in for a physical button.
#[derive(Debug, Default)]
pub struct SoftPin {
    level: core::cell::Cell<bool>,
}

impl SoftPin {
    /// Create a pin reading low
    pub const fn new() -> Self {
        Self {
            level: core::cell::Cell::new(false),
        }
    }

    /// Drive the pin level
    pub fn set(&self, high: bool) {
        self.level.set(high);
    }
}

impl InputPin for SoftPin {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Adapter for pins implementing `embedded_hal::digital::InputPin`
///
/// embedded-hal pins are read through `&mut self` and may fail; a read
/// error or a re-entrant read counts as "not pressed".
#[cfg(feature = "embedded-hal")]
#[derive(Debug)]
pub struct HalInput<P> {
    pin: core::cell::RefCell<P>,
}

#[cfg(feature = "embedded-hal")]
impl<P: embedded_hal::digital::InputPin> HalInput<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: core::cell::RefCell::new(pin),
        }
    }

    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

#[cfg(feature = "embedded-hal")]
impl<P: embedded_hal::digital::InputPin> InputPin for HalInput<P> {
    fn is_high(&self) -> bool {
        self.pin
            .try_borrow_mut()
            .ok()
            .and_then(|mut pin| pin.is_high().ok())
            .unwrap_or(false)
    }
}
