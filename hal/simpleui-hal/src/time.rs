//! Monotonic time source
//!
//! All animation timing is computed from microsecond timestamps sampled
//! once at the start of each tick. `u64` microseconds do not wrap within
//! any realistic session.

use core::cell::Cell;

/// Monotonic microsecond clock
pub trait MonotonicClock {
    /// Microseconds since an arbitrary fixed origin (usually boot)
    fn now_us(&self) -> u64;

    /// Milliseconds since the origin
    fn now_ms(&self) -> u64 {
        self.now_us() / 1_000
    }
}

/// Clock advanced by hand
///
/// Used for host simulation and deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_us: Cell<u64>,
}

impl ManualClock {
    /// Create a clock at t = 0
    pub const fn new() -> Self {
        Self { now_us: Cell::new(0) }
    }

    /// Jump to an absolute timestamp
    pub fn set_us(&self, now_us: u64) {
        self.now_us.set(now_us);
    }

    /// Advance by `delta_us`
    pub fn advance_us(&self, delta_us: u64) {
        self.now_us.set(self.now_us.get().saturating_add(delta_us));
    }

    /// Advance by `delta_ms`
    pub fn advance_ms(&self, delta_ms: u64) {
        self.advance_us(delta_ms.saturating_mul(1_000));
    }
}

impl MonotonicClock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

/// Clock reading the embassy-time driver
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl MonotonicClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
