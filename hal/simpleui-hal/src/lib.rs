//! SimpleUI Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the UI core needs.
//! Board crates implement them on top of their chip HAL, while tests and
//! simulators use the in-memory implementations provided here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tick loop, board setup)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  simpleui-core (widgets, focus, input)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  simpleui-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input for push buttons (feature
//!   `embedded-hal` adapts any `embedded_hal::digital::InputPin`)
//! - [`time::MonotonicClock`] - Microsecond tick source sampled once per frame

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, SoftPin};
pub use time::{ManualClock, MonotonicClock};

#[cfg(feature = "embassy")]
pub use time::EmbassyClock;

#[cfg(feature = "embedded-hal")]
pub use gpio::HalInput;
