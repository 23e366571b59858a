//! Button input
//!
//! Buttons are sampled at a fixed minimum interval, which is enough to
//! ride out contact bounce on tactile switches. A click is the rising edge
//! between the last dispatched state and the current one, so it stays
//! reported until the caller `remember`s it.

use heapless::Vec;
use simpleui_hal::InputPin;

/// Minimum time between samples of one button
pub const BUTTON_SAMPLE_US: u64 = 2_500;

/// Minimum time between samples of a whole pad
pub const PAD_SAMPLE_US: u64 = 5_000;

/// Navigation input understood by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}

/// Debounced push button
#[derive(Debug)]
pub struct Button<P> {
    pin: P,
    active_low: bool,
    state: bool,
    prev: bool,
    clicked: bool,
    last_sample_us: Option<u64>,
}

impl<P: InputPin> Button<P> {
    /// Button that reads high when pressed
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
            state: false,
            prev: false,
            clicked: false,
            last_sample_us: None,
        }
    }

    /// Button wired to ground with a pull-up
    pub fn active_low(pin: P) -> Self {
        Self {
            active_low: true,
            ..Self::new(pin)
        }
    }

    /// Sample the pin if the sample interval has passed
    pub fn update(&mut self, now_us: u64) {
        if let Some(last) = self.last_sample_us {
            if now_us.saturating_sub(last) < BUTTON_SAMPLE_US {
                return;
            }
        }
        self.last_sample_us = Some(now_us);
        self.state = self.pin.is_high() != self.active_low;
        self.clicked = self.state && self.state != self.prev;
    }

    /// Pressed since the last `remember`
    pub fn clicked_once(&self) -> bool {
        self.clicked
    }

    /// Mark the current state as dispatched
    pub fn remember(&mut self) {
        self.prev = self.state;
        self.clicked = false;
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.state
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// Six-button navigation pad
#[derive(Debug)]
pub struct NavPad<P> {
    pub up: Button<P>,
    pub down: Button<P>,
    pub left: Button<P>,
    pub right: Button<P>,
    pub select: Button<P>,
    pub back: Button<P>,
    last_update_us: Option<u64>,
}

impl<P: InputPin> NavPad<P> {
    pub fn new(
        up: Button<P>,
        down: Button<P>,
        left: Button<P>,
        right: Button<P>,
        select: Button<P>,
        back: Button<P>,
    ) -> Self {
        Self {
            up,
            down,
            left,
            right,
            select,
            back,
            last_update_us: None,
        }
    }

    fn buttons_mut(&mut self) -> [(&mut Button<P>, InputEvent); 6] {
        [
            (&mut self.up, InputEvent::Up),
            (&mut self.down, InputEvent::Down),
            (&mut self.left, InputEvent::Left),
            (&mut self.right, InputEvent::Right),
            (&mut self.select, InputEvent::Select),
            (&mut self.back, InputEvent::Back),
        ]
    }

    /// Sample every button, at most once per `PAD_SAMPLE_US`
    pub fn update(&mut self, now_us: u64) {
        if let Some(last) = self.last_update_us {
            if now_us.saturating_sub(last) < PAD_SAMPLE_US {
                return;
            }
        }
        self.last_update_us = Some(now_us);
        for (button, _) in self.buttons_mut() {
            button.update(now_us);
        }
    }

    /// Pending clicks, in up/down/left/right/select/back order
    pub fn events(&self) -> Vec<InputEvent, 6> {
        let buttons = [
            (&self.up, InputEvent::Up),
            (&self.down, InputEvent::Down),
            (&self.left, InputEvent::Left),
            (&self.right, InputEvent::Right),
            (&self.select, InputEvent::Select),
            (&self.back, InputEvent::Back),
        ];
        let mut events = Vec::new();
        for (button, event) in buttons {
            if button.clicked_once() {
                // Capacity equals the number of buttons
                let _ = events.push(event);
            }
        }
        events
    }

    /// Mark every pending click as dispatched
    pub fn remember(&mut self) {
        for (button, _) in self.buttons_mut() {
            button.remember();
        }
    }

    /// Sample, collect clicks and mark them dispatched
    pub fn poll(&mut self, now_us: u64) -> Vec<InputEvent, 6> {
        self.update(now_us);
        let events = self.events();
        self.remember();
        events
    }
}
