//! UI configuration
//!
//! Defaults suit a 128x64 panel. With the `serde` feature the whole
//! config round-trips through postcard so a board can keep it in flash.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::focus::FocusSettings;
use crate::geometry::Point;
use crate::widget::Outline;

/// Magic number identifying a stored UI config
pub const CONFIG_MAGIC: u32 = 0x5355_4943; // "SUIC"

/// Current config layout version
pub const CONFIG_VERSION: u8 = 1;

/// Frame intervals in microseconds
pub const FPS30: u32 = 33_333;
pub const FPS60: u32 = 16_667;
pub const FPS90: u32 = 11_111;
pub const FPS120: u32 = 8_333;
pub const FPS144: u32 = 6_944;

/// Errors loading or storing a config blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bytes are not a valid encoding
    Deserialize,
    /// Output buffer too small
    Serialize,
    /// Magic number mismatch (blank or foreign data)
    InvalidMagic,
    /// Written by an incompatible version
    UnsupportedVersion,
}

/// Controller-wide settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Focus search used when a scene has no override
    pub focus: FocusSettings,
    /// Focus ring used when neither widget nor scene has one
    pub outline: Outline,
    /// Grow/shrink time for app widgets added with `Ui::add_app`
    pub app_duration_ms: u32,
    /// Target time between frames, see `Ui::frame_due`
    pub frame_interval_us: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl UiConfig {
    pub const fn new() -> Self {
        Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            screen_width: 128,
            screen_height: 64,
            focus: FocusSettings {
                max_distance: 64,
                accuracy: crate::focus::Quality::Medium,
                algorithm: crate::focus::Algorithm::Linear,
            },
            outline: Outline {
                thickness: 1,
                border_distance: 0,
                radius: 0,
                color: 0xFFFF,
            },
            app_duration_ms: 75,
            frame_interval_us: FPS60,
        }
    }

    /// Check magic and version
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.magic != CONFIG_MAGIC {
            return Err(ConfigError::InvalidMagic);
        }
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion);
        }
        Ok(())
    }

    pub fn screen_center(&self) -> Point {
        Point::new(self.screen_width as i32 / 2, self.screen_height as i32 / 2)
    }

    /// Decode a stored config
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }
}
