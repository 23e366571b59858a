//! RGB565 colour values

/// Packed 16-bit RGB565 colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);

    /// Build from already-reduced channel values (5/6/5 bits)
    ///
    /// Channels are masked to their field width.
    pub const fn from_rgb565(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0x1F) << 11) | (((g as u16) & 0x3F) << 5) | ((b as u16) & 0x1F))
    }

    /// Build from 8-bit channels, dropping the low bits
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) string
    ///
    /// Returns `None` for anything that isn't six hex digits.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let r = (value >> 16) as u8;
        let g = (value >> 8) as u8;
        let b = value as u8;
        Some(Self::from_rgb888(r, g, b))
    }

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Whether the colour is pure black
    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

#[cfg(feature = "embedded-graphics")]
mod eg {
    use super::Color;
    use embedded_graphics::pixelcolor::raw::RawU16;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;

    impl From<Color> for Rgb565 {
        fn from(color: Color) -> Self {
            Rgb565::from(RawU16::new(color.0))
        }
    }

    impl From<Rgb565> for Color {
        fn from(color: Rgb565) -> Self {
            Color(color.into_storage())
        }
    }
}
