//! In-memory RGB565 framebuffer

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Color;
use crate::surface::{PixelSurface, SurfaceError};

/// Heap-backed RGB565 framebuffer, row-major
///
/// Out-of-bounds writes are clipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

impl Canvas {
    /// Black canvas of `width` x `height`
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel words
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.raw());
    }

    /// Pixel at (x, y), `None` when out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color(self.pixels[i]))
    }

    /// Write one pixel, `false` when clipped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color.raw();
                true
            }
            None => false,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl PixelSurface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), SurfaceError> {
        self.set_pixel(x, y, color);
        Ok(())
    }

    fn fill_screen(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.clear(color);
        Ok(())
    }
}

#[cfg(feature = "embedded-graphics")]
mod eg {
    use core::convert::Infallible;

    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;

    use super::Canvas;
    use crate::color::Color;

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                let _ = self.set_pixel(point.x, point.y, Color::from(color));
            }
            Ok(())
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(self.width, self.height)
        }
    }
}
