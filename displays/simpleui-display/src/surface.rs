//! Pixel surface trait
//!
//! Defines the interface widgets render through. Implementors provide
//! single-pixel writes; lines, rectangles, rounded corners and bitmaps
//! are built on top and can be overridden where the backend has faster
//! primitives.

use crate::color::Color;
use crate::texture::{Pixels, Texture};

/// Surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Bitmap slice shorter than its declared dimensions
    BufferTooSmall,
    /// The underlying draw target reported an error
    Backend,
}

/// Corner selection for quarter-circle helpers
///
/// Bit values follow the usual GFX convention so callers can combine them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Corners(pub u8);

impl Corners {
    pub const TOP_LEFT: Corners = Corners(0x1);
    pub const TOP_RIGHT: Corners = Corners(0x2);
    pub const BOTTOM_RIGHT: Corners = Corners(0x4);
    pub const BOTTOM_LEFT: Corners = Corners(0x8);
    pub const ALL: Corners = Corners(0xF);

    /// Check whether every corner in `other` is selected
    pub const fn contains(self, other: Corners) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for Corners {
    type Output = Corners;

    fn bitor(self, rhs: Corners) -> Corners {
        Corners(self.0 | rhs.0)
    }
}

/// Raster sink for UI rendering
///
/// All coordinates are signed surface pixels; writes outside the surface
/// are clipped by the implementation, never reported as errors.
pub trait PixelSurface {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Write a single pixel
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), SurfaceError>;

    /// Fill the whole surface
    fn fill_screen(&mut self, color: Color) -> Result<(), SurfaceError> {
        let (w, h) = self.size();
        self.fill_rect(0, 0, w, h, color)
    }

    /// Horizontal line of `len` pixels starting at (x, y)
    fn draw_hline(&mut self, x: i32, y: i32, len: u32, color: Color) -> Result<(), SurfaceError> {
        for i in 0..len as i32 {
            self.draw_pixel(x + i, y, color)?;
        }
        Ok(())
    }

    /// Vertical line of `len` pixels starting at (x, y)
    fn draw_vline(&mut self, x: i32, y: i32, len: u32, color: Color) -> Result<(), SurfaceError> {
        for i in 0..len as i32 {
            self.draw_pixel(x, y + i, color)?;
        }
        Ok(())
    }

    /// Rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), SurfaceError> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.draw_hline(x, y, w, color)?;
        self.draw_hline(x, y + h as i32 - 1, w, color)?;
        self.draw_vline(x, y, h, color)?;
        self.draw_vline(x + w as i32 - 1, y, h, color)
    }

    /// Filled rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), SurfaceError> {
        for row in 0..h as i32 {
            self.draw_hline(x, y + row, w, color)?;
        }
        Ok(())
    }

    /// Quarter-circle outlines around (x0, y0)
    fn draw_circle_helper(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        corners: Corners,
        color: Color,
    ) -> Result<(), SurfaceError> {
        let mut f = 1 - r;
        let mut dd_f_x = 1;
        let mut dd_f_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y {
            if f >= 0 {
                y -= 1;
                dd_f_y += 2;
                f += dd_f_y;
            }
            x += 1;
            dd_f_x += 2;
            f += dd_f_x;

            if corners.contains(Corners::BOTTOM_RIGHT) {
                self.draw_pixel(x0 + x, y0 + y, color)?;
                self.draw_pixel(x0 + y, y0 + x, color)?;
            }
            if corners.contains(Corners::TOP_RIGHT) {
                self.draw_pixel(x0 + x, y0 - y, color)?;
                self.draw_pixel(x0 + y, y0 - x, color)?;
            }
            if corners.contains(Corners::BOTTOM_LEFT) {
                self.draw_pixel(x0 - y, y0 + x, color)?;
                self.draw_pixel(x0 - x, y0 + y, color)?;
            }
            if corners.contains(Corners::TOP_LEFT) {
                self.draw_pixel(x0 - y, y0 - x, color)?;
                self.draw_pixel(x0 - x, y0 - y, color)?;
            }
        }
        Ok(())
    }

    /// Filled quarter circles, used by `fill_round_rect`
    ///
    /// `corners` bit 0 fills the right half, bit 1 the left half; `delta`
    /// stretches the vertical spans.
    fn fill_circle_helper(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        corners: Corners,
        delta: i32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        let mut f = 1 - r;
        let mut dd_f_x = 1;
        let mut dd_f_y = -2 * r;
        let mut x = 0;
        let mut y = r;
        let mut px = x;
        let mut py = y;
        let delta = delta + 1;

        while x < y {
            if f >= 0 {
                y -= 1;
                dd_f_y += 2;
                f += dd_f_y;
            }
            x += 1;
            dd_f_x += 2;
            f += dd_f_x;

            if x < y + 1 {
                let len = (2 * y + delta).max(0) as u32;
                if corners.contains(Corners::TOP_LEFT) {
                    self.draw_vline(x0 + x, y0 - y, len, color)?;
                }
                if corners.contains(Corners::TOP_RIGHT) {
                    self.draw_vline(x0 - x, y0 - y, len, color)?;
                }
            }
            if y != py {
                let len = (2 * px + delta).max(0) as u32;
                if corners.contains(Corners::TOP_LEFT) {
                    self.draw_vline(x0 + py, y0 - px, len, color)?;
                }
                if corners.contains(Corners::TOP_RIGHT) {
                    self.draw_vline(x0 - py, y0 - px, len, color)?;
                }
                py = y;
            }
            px = x;
        }
        Ok(())
    }

    /// Rounded rectangle outline
    fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        r: u32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let r = r.min(w.min(h) / 2);
        let ri = r as i32;
        let (wi, hi) = (w as i32, h as i32);

        self.draw_hline(x + ri, y, w - 2 * r, color)?;
        self.draw_hline(x + ri, y + hi - 1, w - 2 * r, color)?;
        self.draw_vline(x, y + ri, h - 2 * r, color)?;
        self.draw_vline(x + wi - 1, y + ri, h - 2 * r, color)?;

        self.draw_circle_helper(x + ri, y + ri, ri, Corners::TOP_LEFT, color)?;
        self.draw_circle_helper(x + wi - ri - 1, y + ri, ri, Corners::TOP_RIGHT, color)?;
        self.draw_circle_helper(x + wi - ri - 1, y + hi - ri - 1, ri, Corners::BOTTOM_RIGHT, color)?;
        self.draw_circle_helper(x + ri, y + hi - ri - 1, ri, Corners::BOTTOM_LEFT, color)
    }

    /// Filled rounded rectangle
    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        r: u32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let r = r.min(w.min(h) / 2);
        let ri = r as i32;
        let (wi, hi) = (w as i32, h as i32);

        self.fill_rect(x + ri, y, w - 2 * r, h, color)?;
        self.fill_circle_helper(x + wi - ri - 1, y + ri, ri, Corners::TOP_LEFT, hi - 2 * ri - 1, color)?;
        self.fill_circle_helper(x + ri, y + ri, ri, Corners::TOP_RIGHT, hi - 2 * ri - 1, color)
    }

    /// 1-bit bitmap, MSB first, rows padded to whole bytes
    ///
    /// Set bits are drawn in `color`; clear bits are transparent.
    fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        w: u32,
        h: u32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        let byte_width = w.div_ceil(8) as usize;
        if bitmap.len() < byte_width * h as usize {
            return Err(SurfaceError::BufferTooSmall);
        }

        for j in 0..h as usize {
            let row = &bitmap[j * byte_width..(j + 1) * byte_width];
            for i in 0..w as usize {
                if row[i / 8] & (0x80 >> (i % 8)) != 0 {
                    self.draw_pixel(x + i as i32, y + j as i32, color)?;
                }
            }
        }
        Ok(())
    }

    /// RGB565 bitmap, row-major
    fn draw_rgb_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u16],
        w: u32,
        h: u32,
    ) -> Result<(), SurfaceError> {
        let (wu, hu) = (w as usize, h as usize);
        if bitmap.len() < wu * hu {
            return Err(SurfaceError::BufferTooSmall);
        }

        for j in 0..hu {
            for i in 0..wu {
                self.draw_pixel(x + i as i32, y + j as i32, Color(bitmap[j * wu + i]))?;
            }
        }
        Ok(())
    }

    /// Draw a texture in whichever pixel format it carries
    ///
    /// `mono_color` tints monochrome textures and is ignored for RGB565.
    fn draw_texture(
        &mut self,
        x: i32,
        y: i32,
        texture: &Texture<'_>,
        mono_color: Color,
    ) -> Result<(), SurfaceError> {
        match texture.pixels() {
            Pixels::Mono(data) => self.draw_bitmap(x, y, data, texture.width, texture.height, mono_color),
            Pixels::Rgb565(data) => self.draw_rgb_bitmap(x, y, data, texture.width, texture.height),
        }
    }
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), SurfaceError> {
        (**self).draw_pixel(x, y, color)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), SurfaceError> {
        (**self).fill_rect(x, y, w, h, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    const ON: Color = Color::WHITE;

    fn lit(canvas: &Canvas) -> usize {
        canvas.pixels().iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn test_rect_outline() {
        let mut canvas = Canvas::new(16, 16);
        canvas.draw_rect(2, 2, 4, 3, ON).unwrap();

        assert_eq!(canvas.pixel(2, 2), Some(ON));
        assert_eq!(canvas.pixel(5, 4), Some(ON));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
        // 2*4 + 2*(3-2) perimeter pixels
        assert_eq!(lit(&canvas), 10);
    }

    #[test]
    fn test_zero_sized_shapes_draw_nothing() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_rect(0, 0, 0, 5, ON).unwrap();
        canvas.draw_round_rect(0, 0, 5, 0, 2, ON).unwrap();
        canvas.fill_round_rect(0, 0, 0, 0, 2, ON).unwrap();
        assert_eq!(lit(&canvas), 0);
    }

    #[test]
    fn test_bitmap_msb_first() {
        let mut canvas = Canvas::new(16, 4);
        // 10 px wide -> 2 bytes per row
        let bitmap = [0b1000_0001, 0b0100_0000, 0, 0];
        canvas.draw_bitmap(0, 0, &bitmap, 10, 2, ON).unwrap();

        assert_eq!(canvas.pixel(0, 0), Some(ON));
        assert_eq!(canvas.pixel(7, 0), Some(ON));
        assert_eq!(canvas.pixel(9, 0), Some(ON));
        assert_eq!(canvas.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(lit(&canvas), 3);
    }

    #[test]
    fn test_bitmap_too_short() {
        let mut canvas = Canvas::new(8, 8);
        let result = canvas.draw_bitmap(0, 0, &[0xFF], 8, 2, ON);
        assert_eq!(result, Err(SurfaceError::BufferTooSmall));

        let result = canvas.draw_rgb_bitmap(0, 0, &[1, 2, 3], 2, 2);
        assert_eq!(result, Err(SurfaceError::BufferTooSmall));
    }

    #[test]
    fn test_round_rect_skips_corners() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_round_rect(0, 0, 12, 12, 4, ON).unwrap();

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(6, 0), Some(ON));
        assert_eq!(canvas.pixel(0, 6), Some(ON));
    }

    #[test]
    fn test_fill_round_rect_covers_center() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_round_rect(0, 0, 12, 10, 3, ON).unwrap();

        assert_eq!(canvas.pixel(6, 5), Some(ON));
        assert_eq!(canvas.pixel(0, 5), Some(ON));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_corners_combine() {
        let both = Corners::TOP_LEFT | Corners::BOTTOM_RIGHT;
        assert!(both.contains(Corners::TOP_LEFT));
        assert!(both.contains(Corners::BOTTOM_RIGHT));
        assert!(!both.contains(Corners::TOP_RIGHT));
        assert!(Corners::ALL.contains(both));
    }
}
