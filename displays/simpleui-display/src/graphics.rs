//! Adapter from any embedded-graphics `DrawTarget` to `PixelSurface`

use core::iter;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::color::Color;
use crate::surface::{PixelSurface, SurfaceError};

/// Wraps a `DrawTarget<Color = Rgb565>` so widgets can draw on it directly
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn inner(&self) -> &D {
        &self.target
    }

    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> PixelSurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn size(&self) -> (u32, u32) {
        let size = OriginDimensions::size(&self.target);
        (size.width, size.height)
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), SurfaceError> {
        self.target
            .draw_iter(iter::once(Pixel(Point::new(x, y), color.into())))
            .map_err(|_| SurfaceError::Backend)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), SurfaceError> {
        let area = Rectangle::new(Point::new(x, y), Size::new(w, h));
        self.target
            .fill_solid(&area, color.into())
            .map_err(|_| SurfaceError::Backend)
    }
}
