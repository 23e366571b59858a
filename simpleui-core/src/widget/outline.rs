//! Outline styles and the focus ring

use simpleui_display::{Color, Corners, PixelSurface, SurfaceError};

use crate::geometry::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rectangular outline description
///
/// Used both for focus rings and for a checkbox's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outline {
    /// Number of one-pixel layers
    pub thickness: u32,
    /// Gap between the outlined box and the first layer
    pub border_distance: u32,
    /// Corner radius, 0 for square corners
    pub radius: u32,
    /// RGB565 colour
    pub color: u16,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            thickness: 1,
            border_distance: 0,
            radius: 0,
            color: Color::WHITE.raw(),
        }
    }
}

impl Outline {
    pub const fn new(thickness: u32, border_distance: u32, radius: u32, color: Color) -> Self {
        Self {
            thickness,
            border_distance,
            radius,
            color: color.raw(),
        }
    }

    pub const fn color(&self) -> Color {
        Color(self.color)
    }
}

/// Quarter-circle fillers for the four corners of a rounded layer
///
/// Drawn on every other layer so thick rounded outlines have no gaps
/// between rings.
pub(crate) fn draw_corner_fillers<S: PixelSurface + ?Sized>(
    surface: &mut S,
    pos: Point,
    width: i32,
    height: i32,
    radius: i32,
    color: Color,
) -> Result<(), SurfaceError> {
    let r = radius + 1;
    surface.draw_circle_helper(pos.x + r, pos.y + r, r, Corners::TOP_LEFT, color)?;
    surface.draw_circle_helper(pos.x + width - r - 1, pos.y + r, r, Corners::TOP_RIGHT, color)?;
    surface.draw_circle_helper(
        pos.x + width - r - 1,
        pos.y + height - r - 1,
        r,
        Corners::BOTTOM_RIGHT,
        color,
    )?;
    surface.draw_circle_helper(pos.x + r, pos.y + height - r - 1, r, Corners::BOTTOM_LEFT, color)
}

/// Draw a focus ring around a `width` x `height` box at `draw_point`
///
/// The first layer sits `border_distance + 1` pixels outside the box and
/// each further layer grows by one pixel on every side.
pub fn draw_focus_outline<S: PixelSurface + ?Sized>(
    surface: &mut S,
    outline: &Outline,
    draw_point: Point,
    width: u32,
    height: u32,
) -> Result<(), SurfaceError> {
    let color = outline.color();
    let mut pos = draw_point.offset(-(outline.border_distance as i32 + 1));
    let mut w = width as i32 + outline.border_distance as i32 * 2 + 2;
    let mut h = height as i32 + outline.border_distance as i32 * 2 + 2;
    let mut r = outline.radius as i32;

    for layer in 0..outline.thickness {
        if outline.radius != 0 {
            surface.draw_round_rect(pos.x, pos.y, w as u32, h as u32, r as u32, color)?;
            if layer % 2 == 0 {
                draw_corner_fillers(surface, pos, w, h, r, color)?;
            }
            r += 1;
        } else {
            surface.draw_rect(pos.x, pos.y, w as u32, h as u32, color)?;
        }
        w += 2;
        h += 2;
        pos = pos.offset(-1);
    }
    Ok(())
}
