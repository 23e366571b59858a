//! Checkbox widget

use simpleui_display::{Color, PixelSurface, SurfaceError};

use super::outline::draw_corner_fillers;
use super::{Outline, RenderContext, WidgetBase};

/// Boolean toggle drawn as a border with an optional fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    outline: Outline,
    fill: Color,
    state: bool,
}

impl Checkbox {
    pub(crate) fn new(mut outline: Outline, width: u32, height: u32, fill: Color) -> Self {
        // Larger radii would make the rounded corners overlap
        let max_radius = (width.min(height) as f32 * 0.5) as u32;
        outline.radius = outline.radius.min(max_radius);
        Self {
            outline,
            fill,
            state: false,
        }
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Flip the state, returning the new one
    pub fn toggle(&mut self) -> bool {
        self.state = !self.state;
        self.state
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn fill_color(&self) -> Color {
        self.fill
    }

    pub fn set_fill_color(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Border layers, drawn from the outside in
    fn draw_border<S: PixelSurface + ?Sized>(
        &self,
        base: &WidgetBase,
        color: Color,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        let mut pos = base.draw_point();
        let mut w = base.width() as i32;
        let mut h = base.height() as i32;
        let mut r = (self.outline.radius + self.outline.thickness) as i32;

        for layer in (1..=self.outline.thickness).rev() {
            if w <= 0 || h <= 0 {
                break;
            }
            if self.outline.radius != 0 {
                surface.draw_round_rect(pos.x, pos.y, w as u32, h as u32, r.max(0) as u32, color)?;
                if layer % 2 == 0 {
                    draw_corner_fillers(surface, pos, w, h, r, color)?;
                }
                r -= 1;
            } else {
                surface.draw_rect(pos.x, pos.y, w as u32, h as u32, color)?;
            }
            w -= 2;
            h -= 2;
            pos = pos.offset(1);
        }
        Ok(())
    }

    pub(crate) fn render<S: PixelSurface + ?Sized>(
        &self,
        base: &WidgetBase,
        ctx: &RenderContext,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        let border = base.tint(self.outline.color(), ctx);
        self.draw_border(base, border, surface)?;

        if !self.state {
            return Ok(());
        }

        let inset = self.outline.border_distance + self.outline.thickness;
        let at = base.draw_point().offset(inset as i32);
        let w = base.width().saturating_sub(inset * 2);
        let h = base.height().saturating_sub(inset * 2);
        if self.outline.radius != 0 {
            let r = self.outline.radius.saturating_sub(self.outline.border_distance);
            surface.fill_round_rect(at.x, at.y, w, h, r, self.fill)
        } else {
            surface.fill_rect(at.x, at.y, w, h, self.fill)
        }
    }
}
