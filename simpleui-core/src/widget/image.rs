//! Image widget

use simpleui_display::{Color, PixelSurface, SurfaceError, Texture};

use super::{draw_scaled, RenderContext, WidgetBase};

/// A texture drawn at a fixed or animated scale
#[derive(Debug, Clone, PartialEq)]
pub struct Image<'a> {
    texture: Texture<'a>,
    scale: f32,
    fixed_scale: bool,
    color: Color,
}

impl<'a> Image<'a> {
    pub(crate) fn new(texture: Texture<'a>) -> Self {
        Self {
            texture,
            scale: 1.0,
            fixed_scale: false,
            color: Color::WHITE,
        }
    }

    /// Fix the drawing scale
    ///
    /// A negative factor hands scaling back to the widget's animation.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.fixed_scale = scale >= 0.0;
    }

    /// Scale in effect: the fixed factor, or `None` when animation-driven
    pub fn scale(&self) -> Option<f32> {
        self.fixed_scale.then_some(self.scale)
    }

    /// Tint for monochrome textures
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn texture(&self) -> &Texture<'a> {
        &self.texture
    }

    pub(crate) fn set_texture(&mut self, texture: Texture<'a>) {
        self.texture = texture;
    }

    pub(crate) fn render<S: PixelSurface + ?Sized>(
        &mut self,
        base: &mut WidgetBase,
        ctx: &RenderContext,
        surface: &mut S,
        now_us: u64,
    ) -> Result<(), SurfaceError> {
        base.anim.update(now_us);
        let scale = if self.fixed_scale {
            self.scale
        } else {
            base.anim.progress()
        };
        let color = base.tint(self.color, ctx);
        draw_scaled(base, surface, &self.texture, scale, color)
    }
}
