//! Two-state animated app icon
//!
//! The icon shows its small `unselected` texture while unfocused. On focus
//! it scales up by `ratio = selected.width / unselected.width`, then swaps
//! to the `selected` texture drawn at 1.0. Losing focus runs the same
//! motion backwards. The animation always runs between `1.0` and `ratio`;
//! growing is the forward direction and shrinking the reversed one.

use simpleui_display::{Color, PixelSurface, SurfaceError, Texture};

use super::{draw_scaled, RenderContext, WidgetBase};
use crate::animation::{AnimState, Animation};
use crate::id::ActionId;

/// Which texture an app widget is drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Showing {
    Unselected,
    Selected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedApp<'a> {
    unselected: Texture<'a>,
    selected: Texture<'a>,
    showing: Showing,
    ratio: f32,
    color: Color,
    action: Option<ActionId>,
}

impl<'a> AnimatedApp<'a> {
    pub(crate) fn new(unselected: Texture<'a>, selected: Texture<'a>) -> Self {
        let ratio = if unselected.width == 0 {
            1.0
        } else {
            selected.width as f32 / unselected.width as f32
        };
        Self {
            unselected,
            selected,
            showing: Showing::Unselected,
            ratio,
            color: Color::WHITE,
            action: None,
        }
    }

    pub(crate) fn initial_animation(&self, duration_ms: u32) -> Animation {
        Animation::new(1.0, self.ratio, duration_ms)
    }

    /// Scale factor between the two textures
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    pub fn is_showing_selected(&self) -> bool {
        self.showing == Showing::Selected
    }

    /// Texture currently drawn
    pub fn active_texture(&self) -> &Texture<'a> {
        match self.showing {
            Showing::Unselected => &self.unselected,
            Showing::Selected => &self.selected,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn bind(&mut self, action: ActionId) {
        self.action = Some(action);
    }

    pub fn action(&self) -> Option<ActionId> {
        self.action
    }

    /// Start shrinking from the selected look back to the small icon
    fn begin_shrink(&mut self, anim: &mut Animation, now_us: u64) {
        anim.set_end(self.ratio);
        self.showing = Showing::Unselected;
        anim.set_reversed(true);
        anim.reset(now_us);
        anim.start(now_us);
    }

    /// Decide what the animation should do this frame
    fn drive(&mut self, anim: &mut Animation, ctx: &RenderContext, now_us: u64) {
        let state = anim.state();
        let running = state == AnimState::Running;
        let growing = !anim.is_reversed();

        if ctx.focus_changed || (ctx.first_boot && ctx.focused) {
            if ctx.focused {
                // Caught mid-shrink: turn around
                if running && !growing {
                    anim.invert(now_us);
                }
                if self.showing == Showing::Unselected && anim.state() == AnimState::Start {
                    anim.start(now_us);
                }
            } else {
                if self.showing == Showing::Selected && state == AnimState::Finished && growing {
                    self.begin_shrink(anim, now_us);
                }
                // Caught mid-grow: turn around
                if running && growing {
                    anim.invert(now_us);
                }
            }
            return;
        }

        if self.showing == Showing::Unselected && state == AnimState::Finished {
            if growing {
                // The selected texture at 1.0 matches the unselected one at `ratio`
                anim.set_end(1.0);
                self.showing = Showing::Selected;
                anim.pause();
            } else {
                anim.set_end(self.ratio);
                anim.set_reversed(false);
                anim.reset(now_us);
                anim.pause();
            }
        }

        if !ctx.focused && !anim.is_running() && self.showing == Showing::Selected {
            self.begin_shrink(anim, now_us);
        }

        if ctx.focused
            && anim.state() == AnimState::Start
            && !anim.is_enabled()
            && self.showing == Showing::Unselected
        {
            anim.start(now_us);
        }
    }

    pub(crate) fn render<S: PixelSurface + ?Sized>(
        &mut self,
        base: &mut WidgetBase,
        ctx: &RenderContext,
        surface: &mut S,
        now_us: u64,
    ) -> Result<(), SurfaceError> {
        self.drive(&mut base.anim, ctx, now_us);
        base.anim.update(now_us);

        let scale = base.anim.progress();
        let color = base.tint(self.color, ctx);
        let texture = *self.active_texture();
        draw_scaled(base, surface, &texture, scale, color)
    }
}
