//! Widget model
//!
//! Every widget is a `WidgetBase` (geometry, flags, animation, focus style)
//! plus a `WidgetKind` carrying the variant-specific state. Widgets never
//! point back at their controller; whatever they need about focus arrives
//! in a `RenderContext` each frame, and clicks are reported back as a
//! `ClickEvent` value.

mod app;
mod checkbox;
mod image;
mod outline;

pub use app::{AnimatedApp, Showing};
pub use checkbox::Checkbox;
pub use image::Image;
pub use outline::{draw_focus_outline, Outline};

use simpleui_display::{Color, PixelSurface, SurfaceError, Texture};

use crate::animation::Animation;
use crate::geometry::{center_of, corner_from_center, Bounds, Constraint, Point};
use crate::id::{ActionId, WidgetId};

/// How a focused widget is distinguished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FocusStyle {
    #[default]
    None,
    /// The widget animates itself (app widgets)
    Animation,
    /// A ring is drawn around the widget
    Outline,
    /// The widget is drawn in the outline colour
    Color,
}

/// How a widget's position argument is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placement {
    /// Position is the top-left corner
    Corner(Point),
    /// Position is the centre of the widget
    Centered(Point),
}

impl From<Point> for Placement {
    fn from(p: Point) -> Self {
        Placement::Corner(p)
    }
}

impl Placement {
    fn resolve(self, width: u32, height: u32) -> Point {
        match self {
            Placement::Corner(p) => p,
            Placement::Centered(c) => corner_from_center(c, width, height),
        }
    }
}

/// Result of clicking a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickEvent {
    /// An app widget was activated; `action` is whatever was bound to it
    Activated {
        id: WidgetId,
        action: Option<ActionId>,
    },
    /// A checkbox flipped to `state`
    Toggled { id: WidgetId, state: bool },
    /// A widget without click behaviour was clicked
    Clicked { id: WidgetId },
}

impl ClickEvent {
    /// Widget that was clicked
    pub fn id(&self) -> WidgetId {
        match *self {
            ClickEvent::Activated { id, .. }
            | ClickEvent::Toggled { id, .. }
            | ClickEvent::Clicked { id } => id,
        }
    }
}

/// Per-frame facts a widget needs from its controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    /// This widget holds focus
    pub focused: bool,
    /// Focus moved since the last frame
    pub focus_changed: bool,
    /// No frame has been committed yet
    pub first_boot: bool,
    /// Colour for `FocusStyle::Color`
    pub focus_color: Color,
}

/// State shared by every widget variant
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBase {
    position: Point,
    width: u32,
    height: u32,
    scaled_width: u32,
    scaled_height: u32,
    /// Can receive focus
    pub focusable: bool,
    /// Drawn by the scene; hidden widgets can still hold focus
    pub visible: bool,
    pub anim: Animation,
    pub focus_style: FocusStyle,
    /// Overrides the scene/UI focus ring
    pub focus_outline: Option<Outline>,
    /// Anchor used when drawn at a scaled size
    pub constraint: Constraint,
}

impl WidgetBase {
    fn new(width: u32, height: u32, placement: Placement, focus_style: FocusStyle) -> Self {
        Self {
            position: placement.resolve(width, height),
            width,
            height,
            scaled_width: width,
            scaled_height: height,
            focusable: true,
            visible: true,
            anim: Animation::default(),
            focus_style,
            focus_outline: None,
            constraint: Constraint::Center,
        }
    }

    /// Top-left corner of the nominal box
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, placement: impl Into<Placement>) {
        self.position = placement.into().resolve(self.width, self.height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size actually drawn last frame
    pub fn scaled_size(&self) -> (u32, u32) {
        (self.scaled_width, self.scaled_height)
    }

    /// Nominal box, used for hit testing
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        center_of(self.position, self.width, self.height)
    }

    /// Top-left corner of the drawn (scaled) image
    pub fn draw_point(&self) -> Point {
        self.position
            + self
                .constraint
                .offset(self.width, self.height, self.scaled_width, self.scaled_height)
    }

    pub(crate) fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.scaled_width = width;
        self.scaled_height = height;
    }

    pub(crate) fn set_scaled_size(&mut self, width: u32, height: u32) {
        self.scaled_width = width;
        self.scaled_height = height;
    }

    /// Draw colour for mono content given the widget's own colour
    pub(crate) fn tint(&self, own: Color, ctx: &RenderContext) -> Color {
        if self.focus_style == FocusStyle::Color && ctx.focused {
            ctx.focus_color
        } else {
            own
        }
    }
}

/// Variant-specific widget state
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind<'a> {
    /// Invisible box that only shows a focus ring
    Element,
    Image(Image<'a>),
    App(AnimatedApp<'a>),
    Checkbox(Checkbox),
}

/// A renderable, focusable UI element
#[derive(Debug, Clone, PartialEq)]
pub struct Widget<'a> {
    pub base: WidgetBase,
    kind: WidgetKind<'a>,
}

impl<'a> Widget<'a> {
    /// Plain box of the given size
    pub fn element(width: u32, height: u32, at: impl Into<Placement>) -> Self {
        Self {
            base: WidgetBase::new(width, height, at.into(), FocusStyle::None),
            kind: WidgetKind::Element,
        }
    }

    /// Static image, scaled by its animation unless a fixed scale is set
    pub fn image(texture: Texture<'a>, at: impl Into<Placement>) -> Self {
        Self {
            base: WidgetBase::new(texture.width, texture.height, at.into(), FocusStyle::None),
            kind: WidgetKind::Image(Image::new(texture)),
        }
    }

    /// Two-state app icon that grows from `unselected` to `selected` on focus
    pub fn app(
        unselected: Texture<'a>,
        selected: Texture<'a>,
        at: impl Into<Placement>,
        duration_ms: u32,
    ) -> Self {
        let app = AnimatedApp::new(unselected, selected);
        let mut base = WidgetBase::new(
            unselected.width,
            unselected.height,
            at.into(),
            FocusStyle::Animation,
        );
        base.anim = app.initial_animation(duration_ms);
        Self {
            base,
            kind: WidgetKind::App(app),
        }
    }

    /// Checkbox drawn with `outline`, filled with `fill` when checked
    pub fn checkbox(
        outline: Outline,
        width: u32,
        height: u32,
        fill: Color,
        at: impl Into<Placement>,
    ) -> Self {
        Self {
            base: WidgetBase::new(width, height, at.into(), FocusStyle::Outline),
            kind: WidgetKind::Checkbox(Checkbox::new(outline, width, height, fill)),
        }
    }

    /// Builder: change the focus style
    pub fn with_focus_style(mut self, style: FocusStyle) -> Self {
        self.base.focus_style = style;
        self
    }

    /// Builder: per-widget focus ring
    pub fn with_focus_outline(mut self, outline: Outline) -> Self {
        self.base.focus_outline = Some(outline);
        self
    }

    /// Builder: scaling anchor
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.base.constraint = constraint;
        self
    }

    /// Builder: replace the animation
    pub fn with_animation(mut self, anim: Animation) -> Self {
        self.base.anim = anim;
        self
    }

    pub fn kind(&self) -> &WidgetKind<'a> {
        &self.kind
    }

    pub fn image_ref(&self) -> Option<&Image<'a>> {
        match &self.kind {
            WidgetKind::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn image_mut(&mut self) -> Option<&mut Image<'a>> {
        match &mut self.kind {
            WidgetKind::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn app_ref(&self) -> Option<&AnimatedApp<'a>> {
        match &self.kind {
            WidgetKind::App(app) => Some(app),
            _ => None,
        }
    }

    pub fn app_mut(&mut self) -> Option<&mut AnimatedApp<'a>> {
        match &mut self.kind {
            WidgetKind::App(app) => Some(app),
            _ => None,
        }
    }

    pub fn checkbox_ref(&self) -> Option<&Checkbox> {
        match &self.kind {
            WidgetKind::Checkbox(checkbox) => Some(checkbox),
            _ => None,
        }
    }

    pub fn checkbox_mut(&mut self) -> Option<&mut Checkbox> {
        match &mut self.kind {
            WidgetKind::Checkbox(checkbox) => Some(checkbox),
            _ => None,
        }
    }

    /// Swap an image widget's texture, resizing its nominal box
    ///
    /// Returns `false` for other variants.
    pub fn set_texture(&mut self, texture: Texture<'a>) -> bool {
        match &mut self.kind {
            WidgetKind::Image(image) => {
                image.set_texture(texture);
                self.base.set_size(texture.width, texture.height);
                true
            }
            _ => false,
        }
    }

    /// Bind an action to an app widget
    ///
    /// Returns `false` for other variants.
    pub fn bind(&mut self, action: ActionId) -> bool {
        match &mut self.kind {
            WidgetKind::App(app) => {
                app.bind(action);
                true
            }
            _ => false,
        }
    }

    /// Interact with the widget
    pub fn click(&mut self, id: WidgetId) -> ClickEvent {
        match &mut self.kind {
            WidgetKind::App(app) => ClickEvent::Activated {
                id,
                action: app.action(),
            },
            WidgetKind::Checkbox(checkbox) => ClickEvent::Toggled {
                id,
                state: checkbox.toggle(),
            },
            WidgetKind::Element | WidgetKind::Image(_) => ClickEvent::Clicked { id },
        }
    }

    /// Advance animations and draw the widget
    ///
    /// Focus rings are drawn by the scene, not here.
    pub fn render<S: PixelSurface + ?Sized>(
        &mut self,
        ctx: &RenderContext,
        surface: &mut S,
        now_us: u64,
    ) -> Result<(), SurfaceError> {
        match &mut self.kind {
            WidgetKind::Element => {
                self.base.anim.update(now_us);
                Ok(())
            }
            WidgetKind::Image(image) => image.render(&mut self.base, ctx, surface, now_us),
            WidgetKind::App(app) => app.render(&mut self.base, ctx, surface, now_us),
            WidgetKind::Checkbox(checkbox) => {
                self.base.anim.update(now_us);
                checkbox.render(&self.base, ctx, surface)
            }
        }
    }
}

/// Draw a texture at `scale`, recording the drawn size in `base`
pub(crate) fn draw_scaled<S: PixelSurface + ?Sized>(
    base: &mut WidgetBase,
    surface: &mut S,
    texture: &Texture<'_>,
    scale: f32,
    color: Color,
) -> Result<(), SurfaceError> {
    if scale == 1.0 {
        base.set_scaled_size(texture.width, texture.height);
        return surface.draw_texture(base.draw_point().x, base.draw_point().y, texture, color);
    }

    let scaled = simpleui_display::scale(texture, scale);
    base.set_scaled_size(scaled.width, scaled.height);
    let at = base.draw_point();
    surface.draw_texture(at.x, at.y, &scaled.as_texture(), color)
}
