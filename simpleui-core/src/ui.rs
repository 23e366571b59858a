//! UI controller
//!
//! `Ui` owns the widget arena, the scenes and the focus state. One tick of
//! the application looks like:
//!
//! ```text
//! input events -> focus_direction / click / back
//!             -> render(surface, now_us)   (draw + end-of-frame commit)
//!             -> blit surface to the panel
//! ```
//!
//! Widgets are addressed by `WidgetId`, which is simply their arena index,
//! so a build sequence always produces the same ids.

use heapless::Vec;
use simpleui_display::{PixelSurface, SurfaceError, Texture};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::focus::{self, Focus, FocusSettings};
use crate::geometry::{center_of, corner_from_center, Direction, Point};
use crate::id::{SceneId, WidgetId};
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::widget::{
    draw_focus_outline, ClickEvent, FocusStyle, Outline, Placement, RenderContext, Widget,
};

/// Widget arena capacity
pub const MAX_WIDGETS: usize = 32;

/// Scene list capacity
pub const MAX_SCENES: usize = 8;

/// Side of the box a search starts from when nothing is focused
const VIRTUAL_ORIGIN: u32 = 10;

/// Widget, scene and focus controller
#[derive(Debug)]
pub struct Ui<'a> {
    widgets: Vec<Widget<'a>, MAX_WIDGETS>,
    scenes: Vec<Scene, MAX_SCENES>,
    focus: Focus,
    busy: bool,
    config: UiConfig,
}

impl Default for Ui<'_> {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl<'a> Ui<'a> {
    pub fn new(config: UiConfig) -> Self {
        Self {
            widgets: Vec::new(),
            scenes: Vec::new(),
            focus: Focus::new(),
            busy: false,
            config,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Store a widget, returning its handle
    pub fn add_widget(&mut self, widget: Widget<'a>) -> Result<WidgetId, UiError> {
        let id = WidgetId(self.widgets.len() as u16);
        self.widgets.push(widget).map_err(|_| UiError::WidgetsFull)?;
        Ok(id)
    }

    /// Store an app widget animated over the configured `app_duration_ms`
    pub fn add_app(
        &mut self,
        unselected: Texture<'a>,
        selected: Texture<'a>,
        at: impl Into<Placement>,
    ) -> Result<WidgetId, UiError> {
        let widget = Widget::app(unselected, selected, at, self.config.app_duration_ms);
        self.add_widget(widget)
    }

    /// Whether a frame is due `frame_interval_us` after `last_frame_us`
    pub fn frame_due(&self, last_frame_us: u64, now_us: u64) -> bool {
        now_us.saturating_sub(last_frame_us) >= self.config.frame_interval_us as u64
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget<'a>> {
        self.widgets.get(id.index())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget<'a>> {
        self.widgets.get_mut(id.index())
    }

    /// Store a scene whose widgets have already been added
    pub fn add_scene(&mut self, scene: Scene) -> Result<SceneId, UiError> {
        if scene.widgets().iter().any(|id| self.widget(*id).is_none()) {
            return Err(UiError::UnknownWidget);
        }
        let id = SceneId(self.scenes.len() as u8);
        self.scenes.push(scene).map_err(|_| UiError::ScenesFull)?;
        Ok(id)
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id.index())
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Option<&mut Scene> {
        self.scenes.get_mut(id.index())
    }

    /// First scene with the given name
    pub fn scene_by_name(&self, name: &str) -> Option<SceneId> {
        self.scenes
            .iter()
            .position(|scene| scene.name() == name)
            .map(|i| SceneId(i as u8))
    }

    /// Make `id` the active scene and focus its primary widget
    pub fn focus_scene(&mut self, id: SceneId) -> Result<(), UiError> {
        let primary = self.scene(id).ok_or(UiError::UnknownScene)?.primary();
        self.focus.enter_scene(id);
        self.focus.focus(primary);

        #[cfg(feature = "defmt")]
        defmt::debug!("scene -> {}, focus {}", id, primary);

        Ok(())
    }

    pub fn active_scene(&self) -> Option<SceneId> {
        self.focus.active_scene()
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.current()
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// A focus search ran this frame
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Focus a widget directly
    pub fn focus_widget(&mut self, id: WidgetId) -> Result<(), UiError> {
        if self.widget(id).is_none() {
            return Err(UiError::UnknownWidget);
        }
        self.focus.focus(Some(id));
        Ok(())
    }

    /// Focus search settings in effect for the active scene
    pub fn focus_settings(&self) -> FocusSettings {
        self.active_scene()
            .and_then(|id| self.scene(id))
            .and_then(|scene| scene.focus_settings().copied())
            .unwrap_or(self.config.focus)
    }

    fn search_origin(&self) -> Point {
        match self.focused().and_then(|id| self.widget(id)) {
            Some(widget) => widget.base.center(),
            None => {
                let corner =
                    corner_from_center(self.config.screen_center(), VIRTUAL_ORIGIN, VIRTUAL_ORIGIN);
                center_of(corner, VIRTUAL_ORIGIN, VIRTUAL_ORIGIN)
            }
        }
    }

    /// Move focus toward `degrees` (0 = right, 90 = up)
    ///
    /// Returns the newly focused widget, or `None` when nothing was found
    /// or a search already ran this frame. Focus is left unchanged in both
    /// cases.
    pub fn focus_direction(&mut self, degrees: i32) -> Option<WidgetId> {
        if self.busy {
            #[cfg(feature = "defmt")]
            defmt::trace!("focus {} ignored: busy", degrees);
            return None;
        }
        self.busy = true;

        let scene = self.active_scene().and_then(|id| self.scene(id))?;
        let settings = self.focus_settings();
        let origin = self.search_origin();
        let widgets = &self.widgets;
        let candidates = scene
            .widgets()
            .iter()
            .filter_map(|&id| widgets.get(id.index()).map(|w| (id, &w.base)));

        let found = focus::resolve(origin, degrees, &settings, self.focused(), candidates);
        if let Some(id) = found {
            self.focus.focus(Some(id));

            #[cfg(feature = "defmt")]
            defmt::debug!("focus {} -> {}", degrees, id);
        }
        found
    }

    pub fn focus_toward(&mut self, direction: Direction) -> Option<WidgetId> {
        self.focus_direction(direction.degrees())
    }

    /// Click the focused widget
    pub fn click(&mut self) -> Option<ClickEvent> {
        let id = self.focused()?;
        let event = self.widget_mut(id)?.click(id);

        #[cfg(feature = "defmt")]
        defmt::debug!("click {}", event);

        Some(event)
    }

    /// Return to the previous scene
    ///
    /// Only scenes that declare a parent can be left this way.
    pub fn back(&mut self) -> bool {
        let Some(active) = self.active_scene().and_then(|id| self.scene(id)) else {
            return false;
        };
        if active.parents().is_empty() {
            return false;
        }
        let Some(previous) = self.focus.previous_scene() else {
            return false;
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("back -> {}", previous);

        self.focus_scene(previous).is_ok()
    }

    /// Dispatch one navigation input
    ///
    /// Only `Select` can produce a click event.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<ClickEvent> {
        let direction = match event {
            InputEvent::Up => Direction::Up,
            InputEvent::Down => Direction::Down,
            InputEvent::Left => Direction::Left,
            InputEvent::Right => Direction::Right,
            InputEvent::Select => return self.click(),
            InputEvent::Back => {
                self.back();
                return None;
            }
        };
        self.focus_toward(direction);
        None
    }

    /// Focus ring for `widget` in `scene`
    fn outline_for(&self, widget: &Widget<'_>, scene: &Scene) -> Outline {
        widget
            .base
            .focus_outline
            .or_else(|| scene.outline().copied())
            .unwrap_or(self.config.outline)
    }

    /// Draw the active scene, then commit the frame's focus change
    ///
    /// The commit happens even when drawing fails; the first draw error
    /// is returned.
    pub fn render<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        now_us: u64,
    ) -> Result<(), SurfaceError> {
        let result = self.render_scene(surface, now_us);
        self.focus.commit();
        self.busy = false;
        result
    }

    fn render_scene<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        now_us: u64,
    ) -> Result<(), SurfaceError> {
        let Some(scene_id) = self.active_scene() else {
            return Ok(());
        };
        let Some(scene) = self.scenes.get(scene_id.index()) else {
            return Ok(());
        };

        let mut result = Ok(());
        for &id in scene.widgets() {
            let Some(widget) = self.widgets.get(id.index()) else {
                continue;
            };
            if !widget.base.visible {
                continue;
            }

            let outline = self.outline_for(widget, scene);
            let ctx = RenderContext {
                focused: self.focus.is_focused(id),
                focus_changed: self.focus.has_changed(),
                first_boot: self.focus.is_first_boot(),
                focus_color: outline.color(),
            };

            let Some(widget) = self.widgets.get_mut(id.index()) else {
                continue;
            };
            let mut drawn = widget.render(&ctx, surface, now_us);
            if drawn.is_ok() && ctx.focused && widget.base.focus_style == FocusStyle::Outline {
                let (w, h) = widget.base.scaled_size();
                drawn = draw_focus_outline(surface, &outline, widget.base.draw_point(), w, h);
            }
            if result.is_ok() {
                result = drawn;
            }
        }
        result
    }
}
