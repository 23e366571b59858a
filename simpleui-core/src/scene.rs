//! Scenes
//!
//! A scene is a named set of widget ids plus the widget that receives
//! focus when the scene is entered. Widgets themselves live in the `Ui`
//! arena; a widget may appear in several scenes.

use heapless::{String, Vec};

use crate::error::UiError;
use crate::focus::FocusSettings;
use crate::id::{SceneId, WidgetId};
use crate::widget::Outline;

/// Maximum widgets referenced by one scene
pub const MAX_SCENE_WIDGETS: usize = 16;

/// Maximum parent scenes per scene
pub const MAX_PARENTS: usize = 4;

/// Maximum scene name length in bytes; longer names are truncated
pub const MAX_SCENE_NAME: usize = 16;

/// Named collection of widgets
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    name: String<MAX_SCENE_NAME>,
    widgets: Vec<WidgetId, MAX_SCENE_WIDGETS>,
    primary: Option<WidgetId>,
    parents: Vec<SceneId, MAX_PARENTS>,
    focus_settings: Option<FocusSettings>,
    outline: Option<Outline>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: &str) -> Self {
        let mut stored = String::new();
        for c in name.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        Self {
            name: stored,
            widgets: Vec::new(),
            primary: None,
            parents: Vec::new(),
            focus_settings: None,
            outline: None,
        }
    }

    /// Builder: add several widgets at once
    pub fn with_widgets(mut self, ids: &[WidgetId]) -> Result<Self, UiError> {
        for &id in ids {
            self.add_widget(id)?;
        }
        Ok(self)
    }

    /// Add a widget; adding one already present is a no-op
    pub fn add_widget(&mut self, id: WidgetId) -> Result<(), UiError> {
        if self.contains(id) {
            return Ok(());
        }
        self.widgets.push(id).map_err(|_| UiError::SceneFull)
    }

    /// Choose the widget focused when the scene is entered
    pub fn set_primary(&mut self, id: WidgetId) -> Result<(), UiError> {
        if !self.contains(id) {
            return Err(UiError::UnknownWidget);
        }
        self.primary = Some(id);
        Ok(())
    }

    /// Declare a scene that `back` may return to
    pub fn add_parent(&mut self, parent: SceneId) -> Result<(), UiError> {
        if self.parents.contains(&parent) {
            return Ok(());
        }
        self.parents.push(parent).map_err(|_| UiError::ParentsFull)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains(&id)
    }

    pub fn widgets(&self) -> &[WidgetId] {
        &self.widgets
    }

    pub fn parents(&self) -> &[SceneId] {
        &self.parents
    }

    pub fn primary(&self) -> Option<WidgetId> {
        self.primary
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Focus search settings overriding the UI defaults
    pub fn focus_settings(&self) -> Option<&FocusSettings> {
        self.focus_settings.as_ref()
    }

    pub fn set_focus_settings(&mut self, settings: Option<FocusSettings>) {
        self.focus_settings = settings;
    }

    /// Focus ring overriding the UI default
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    pub fn set_outline(&mut self, outline: Option<Outline>) {
        self.outline = outline;
    }
}
