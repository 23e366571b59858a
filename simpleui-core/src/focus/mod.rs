//! Focus state and search settings
//!
//! `Focus` is the controller's record of which widget holds focus. A change
//! is visible to widgets for exactly one frame: `has_changed` stays true
//! from the moment focus moves until the end-of-frame `commit`.

mod resolver;

pub use resolver::{find_in_cone, find_in_ray, resolve, Cone, Ray};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::id::{SceneId, WidgetId};

/// Sampling density of a focus search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

/// Shape of a focus search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Single ray along the requested direction
    #[default]
    Linear,
    /// 90 degree fan centred on the requested direction
    Cone,
}

/// Parameters of a directional focus search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FocusSettings {
    /// Search radius in pixels
    pub max_distance: u32,
    pub accuracy: Quality,
    pub algorithm: Algorithm,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            max_distance: 64,
            accuracy: Quality::Medium,
            algorithm: Algorithm::Linear,
        }
    }
}

/// Focus bookkeeping owned by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Focus {
    current: Option<WidgetId>,
    previous: Option<WidgetId>,
    active_scene: Option<SceneId>,
    previous_scene: Option<SceneId>,
    first_boot: bool,
}

impl Default for Focus {
    fn default() -> Self {
        Self::new()
    }
}

impl Focus {
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
            active_scene: None,
            previous_scene: None,
            first_boot: true,
        }
    }

    pub fn current(&self) -> Option<WidgetId> {
        self.current
    }

    pub fn previous(&self) -> Option<WidgetId> {
        self.previous
    }

    pub fn active_scene(&self) -> Option<SceneId> {
        self.active_scene
    }

    pub fn previous_scene(&self) -> Option<SceneId> {
        self.previous_scene
    }

    /// True until the first frame has been committed
    pub fn is_first_boot(&self) -> bool {
        self.first_boot
    }

    /// Focus moved since the last commit
    pub fn has_changed(&self) -> bool {
        self.current != self.previous
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.current == Some(id)
    }

    pub(crate) fn focus(&mut self, id: Option<WidgetId>) {
        self.current = id;
    }

    /// Enter `scene`, remembering the scene being left
    pub(crate) fn enter_scene(&mut self, scene: SceneId) {
        if self.active_scene != Some(scene) {
            self.previous_scene = self.active_scene;
        }
        self.active_scene = Some(scene);
    }

    /// End-of-frame: the change has been seen, stop reporting it
    pub(crate) fn commit(&mut self) {
        self.previous = self.current;
        self.first_boot = false;
    }
}
