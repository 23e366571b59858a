//! Board-agnostic core of the SimpleUI widget layer
//!
//! This crate contains everything between the button lines and the pixel
//! surface:
//!
//! - Time-based animation engine (pause/resume/flip/loop/breathing)
//! - Geometry and widget/scene handles
//! - Widget model (element, image, animated app, checkbox)
//! - Scenes and the directional focus resolver (ray and cone search)
//! - The `Ui` controller, button debouncing and diagnostic commands
//! - Configuration types
//!
//! All timing is passed in as microsecond timestamps, so the whole crate
//! runs deterministically on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod diag;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod id;
pub mod input;
pub mod scene;
pub mod ui;
pub mod widget;

pub use animation::{AnimState, Animation, Easing};
pub use config::{ConfigError, UiConfig};
pub use diag::CommandContext;
pub use error::UiError;
pub use focus::{Algorithm, Focus, FocusSettings, Quality};
pub use geometry::{Bounds, Constraint, Direction, Point};
pub use id::{ActionId, SceneId, WidgetId};
pub use input::{Button, InputEvent, NavPad};
pub use scene::Scene;
pub use ui::Ui;
pub use widget::{ClickEvent, FocusStyle, Outline, Placement, Widget};
