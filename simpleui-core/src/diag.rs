//! Diagnostic command execution
//!
//! Commands parsed by `simpleui-protocol` are executed here, from inside
//! the tick, so they never race with rendering.

use heapless::String;
use simpleui_protocol::{AnimSnapshot, Command, Response, UiSnapshot};

use crate::ui::Ui;

/// Platform facts a command may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandContext {
    /// Current monotonic time
    pub now_us: u64,
    /// Free heap in bytes, if the platform tracks it
    pub free_heap: Option<usize>,
}

impl<'a> Ui<'a> {
    /// Run one diagnostic command
    pub fn execute(&mut self, command: Command, ctx: &CommandContext) -> Response {
        match command {
            Command::FreeMem => Response::FreeMem(ctx.free_heap),
            Command::Uptime => Response::Uptime(ctx.now_us / 1_000),
            Command::Back => Response::Back {
                switched: self.back(),
            },
            Command::Click => Response::Click {
                widget: self.click().map(|event| event.id().raw()),
            },
            Command::Focus(target) => Response::Focus {
                moved_to: self.focus_direction(target.degrees()).map(|id| id.raw()),
            },
            Command::DebugUi => Response::DebugUi(self.snapshot()),
        }
    }

    /// Current focus, scene and animation state
    pub fn snapshot(&self) -> UiSnapshot {
        let scene = self.active_scene().and_then(|id| self.scene(id)).map(|scene| {
            let mut name = String::new();
            // Scene names fit: both are capped at the same length
            let _ = name.push_str(scene.name());
            name
        });
        let animation = self
            .focused()
            .and_then(|id| self.widget(id))
            .map(|widget| AnimSnapshot {
                state: widget.base.anim.state().as_str(),
                progress: widget.base.anim.progress(),
                enabled: widget.base.anim.is_enabled(),
            });

        UiSnapshot {
            scene,
            current: self.focus().current().map(|id| id.raw()),
            previous: self.focus().previous().map(|id| id.raw()),
            busy: self.is_busy(),
            first_boot: self.focus().is_first_boot(),
            animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::scene::Scene;
    use crate::widget::{Outline, Widget};
    use simpleui_display::Color;
    use simpleui_protocol::{CommandError, FocusTarget};

    fn ui() -> Ui<'static> {
        let mut ui = Ui::default();
        let a = ui
            .add_widget(Widget::checkbox(Outline::default(), 10, 10, Color::WHITE, Point::new(0, 0)))
            .unwrap();
        let b = ui.add_widget(Widget::element(10, 10, Point::new(40, 0))).unwrap();
        let mut scene = Scene::new("home").with_widgets(&[a, b]).unwrap();
        scene.set_primary(a).unwrap();
        let scene = ui.add_scene(scene).unwrap();
        ui.focus_scene(scene).unwrap();
        ui
    }

    #[test]
    fn test_platform_commands() {
        let mut ui = ui();
        let ctx = CommandContext {
            now_us: 1_500_000,
            free_heap: Some(2048),
        };
        assert_eq!(ui.execute(Command::Uptime, &ctx), Response::Uptime(1_500));
        assert_eq!(ui.execute(Command::FreeMem, &ctx), Response::FreeMem(Some(2048)));
    }

    #[test]
    fn test_navigation_commands() {
        let mut ui = ui();
        let ctx = CommandContext::default();

        assert_eq!(ui.execute(Command::Click, &ctx), Response::Click { widget: Some(0) });
        assert!(ui.widget(crate::id::WidgetId(0)).unwrap().checkbox_ref().unwrap().state());

        assert_eq!(
            ui.execute(Command::Focus(FocusTarget::Right), &ctx),
            Response::Focus { moved_to: Some(1) }
        );
        assert_eq!(ui.execute(Command::Back, &ctx), Response::Back { switched: false });
    }

    #[test]
    fn test_debugui_snapshot() {
        let mut ui = ui();
        let snap = match ui.execute(Command::DebugUi, &CommandContext::default()) {
            Response::DebugUi(snap) => snap,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(snap.scene.as_deref(), Some("home"));
        assert_eq!(snap.current, Some(0));
        assert_eq!(snap.previous, None);
        assert!(snap.first_boot);
        assert!(!snap.busy);
        assert_eq!(snap.animation.map(|a| a.state), Some("finished"));
    }

    #[test]
    fn test_parsed_line_round_trip() {
        let mut ui = ui();
        let command = Command::parse("focus right").unwrap();
        let response = ui.execute(command, &CommandContext::default());
        assert_eq!(response, Response::Focus { moved_to: Some(1) });
        assert_eq!(Command::parse("bogus"), Err(CommandError::Unknown));
    }
}
