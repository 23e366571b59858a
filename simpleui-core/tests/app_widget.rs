//! Two-state app widget driven by real focus moves

mod common;

use common::{big_icon, small_icon, Blit, RecordingSurface, MS};
use simpleui_core::widget::Showing;
use simpleui_core::{ActionId, AnimState, ClickEvent, Point, Scene, Ui, UiConfig, Widget, WidgetId};

struct Fixture {
    ui: Ui<'static>,
    surface: RecordingSurface,
    app: WidgetId,
    other: WidgetId,
}

impl Fixture {
    /// App icon at (10, 10) and a plain box to its right
    fn new(app_is_primary: bool) -> Self {
        Self::with_duration(app_is_primary, 100)
    }

    fn with_duration(app_is_primary: bool, app_duration_ms: u32) -> Self {
        let config = UiConfig {
            app_duration_ms,
            ..UiConfig::default()
        };
        let mut ui = Ui::new(config);
        let app = ui.add_app(small_icon(), big_icon(), Point::new(10, 10)).unwrap();
        let other = ui.add_widget(Widget::element(16, 16, Point::new(60, 10))).unwrap();
        ui.widget_mut(app).unwrap().bind(ActionId(7));

        let mut scene = Scene::new("apps").with_widgets(&[app, other]).unwrap();
        scene.set_primary(if app_is_primary { app } else { other }).unwrap();
        let scene = ui.add_scene(scene).unwrap();
        ui.focus_scene(scene).unwrap();

        Self {
            ui,
            surface: RecordingSurface::new(),
            app,
            other,
        }
    }

    /// Render one frame and return the app's blit
    fn frame(&mut self, now_us: u64) -> Blit {
        self.surface.clear();
        self.ui.render(&mut self.surface, now_us).unwrap();
        self.surface.blits[0]
    }

    fn showing(&self) -> Showing {
        self.ui.widget(self.app).unwrap().app_ref().unwrap().showing()
    }

    fn progress(&self) -> f32 {
        self.ui.widget(self.app).unwrap().base.anim.progress()
    }

    fn focus_app(&mut self) {
        assert_eq!(self.ui.focus_direction(180), Some(self.app));
    }

    fn focus_other(&mut self) {
        assert_eq!(self.ui.focus_direction(0), Some(self.other));
    }
}

#[test]
fn test_grow_then_swap_to_selected() {
    let mut fx = Fixture::new(false);
    assert_eq!(fx.frame(0).width, 16);

    fx.focus_app();
    assert_eq!(fx.frame(10 * MS).width, 16);
    assert_eq!(fx.frame(60 * MS).width, 24);

    // Finishes at ratio while still showing the small icon
    let blit = fx.frame(110 * MS);
    assert_eq!((blit.width, blit.height), (32, 32));
    assert_eq!((blit.x, blit.y), (2, 2));
    assert_eq!(fx.showing(), Showing::Unselected);

    // Next frame swaps to the big icon at exactly 1.0
    let blit = fx.frame(120 * MS);
    assert_eq!(fx.showing(), Showing::Selected);
    assert_eq!(fx.progress(), 1.0);
    assert_eq!((blit.x, blit.y, blit.width), (2, 2, 32));
    assert!(!fx.ui.widget(fx.app).unwrap().base.anim.is_enabled());

    // Stable while focus stays put
    fx.frame(500 * MS);
    assert_eq!(fx.showing(), Showing::Selected);
}

#[test]
fn test_unfocus_mid_grow_turns_around() {
    let mut fx = Fixture::new(false);
    fx.frame(0);
    fx.focus_app();
    fx.frame(10 * MS);
    fx.frame(60 * MS);
    let before = fx.progress();

    fx.focus_other();
    fx.frame(60 * MS);
    assert!((fx.progress() - before).abs() < 1e-3);
    assert!(fx.ui.widget(fx.app).unwrap().base.anim.is_reversed());

    fx.frame(85 * MS);
    assert!(fx.progress() < before);

    fx.frame(110 * MS);
    assert_eq!(fx.progress(), 1.0);
    fx.frame(120 * MS);
    assert_eq!(fx.showing(), Showing::Unselected);
    assert_eq!(fx.progress(), 1.0);
    assert!(!fx.ui.widget(fx.app).unwrap().base.anim.is_reversed());

    // And it can grow again
    fx.focus_app();
    fx.frame(130 * MS);
    fx.frame(240 * MS);
    fx.frame(250 * MS);
    assert_eq!(fx.showing(), Showing::Selected);
}

#[test]
fn test_unfocus_when_selected_shrinks_without_jump() {
    let mut fx = Fixture::new(false);
    fx.frame(0);
    fx.focus_app();
    fx.frame(10 * MS);
    fx.frame(110 * MS);
    fx.frame(120 * MS);
    assert_eq!(fx.showing(), Showing::Selected);

    fx.focus_other();
    // Small icon at ratio is the same size as the big one at 1.0
    let blit = fx.frame(130 * MS);
    assert_eq!(fx.showing(), Showing::Unselected);
    assert_eq!(blit.width, 32);

    assert_eq!(fx.frame(180 * MS).width, 24);
    fx.frame(230 * MS);
    assert_eq!(
        fx.ui.widget(fx.app).unwrap().base.anim.state(),
        AnimState::Finished
    );
    assert_eq!(fx.frame(240 * MS).width, 16);
    assert_eq!(fx.showing(), Showing::Unselected);
}

#[test]
fn test_refocus_mid_shrink_grows_again() {
    let mut fx = Fixture::new(false);
    fx.frame(0);
    fx.focus_app();
    fx.frame(10 * MS);
    fx.frame(110 * MS);
    fx.frame(120 * MS);

    fx.focus_other();
    fx.frame(130 * MS);
    fx.frame(180 * MS);
    let mid = fx.progress();

    fx.focus_app();
    fx.frame(180 * MS);
    assert!((fx.progress() - mid).abs() < 1e-3);

    fx.frame(230 * MS);
    assert_eq!(fx.progress(), 2.0);
    fx.frame(240 * MS);
    assert_eq!(fx.showing(), Showing::Selected);
    assert_eq!(fx.progress(), 1.0);
}

#[test]
fn test_primary_app_grows_on_first_boot() {
    let mut fx = Fixture::new(true);
    assert_eq!(fx.ui.focused(), Some(fx.app));
    fx.frame(0);
    assert!(fx.ui.widget(fx.app).unwrap().base.anim.is_enabled());

    fx.frame(100 * MS);
    fx.frame(110 * MS);
    assert_eq!(fx.showing(), Showing::Selected);
}

#[test]
fn test_click_reports_bound_action() {
    let mut fx = Fixture::new(true);
    assert_eq!(
        fx.ui.click(),
        Some(ClickEvent::Activated {
            id: fx.app,
            action: Some(ActionId(7)),
        })
    );
}

#[test]
fn test_configured_duration_slows_the_grow() {
    let mut fx = Fixture::with_duration(false, 200);
    assert_eq!(fx.ui.widget(fx.app).unwrap().base.anim.duration_us(), 200 * MS);
    fx.frame(0);
    fx.focus_app();
    fx.frame(10 * MS);

    // A quarter of the way at 50 ms instead of halfway
    assert_eq!(fx.frame(60 * MS).width, 20);
    let blit = fx.frame(110 * MS);
    assert_eq!(blit.width, 24);
    assert_eq!(fx.showing(), Showing::Unselected);

    assert_eq!(fx.frame(210 * MS).width, 32);
    fx.frame(220 * MS);
    assert_eq!(fx.showing(), Showing::Selected);
}
