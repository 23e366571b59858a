//! Directional focus scenarios driven through the `Ui` controller

mod common;

use common::RecordingSurface;
use simpleui_core::{
    Algorithm, Button, ClickEvent, Direction, FocusSettings, InputEvent, NavPad, Outline, Point,
    Quality, Scene, Ui, UiConfig, Widget, WidgetId,
};
use simpleui_display::Color;
use simpleui_hal::SoftPin;

fn config(algorithm: Algorithm, accuracy: Quality) -> UiConfig {
    UiConfig {
        focus: FocusSettings {
            max_distance: 64,
            accuracy,
            algorithm,
        },
        ..UiConfig::default()
    }
}

/// A at the origin (focused), B at `b`, both 16x16
fn pair(config: UiConfig, b: Point) -> (Ui<'static>, WidgetId, WidgetId) {
    let mut ui = Ui::new(config);
    let a = ui.add_widget(Widget::element(16, 16, Point::new(0, 0))).unwrap();
    let b = ui.add_widget(Widget::element(16, 16, b)).unwrap();
    let mut scene = Scene::new("pair").with_widgets(&[a, b]).unwrap();
    scene.set_primary(a).unwrap();
    let scene = ui.add_scene(scene).unwrap();
    ui.focus_scene(scene).unwrap();
    (ui, a, b)
}

#[test]
fn test_linear_ray_hits_neighbour() {
    let (mut ui, _, b) = pair(config(Algorithm::Linear, Quality::High), Point::new(40, 0));
    assert_eq!(ui.focus_direction(0), Some(b));
    assert_eq!(ui.focused(), Some(b));
    assert!(ui.focus().has_changed());
}

#[test]
fn test_cone_misses_perpendicular_then_hits_downward() {
    let (mut ui, a, b) = pair(config(Algorithm::Cone, Quality::Medium), Point::new(0, 40));
    let mut surface = RecordingSurface::new();

    assert_eq!(ui.focus_direction(0), None);
    assert_eq!(ui.focused(), Some(a));
    ui.render(&mut surface, 0).unwrap();

    assert_eq!(ui.focus_toward(Direction::Down), Some(b));
}

#[test]
fn test_search_never_returns_initiator() {
    // A overlaps every ray leaving its own centre
    let mut ui = Ui::default();
    let a = ui.add_widget(Widget::element(120, 60, Point::new(0, 0))).unwrap();
    let mut scene = Scene::new("solo").with_widgets(&[a]).unwrap();
    scene.set_primary(a).unwrap();
    let scene = ui.add_scene(scene).unwrap();
    ui.focus_scene(scene).unwrap();

    let mut surface = RecordingSurface::new();
    for degrees in (0..360).step_by(45) {
        assert_eq!(ui.focus_direction(degrees), None);
        assert_eq!(ui.focused(), Some(a));
        ui.render(&mut surface, 0).unwrap();
    }
    // Still a candidate for searches started elsewhere
    assert!(ui.widget(a).unwrap().base.focusable);
}

#[test]
fn test_search_is_deterministic() {
    let build = || {
        let mut ui = Ui::new(config(Algorithm::Cone, Quality::Low));
        let origin = ui.add_widget(Widget::element(10, 10, Point::new(10, 27))).unwrap();
        let near_up = ui.add_widget(Widget::element(10, 10, Point::new(40, 15))).unwrap();
        let near_down = ui.add_widget(Widget::element(10, 10, Point::new(40, 40))).unwrap();
        let far = ui.add_widget(Widget::element(10, 10, Point::new(60, 27))).unwrap();
        let mut scene = Scene::new("grid")
            .with_widgets(&[origin, near_up, near_down, far])
            .unwrap();
        scene.set_primary(origin).unwrap();
        let scene = ui.add_scene(scene).unwrap();
        ui.focus_scene(scene).unwrap();
        ui
    };

    let first = build().focus_direction(0);
    assert!(first.is_some());

    let mut ui = build();
    let mut surface = RecordingSurface::new();
    let origin = ui.focused().unwrap();
    for frame in 0..10 {
        ui.focus_widget(origin).unwrap();
        assert_eq!(ui.focus_direction(0), first);
        ui.render(&mut surface, frame * 16_000).unwrap();
    }
}

#[test]
fn test_no_candidates_leaves_focus() {
    let (mut ui, a, b) = pair(config(Algorithm::Linear, Quality::High), Point::new(40, 0));
    ui.widget_mut(b).unwrap().base.focusable = false;

    let mut surface = RecordingSurface::new();
    for degrees in [0, 90, 180, 270] {
        assert_eq!(ui.focus_direction(degrees), None);
        assert_eq!(ui.focused(), Some(a));
        ui.render(&mut surface, 0).unwrap();
    }
}

#[test]
fn test_no_active_scene() {
    let mut ui = Ui::default();
    assert_eq!(ui.focus_direction(0), None);
    assert_eq!(ui.click(), None);
    assert!(!ui.back());
    ui.render(&mut RecordingSurface::new(), 0).unwrap();
}

#[test]
fn test_back_requires_parent_and_history() {
    let mut ui = Ui::default();
    let home_btn = ui.add_widget(Widget::element(16, 16, Point::new(0, 0))).unwrap();
    let menu_btn = ui.add_widget(Widget::element(16, 16, Point::new(50, 0))).unwrap();

    let mut home = Scene::new("home").with_widgets(&[home_btn]).unwrap();
    home.set_primary(home_btn).unwrap();
    let home = ui.add_scene(home).unwrap();

    let mut menu = Scene::new("menu").with_widgets(&[menu_btn]).unwrap();
    menu.set_primary(menu_btn).unwrap();
    menu.add_parent(home).unwrap();
    let menu = ui.add_scene(menu).unwrap();

    // Entered directly: no history yet
    ui.focus_scene(menu).unwrap();
    assert!(!ui.back());

    ui.focus_scene(home).unwrap();
    ui.focus_scene(menu).unwrap();
    assert_eq!(ui.focused(), Some(menu_btn));

    assert!(ui.back());
    assert_eq!(ui.active_scene(), Some(home));
    assert_eq!(ui.focused(), Some(home_btn));

    // Home declares no parent
    assert!(!ui.back());
    assert_eq!(ui.scene_by_name("menu"), Some(menu));
}

#[test]
fn test_render_commits_even_on_draw_error() {
    let (mut ui, a, b) = pair(config(Algorithm::Linear, Quality::High), Point::new(40, 0));
    ui.widget_mut(a).unwrap().base.focus_style = simpleui_core::FocusStyle::Outline;
    let mut surface = RecordingSurface {
        fail: true,
        ..RecordingSurface::new()
    };

    assert_eq!(ui.focus_direction(0), Some(b));
    ui.widget_mut(b).unwrap().base.focus_style = simpleui_core::FocusStyle::Outline;
    assert!(ui.render(&mut surface, 0).is_err());
    assert!(!ui.focus().has_changed());
    assert!(!ui.is_busy());
}

#[test]
fn test_nav_pad_drives_controller() {
    let mut ui = Ui::default();
    let a = ui.add_widget(Widget::element(16, 16, Point::new(0, 0))).unwrap();
    let check = ui
        .add_widget(Widget::checkbox(
            Outline::new(1, 1, 2, Color::WHITE),
            12,
            12,
            Color::GREEN,
            Point::new(40, 2),
        ))
        .unwrap();
    let mut scene = Scene::new("pad").with_widgets(&[a, check]).unwrap();
    scene.set_primary(a).unwrap();
    let scene = ui.add_scene(scene).unwrap();
    ui.focus_scene(scene).unwrap();

    let pins: [SoftPin; 6] = Default::default();
    let mut pad = NavPad::new(
        Button::new(&pins[0]),
        Button::new(&pins[1]),
        Button::new(&pins[2]),
        Button::new(&pins[3]),
        Button::new(&pins[4]),
        Button::new(&pins[5]),
    );
    let mut surface = RecordingSurface::new();

    pins[3].set(true);
    for event in pad.poll(0) {
        assert_eq!(ui.handle_input(event), None);
    }
    assert_eq!(ui.focused(), Some(check));
    ui.render(&mut surface, 0).unwrap();

    pins[3].set(false);
    pins[4].set(true);
    let events = pad.poll(10_000);
    assert_eq!(events.as_slice(), &[InputEvent::Select]);
    assert_eq!(
        ui.handle_input(InputEvent::Select),
        Some(ClickEvent::Toggled {
            id: check,
            state: true
        })
    );
    assert!(ui.widget(check).unwrap().checkbox_ref().unwrap().state());
}
