use glam::Vec2;
use map_canvas::input::{Key, KeyEventKind};
use map_canvas::render::DrawCommand;
use map_canvas::{
    ControllerConfig, ElemKind, HeadlessContext, KeyEvent, MapController, Modifiers, PointerEvent,
};

fn controller() -> MapController {
    MapController::new(800.0, 600.0, ControllerConfig::default()).unwrap()
}

fn ctx() -> HeadlessContext {
    HeadlessContext::new(800.0, 600.0).unwrap()
}

fn key(key: Key) -> KeyEvent {
    KeyEvent {
        key,
        kind: KeyEventKind::Press,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn test_initial_camera() {
    let mut controller = controller();
    let viewport = controller.viewport_mut();

    assert_eq!(viewport.center(), Vec2::ZERO);
    assert_eq!(viewport.zoom(), 2.0);
    assert_eq!(viewport.angle_deg(), 0.0);

    // world origin lands mid-surface
    assert_eq!(viewport.canvas_point(0.0, 0.0), Vec2::new(400.0, 300.0));
}

#[test]
fn test_keyboard_panning() {
    let mut controller = controller();

    assert!(controller.handle_key(&key(Key::W)));
    assert_eq!(controller.viewport().center(), Vec2::new(0.0, -25.0));

    controller.handle_key(&key(Key::D));
    assert_eq!(controller.viewport().center(), Vec2::new(25.0, -25.0));

    controller.handle_key(&key(Key::S));
    controller.handle_key(&key(Key::A));
    assert_eq!(controller.viewport().center(), Vec2::ZERO);
}

#[test]
fn test_keyboard_zoom_respects_camera_limits() {
    let mut controller = controller();

    controller.handle_key(&key(Key::Num2));
    assert_eq!(controller.viewport().zoom(), 2.5);

    for _ in 0..30 {
        controller.handle_key(&key(Key::Num2));
    }
    assert_eq!(controller.viewport().zoom(), 10.0);

    for _ in 0..30 {
        controller.handle_key(&key(Key::Num1));
    }
    assert_eq!(controller.viewport().zoom(), 0.5);
}

#[test]
fn test_keyboard_rotation_and_reset() {
    let mut controller = controller();

    controller.handle_key(&key(Key::E));
    controller.handle_key(&key(Key::E));
    assert_eq!(controller.viewport().angle_deg(), 30.0);
    controller.handle_key(&key(Key::Q));
    assert_eq!(controller.viewport().angle_deg(), 15.0);

    assert!(controller.handle_key(&key(Key::R)));
    assert_eq!(controller.viewport().center(), Vec2::new(400.0, 300.0));
    assert_eq!(controller.viewport().zoom(), 1.0);
    assert_eq!(controller.viewport().angle_deg(), 0.0);
}

#[test]
fn test_keyboard_rotates_the_test_pattern() {
    let mut controller = controller();
    let id = controller.test_elem();

    controller.handle_key(&key(Key::X));
    assert_eq!(controller.scene().get(id).unwrap().angle_deg(), 60.0);
    controller.handle_key(&key(Key::Z));
    controller.handle_key(&key(Key::Z));
    assert_eq!(controller.scene().get(id).unwrap().angle_deg(), 30.0);
}

#[test]
fn test_key_releases_and_unmapped_keys_are_ignored() {
    let mut controller = controller();

    let release = KeyEvent {
        key: Key::W,
        kind: KeyEventKind::Release,
        modifiers: Modifiers::default(),
    };
    assert!(!controller.handle_key(&release));
    assert!(!controller.handle_key(&key(Key::Other)));
    assert_eq!(controller.viewport().center(), Vec2::ZERO);
}

#[test]
fn test_held_keys_keep_panning() {
    let mut controller = controller();

    let held = KeyEvent {
        key: Key::W,
        kind: KeyEventKind::Held { elapsed_ms: 16 },
        modifiers: Modifiers::default(),
    };
    controller.handle_key(&held);
    controller.handle_key(&held);
    assert_eq!(controller.viewport().center(), Vec2::new(0.0, -50.0));
}

#[test]
fn test_drag_pans_the_camera() {
    let mut controller = controller();
    let mut ctx = ctx();
    let modifiers = Modifiers::default();

    let started = controller.handle_pointer(
        &mut ctx,
        &PointerEvent::DragStart {
            pos: Vec2::new(105.0, 100.0),
            button: 0,
            click_pos: Vec2::new(100.0, 100.0),
            drag: Vec2::new(5.0, 0.0),
            modifiers,
        },
    );
    assert!(!started);

    let moved = controller.handle_pointer(
        &mut ctx,
        &PointerEvent::DragMove {
            pos: Vec2::new(115.0, 100.0),
            button: 0,
            click_pos: Vec2::new(100.0, 100.0),
            drag: Vec2::new(15.0, 0.0),
            modifiers,
        },
    );
    assert!(moved);

    // 10 screen pixels at zoom 2 is 5 world units, against the drag
    assert_eq!(controller.viewport().center(), Vec2::new(-5.0, 0.0));
}

#[test]
fn test_wheel_zooms_toward_the_cursor() {
    let mut controller = controller();
    let mut ctx = ctx();
    let cursor = Vec2::new(200.0, 150.0);

    let before = controller.viewport_mut().world_point(cursor.x, cursor.y);
    assert_eq!(before, Vec2::new(-100.0, -75.0));

    controller.handle_pointer(
        &mut ctx,
        &PointerEvent::Wheel {
            pos: cursor,
            delta: glam::Vec3::new(0.0, -1.0, 0.0),
            modifiers: Modifiers::default(),
        },
    );

    assert_eq!(controller.viewport().zoom(), 2.5);
    let after = controller.viewport_mut().world_point(cursor.x, cursor.y);
    assert!((after - before).length() < 1.5, "{before:?} vs {after:?}");
}

#[test]
fn test_click_inside_the_pattern_drops_a_red_marker() {
    let mut controller = controller();
    let mut ctx = ctx();

    // world (50, 50) is the pattern's pivot; at zoom 2 centered on the
    // origin it sits at screen (500, 400)
    controller.handle_pointer(
        &mut ctx,
        &PointerEvent::Click {
            pos: Vec2::new(500.0, 400.0),
            button: 0,
            double: false,
            modifiers: Modifiers::default(),
        },
    );

    let scene = controller.scene();
    assert_eq!(scene.draw_order.len(), 3);
    let marker = scene.get(*scene.draw_order.last().unwrap()).unwrap();
    assert_eq!(marker.x, 50.0);
    assert_eq!(marker.y, 50.0);
    match marker.kind {
        ElemKind::Point(style) => {
            assert_eq!(style.fill, glam::Vec4::new(1.0, 0.0, 0.0, 1.0));
        }
        other => panic!("expected a point marker, got {other:?}"),
    }
}

#[test]
fn test_click_outside_the_pattern_drops_a_yellow_marker() {
    let mut controller = controller();
    let mut ctx = ctx();

    controller.handle_pointer(
        &mut ctx,
        &PointerEvent::Click {
            pos: Vec2::ZERO,
            button: 0,
            double: false,
            modifiers: Modifiers::default(),
        },
    );

    let scene = controller.scene();
    let marker = scene.get(*scene.draw_order.last().unwrap()).unwrap();
    assert_eq!(marker.x, -200.0);
    assert_eq!(marker.y, -150.0);
    match marker.kind {
        ElemKind::Point(style) => {
            assert_eq!(style.fill, glam::Vec4::new(1.0, 1.0, 0.0, 1.0));
        }
        other => panic!("expected a point marker, got {other:?}"),
    }
}

#[test]
fn test_draw_clears_then_paints_grid_and_scene() {
    let mut controller = controller();
    let mut ctx = ctx();

    controller.draw(&mut ctx);
    let commands = ctx.take_commands();

    assert_eq!(
        commands.first().unwrap(),
        &DrawCommand::Clear {
            pos: Vec2::ZERO,
            size: Vec2::new(800.0, 600.0),
        }
    );
    // grid lines
    assert!(
        commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Stroke { .. }))
    );
    // pattern cells and label
    assert!(
        commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Fill { .. }))
    );
    assert!(
        commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Text { .. }))
    );

    // a second frame reproduces the same display list
    controller.draw(&mut ctx);
    assert_eq!(ctx.take_commands(), commands);
}

#[test]
fn test_resize_keeps_the_world_under_the_cursor_center() {
    let mut controller = controller();
    controller.resize(1024.0, 768.0);
    assert_eq!(controller.viewport().width(), 1024.0);
    assert_eq!(controller.viewport().height(), 768.0);
    // the camera still looks at the same world center
    assert_eq!(controller.viewport().center(), Vec2::ZERO);
}
