use glam::{Affine2, Vec2, Vec4};
use map_canvas::context::DrawContext;
use map_canvas::render::DrawCommand;
use map_canvas::{HeadlessContext, Path2D};

fn assert_close(a: Vec2, b: Vec2) {
    assert!((a - b).length() <= 1e-4, "expected {a:?} ~= {b:?}");
}

#[test]
fn test_rejects_empty_surface() {
    assert!(HeadlessContext::new(0.0, 100.0).is_err());
    assert!(HeadlessContext::new(100.0, -1.0).is_err());
    assert!(HeadlessContext::new(f32::NAN, 100.0).is_err());
}

#[test]
fn test_save_restore_round_trips_the_paint_state() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();

    ctx.set_alpha(0.3);
    ctx.translate(10.0, 0.0);
    ctx.save();

    ctx.set_alpha(0.9);
    ctx.rotate(1.0);
    ctx.restore();

    assert_eq!(ctx.alpha(), 0.3);
    assert_close(
        ctx.transform().transform_point2(Vec2::ZERO),
        Vec2::new(10.0, 0.0),
    );

    // restoring past the bottom of the stack changes nothing
    ctx.restore();
    assert_eq!(ctx.alpha(), 0.3);
}

#[test]
fn test_transforms_compose_in_call_order() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();

    // translate-then-rotate: the rotation happens in the translated frame
    ctx.translate(10.0, 0.0);
    ctx.rotate(std::f32::consts::FRAC_PI_2);

    let p = ctx.transform().transform_point2(Vec2::new(1.0, 0.0));
    assert_close(p, Vec2::new(10.0, 1.0));
}

#[test]
fn test_fill_rect_records_transformed_corners() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();
    let red = Vec4::new(1.0, 0.0, 0.0, 1.0);

    ctx.translate(10.0, 20.0);
    ctx.scale(2.0, 2.0);
    ctx.set_fill_color(red);
    ctx.set_alpha(0.5);
    ctx.fill_rect(0.0, 0.0, 5.0, 5.0);

    assert_eq!(
        ctx.commands().last().unwrap(),
        &DrawCommand::Fill {
            points: vec![
                Vec2::new(10.0, 20.0),
                Vec2::new(20.0, 20.0),
                Vec2::new(20.0, 30.0),
                Vec2::new(10.0, 30.0),
            ],
            color: red,
            alpha: 0.5,
        }
    );
}

#[test]
fn test_line_width_scales_with_the_transform() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();

    ctx.set_line_width(2.0);
    ctx.scale(3.0, 3.0);
    ctx.stroke_rect(0.0, 0.0, 1.0, 1.0);

    match ctx.commands().last().unwrap() {
        DrawCommand::Stroke { width, .. } => assert_eq!(*width, 6.0),
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn test_stroke_path_splits_subpaths() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();

    let mut path = Path2D::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.move_to(0.0, 5.0);
    path.line_to(10.0, 5.0);
    ctx.stroke_path(&path);

    let strokes = ctx
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::Stroke { .. }))
        .count();
    assert_eq!(strokes, 2);
}

#[test]
fn test_point_in_path_follows_the_transform() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();
    let mut path = Path2D::new();
    path.rect(0.0, 0.0, 10.0, 10.0);

    assert!(ctx.is_point_in_path(&path, 5.0, 5.0));
    assert!(!ctx.is_point_in_path(&path, 15.0, 5.0));

    ctx.translate(10.0, 0.0);
    assert!(ctx.is_point_in_path(&path, 15.0, 5.0));
    assert!(!ctx.is_point_in_path(&path, 5.0, 5.0));
}

#[test]
fn test_contains_point_closes_open_subpaths() {
    // an open triangle still behaves as a filled region
    let mut path = Path2D::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.line_to(0.0, 10.0);

    assert!(path.contains_point(&Affine2::IDENTITY, Vec2::new(2.0, 2.0)));
    assert!(!path.contains_point(&Affine2::IDENTITY, Vec2::new(9.0, 9.0)));
}

#[test]
fn test_draw_rect_skips_zero_alpha_passes() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();

    map_canvas::draw::draw_rect(&mut ctx, 0.5, 0.0, 0.0, 0.0, 10.0, 10.0);
    assert_eq!(ctx.commands().len(), 1);
    assert!(matches!(
        ctx.commands()[0],
        DrawCommand::Fill { alpha, .. } if alpha == 0.5
    ));

    map_canvas::draw::draw_rect(&mut ctx, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0);
    assert_eq!(ctx.commands().len(), 1);
}

#[test]
fn test_ctx_style_applies_only_present_fields() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();
    let green = Vec4::new(0.0, 1.0, 0.0, 1.0);

    ctx.set_alpha(0.7);
    let style = map_canvas::style::CtxStyle {
        stroke: Some(green),
        line_width: Some(4.0),
        ..map_canvas::style::CtxStyle::default()
    };
    map_canvas::draw::apply_ctx_style(&mut ctx, &style);

    // alpha was absent from the style and stays untouched
    assert_eq!(ctx.alpha(), 0.7);

    ctx.stroke_rect(0.0, 0.0, 1.0, 1.0);
    match ctx.commands().last().unwrap() {
        DrawCommand::Stroke { color, width, .. } => {
            assert_eq!(*color, green);
            assert_eq!(*width, 4.0);
        }
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn test_take_commands_resets_the_frame() {
    let mut ctx = HeadlessContext::new(100.0, 100.0).unwrap();
    ctx.fill_rect(0.0, 0.0, 1.0, 1.0);

    let frame = ctx.take_commands();
    assert_eq!(frame.len(), 1);
    assert!(ctx.commands().is_empty());
}
