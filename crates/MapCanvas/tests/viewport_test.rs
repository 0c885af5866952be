use glam::Vec2;
use map_canvas::trig::{deg_to_rad, normalize_angle, rad_to_deg};
use map_canvas::{Bounds2D, CanvasError, Viewport, ViewportOptions, WorldLimits};

const TOLERANCE: f32 = 1e-2;

fn assert_close(a: Vec2, b: Vec2, tolerance: f32) {
    assert!(
        (a - b).length() <= tolerance,
        "expected {a:?} ~= {b:?} (tolerance {tolerance})"
    );
}

fn default_viewport() -> Viewport {
    Viewport::new(800.0, 600.0, ViewportOptions::default()).unwrap()
}

#[test]
fn test_angle_normalization() {
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(normalize_angle(180.0), 180.0);
    assert_eq!(normalize_angle(181.0), -179.0);
    assert_eq!(normalize_angle(-180.0), 180.0);
    assert_eq!(normalize_angle(360.0), 0.0);
    assert_eq!(normalize_angle(540.0), 180.0);
    assert_eq!(normalize_angle(-190.0), 170.0);

    // Idempotence
    for deg in [-720.0, -181.0, -45.0, 0.0, 33.3, 180.0, 359.0, 1234.5] {
        let once = normalize_angle(deg);
        assert!(once > -180.0 && once <= 180.0, "{deg} -> {once}");
        assert_eq!(normalize_angle(once), once);
    }
}

#[test]
fn test_degree_radian_round_trip() {
    assert_eq!(deg_to_rad(180.0), std::f32::consts::PI);
    for deg in [-90.0, 0.0, 45.0, 133.7] {
        assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < 1e-3);
    }
}

#[test]
fn test_construction_rejects_inverted_zoom_range() {
    let result = Viewport::new(
        800.0,
        600.0,
        ViewportOptions {
            min_zoom: 5.0,
            max_zoom: 1.0,
            world_limits: None,
        },
    );
    assert_eq!(
        result.err(),
        Some(CanvasError::InvalidZoomRange { min: 5.0, max: 1.0 })
    );
}

#[test]
fn test_construction_rejects_bad_surface() {
    assert!(matches!(
        Viewport::new(0.0, 600.0, ViewportOptions::default()),
        Err(CanvasError::InvalidSurfaceSize { .. })
    ));
}

#[test]
fn test_default_camera_is_identity() {
    // Centered on the surface middle at zoom 1 without rotation, world
    // coordinates and screen pixels coincide.
    let mut viewport = default_viewport();
    assert_eq!(viewport.center(), Vec2::new(400.0, 300.0));
    assert_eq!(viewport.canvas_point(10.0, 20.0), Vec2::new(10.0, 20.0));
    assert_eq!(viewport.world_point(10.0, 20.0), Vec2::new(10.0, 20.0));
}

#[test]
fn test_round_trip_is_identity_for_any_camera() {
    let mut viewport = default_viewport();

    let cameras = [
        (Vec2::new(0.0, 0.0), 1.0, 0.0),
        (Vec2::new(123.4, -56.7), 2.5, 33.0),
        (Vec2::new(-1000.0, 4000.0), 0.25, -90.0),
        (Vec2::new(5.0, 5.0), 7.0, 180.0),
        (Vec2::new(0.5, -0.5), 3.0, 45.0),
    ];
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(-321.0, 77.7),
        Vec2::new(799.0, 599.0),
    ];

    for (center, zoom, angle) in cameras {
        viewport.set_center(center.x, center.y);
        viewport.set_zoom(zoom, None);
        viewport.set_angle(angle);

        for p in points {
            let screen = viewport.canvas_point(p.x, p.y);
            let world = viewport.world_point(screen.x, screen.y);
            assert_close(world, p, TOLERANCE);

            let world2 = viewport.world_point(p.x, p.y);
            let screen2 = viewport.canvas_point(world2.x, world2.y);
            assert_close(screen2, p, TOLERANCE);
        }
    }
}

#[test]
fn test_zoom_is_always_clamped() {
    let mut viewport = Viewport::new(
        800.0,
        600.0,
        ViewportOptions {
            min_zoom: 0.5,
            max_zoom: 10.0,
            world_limits: None,
        },
    )
    .unwrap();

    viewport.set_zoom(100.0, None);
    assert_eq!(viewport.zoom(), 10.0);
    viewport.set_zoom(-5.0, None);
    assert_eq!(viewport.zoom(), 0.5);
    viewport.set_zoom(f32::INFINITY, None);
    assert_eq!(viewport.zoom(), 10.0);
    viewport.set_zoom(f32::NEG_INFINITY, None);
    assert_eq!(viewport.zoom(), 0.5);

    viewport.increase_zoom(1000.0, None);
    assert_eq!(viewport.zoom(), 10.0);
}

#[test]
fn test_zoom_with_pivot_adjusts_center() {
    let mut viewport = default_viewport();
    viewport.set_center(100.0, 50.0);

    // center += (pivot - center) * (1 - old/new)
    viewport.set_zoom(2.0, Some(Vec2::new(130.0, 80.0)));
    assert_close(viewport.center(), Vec2::new(115.0, 65.0), 1e-4);
}

#[test]
fn test_zoom_with_pivot_preserves_screen_position() {
    let mut viewport = default_viewport();
    viewport.set_center(100.0, 50.0);

    let pivot = Vec2::new(130.0, 80.0);
    let zooms = [2.0, 3.5, 0.75, 5.0];

    for zoom in zooms {
        let before = viewport.canvas_point(pivot.x, pivot.y);
        viewport.set_zoom(zoom, Some(pivot));
        let after = viewport.canvas_point(pivot.x, pivot.y);
        // the translation term is rounded to whole pixels, so the pivot may
        // shift by up to a pixel per axis
        assert_close(after, before, 1.5);
    }
}

#[test]
fn test_resize_to_same_size_is_a_no_op() {
    let mut viewport = default_viewport();

    // first read derives the transform
    viewport.canvas_point(0.0, 0.0);
    let revision = viewport.transform_revision();

    viewport.resize(800.0, 600.0);
    viewport.canvas_point(0.0, 0.0);
    assert_eq!(viewport.transform_revision(), revision);

    viewport.resize(1024.0, 768.0);
    viewport.canvas_point(0.0, 0.0);
    assert_eq!(viewport.transform_revision(), revision + 1);
}

#[test]
fn test_setting_same_angle_is_a_no_op() {
    let mut viewport = default_viewport();
    viewport.set_angle(30.0);
    viewport.canvas_point(0.0, 0.0);
    let revision = viewport.transform_revision();

    viewport.set_angle(30.0);
    viewport.rotate(0.0);
    viewport.set_angle(30.0 + 360.0);
    viewport.canvas_point(0.0, 0.0);
    assert_eq!(viewport.transform_revision(), revision);
}

#[test]
fn test_repeated_reads_reuse_cached_transform() {
    let mut viewport = default_viewport();
    viewport.canvas_point(0.0, 0.0);
    let revision = viewport.transform_revision();

    viewport.canvas_point(1.0, 1.0);
    viewport.world_point(2.0, 2.0);
    viewport.visible_world_bounds();
    assert_eq!(viewport.transform_revision(), revision);
}

#[test]
fn test_visible_bounds_identity_camera() {
    let mut viewport = default_viewport();
    assert_eq!(
        viewport.visible_world_bounds(),
        Bounds2D {
            top: 0.0,
            bottom: 599.0,
            left: 0.0,
            right: 799.0,
        }
    );

    let corners = viewport.visible_world_corners();
    assert_eq!(corners[0], Vec2::new(0.0, 0.0));
    assert_eq!(corners[1], Vec2::new(0.0, 599.0));
    assert_eq!(corners[2], Vec2::new(799.0, 0.0));
    assert_eq!(corners[3], Vec2::new(799.0, 599.0));
}

#[test]
fn test_visible_bounds_cover_rotated_view() {
    let mut viewport = default_viewport();
    viewport.set_center(0.0, 0.0);
    viewport.set_angle(90.0);

    // the covering box of the rotated visible quad
    let bounds = viewport.visible_world_bounds();
    assert!((bounds.left - -300.0).abs() < 1.5, "left {}", bounds.left);
    assert!((bounds.right - 300.0).abs() < 1.5, "right {}", bounds.right);
    assert!((bounds.top - -400.0).abs() < 1.5, "top {}", bounds.top);
    assert!((bounds.bottom - 400.0).abs() < 1.5, "bottom {}", bounds.bottom);

    // every screen corner's world image lies inside the bounds
    for corner in viewport.visible_world_corners() {
        assert!(corner.x >= bounds.left - 1e-3 && corner.x <= bounds.right + 1e-3);
        assert!(corner.y >= bounds.top - 1e-3 && corner.y <= bounds.bottom + 1e-3);
    }
}

#[test]
fn test_center_clamped_into_world_limits() {
    let mut viewport = Viewport::new(
        800.0,
        600.0,
        ViewportOptions {
            min_zoom: f32::NEG_INFINITY,
            max_zoom: f32::INFINITY,
            world_limits: Some(WorldLimits {
                left: Some(-10.0),
                right: Some(10.0),
                top: None,
                bottom: Some(5.0),
            }),
        },
    )
    .unwrap();

    viewport.set_center(100.0, 100.0);
    assert_eq!(viewport.center(), Vec2::new(10.0, 5.0));

    // top side is unbounded
    viewport.set_center(-100.0, -100.0);
    assert_eq!(viewport.center(), Vec2::new(-10.0, -100.0));

    viewport.move_center(5.0, 0.0);
    assert_eq!(viewport.center().x, -5.0);
}

#[test]
fn test_reset_restores_defaults() {
    let mut viewport = default_viewport();
    viewport.set_center(-50.0, 99.0);
    viewport.set_zoom(4.0, None);
    viewport.set_angle(45.0);

    viewport.reset();
    assert_eq!(viewport.center(), Vec2::new(400.0, 300.0));
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(viewport.angle_deg(), 0.0);
}
