//! # Map Controller
//!
//! Demo wiring: owns the camera, the grid and a small scene, and maps input
//! events to camera/element operations. The key map here is application
//! policy, not core contract; hosts are expected to replace it. The
//! controller doubles as the explicit introspection handle; there is no
//! process-wide state anywhere in the crate.

use glam::Vec2;
use tracing::{debug, info};

use crate::context::DrawContext;
use crate::elem::{Elem, ElemOptions, PointStyle};
use crate::error::CanvasError;
use crate::grid::{GridOptions, InfinityGrid};
use crate::input::{Key, KeyEvent, KeyEventKind, PointerEvent};
use crate::scene::{ElemId, Scene};
use crate::viewport::{Viewport, ViewportOptions};

/// Speeds for the keyboard camera operations.
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    /// World units per pan step.
    pub move_speed: f32,
    /// Zoom delta per zoom step or wheel notch.
    pub zoom_speed: f32,
    /// Degrees per rotation step.
    pub rotation_speed: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 25.0,
            zoom_speed: 0.5,
            rotation_speed: 15.0,
        }
    }
}

/// The interactive map demo: an infinite grid, a test pattern with its
/// transform decorator, and markers dropped wherever the user clicks.
pub struct MapController {
    viewport: Viewport,
    grid: InfinityGrid,
    scene: Scene,
    test_elem: ElemId,
    config: ControllerConfig,
    // accumulated drag at the last DragMove, for per-event pan deltas
    last_drag: Vec2,
}

impl MapController {
    /// Builds the demo over a `width` x `height` surface.
    pub fn new(width: f32, height: f32, config: ControllerConfig) -> Result<Self, CanvasError> {
        info!("initializing map controller over {width}x{height} surface");

        let mut viewport = Viewport::new(
            width,
            height,
            ViewportOptions {
                world_limits: None,
                min_zoom: 0.5,
                max_zoom: 10.0,
            },
        )?;
        viewport.set_center(0.0, 0.0);
        viewport.set_angle(0.0);
        viewport.set_zoom(2.0, None);

        let grid = InfinityGrid::new(GridOptions::default())?;

        let mut scene = Scene::new();
        let test_elem = scene.insert(Elem::test_pattern(ElemOptions {
            x: 50.0,
            y: 50.0,
            angle: 45.0,
            alpha: 1.0,
            ..ElemOptions::default()
        }));
        scene.insert(Elem::decorator(test_elem));

        Ok(Self {
            viewport,
            grid,
            scene,
            test_elem,
            config,
            last_drag: Vec2::ZERO,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Id of the demo test pattern.
    pub fn test_elem(&self) -> ElemId {
        self.test_elem
    }

    /// Forwards a surface size change to the camera.
    pub fn resize(&mut self, width: f32, height: f32) {
        info!("resize to {width}x{height}");
        self.viewport.resize(width, height);
    }

    /// Maps a key event to a camera or element operation. Returns whether a
    /// redraw is needed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if matches!(event.kind, KeyEventKind::Release) {
            return false;
        }
        let ControllerConfig {
            move_speed,
            zoom_speed,
            rotation_speed,
        } = self.config;

        match event.key {
            Key::R => self.viewport.reset(),
            Key::Num2 => self.viewport.increase_zoom(zoom_speed, None),
            Key::Num1 => self.viewport.increase_zoom(-zoom_speed, None),
            Key::Q => self.viewport.rotate(-rotation_speed),
            Key::E => self.viewport.rotate(rotation_speed),
            Key::Z => self.rotate_test_elem(-rotation_speed),
            Key::X => self.rotate_test_elem(rotation_speed),
            Key::S => self.viewport.move_center(0.0, move_speed),
            Key::W => self.viewport.move_center(0.0, -move_speed),
            Key::A => self.viewport.move_center(-move_speed, 0.0),
            Key::D => self.viewport.move_center(move_speed, 0.0),
            _ => return false,
        }
        true
    }

    /// Maps a pointer event: click drops a marker colored by the hit test,
    /// dragging pans the camera, the wheel zooms toward the cursor. Returns
    /// whether a redraw is needed.
    pub fn handle_pointer(&mut self, ctx: &mut dyn DrawContext, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::Click { pos, .. } => {
                self.click(ctx, pos);
                true
            }
            PointerEvent::DragStart { drag, .. } => {
                self.last_drag = drag;
                false
            }
            PointerEvent::DragMove { drag, .. } => {
                let step = drag - self.last_drag;
                self.last_drag = drag;
                self.pan_by_screen_delta(step);
                true
            }
            PointerEvent::DragEnd { .. } => {
                self.last_drag = Vec2::ZERO;
                false
            }
            PointerEvent::Wheel { pos, delta, .. } => {
                let pivot = self.viewport.world_point(pos.x, pos.y);
                self.viewport
                    .increase_zoom(-delta.y.signum() * self.config.zoom_speed, Some(pivot));
                true
            }
            _ => false,
        }
    }

    /// Draws one frame: clear, grid, then the scene, in that fixed order.
    pub fn draw(&mut self, ctx: &mut dyn DrawContext) {
        self.viewport.clear(ctx);
        self.grid.draw(ctx, &mut self.viewport);
        self.scene.draw(ctx, false);
    }

    fn rotate_test_elem(&mut self, degrees: f32) {
        if let Some(elem) = self.scene.get_mut(self.test_elem) {
            elem.rotate(degrees);
        }
    }

    /// Pans so the world appears to follow the pointer by `step` screen
    /// pixels.
    fn pan_by_screen_delta(&mut self, step: Vec2) {
        let origin = self.viewport.world_point(0.0, 0.0);
        let moved = self.viewport.world_point(step.x, step.y);
        let world_step = moved - origin;
        self.viewport
            .move_center(-world_step.x, -world_step.y);
    }

    fn click(&mut self, ctx: &mut dyn DrawContext, pos: Vec2) {
        // the hit test composes on top of the camera transform
        self.viewport.apply_transform(ctx);

        let world = self.viewport.world_point(pos.x, pos.y);
        let canvas_point = self.viewport.canvas_point(world.x, world.y);
        let inside = self
            .scene
            .get_mut(self.test_elem)
            .is_some_and(|elem| elem.is_point_inside(ctx, canvas_point.x, canvas_point.y));

        debug!(
            "[{}] canvas({:.0}, {:.0}) => world({:.2}, {:.2}) => canvas({:.0}, {:.0})",
            if inside { "in" } else { "out" },
            pos.x,
            pos.y,
            world.x,
            world.y,
            canvas_point.x,
            canvas_point.y,
        );

        let style = if inside {
            PointStyle {
                fill: glam::Vec4::new(1.0, 0.0, 0.0, 1.0),
                stroke: glam::Vec4::new(0.33, 0.0, 0.0, 1.0),
                ..PointStyle::default()
            }
        } else {
            PointStyle::default()
        };
        self.scene.insert(Elem::point(world.x, world.y, style));
    }
}
