//! # Viewport
//!
//! The camera over a drawing surface: a world-space center, a zoom factor
//! and a rotation, composed into the transform that maps world coordinates
//! to screen pixels. Derived values (the screen-space translation term, the
//! visible world bounds and the visible world corners) sit behind three
//! independent dirty flags and are recomputed lazily on first read after a
//! camera change.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::context::DrawContext;
use crate::error::CanvasError;
use crate::trig::{deg_to_rad, normalize_angle};

/// Axis-aligned world-space region descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Per-side clamp for the camera center. A missing side is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldLimits {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
}

/// Camera configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ViewportOptions {
    /// Clamp applied to every center change, component-wise.
    pub world_limits: Option<WorldLimits>,
    /// Lower zoom clamp.
    pub min_zoom: f32,
    /// Upper zoom clamp.
    pub max_zoom: f32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            world_limits: None,
            min_zoom: f32::NEG_INFINITY,
            max_zoom: f32::INFINITY,
        }
    }
}

/// Camera state bound to a drawing surface of known pixel size.
///
/// All camera mutators are total: out-of-range zoom is clamped into the
/// configured range, the center is clamped into the world limits, and
/// setting a value equal to the current one short-circuits without
/// invalidating any cache.
#[derive(Clone, Debug)]
pub struct Viewport {
    width: f32,
    height: f32,
    center: Vec2,
    zoom: f32,
    angle_deg: f32,
    angle_rad: f32,

    // screen-space translation term of the composed transform
    translate: Vec2,
    dirty_transform: bool,
    // visible world bounds
    bounds: Bounds2D,
    dirty_bounds: bool,
    // visible world corners
    corners: [Vec2; 4],
    dirty_corners: bool,

    // bumped every time the transform parameters are actually recomputed
    revision: u64,

    options: ViewportOptions,
}

impl Viewport {
    /// Creates a camera over a `width` x `height` pixel surface.
    ///
    /// Fails fast on a non-positive surface size or an inverted zoom range;
    /// those are configuration bugs, not interactive input.
    pub fn new(width: f32, height: f32, options: ViewportOptions) -> Result<Self, CanvasError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(CanvasError::InvalidSurfaceSize { width, height });
        }
        if options.min_zoom > options.max_zoom {
            return Err(CanvasError::InvalidZoomRange {
                min: options.min_zoom,
                max: options.max_zoom,
            });
        }

        let mut viewport = Self {
            width,
            height,
            center: Vec2::ZERO,
            zoom: 1.0,
            angle_deg: 0.0,
            angle_rad: 0.0,
            translate: Vec2::ZERO,
            dirty_transform: true,
            bounds: Bounds2D::default(),
            dirty_bounds: true,
            corners: [Vec2::ZERO; 4],
            dirty_corners: true,
            revision: 0,
            options,
        };
        viewport.reset();
        Ok(viewport)
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// World coordinates currently mapped to the surface center.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Camera rotation in degrees, normalized to `(-180, 180]`.
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// How many times the transform parameters have been recomputed.
    ///
    /// No-op mutations (same-size resize, same-angle rotation) leave this
    /// unchanged, which makes the caching behavior observable.
    pub fn transform_revision(&self) -> u64 {
        self.revision
    }

    /// Re-centers on the middle of the surface and clears zoom and
    /// rotation.
    pub fn reset(&mut self) {
        self.center = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.zoom = 1.0;
        self.angle_deg = 0.0;
        self.angle_rad = 0.0;
        self.invalidate();
    }

    /// Updates the surface size without resetting any camera state. A
    /// resize to the current size is a no-op.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    /// Moves the camera center by a world-space delta.
    pub fn move_center(&mut self, dx: f32, dy: f32) {
        self.set_center(self.center.x + dx, self.center.y + dy);
    }

    /// Sets the camera center, clamped component-wise into the configured
    /// world limits.
    pub fn set_center(&mut self, x: f32, y: f32) {
        match &self.options.world_limits {
            Some(limits) => {
                self.center.x = x.clamp(
                    limits.left.unwrap_or(f32::NEG_INFINITY),
                    limits.right.unwrap_or(f32::INFINITY),
                );
                self.center.y = y.clamp(
                    limits.top.unwrap_or(f32::NEG_INFINITY),
                    limits.bottom.unwrap_or(f32::INFINITY),
                );
            }
            None => self.center = Vec2::new(x, y),
        }
        self.invalidate();
    }

    /// Adds `zoom_diff` to the current zoom. See [`set_zoom`](Self::set_zoom).
    pub fn increase_zoom(&mut self, zoom_diff: f32, pivot: Option<Vec2>) {
        self.set_zoom(self.zoom + zoom_diff, pivot);
    }

    /// Sets the zoom, clamped into `[min_zoom, max_zoom]`.
    ///
    /// When a world-space `pivot` is given, the center is adjusted so the
    /// pivot keeps its screen position across the zoom change.
    pub fn set_zoom(&mut self, zoom: f32, pivot: Option<Vec2>) {
        let new_zoom = zoom.clamp(self.options.min_zoom, self.options.max_zoom);
        if let Some(pivot) = pivot {
            let k = 1.0 - self.zoom / new_zoom;
            self.center += (pivot - self.center) * k;
        }
        self.zoom = new_zoom;
        self.invalidate();
    }

    /// Adds `degrees_diff` to the camera rotation.
    pub fn rotate(&mut self, degrees_diff: f32) {
        self.set_angle(self.angle_deg + degrees_diff);
    }

    /// Sets the camera rotation. The angle is normalized into
    /// `(-180, 180]`; setting the current angle is a no-op.
    pub fn set_angle(&mut self, degrees: f32) {
        let deg = normalize_angle(degrees);
        if self.angle_deg == deg {
            return;
        }
        self.angle_deg = deg;
        self.invalidate();
    }

    /// Programs the context with the camera transform:
    /// scale by zoom, rotate, then translate by the derived screen-space
    /// term. Equivalent to translating to the screen center, scaling,
    /// rotating and translating back by the camera center.
    ///
    /// Recomputation only happens when a camera parameter changed since the
    /// last call; a clean cache just reapplies the stored values.
    pub fn apply_transform(&mut self, ctx: &mut dyn DrawContext) {
        self.update_transform();
        ctx.set_transform(Affine2::from_scale_angle_translation(
            Vec2::splat(self.zoom),
            0.0,
            self.translate,
        ));
        ctx.rotate(self.angle_rad);
    }

    /// Resets the context transform, clears the full surface, and reapplies
    /// the camera transform.
    pub fn clear(&mut self, ctx: &mut dyn DrawContext) {
        ctx.reset_transform();
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.apply_transform(ctx);
    }

    /// Maps a world point to screen pixels (forward transform).
    pub fn canvas_point(&mut self, world_x: f32, world_y: f32) -> Vec2 {
        self.update_transform();
        if self.angle_rad == 0.0 {
            return Vec2::new(world_x, world_y) * self.zoom + self.translate;
        }

        let (s, c) = self.angle_rad.sin_cos();
        Vec2::new(
            (world_x * c - world_y * s) * self.zoom + self.translate.x,
            (world_x * s + world_y * c) * self.zoom + self.translate.y,
        )
    }

    /// Maps a screen pixel to world coordinates (inverse transform). Exact
    /// inverse of [`canvas_point`](Self::canvas_point) up to floating-point
    /// tolerance, for any camera state.
    pub fn world_point(&mut self, canvas_x: f32, canvas_y: f32) -> Vec2 {
        self.update_transform();
        let p = (Vec2::new(canvas_x, canvas_y) - self.translate) / self.zoom;
        if self.angle_rad == 0.0 {
            return p;
        }

        let (s, c) = (-self.angle_rad).sin_cos();
        Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c)
    }

    /// The axis-aligned bounding box of the four visible world corners.
    ///
    /// Under rotation this is a covering box for the rotated visible quad,
    /// deliberately larger than the exact visible region: it is meant for
    /// grid generation and culling, not for precise visibility tests.
    pub fn visible_world_bounds(&mut self) -> Bounds2D {
        if self.dirty_bounds {
            self.dirty_bounds = false;
            let [c0, c1, c2, c3] = self.visible_world_corners();

            self.bounds = Bounds2D {
                top: c0.y.min(c1.y).min(c2.y).min(c3.y),
                bottom: c0.y.max(c1.y).max(c2.y).max(c3.y),
                left: c0.x.min(c1.x).min(c2.x).min(c3.x),
                right: c0.x.max(c1.x).max(c2.x).max(c3.x),
            };
        }
        self.bounds
    }

    /// The four surface pixel corners inverse-mapped into world space.
    pub fn visible_world_corners(&mut self) -> [Vec2; 4] {
        if self.dirty_corners {
            self.dirty_corners = false;
            let w = self.width - 1.0;
            let h = self.height - 1.0;
            let corners = [
                self.world_point(0.0, 0.0),
                self.world_point(0.0, h),
                self.world_point(w, 0.0),
                self.world_point(w, h),
            ];
            self.corners = corners;
        }
        self.corners
    }

    fn invalidate(&mut self) {
        self.dirty_transform = true;
        self.dirty_bounds = true;
        self.dirty_corners = true;
    }

    fn update_transform(&mut self) {
        if !self.dirty_transform {
            return;
        }
        self.dirty_transform = false;
        self.revision += 1;

        let half = Vec2::new(self.width, self.height) / 2.0;
        self.angle_rad = deg_to_rad(self.angle_deg);
        self.translate = (-(self.center - half) * self.zoom - half * (self.zoom - 1.0)).round();
    }
}
