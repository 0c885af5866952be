//! # Scene Elements
//!
//! A drawable element composes a local affine transform (position, rotation
//! around a pivot, optional scale), a global alpha, and a closed local shape
//! used for hit-testing and outline painting. Concrete kinds are tagged
//! variants dispatched at paint time; composition (an element tracking
//! another element's transform) is done by holding the other element's id,
//! never by inheriting its state.
//!
//! The paint routines operate purely in local coordinates with the origin
//! at `(0, 0)`: position, pivot and rotation are already folded into the
//! context transform when they run.

mod decorator;
mod point;
mod test_pattern;

pub use point::PointStyle;

use glam::Vec2;

use crate::context::{DrawContext, Path2D};
use crate::draw;
use crate::scene::ElemId;
use crate::style::ShapeStyle;
use crate::trig::{deg_to_rad, normalize_angle};

/// Construction options, merged over [`ElemOptions::default`].
#[derive(Clone, Copy, Debug)]
pub struct ElemOptions {
    /// World position of the transform origin.
    pub x: f32,
    pub y: f32,
    /// Paint-order hint. Not enforced here; see
    /// [`Scene::sort_by_z`](crate::scene::Scene::sort_by_z).
    pub z: i32,
    /// Local shape bounds.
    pub width: f32,
    pub height: f32,
    /// Pivot for rotation, in local coordinates. Defaults to the top-left.
    pub center_x: f32,
    pub center_y: f32,
    /// Local rotation in degrees.
    pub angle: f32,
    /// Optional per-axis scale.
    pub scale: Option<Vec2>,
    /// Global alpha, clamped into `[0, 1]`.
    pub alpha: f32,
    /// Style for the optional outline pass; `None` uses the debug default.
    pub outline_style: Option<ShapeStyle>,
}

impl Default for ElemOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0,
            width: 0.0,
            height: 0.0,
            center_x: 0.0,
            center_y: 0.0,
            angle: 0.0,
            scale: None,
            alpha: 1.0,
            outline_style: None,
        }
    }
}

/// The concrete kind of an element, selected at paint time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElemKind {
    /// A small square marker.
    Point(PointStyle),
    /// The multi-cell demo pattern.
    TestPattern,
    /// Draws the frame and orientation axes of another element by syncing
    /// its transform from the target before painting.
    Decorator { target: ElemId },
}

/// A positioned, rotatable, scalable, transparent drawable with a local
/// containment shape.
#[derive(Clone, Debug)]
pub struct Elem {
    pub kind: ElemKind,
    pub x: f32,
    pub y: f32,
    pub z: i32,
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    angle_deg: f32,
    // valid only while `dirty` is false
    angle_rad: f32,
    dirty: bool,
    scale: Option<Vec2>,
    alpha: f32,
    shape: Path2D,
    outline_style: ShapeStyle,
}

impl Elem {
    /// Builds an element of the given kind. The default containment shape
    /// is the rectangle from `(0, 0)` to `(width, height)`.
    pub fn new(kind: ElemKind, options: ElemOptions) -> Self {
        let mut shape = Path2D::new();
        shape.rect(0.0, 0.0, options.width, options.height);

        Self {
            kind,
            x: options.x,
            y: options.y,
            z: options.z,
            width: options.width,
            height: options.height,
            center_x: options.center_x,
            center_y: options.center_y,
            angle_deg: normalize_angle(options.angle),
            angle_rad: 0.0,
            dirty: true,
            scale: options.scale,
            alpha: options.alpha.clamp(0.0, 1.0),
            shape,
            outline_style: options.outline_style.unwrap_or_default(),
        }
    }

    /// A point marker at the given world position. The pivot is recentered
    /// on the marker's middle so it rotates and hit-tests around its own
    /// center.
    pub fn point(x: f32, y: f32, style: PointStyle) -> Self {
        let mut elem = Self::new(
            ElemKind::Point(style),
            ElemOptions {
                x,
                y,
                width: point::SIZE,
                height: point::SIZE,
                ..ElemOptions::default()
            },
        );
        elem.center_x = elem.width / 2.0;
        elem.center_y = elem.height / 2.0;
        elem
    }

    /// The demo multi-cell pattern: a fixed 100x100 shape pivoting around
    /// its geometric center.
    pub fn test_pattern(options: ElemOptions) -> Self {
        Self::new(
            ElemKind::TestPattern,
            ElemOptions {
                width: test_pattern::SIZE,
                height: test_pattern::SIZE,
                center_x: test_pattern::SIZE / 2.0,
                center_y: test_pattern::SIZE / 2.0,
                ..options
            },
        )
    }

    /// A decorator tracking `target`'s transform.
    pub fn decorator(target: ElemId) -> Self {
        Self::new(
            ElemKind::Decorator { target },
            ElemOptions::default(),
        )
    }

    /// Local rotation in degrees, normalized to `(-180, 180]`.
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Current global alpha.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current per-axis scale, if any.
    pub fn scale(&self) -> Option<Vec2> {
        self.scale
    }

    /// The local containment shape.
    pub fn shape(&self) -> &Path2D {
        &self.shape
    }

    /// Moves by a world-space delta. Translation is applied fresh on every
    /// draw, so no cache is invalidated.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.set_position(self.x + dx, self.y + dy);
    }

    /// Sets the world position of the transform origin.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Adds `degrees_diff` to the local rotation.
    pub fn rotate(&mut self, degrees_diff: f32) {
        self.set_angle(self.angle_deg + degrees_diff);
    }

    /// Sets the local rotation. Setting the current angle is a no-op;
    /// otherwise the cached radian angle is marked stale.
    pub fn set_angle(&mut self, degrees: f32) {
        let deg = normalize_angle(degrees);
        if self.angle_deg == deg {
            return;
        }
        self.angle_deg = deg;
        self.dirty = true;
    }

    /// Sets the global alpha, clamped into `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Sets or clears the per-axis scale.
    pub fn set_scale(&mut self, scale: Option<Vec2>) {
        self.scale = scale;
    }

    /// Resizes the local shape bounds, rebuilding the default rectangular
    /// containment shape.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let mut shape = Path2D::new();
        shape.rect(0.0, 0.0, width, height);
        self.shape = shape;
    }

    /// Draws the element, optionally painting its containment shape on top.
    ///
    /// The context state is saved before the local transform is applied and
    /// restored afterwards, so the context is left exactly as found
    /// regardless of what the paint routine does.
    pub fn draw(&mut self, ctx: &mut dyn DrawContext, outline: bool) {
        ctx.save();
        self.apply_local_transform(ctx);

        self.paint_local(ctx);
        if outline {
            self.paint_outline(ctx);
        }

        ctx.restore();
    }

    /// Tests a screen-space point against the local shape, under the same
    /// transform composition used for drawing, so hit-testing and visuals
    /// can never disagree.
    pub fn is_point_inside(&mut self, ctx: &mut dyn DrawContext, x: f32, y: f32) -> bool {
        ctx.save();
        self.apply_local_transform(ctx);
        let inside = ctx.is_point_in_path(&self.shape, x, y);
        ctx.restore();
        inside
    }

    fn paint_local(&self, ctx: &mut dyn DrawContext) {
        match &self.kind {
            ElemKind::Point(style) => point::paint(ctx, self.width, self.height, style),
            ElemKind::TestPattern => test_pattern::paint(ctx, self.width, self.height),
            ElemKind::Decorator { .. } => decorator::paint(
                ctx,
                self.width,
                self.height,
                Vec2::new(self.center_x, self.center_y),
            ),
        }
    }

    fn paint_outline(&self, ctx: &mut dyn DrawContext) {
        let style = &self.outline_style;
        ctx.set_fill_color(style.fill);
        ctx.set_stroke_color(style.stroke);
        ctx.set_line_width(style.stroke_width);
        draw::draw_shape(ctx, style.fill_alpha, style.stroke_alpha, &self.shape);
    }

    fn apply_local_transform(&mut self, ctx: &mut dyn DrawContext) {
        self.update_values();

        ctx.set_alpha(self.alpha);
        ctx.translate(self.x, self.y);
        ctx.rotate(self.angle_rad);
        ctx.translate(-self.center_x, -self.center_y);
        if let Some(scale) = self.scale {
            ctx.scale(scale.x, scale.y);
        }
    }

    fn update_values(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.angle_rad = deg_to_rad(self.angle_deg);
    }
}

/// The transform fields a decorator copies from its target.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TransformSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub angle_deg: f32,
}

impl Elem {
    pub(crate) fn transform_snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            center_x: self.center_x,
            center_y: self.center_y,
            angle_deg: self.angle_deg,
        }
    }

    pub(crate) fn sync_from(&mut self, snapshot: &TransformSnapshot) {
        self.set_position(snapshot.x, snapshot.y);
        self.set_size(snapshot.width, snapshot.height);
        self.center_x = snapshot.center_x;
        self.center_y = snapshot.center_y;
        self.set_angle(snapshot.angle_deg);
    }
}
