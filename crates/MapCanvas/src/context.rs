//! # Drawing Context Boundary
//!
//! The core never creates a window or GPU surface. The host injects a 2D
//! drawing context implementing [`DrawContext`]; everything the camera, the
//! grid and the elements need from it is expressed on that trait: a
//! save/restore stack of paint state, an affine transform, stroke/fill of
//! rectangles and paths, and point-in-path testing under the currently
//! active transform.
//!
//! [`HeadlessContext`] is the built-in implementation. It keeps the full
//! paint state in software and records screen-space
//! [`DrawCommand`](crate::render::DrawCommand)s for the host to interpret.

use glam::{Affine2, Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::render::{DrawCommand, RenderList};

/// Line endcap style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line corner style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A single verb of a [`Path2D`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathVerb {
    /// Start a new subpath at the given point.
    MoveTo(Vec2),
    /// Extend the current subpath with a straight segment.
    LineTo(Vec2),
    /// A full axis-aligned rectangle as its own closed subpath.
    Rect { pos: Vec2, size: Vec2 },
    /// Close the current subpath back to its starting point.
    Close,
}

/// A reusable vector path, anchored at the local origin of whoever draws it.
///
/// Paths carry no style; they are stroked or filled with whatever pen state
/// the context holds at draw time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path2D {
    verbs: Vec<PathVerb>,
}

impl Path2D {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::MoveTo(Vec2::new(x, y)));
    }

    /// Adds a straight segment from the current point to `(x, y)`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::LineTo(Vec2::new(x, y)));
    }

    /// Adds an axis-aligned rectangle as a closed subpath.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.verbs.push(PathVerb::Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        });
    }

    /// Closes the current subpath.
    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    /// The raw verb list.
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Flattens the path into transformed polylines, one per subpath.
    ///
    /// The boolean marks subpaths that were explicitly closed.
    pub(crate) fn polygonize(&self, transform: &Affine2) -> Vec<(Vec<Vec2>, bool)> {
        let mut subpaths: Vec<(Vec<Vec2>, bool)> = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        let mut closed = false;

        let mut flush = |points: &mut Vec<Vec2>, closed: &mut bool, out: &mut Vec<(Vec<Vec2>, bool)>| {
            if points.len() > 1 {
                out.push((std::mem::take(points), *closed));
            } else {
                points.clear();
            }
            *closed = false;
        };

        for verb in &self.verbs {
            match *verb {
                PathVerb::MoveTo(p) => {
                    flush(&mut current, &mut closed, &mut subpaths);
                    current.push(transform.transform_point2(p));
                }
                PathVerb::LineTo(p) => {
                    current.push(transform.transform_point2(p));
                }
                PathVerb::Rect { pos, size } => {
                    flush(&mut current, &mut closed, &mut subpaths);
                    let corners = [
                        pos,
                        pos + Vec2::new(size.x, 0.0),
                        pos + size,
                        pos + Vec2::new(0.0, size.y),
                    ];
                    subpaths.push((
                        corners
                            .iter()
                            .map(|&c| transform.transform_point2(c))
                            .collect(),
                        true,
                    ));
                }
                PathVerb::Close => {
                    closed = true;
                    flush(&mut current, &mut closed, &mut subpaths);
                }
            }
        }
        flush(&mut current, &mut closed, &mut subpaths);
        subpaths
    }

    /// Tests whether `point` falls inside the path when drawn under
    /// `transform`, using the non-zero winding rule. Every subpath is
    /// treated as implicitly closed, matching fill semantics.
    pub fn contains_point(&self, transform: &Affine2, point: Vec2) -> bool {
        let mut winding = 0;
        for (polygon, _) in self.polygonize(transform) {
            winding += winding_number(&polygon, point);
        }
        winding != 0
    }
}

fn winding_number(polygon: &[Vec2], p: Vec2) -> i32 {
    let mut wn = 0;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// The 2D drawing context the host must supply.
///
/// Semantics follow the familiar immediate-mode canvas model: a current
/// affine transform mapping user coordinates to screen pixels, a global
/// alpha, separate stroke/fill colors, and a save/restore stack covering
/// all of the above. Components in this crate always bracket their state
/// mutations with [`save`](DrawContext::save) / [`restore`](DrawContext::restore)
/// so style state never leaks across draw calls.
pub trait DrawContext {
    /// Surface size in pixels.
    fn size(&self) -> Vec2;

    /// Pushes the full paint state (transform included) onto the stack.
    fn save(&mut self);
    /// Pops the paint state. A restore with an empty stack is a no-op.
    fn restore(&mut self);

    /// The currently active transform.
    fn transform(&self) -> Affine2;
    /// Replaces the active transform.
    fn set_transform(&mut self, transform: Affine2);
    /// Resets the active transform to the identity.
    fn reset_transform(&mut self) {
        self.set_transform(Affine2::IDENTITY);
    }
    /// Composes a translation onto the active transform.
    fn translate(&mut self, dx: f32, dy: f32);
    /// Composes a rotation (radians, clockwise in screen space) onto the
    /// active transform.
    fn rotate(&mut self, radians: f32);
    /// Composes a scale onto the active transform.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Current global alpha.
    fn alpha(&self) -> f32;
    /// Sets the global alpha applied to every subsequent draw.
    fn set_alpha(&mut self, alpha: f32);

    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_line_dash(&mut self, dash: &[f32]);
    fn set_line_dash_offset(&mut self, offset: f32);
    fn set_stroke_color(&mut self, color: Vec4);
    fn set_fill_color(&mut self, color: Vec4);
    fn set_font_size(&mut self, px: f32);

    /// Clears a rectangle (given in user coordinates) back to the blank
    /// surface.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_path(&mut self, path: &Path2D);
    fn stroke_path(&mut self, path: &Path2D);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);

    /// Tests `(x, y)` (screen pixels) against `path` drawn under the
    /// currently active transform.
    fn is_point_in_path(&self, path: &Path2D, x: f32, y: f32) -> bool;
}

/// The full paint state of a [`HeadlessContext`], saved and restored as one
/// unit.
#[derive(Clone, Debug)]
struct PaintState {
    transform: Affine2,
    alpha: f32,
    stroke: Vec4,
    fill: Vec4,
    line_width: f32,
    line_cap: LineCap,
    line_join: LineJoin,
    line_dash: Vec<f32>,
    line_dash_offset: f32,
    font_size: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            alpha: 1.0,
            stroke: Vec4::new(0.0, 0.0, 0.0, 1.0),
            fill: Vec4::new(0.0, 0.0, 0.0, 1.0),
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            line_dash: Vec::new(),
            line_dash_offset: 0.0,
            font_size: 10.0,
        }
    }
}

/// Software drawing context recording a [`RenderList`].
///
/// All geometry is resolved to screen space at record time, so the host can
/// replay the commands without knowing anything about the camera or the
/// element transforms that produced them.
#[derive(Clone, Debug)]
pub struct HeadlessContext {
    size: Vec2,
    state: PaintState,
    stack: Vec<PaintState>,
    commands: RenderList,
}

impl HeadlessContext {
    /// Creates a context for a surface of `width` x `height` pixels.
    pub fn new(width: f32, height: f32) -> Result<Self, CanvasError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(CanvasError::InvalidSurfaceSize { width, height });
        }
        Ok(Self {
            size: Vec2::new(width, height),
            state: PaintState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
        })
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &RenderList {
        &self.commands
    }

    /// Takes the recorded commands, leaving the list empty for the next
    /// frame.
    pub fn take_commands(&mut self) -> RenderList {
        std::mem::take(&mut self.commands)
    }

    /// Line width in screen pixels under the active transform.
    fn device_line_width(&self) -> f32 {
        let m = self.state.transform.matrix2;
        let scale = (m.x_axis.length() + m.y_axis.length()) / 2.0;
        self.state.line_width * scale
    }

    fn rect_corners(&self, x: f32, y: f32, width: f32, height: f32) -> Vec<Vec2> {
        let t = &self.state.transform;
        [
            Vec2::new(x, y),
            Vec2::new(x + width, y),
            Vec2::new(x + width, y + height),
            Vec2::new(x, y + height),
        ]
        .iter()
        .map(|&p| t.transform_point2(p))
        .collect()
    }
}

impl DrawContext for HeadlessContext {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn transform(&self) -> Affine2 {
        self.state.transform
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.state.transform = transform;
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform * Affine2::from_translation(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(radians);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform * Affine2::from_scale(Vec2::new(sx, sy));
    }

    fn alpha(&self) -> f32 {
        self.state.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        self.state.line_dash = dash.to_vec();
    }

    fn set_line_dash_offset(&mut self, offset: f32) {
        self.state.line_dash_offset = offset;
    }

    fn set_stroke_color(&mut self, color: Vec4) {
        self.state.stroke = color;
    }

    fn set_fill_color(&mut self, color: Vec4) {
        self.state.fill = color;
    }

    fn set_font_size(&mut self, px: f32) {
        self.state.font_size = px;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let corners = self.rect_corners(x, y, width, height);
        let mut min = corners[0];
        let mut max = corners[0];
        for &c in &corners[1..] {
            min = min.min(c);
            max = max.max(c);
        }
        self.commands.push(DrawCommand::Clear {
            pos: min,
            size: max - min,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let points = self.rect_corners(x, y, width, height);
        self.commands.push(DrawCommand::Fill {
            points,
            color: self.state.fill,
            alpha: self.state.alpha,
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let points = self.rect_corners(x, y, width, height);
        self.commands.push(DrawCommand::Stroke {
            points,
            closed: true,
            color: self.state.stroke,
            width: self.device_line_width(),
            alpha: self.state.alpha,
            dash: self.state.line_dash.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path2D) {
        for (points, _) in path.polygonize(&self.state.transform) {
            self.commands.push(DrawCommand::Fill {
                points,
                color: self.state.fill,
                alpha: self.state.alpha,
            });
        }
    }

    fn stroke_path(&mut self, path: &Path2D) {
        let width = self.device_line_width();
        for (points, closed) in path.polygonize(&self.state.transform) {
            self.commands.push(DrawCommand::Stroke {
                points,
                closed,
                color: self.state.stroke,
                width,
                alpha: self.state.alpha,
                dash: self.state.line_dash.clone(),
            });
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let pos = self.state.transform.transform_point2(Vec2::new(x, y));
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            fill: Some(self.state.fill),
            stroke: None,
            size: self.state.font_size,
            alpha: self.state.alpha,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let pos = self.state.transform.transform_point2(Vec2::new(x, y));
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            fill: None,
            stroke: Some(self.state.stroke),
            size: self.state.font_size,
            alpha: self.state.alpha,
        });
    }

    fn is_point_in_path(&self, path: &Path2D, x: f32, y: f32) -> bool {
        path.contains_point(&self.state.transform, Vec2::new(x, y))
    }
}
