//! # Infinity Grid
//!
//! Derives the set of grid lines to draw from the viewport's current
//! visible world bounds. Two tiers (main and sub) share the same grid
//! center, so their lines can never drift out of alignment; sub lines that
//! coincide with a main line are dropped so the main tier paints cleanly
//! over the sub tier at every intersection.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::context::{DrawContext, Path2D};
use crate::error::CanvasError;
use crate::viewport::Viewport;

/// One tier of grid lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// World-space distance between consecutive lines. Must be positive.
    pub each: f32,
    /// Alpha the tier is stroked with.
    pub alpha: f32,
    /// Stroke thickness.
    pub line_width: f32,
    /// Stroke color.
    pub stroke: Vec4,
}

/// Grid configuration: the world point the divisions are anchored to, plus
/// the two line tiers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    pub center_x: f32,
    pub center_y: f32,
    pub main: LineConfig,
    pub sub: LineConfig,
}

impl Default for GridOptions {
    fn default() -> Self {
        let grey = Vec4::new(0.667, 0.667, 0.667, 1.0);
        Self {
            center_x: 0.0,
            center_y: 0.0,
            main: LineConfig {
                each: 100.0,
                alpha: 0.7,
                line_width: 3.0,
                stroke: grey,
            },
            sub: LineConfig {
                each: 25.0,
                alpha: 0.4,
                line_width: 1.0,
                stroke: grey,
            },
        }
    }
}

/// Adaptive two-tier grid covering whatever world region is visible.
#[derive(Clone, Debug)]
pub struct InfinityGrid {
    options: GridOptions,
}

impl InfinityGrid {
    /// Builds a grid, failing fast on a non-positive line spacing in either
    /// tier.
    pub fn new(options: GridOptions) -> Result<Self, CanvasError> {
        for tier in [&options.main, &options.sub] {
            if !(tier.each > 0.0) {
                return Err(CanvasError::InvalidGridStep(tier.each));
            }
        }
        Ok(Self { options })
    }

    /// The active configuration.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Returns the multiples of `each`, offset from `center`, forming the
    /// smallest closed interval that covers `[first, last]`.
    ///
    /// Points are computed as `center + k * each` for integer `k`, so two
    /// tiers sharing a center stay exactly aligned regardless of their step
    /// ratio. Values present in `exclude` are dropped by equality, keeping
    /// the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `each` is not positive: a zero or negative step can never
    /// cover the interval and would otherwise loop forever.
    pub fn division_points(
        center: f32,
        first: f32,
        last: f32,
        each: f32,
        exclude: Option<&[f32]>,
    ) -> Vec<f32> {
        assert!(each > 0.0, "division step must be positive, got {each}");

        let k0 = -(((first - center).abs() / each).ceil() as i64);
        let k1 = ((last - center).abs() / each).ceil() as i64;

        let mut points = Vec::with_capacity((k1 - k0 + 1).max(0) as usize);
        for k in k0..=k1 {
            let p = center + k as f32 * each;
            if exclude.is_some_and(|values| values.contains(&p)) {
                continue;
            }
            points.push(p);
        }
        points
    }

    /// Strokes the grid over the region currently visible through
    /// `viewport`. The sub tier is drawn first so main lines paint over sub
    /// lines at intersections. Only the context's global alpha is restored
    /// when done; line width and stroke color keep the main tier's values.
    pub fn draw(&self, ctx: &mut dyn DrawContext, viewport: &mut Viewport) {
        let GridOptions {
            center_x,
            center_y,
            main,
            sub,
        } = self.options;
        let bounds = viewport.visible_world_bounds();

        let main_xs = Self::division_points(center_x, bounds.left, bounds.right, main.each, None);
        let main_ys = Self::division_points(center_y, bounds.top, bounds.bottom, main.each, None);
        let sub_xs = Self::division_points(
            center_x,
            bounds.left,
            bounds.right,
            sub.each,
            Some(&main_xs),
        );
        let sub_ys = Self::division_points(
            center_y,
            bounds.top,
            bounds.bottom,
            sub.each,
            Some(&main_ys),
        );

        let alpha = ctx.alpha();
        Self::draw_lines(ctx, &sub_xs, &sub_ys, &sub);
        Self::draw_lines(ctx, &main_xs, &main_ys, &main);
        ctx.set_alpha(alpha);
    }

    fn draw_lines(ctx: &mut dyn DrawContext, xs: &[f32], ys: &[f32], config: &LineConfig) {
        let (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) =
            (xs.first(), xs.last(), ys.first(), ys.last())
        else {
            return;
        };

        ctx.set_alpha(config.alpha);
        ctx.set_line_width(config.line_width);
        ctx.set_stroke_color(config.stroke);

        let mut path = Path2D::new();
        for &x in xs {
            path.move_to(x, y0);
            path.line_to(x, y1);
        }
        for &y in ys {
            path.move_to(x0, y);
            path.line_to(x1, y);
        }
        ctx.stroke_path(&path);
    }
}
