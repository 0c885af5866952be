//! Point marker: a small square stroked then filled, used to pin a world
//! position (e.g. where a click landed).

use glam::Vec4;

use crate::context::DrawContext;
use crate::style::BLACK;

/// Default marker size in world units.
pub(crate) const SIZE: f32 = 3.0;

/// Pen configuration for a point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub fill: Vec4,
    pub fill_alpha: f32,
    pub stroke: Vec4,
    pub stroke_alpha: f32,
    pub line_width: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            fill: Vec4::new(1.0, 1.0, 0.0, 1.0),
            fill_alpha: 1.0,
            stroke: BLACK,
            stroke_alpha: 1.0,
            line_width: 3.0,
        }
    }
}

pub(crate) fn paint(ctx: &mut dyn DrawContext, width: f32, height: f32, style: &PointStyle) {
    ctx.set_alpha(style.stroke_alpha);
    ctx.set_stroke_color(style.stroke);
    ctx.set_line_width(style.line_width);
    ctx.stroke_rect(0.0, 0.0, width, height);

    ctx.set_alpha(style.fill_alpha);
    ctx.set_fill_color(style.fill);
    ctx.fill_rect(0.0, 0.0, width, height);
}
