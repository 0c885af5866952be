//! # Stateless Draw Helpers
//!
//! Small routines that paint a line, rectangle or arbitrary path using the
//! caller-supplied alphas, relying on the pen colors already set on the
//! context. They mutate the context's global alpha only; anything drawn at
//! zero alpha is skipped entirely.

use crate::context::{DrawContext, Path2D};
use crate::style::CtxStyle;

/// Draws a line between the given points with the stroke style previously
/// set on `ctx`, at the given alpha.
pub fn draw_line(ctx: &mut dyn DrawContext, alpha: f32, x0: f32, y0: f32, x1: f32, y1: f32) {
    if alpha == 0.0 {
        return;
    }
    ctx.set_alpha(alpha);
    let mut path = Path2D::new();
    path.move_to(x0, y0);
    path.line_to(x1, y1);
    ctx.stroke_path(&path);
}

/// Draws a rectangle at the given top-left position, filling then stroking
/// with the context's current pen colors and the provided alphas.
pub fn draw_rect(
    ctx: &mut dyn DrawContext,
    fill_alpha: f32,
    stroke_alpha: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    if fill_alpha > 0.0 {
        ctx.set_alpha(fill_alpha);
        ctx.fill_rect(x, y, width, height);
    }
    if stroke_alpha > 0.0 {
        ctx.set_alpha(stroke_alpha);
        ctx.stroke_rect(x, y, width, height);
    }
}

/// Draws a shape with the context's current pen colors and the provided
/// alphas.
pub fn draw_shape(
    ctx: &mut dyn DrawContext,
    fill_alpha: f32,
    stroke_alpha: f32,
    shape: &Path2D,
) {
    if fill_alpha > 0.0 {
        ctx.set_alpha(fill_alpha);
        ctx.fill_path(shape);
    }
    if stroke_alpha > 0.0 {
        ctx.set_alpha(stroke_alpha);
        ctx.stroke_path(shape);
    }
}

/// Applies the present fields of a [`CtxStyle`] to the context.
pub fn apply_ctx_style(ctx: &mut dyn DrawContext, style: &CtxStyle) {
    if let Some(alpha) = style.alpha {
        ctx.set_alpha(alpha);
    }
    if let Some(cap) = style.line_cap {
        ctx.set_line_cap(cap);
    }
    if let Some(offset) = style.line_dash_offset {
        ctx.set_line_dash_offset(offset);
    }
    if let Some(join) = style.line_join {
        ctx.set_line_join(join);
    }
    if let Some(width) = style.line_width {
        ctx.set_line_width(width);
    }
    if let Some(dash) = &style.line_dash {
        ctx.set_line_dash(dash);
    }
    if let Some(stroke) = style.stroke {
        ctx.set_stroke_color(stroke);
    }
    if let Some(fill) = style.fill {
        ctx.set_fill_color(fill);
    }
}
