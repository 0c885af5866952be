//! Transform decorator: outlines another element's local bounds and draws
//! its orientation axes from the pivot, making position, rotation and pivot
//! visible without touching the target itself.

use glam::{Vec2, Vec4};

use crate::context::DrawContext;
use crate::draw;

const FRAME: Vec4 = Vec4::new(0.0, 1.0, 1.0, 1.0);
const AXIS_X: Vec4 = Vec4::new(1.0, 0.2, 0.2, 1.0);
const AXIS_Y: Vec4 = Vec4::new(0.2, 1.0, 0.2, 1.0);

pub(crate) fn paint(ctx: &mut dyn DrawContext, width: f32, height: f32, center: Vec2) {
    // dashed frame around the target's local bounds
    ctx.set_line_dash(&[4.0, 4.0]);
    ctx.set_line_width(1.0);
    ctx.set_stroke_color(FRAME);
    ctx.set_alpha(0.9);
    ctx.stroke_rect(0.0, 0.0, width, height);
    ctx.set_line_dash(&[]);

    // orientation axes from the pivot, slightly past the frame
    let reach_x = width * 0.75;
    let reach_y = height * 0.75;
    ctx.set_line_width(2.0);
    ctx.set_stroke_color(AXIS_X);
    draw::draw_line(ctx, 1.0, center.x, center.y, center.x + reach_x, center.y);
    ctx.set_stroke_color(AXIS_Y);
    draw::draw_line(ctx, 1.0, center.x, center.y, center.x, center.y + reach_y);
}
