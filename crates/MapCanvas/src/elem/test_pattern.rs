//! Demo pattern: a 5x5 grid of hue-stepped cells with a label, handy for
//! eyeballing rotation, scaling and alpha at a glance.

use glam::Vec4;

use crate::context::DrawContext;
use crate::style::{BLACK, WHITE};

/// Fixed pattern size in world units.
pub(crate) const SIZE: f32 = 100.0;

const DIV: u32 = 5;

pub(crate) fn paint(ctx: &mut dyn DrawContext, width: f32, height: f32) {
    let hue_step = 360.0 / (DIV * DIV + 1) as f32;
    let cell_width = width / DIV as f32;
    let cell_height = height / DIV as f32;

    let mut hue = 0.0;
    for j in 0..DIV {
        let y = cell_height * j as f32;
        for i in 0..DIV {
            let x = cell_width * i as f32;
            ctx.set_fill_color(hsl(hue, 1.0, 0.5));
            ctx.fill_rect(x, y, cell_width, cell_height);
            hue += hue_step;
        }
    }

    ctx.set_font_size(14.0);
    ctx.set_fill_color(WHITE);
    ctx.set_stroke_color(BLACK);
    ctx.set_line_width(2.0);
    ctx.stroke_text("test-elem", 21.0, 14.0);
    ctx.fill_text("test-elem", 21.0, 14.0);
}

/// HSL to RGBA, hue in degrees, saturation/lightness in `[0, 1]`.
fn hsl(hue: f32, saturation: f32, lightness: f32) -> Vec4 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Vec4::new(r + m, g + m, b + m, 1.0)
}
