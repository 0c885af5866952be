//! # Rendering System
//!
//! Instead of drawing pixels directly, the built-in [`HeadlessContext`]
//! records a display list of `DrawCommand`s. The host application (Egui,
//! WGPU, a raster canvas, ...) is responsible for interpreting these
//! commands and producing pixels.
//!
//! [`HeadlessContext`]: crate::context::HeadlessContext

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (pixels): the active context
/// transform has already been applied when the command is recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear a rectangular region back to the blank surface.
    Clear {
        /// Top-left corner in screen pixels.
        pos: Vec2,
        /// Region size in screen pixels.
        size: Vec2,
    },
    /// A stroked polyline (one subpath of a path, or a rectangle outline).
    Stroke {
        /// Vertices in screen pixels.
        points: Vec<Vec2>,
        /// Whether the last vertex connects back to the first.
        closed: bool,
        /// Stroke color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels, already scaled by the transform.
        width: f32,
        /// Global alpha in effect when the command was recorded.
        alpha: f32,
        /// Dash pattern in effect, empty for a solid line.
        dash: Vec<f32>,
    },
    /// A filled polygon (one subpath of a path, or a rectangle).
    Fill {
        /// Vertices in screen pixels.
        points: Vec<Vec2>,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Global alpha in effect when the command was recorded.
        alpha: f32,
    },
    /// Text to be rendered. Layout and font resolution are left to the host.
    Text {
        /// Baseline-left position in screen pixels.
        pos: Vec2,
        /// The text content.
        text: String,
        /// Fill color, `None` for an outline-only draw.
        fill: Option<Vec4>,
        /// Outline color, `None` for a fill-only draw.
        stroke: Option<Vec4>,
        /// Font size in pixels (approximate).
        size: f32,
        /// Global alpha in effect when the command was recorded.
        alpha: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
