//! # Style Types
//!
//! Pen configuration passed *into* draw calls. Style values are plain data;
//! nothing here touches a context on its own, so no persistent pen state can
//! leak across components. Colors are RGBA `Vec4` in the `0.0 - 1.0` range.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::context::{LineCap, LineJoin};

/// Opaque white.
pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
/// Opaque black.
pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// A sparse pen override: only the present fields are applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CtxStyle {
    pub alpha: Option<f32>,
    pub line_cap: Option<LineCap>,
    pub line_dash_offset: Option<f32>,
    pub line_join: Option<LineJoin>,
    pub line_width: Option<f32>,
    pub line_dash: Option<Vec<f32>>,
    pub fill: Option<Vec4>,
    pub stroke: Option<Vec4>,
}

/// Fill-and-outline style for a closed shape, with independent alphas so a
/// shape can be painted as a translucent fill under an opaque border.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: Vec4,
    /// Alpha used while filling; `0.0` skips the fill entirely.
    pub fill_alpha: f32,
    /// Stroke color.
    pub stroke: Vec4,
    /// Alpha used while stroking; `0.0` skips the stroke entirely.
    pub stroke_alpha: f32,
    /// Stroke thickness.
    pub stroke_width: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        // Translucent white fill under a red outline: the debug style used
        // when an element is drawn with its containment shape visible.
        Self {
            fill: WHITE,
            fill_alpha: 0.5,
            stroke: Vec4::new(1.0, 0.0, 0.0, 1.0),
            stroke_alpha: 1.0,
            stroke_width: 3.0,
        }
    }
}
