//! # MapCanvas
//!
//! `map_canvas` is a headless 2D camera / scene-graph core for an
//! interactive canvas map. It maintains a world-to-screen transform (pan,
//! zoom, rotation), derives an adaptive two-tier coordinate grid from the
//! visible world region, and keeps a small scene of transformable,
//! hit-testable drawable elements, while delegating actual pixel output to
//! the host application.
//!
//! ## Core Architecture
//! - **Viewport (`src/viewport.rs`)**: camera state, transform composition,
//!   forward/inverse coordinate mapping, visible-bounds computation.
//! - **Elements (`src/elem/`, `src/scene.rs`)**: per-node local transform,
//!   dirty-flag caching, point-containment testing against a local shape.
//! - **Grid (`src/grid.rs`)**: division-point algorithm with alignment and
//!   no-duplication guarantees.
//! - **Context (`src/context.rs`)**: the injected drawing boundary; the
//!   built-in [`HeadlessContext`] records a display list of
//!   [`DrawCommand`](render::DrawCommand)s for the host to render.
//!
//! Everything runs synchronously on the thread that owns the drawing
//! surface; a camera change merely invalidates caches read by the next
//! draw.

pub mod context;
pub mod controller;
pub mod draw;
pub mod elem;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod scene;
pub mod style;
pub mod trig;
pub mod viewport;

// Re-exports for convenience
pub use context::{DrawContext, HeadlessContext, Path2D};
pub use controller::{ControllerConfig, MapController};
pub use elem::{Elem, ElemKind, ElemOptions};
pub use error::CanvasError;
pub use grid::{GridOptions, InfinityGrid, LineConfig};
pub use input::{KeyEvent, Modifiers, PointerEvent};
pub use scene::{ElemId, Scene};
pub use viewport::{Bounds2D, Viewport, ViewportOptions, WorldLimits};
