//! Render boundary
//!
//! The scene graph records what to draw; everything GPU-facing lives behind
//! the [`RenderBackend`] trait. This module defines the data that crosses
//! that boundary: draw commands, overlay commands, and aggregated lighting.

pub mod backend;
pub mod draw_queue;
pub mod error;
pub mod lighting;

pub use backend::{NullBackend, RenderBackend};
pub use draw_queue::{DrawBatch, DrawCommand, DrawQueue, MaterialId, MeshId, OverlayCommand};
pub use error::DrawError;
pub use lighting::{Light, LightType, LightingEnvironment};
