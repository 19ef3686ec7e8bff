//! Backend abstraction for the rendering system
//!
//! The engine core never talks to a GPU. It hands the frame's
//! [`DrawQueue`] and lighting state to a [`RenderBackend`], which owns all
//! mesh/material resources behind opaque ids.

use crate::render::draw_queue::DrawQueue;
use crate::render::lighting::LightingEnvironment;
use crate::render::error::DrawError;

/// Consumes one frame of draw output.
///
/// Implementations validate the resource ids referenced by the queue; an
/// unknown id fails the present without crashing the engine loop.
pub trait RenderBackend {
    /// Backend name for log messages
    fn name(&self) -> &str;

    /// Consume the frame's draw queue and lighting state
    fn present(&mut self, queue: &DrawQueue, lighting: &LightingEnvironment)
        -> Result<(), DrawError>;
}

/// Backend that renders nothing.
///
/// Used by headless tests and simulation-only runs; accepts every resource id
/// and counts what it is asked to draw.
#[derive(Debug, Default)]
pub struct NullBackend {
    frames: u64,
    commands: u64,
}

impl NullBackend {
    /// Create a fresh null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Total draw commands consumed across all frames
    pub fn command_count(&self) -> u64 {
        self.commands
    }
}

impl RenderBackend for NullBackend {
    fn name(&self) -> &str {
        "null"
    }

    fn present(
        &mut self,
        queue: &DrawQueue,
        lighting: &LightingEnvironment,
    ) -> Result<(), DrawError> {
        self.frames += 1;
        self.commands += queue.len() as u64;
        log::trace!(
            "null backend frame {}: {} draw commands, {} overlay commands, {} lights",
            self.frames,
            queue.len(),
            queue.overlay_commands().len(),
            lighting.lights().len()
        );
        Ok(())
    }
}
