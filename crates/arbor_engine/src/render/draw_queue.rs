//! Per-frame draw command collection
//!
//! The scene's draw walk records world-space and overlay commands into a
//! [`DrawQueue`]; a backend consumes the queue after the walk completes.
//! Commands can be batched by material to minimize state changes.

use std::collections::HashMap;

use crate::foundation::math::{Mat4, Vec3};

/// Handle to a mesh resource owned by the render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u64);

/// Handle to a material resource owned by the render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u64);

/// One world-space draw request
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Mesh to draw
    pub mesh: MeshId,
    /// Material to bind
    pub material: MaterialId,
    /// World matrix of the drawn object
    pub world: Mat4,
    /// Whether the material needs back-to-front blending
    pub transparent: bool,
}

/// One screen-space overlay request, anchored at a world position
#[derive(Debug, Clone)]
pub struct OverlayCommand {
    /// Text to display
    pub text: String,
    /// World-space anchor the backend projects to screen space
    pub anchor: Vec3,
    /// Text color
    pub color: Vec3,
}

/// A group of draw commands sharing one material
#[derive(Debug, Clone)]
pub struct DrawBatch {
    /// Material bound for every command in the batch
    pub material: MaterialId,
    /// Commands in submission order
    pub commands: Vec<DrawCommand>,
}

/// Collected draw output for one frame.
///
/// Cleared and refilled every frame; the backing allocations are reused.
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
    overlay: Vec<OverlayCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a world-space draw command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Record an overlay command
    pub fn push_overlay(&mut self, command: OverlayCommand) {
        self.overlay.push(command);
    }

    /// Drop all recorded commands, keeping capacity for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
        self.overlay.clear();
    }

    /// World-space commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Overlay commands in submission order
    pub fn overlay_commands(&self) -> &[OverlayCommand] {
        &self.overlay
    }

    /// Number of world-space commands recorded this frame
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue holds no commands of either kind
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.overlay.is_empty()
    }

    /// Opaque commands grouped by material, batches sorted by material id
    pub fn opaque_batches(&self) -> Vec<DrawBatch> {
        Self::batch_by_material(self.commands.iter().filter(|c| !c.transparent))
    }

    /// Transparent commands grouped by material, batches sorted by material id.
    ///
    /// Submission order is preserved inside each batch; proper back-to-front
    /// ordering is the backend's concern since it depends on the camera.
    pub fn transparent_batches(&self) -> Vec<DrawBatch> {
        Self::batch_by_material(self.commands.iter().filter(|c| c.transparent))
    }

    fn batch_by_material<'a>(commands: impl Iterator<Item = &'a DrawCommand>) -> Vec<DrawBatch> {
        let mut by_material: HashMap<MaterialId, DrawBatch> = HashMap::new();
        for command in commands {
            by_material
                .entry(command.material)
                .or_insert_with(|| DrawBatch {
                    material: command.material,
                    commands: Vec::new(),
                })
                .commands
                .push(command.clone());
        }

        let mut batches: Vec<DrawBatch> = by_material.into_values().collect();
        batches.sort_by_key(|batch| batch.material);
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(material: u64, transparent: bool) -> DrawCommand {
        DrawCommand {
            mesh: MeshId(0),
            material: MaterialId(material),
            world: Mat4::identity(),
            transparent,
        }
    }

    #[test]
    fn test_batching_groups_by_material() {
        let mut queue = DrawQueue::new();
        queue.push(command(0, false));
        queue.push(command(1, false));
        queue.push(command(0, false));

        let batches = queue.opaque_batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].material, MaterialId(0));
        assert_eq!(batches[0].commands.len(), 2);
        assert_eq!(batches[1].material, MaterialId(1));
        assert_eq!(batches[1].commands.len(), 1);
    }

    #[test]
    fn test_transparency_separates_batches() {
        let mut queue = DrawQueue::new();
        queue.push(command(0, false));
        queue.push(command(0, true));

        assert_eq!(queue.opaque_batches().len(), 1);
        assert_eq!(queue.transparent_batches().len(), 1);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_clear_empties_both_streams() {
        let mut queue = DrawQueue::new();
        queue.push(command(0, false));
        queue.push_overlay(OverlayCommand {
            text: "hp: 10".to_string(),
            anchor: Vec3::zeros(),
            color: Vec3::new(1.0, 1.0, 1.0),
        });
        assert!(!queue.is_empty());

        queue.clear();
        assert!(queue.is_empty());
    }
}
