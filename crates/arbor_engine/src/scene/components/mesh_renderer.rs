//! Mesh rendering component
//!
//! The draw walk hands each enabled renderer its owner's world matrix; the
//! renderer records one [`DrawCommand`] referencing mesh and material by
//! handle. Resource ownership stays on the backend side.

use crate::foundation::math::Mat4;
use crate::render::draw_queue::{DrawCommand, DrawQueue, MaterialId, MeshId};
use crate::render::error::DrawError;
use crate::scene::{Component, Drawable};

/// Draws a mesh with a material at the owner's world transform
#[derive(Debug, Clone)]
pub struct MeshRendererComponent {
    /// Mesh handle known to the render backend
    pub mesh: MeshId,

    /// Material handle known to the render backend
    pub material: MaterialId,

    /// Whether this surface goes into the transparent pass
    pub transparent: bool,
}

impl MeshRendererComponent {
    /// Opaque renderer for `mesh` with `material`
    pub fn new(mesh: MeshId, material: MaterialId) -> Self {
        Self {
            mesh,
            material,
            transparent: false,
        }
    }

    /// Route this surface through the transparent pass, chainable
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

impl Component for MeshRendererComponent {
    fn drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

impl Drawable for MeshRendererComponent {
    fn record(&self, world: &Mat4, queue: &mut DrawQueue) -> Result<(), DrawError> {
        queue.push(DrawCommand {
            mesh: self.mesh,
            material: self.material,
            world: *world,
            transparent: self.transparent,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::{GameObject, Scene};
    use approx::assert_relative_eq;

    #[test]
    fn test_renderer_records_world_matrix() {
        let mut scene = Scene::new("test");
        let parent = scene.add_root(GameObject::new("rig").with_position(Vec3::new(1.0, 0.0, 0.0)));
        scene
            .add_child(
                parent,
                GameObject::new("body")
                    .with_position(Vec3::new(0.0, 2.0, 0.0))
                    .with_component(MeshRendererComponent::new(MeshId(1), MaterialId(1))),
            )
            .unwrap();
        scene.start();

        let mut queue = DrawQueue::new();
        scene.draw(&mut queue);

        assert_eq!(queue.len(), 1);
        let world = queue.commands()[0].world;
        assert_relative_eq!(world[(0, 3)], 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(world[(1, 3)], 2.0, epsilon = 1.0e-5);
    }

    #[test]
    fn test_disabled_subtree_not_drawn() {
        let mut scene = Scene::new("test");
        let id = scene.add_root(
            GameObject::new("hidden")
                .with_component(MeshRendererComponent::new(MeshId(1), MaterialId(1))),
        );
        scene.start();
        scene.set_enabled(id, false).unwrap();

        let mut queue = DrawQueue::new();
        scene.draw(&mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_transparent_flag_splits_batches() {
        let mut scene = Scene::new("test");
        scene.add_root(
            GameObject::new("glass").with_component(
                MeshRendererComponent::new(MeshId(1), MaterialId(7)).with_transparent(true),
            ),
        );
        scene.add_root(
            GameObject::new("rock")
                .with_component(MeshRendererComponent::new(MeshId(2), MaterialId(3))),
        );
        scene.start();

        let mut queue = DrawQueue::new();
        scene.draw(&mut queue);

        assert_eq!(queue.opaque_batches().len(), 1);
        assert_eq!(queue.transparent_batches().len(), 1);
    }
}
