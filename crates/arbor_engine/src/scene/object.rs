//! Game object tree nodes
//!
//! A game object is one node of the scene forest: a name, one transform,
//! an insertion-ordered list of attached components, and an insertion-ordered
//! list of child object ids. Nodes live in the scene's arena and are
//! addressed by [`ObjectId`]; structural mutation goes through
//! [`Scene`](crate::scene::Scene), which is the only writer of the child and
//! component lists.

use crate::foundation::math::{Quat, Vec3};
use crate::scene::component::{Activation, Component, ComponentSlot};
use crate::scene::transform::Transform;

slotmap::new_key_type! {
    /// Generational handle to a game object in a scene's arena.
    ///
    /// Ids stay unique across destruction: a destroyed object's id never
    /// aliases a later allocation, so stale handles are detectable.
    pub struct ObjectId;
}

/// One node in the scene graph.
///
/// Construct detached via [`GameObject::new`] and the `with_*` builders, then
/// hand ownership to a scene with
/// [`Scene::add_root`](crate::scene::Scene::add_root) or
/// [`Scene::add_child`](crate::scene::Scene::add_child).
#[derive(Debug)]
pub struct GameObject {
    pub(crate) name: String,
    pub(crate) transform: Transform,
    pub(crate) activation: Activation,
    pub(crate) created: bool,
    pub(crate) started: bool,
    pub(crate) in_scene: bool,
    pub(crate) parent: Option<ObjectId>,
    pub(crate) children: Vec<ObjectId>,
    pub(crate) components: Vec<ComponentSlot>,
    pub(crate) pending_child_removals: Vec<ObjectId>,
    pub(crate) pending_component_removals: Vec<usize>,
}

impl GameObject {
    /// Create a detached object with an identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            activation: Activation::Undefined,
            created: false,
            started: false,
            in_scene: false,
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
            pending_child_removals: Vec::new(),
            pending_component_removals: Vec::new(),
        }
    }

    /// Replace the whole transform, chainable
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the local position, chainable
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Set the local rotation, chainable
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Attach a component before the object joins a scene, chainable.
    ///
    /// No lifecycle hooks fire here; `on_create` fires when the object is
    /// attached to a live scene.
    pub fn with_component<C: Component>(mut self, component: C) -> Self {
        self.components.push(ComponentSlot::new(component));
        self
    }

    /// The object's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the object
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Shared access to the local transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the local transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// The parent id, or `None` for roots and detached objects
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Child ids in insertion order.
    ///
    /// May contain ids of objects destroyed since this node's last update;
    /// they are pruned at the next flush and callers should skip dead ids.
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    /// Number of attached components, including any staged for removal
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether the object currently receives updates
    pub fn is_enabled(&self) -> bool {
        self.activation.is_enabled()
    }

    /// Whether the object has ever been part of a live scene
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Whether the object's start moment has run
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the object is currently reachable from a scene root
    pub fn is_in_scene(&self) -> bool {
        self.in_scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;
    impl Component for Probe {}

    #[test]
    fn test_new_object_is_detached_and_undefined() {
        let object = GameObject::new("probe");
        assert_eq!(object.name(), "probe");
        assert!(object.parent().is_none());
        assert!(!object.is_enabled());
        assert!(!object.is_created());
        assert!(!object.is_started());
        assert!(!object.is_in_scene());
        assert_eq!(object.component_count(), 0);
    }

    #[test]
    fn test_builder_composes_transform_and_components() {
        let object = GameObject::new("probe")
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_component(Probe);

        assert_eq!(object.transform().position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(object.component_count(), 1);
        // Pre-attach components have no lifecycle history yet
        assert!(!object.components[0].created);
        assert!(!object.components[0].started);
    }
}
