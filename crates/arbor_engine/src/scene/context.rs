//! Per-hook component context
//!
//! Every lifecycle hook receives a [`ComponentContext`]: a short-lived view
//! that lets the component reach its owner, query and mutate the scene, and
//! request changes to itself. Requests that target the running component
//! (removal, destruction, enable state) cannot be applied while its own hook
//! is still on the stack, so they are recorded here and applied by the scene
//! as soon as the hook returns.

use crate::foundation::math::{self, Mat4, Vec3};
use crate::render::lighting::LightingEnvironment;
use crate::scene::component::{Component, ComponentSlot};
use crate::scene::error::SceneError;
use crate::scene::object::{GameObject, ObjectId};
use crate::scene::scene::{PhysicsSettings, Scene};
use crate::scene::transform::Transform;

/// Deferred request a component made against itself during a hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelfAction {
    /// Drop the component at the owner's next flush, without destroy hooks
    Remove,
    /// Disable and destroy the component, then drop it at the next flush
    Destroy,
}

/// Everything a hook asked to happen to its own slot
#[derive(Debug, Default)]
pub(crate) struct SelfRequests {
    /// Requested enable state, applied (with hooks) after the current hook
    pub(crate) enabled: Option<bool>,
    /// Requested removal or destruction
    pub(crate) action: Option<SelfAction>,
}

/// Scene access handed to a component for the duration of one hook call.
///
/// Methods that target the owner directly are infallible: the owner cannot be
/// freed while one of its hooks is running, because all destruction reachable
/// from a hook is deferred to the end of the frame walk.
pub struct ComponentContext<'a> {
    scene: &'a mut Scene,
    owner: ObjectId,
    slot_index: usize,
    delta_time: f32,
    requests: SelfRequests,
    fallback_transform: Transform,
}

impl<'a> ComponentContext<'a> {
    pub(crate) fn new(scene: &'a mut Scene, owner: ObjectId, slot_index: usize, delta_time: f32) -> Self {
        Self {
            scene,
            owner,
            slot_index,
            delta_time,
            requests: SelfRequests::default(),
            fallback_transform: Transform::default(),
        }
    }

    /// Consume the context, yielding the hook's deferred self-requests
    pub(crate) fn finish(self) -> SelfRequests {
        self.requests
    }

    // ------------------------------------------------------------------
    // Frame and owner basics
    // ------------------------------------------------------------------

    /// Seconds elapsed since the previous frame.
    ///
    /// Zero for hooks fired outside the update walk, such as attach-time
    /// `on_create`.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// The owning object's id
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    /// Index of the running component in its owner's component list
    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    /// The owning object's name
    pub fn name(&self) -> &str {
        self.scene
            .arena
            .get(self.owner)
            .map_or("", |object| object.name.as_str())
    }

    /// The owner's local transform
    pub fn transform(&self) -> &Transform {
        match self.scene.arena.get(self.owner) {
            Some(object) => &object.transform,
            // The owner outlives its own hook; this branch is unreachable.
            None => &self.fallback_transform,
        }
    }

    /// Mutable access to the owner's local transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        match self.scene.arena.get_mut(self.owner) {
            Some(object) => &mut object.transform,
            None => &mut self.fallback_transform,
        }
    }

    /// The owner's parent, if it is attached below another object
    pub fn parent(&self) -> Option<ObjectId> {
        self.scene.arena.get(self.owner).and_then(|object| object.parent)
    }

    /// The owner's child ids.
    ///
    /// Children attached during this frame are included; children staged for
    /// removal remain listed until the owner's flush.
    pub fn children(&self) -> &[ObjectId] {
        match self.scene.arena.get(self.owner) {
            Some(object) => &object.children,
            None => &[],
        }
    }

    /// Whether `id` refers to a live object
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.scene.is_alive(id)
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Number of components on the owner, the running one included
    pub fn component_count(&self) -> usize {
        self.scene
            .arena
            .get(self.owner)
            .map_or(0, GameObject::component_count)
    }

    /// First sibling component of type `T` on the owner.
    ///
    /// The running component is lifted out of its slot for the duration of
    /// the hook, so querying your own concrete type finds a same-typed
    /// sibling, not yourself.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.scene.get_component(self.owner).ok().flatten()
    }

    /// Mutable access to the first sibling component of type `T`
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.scene.get_component_mut(self.owner).ok().flatten()
    }

    /// First component of type `T` on another object
    pub fn get_component_on<T: Component>(&self, id: ObjectId) -> Result<Option<&T>, SceneError> {
        self.scene.get_component(id)
    }

    /// Attach a component to the owner and run its attach lifecycle now.
    ///
    /// The new component lands after the update walk's snapshot, so its first
    /// `on_update` runs next frame. Returns its index.
    pub fn add_component<C: Component>(&mut self, component: C) -> usize {
        self.scene.add_component(self.owner, component).unwrap_or_default()
    }

    /// Attach a component to another object
    pub fn add_component_to<C: Component>(
        &mut self,
        id: ObjectId,
        component: C,
    ) -> Result<usize, SceneError> {
        self.scene.add_component(id, component)
    }

    /// Stage the owner's first component of type `T` for removal, without
    /// destroy hooks. Returns whether a component was newly staged.
    ///
    /// Because the running component is lifted, naming your own type targets
    /// a sibling; use [`ComponentContext::remove_self`] for yourself.
    pub fn remove_component<T: Component>(&mut self) -> bool {
        self.scene.remove_component::<T>(self.owner).unwrap_or(false)
    }

    /// Stage the running component itself for removal, without destroy hooks.
    ///
    /// Applied when the current hook returns. A pending destroy request takes
    /// precedence.
    pub fn remove_self(&mut self) {
        if self.requests.action.is_none() {
            self.requests.action = Some(SelfAction::Remove);
        }
    }

    /// Destroy the running component: as soon as this hook returns it is
    /// disabled (firing `on_disable` if needed) and receives `on_destroy`;
    /// the slot is dropped at the owner's next flush
    pub fn destroy_self(&mut self) {
        self.requests.action = Some(SelfAction::Destroy);
    }

    /// Whether the running component is currently enabled
    pub fn is_self_enabled(&self) -> bool {
        self.scene
            .arena
            .get(self.owner)
            .and_then(|object| object.components.get(self.slot_index))
            .is_some_and(ComponentSlot::is_enabled)
    }

    /// Request an enable-state change for the running component.
    ///
    /// Applied when the current hook returns; `on_enable`/`on_disable` fire
    /// then if the effective state changes. Repeated calls overwrite each
    /// other, last one wins.
    pub fn set_self_enabled(&mut self, enabled: bool) {
        self.requests.enabled = Some(enabled);
    }

    // ------------------------------------------------------------------
    // Hierarchy
    // ------------------------------------------------------------------

    /// Create a child under the owner and run its attach lifecycle now.
    ///
    /// The child joins after the update walk's child snapshot, so its first
    /// update runs next frame.
    pub fn add_child(&mut self, object: GameObject) -> ObjectId {
        self.scene.add_child(self.owner, object).unwrap_or_default()
    }

    /// Stage a child of the owner for detachment at the owner's next flush.
    /// Returns whether anything will actually be removed.
    pub fn remove_child(&mut self, child: ObjectId) -> bool {
        self.scene.remove_child(self.owner, child).unwrap_or(false)
    }

    /// Queue the owning object for destruction at the end of the frame walk
    pub fn destroy_owner(&mut self) {
        self.scene.queue_destroy(self.owner);
    }

    /// Queue any object for destruction at the end of the frame walk.
    ///
    /// Unlike [`Scene::destroy`], which is immediate, hook-initiated destroys
    /// are always deferred so the walk in progress stays valid.
    pub fn destroy(&mut self, id: ObjectId) {
        self.scene.queue_destroy(id);
    }

    /// Enable or disable another object
    pub fn set_enabled(&mut self, id: ObjectId, enabled: bool) -> Result<(), SceneError> {
        self.scene.set_enabled(id, enabled)
    }

    // ------------------------------------------------------------------
    // Spatial queries
    // ------------------------------------------------------------------

    /// World matrix of the owner
    pub fn world_matrix(&self) -> Mat4 {
        self.scene
            .world_matrix(self.owner)
            .unwrap_or_else(|_| Mat4::identity())
    }

    /// World-space position of the owner, ancestor rotation and scale applied
    pub fn world_position(&self) -> Vec3 {
        math::translation_of(&self.world_matrix())
    }

    /// World matrix of another object
    pub fn world_matrix_of(&self, id: ObjectId) -> Result<Mat4, SceneError> {
        self.scene.world_matrix(id)
    }

    /// World-space position of another object
    pub fn world_position_of(&self, id: ObjectId) -> Result<Vec3, SceneError> {
        self.scene.world_position(id)
    }

    // ------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------

    /// The scene's lighting environment
    pub fn lighting(&self) -> &LightingEnvironment {
        &self.scene.services.lighting
    }

    /// Mutable lighting access, used by light components to submit lights
    pub fn lighting_mut(&mut self) -> &mut LightingEnvironment {
        &mut self.scene.services.lighting
    }

    /// Scene-wide physics parameters
    pub fn physics(&self) -> &PhysicsSettings {
        &self.scene.services.physics
    }
}
