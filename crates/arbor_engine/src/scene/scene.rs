//! Scene graph core
//!
//! A [`Scene`] owns every game object in a generational arena and a forest of
//! root ids. It drives the per-frame walk in a fixed order for each node:
//! integrate the transform, update enabled components, update enabled
//! children, then flush that node's deferred removals. Structural mutation
//! requested while the walk is in progress is either applied append-only
//! (additions) or staged in pending queues (removals, destroys) so iteration
//! never invalidates itself.
//!
//! World matrices are composed on the call stack from plain values; there is
//! no shared scratch state, so composition is reentrant and needs no
//! synchronization.

use slotmap::SlotMap;

use crate::foundation::math::{self, Mat4, Vec3};
use crate::render::draw_queue::DrawQueue;
use crate::render::lighting::LightingEnvironment;
use crate::scene::component::{Activation, ActivationEvent, Component, ComponentSlot};
use crate::scene::context::{ComponentContext, SelfAction};
use crate::scene::error::SceneError;
use crate::scene::object::{GameObject, ObjectId};
use crate::scene::transform::Transform;

/// Scene-wide physics parameters consumed by physics proxy components
#[derive(Debug, Clone)]
pub struct PhysicsSettings {
    /// Gravitational acceleration applied by rigidbody components
    pub gravity: Vec3,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
        }
    }
}

/// Scene-wide services consumed by components during update
#[derive(Debug, Default)]
pub struct SceneServices {
    /// Per-frame light aggregation
    pub lighting: LightingEnvironment,
    /// Physics parameters
    pub physics: PhysicsSettings,
}

/// Lifecycle hook selector used by the internal dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hook {
    Create,
    Start,
    Enable,
    Disable,
    Update,
    Destroy,
}

/// A forest of game objects plus the services they share.
///
/// All object access goes through [`ObjectId`] handles; operations on a
/// destroyed object's id fail with [`SceneError::ObjectNotAlive`] instead of
/// reaching freed state.
#[derive(Debug)]
pub struct Scene {
    pub(crate) name: String,
    pub(crate) arena: SlotMap<ObjectId, GameObject>,
    pub(crate) roots: Vec<ObjectId>,
    pub(crate) pending_root_removals: Vec<ObjectId>,
    pub(crate) pending_destroys: Vec<ObjectId>,
    pub(crate) started: bool,
    pub(crate) services: SceneServices,
}

impl Scene {
    /// Create an empty, not-yet-started scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arena: SlotMap::with_key(),
            roots: Vec::new(),
            pending_root_removals: Vec::new(),
            pending_destroys: Vec::new(),
            started: false,
            services: SceneServices::default(),
        }
    }

    /// Replace the lighting environment, chainable
    pub fn with_lighting(mut self, lighting: LightingEnvironment) -> Self {
        self.services.lighting = lighting;
        self
    }

    /// Replace the physics settings, chainable
    pub fn with_physics(mut self, physics: PhysicsSettings) -> Self {
        self.services.physics = physics;
        self
    }

    /// The scene's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether [`Scene::start`] has run
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Shared access to scene services
    pub fn services(&self) -> &SceneServices {
        &self.services
    }

    /// Mutable access to scene services
    pub fn services_mut(&mut self) -> &mut SceneServices {
        &mut self.services
    }

    /// Number of live objects, including detached ones
    pub fn object_count(&self) -> usize {
        self.arena.len()
    }

    /// Root ids in insertion order; may contain ids destroyed since the last
    /// frame flush
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Whether the id refers to a live object
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.arena.contains_key(id)
    }

    /// Shared access to an object
    pub fn object(&self, id: ObjectId) -> Result<&GameObject, SceneError> {
        self.arena.get(id).ok_or(SceneError::ObjectNotAlive(id))
    }

    /// Mutable access to an object
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut GameObject, SceneError> {
        self.arena.get_mut(id).ok_or(SceneError::ObjectNotAlive(id))
    }

    /// Shared access to an object's local transform
    pub fn transform(&self, id: ObjectId) -> Result<&Transform, SceneError> {
        Ok(self.object(id)?.transform())
    }

    /// Mutable access to an object's local transform
    pub fn transform_mut(&mut self, id: ObjectId) -> Result<&mut Transform, SceneError> {
        Ok(self.object_mut(id)?.transform_mut())
    }

    /// Whether the object is currently enabled
    pub fn is_enabled(&self, id: ObjectId) -> Result<bool, SceneError> {
        Ok(self.object(id)?.is_enabled())
    }

    /// Whether the component at `index` is currently enabled
    pub fn is_component_enabled(&self, owner: ObjectId, index: usize) -> Result<bool, SceneError> {
        let object = self.object(owner)?;
        let slot = object
            .components
            .get(index)
            .ok_or(SceneError::ComponentIndexOutOfRange {
                owner,
                index,
                len: object.components.len(),
            })?;
        Ok(slot.is_enabled())
    }

    /// First root with the given name
    pub fn find_root(&self, name: &str) -> Option<ObjectId> {
        self.roots
            .iter()
            .copied()
            .find(|&root| self.arena.get(root).is_some_and(|object| object.name == name))
    }

    /// Depth-first search for the first object named `name` in the subtree
    /// rooted at `start`, including `start` itself
    pub fn find_from(&self, start: ObjectId, name: &str) -> Result<Option<ObjectId>, SceneError> {
        let object = self.object(start)?;
        if object.name == name {
            return Ok(Some(start));
        }
        for &child in &object.children {
            if self.arena.contains_key(child) {
                if let Some(found) = self.find_from(child, name)? {
                    return Ok(Some(found));
                }
            }
        }
        Ok(None)
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Take ownership of a detached object without attaching it.
    ///
    /// The object receives no lifecycle hooks until it is attached via
    /// [`Scene::attach_root`] or [`Scene::attach_child`].
    pub fn insert(&mut self, object: GameObject) -> ObjectId {
        self.arena.insert(object)
    }

    /// Add an object as a new root and run its attach lifecycle.
    ///
    /// `on_create` fires for the whole subtree immediately; if the scene has
    /// started, the subtree is also started (auto-enable plus `on_start`)
    /// before this call returns.
    pub fn add_root(&mut self, object: GameObject) -> ObjectId {
        let id = self.arena.insert(object);
        self.roots.push(id);
        self.attach_to_scene(id, 0.0);
        id
    }

    /// Attach an existing detached object as a root
    pub fn attach_root(&mut self, id: ObjectId) -> Result<(), SceneError> {
        if !self.arena.contains_key(id) {
            return Err(SceneError::ObjectNotAlive(id));
        }
        if self.is_attached(id) {
            return Err(SceneError::AlreadyAttached(id));
        }
        self.roots.push(id);
        self.attach_to_scene(id, 0.0);
        Ok(())
    }

    /// Create a new object under `parent` and run its attach lifecycle.
    ///
    /// Behaves identically whether the scene has started or not: the child is
    /// created (and started, if applicable) exactly once, synchronously.
    pub fn add_child(&mut self, parent: ObjectId, object: GameObject) -> Result<ObjectId, SceneError> {
        if !self.arena.contains_key(parent) {
            return Err(SceneError::ObjectNotAlive(parent));
        }
        let child = self.arena.insert(object);
        self.link_child(parent, child);
        Ok(child)
    }

    /// Attach an existing detached object under `parent`.
    ///
    /// Fails if the child is already attached somewhere or if the attachment
    /// would make the child its own ancestor.
    pub fn attach_child(&mut self, parent: ObjectId, child: ObjectId) -> Result<(), SceneError> {
        if !self.arena.contains_key(parent) {
            return Err(SceneError::ObjectNotAlive(parent));
        }
        if !self.arena.contains_key(child) {
            return Err(SceneError::ObjectNotAlive(child));
        }
        if self.is_attached(child) {
            return Err(SceneError::AlreadyAttached(child));
        }
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(SceneError::WouldCreateCycle { parent, child });
            }
            cursor = self.arena.get(node).and_then(|object| object.parent);
        }
        self.link_child(parent, child);
        Ok(())
    }

    /// Stage a child for detachment from `parent`.
    ///
    /// The list itself is untouched until `parent` finishes its next update,
    /// so a child removed mid-frame still receives this frame's update.
    /// Returns whether anything will actually be removed.
    pub fn remove_child(&mut self, parent: ObjectId, child: ObjectId) -> Result<bool, SceneError> {
        let object = self
            .arena
            .get_mut(parent)
            .ok_or(SceneError::ObjectNotAlive(parent))?;
        let present = object.children.contains(&child);
        let queued = object.pending_child_removals.contains(&child);
        if present && !queued {
            object.pending_child_removals.push(child);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Stage a root for detachment, applied at the end of the current (or
    /// next) frame. Returns whether anything will actually be removed.
    pub fn remove_root(&mut self, id: ObjectId) -> Result<bool, SceneError> {
        if !self.arena.contains_key(id) {
            return Err(SceneError::ObjectNotAlive(id));
        }
        let present = self.roots.contains(&id);
        let queued = self.pending_root_removals.contains(&id);
        if present && !queued {
            self.pending_root_removals.push(id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Destroy an object and its entire subtree immediately.
    ///
    /// Every component in the subtree is disabled (firing `on_disable` where
    /// needed) and receives `on_destroy`; all objects are then removed from
    /// the arena, so their ids report not-alive from here on. Never call this
    /// from inside a lifecycle hook; hooks use the deferred
    /// [`ComponentContext::destroy`](crate::scene::context::ComponentContext::destroy)
    /// instead.
    pub fn destroy(&mut self, id: ObjectId) -> Result<(), SceneError> {
        if !self.arena.contains_key(id) {
            return Err(SceneError::ObjectNotAlive(id));
        }
        self.destroy_object_now(id);
        Ok(())
    }

    /// Attach a component and run its attach lifecycle.
    ///
    /// If the owner is part of a live scene, `on_create` fires now; if the
    /// owner has started, the component is started (auto-enable plus
    /// `on_start`) before this returns. Returns the component's index.
    pub fn add_component<C: Component>(
        &mut self,
        owner: ObjectId,
        component: C,
    ) -> Result<usize, SceneError> {
        let object = self
            .arena
            .get_mut(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        object.components.push(ComponentSlot::new(component));
        let index = object.components.len() - 1;
        let in_scene = object.in_scene;
        let started = object.started;
        if in_scene {
            if let Some(slot) = self
                .arena
                .get_mut(owner)
                .and_then(|object| object.components.get_mut(index))
            {
                slot.created = true;
            }
            self.fire_component_hook(owner, index, Hook::Create, 0.0);
            if started {
                self.start_component(owner, index, 0.0);
            }
        }
        Ok(index)
    }

    /// Stage the component at `index` for removal without destroy semantics.
    ///
    /// No hooks fire; the component is dropped at the owner's next flush.
    pub fn remove_component_at(&mut self, owner: ObjectId, index: usize) -> Result<(), SceneError> {
        let object = self
            .arena
            .get_mut(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        if index >= object.components.len() {
            return Err(SceneError::ComponentIndexOutOfRange {
                owner,
                index,
                len: object.components.len(),
            });
        }
        if !object.pending_component_removals.contains(&index) {
            object.pending_component_removals.push(index);
        }
        Ok(())
    }

    /// Stage the first not-yet-staged component of type `T` for removal.
    ///
    /// Returns whether a matching component was found and newly staged, so
    /// calling this N times stages up to N same-typed components.
    pub fn remove_component<T: Component>(&mut self, owner: ObjectId) -> Result<bool, SceneError> {
        let object = self
            .arena
            .get(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        let found = object.components.iter().enumerate().position(|(index, slot)| {
            slot.component().as_any().is::<T>()
                && !object.pending_component_removals.contains(&index)
        });
        match found {
            Some(index) => {
                if let Some(object) = self.arena.get_mut(owner) {
                    object.pending_component_removals.push(index);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Destroy the component at `index`: disable it (firing `on_disable` if it
    /// was enabled), fire `on_destroy`, and stage it for removal at the
    /// owner's next update
    pub fn destroy_component_at(&mut self, owner: ObjectId, index: usize) -> Result<(), SceneError> {
        let object = self
            .arena
            .get(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        if index >= object.components.len() {
            return Err(SceneError::ComponentIndexOutOfRange {
                owner,
                index,
                len: object.components.len(),
            });
        }
        self.queue_component_destroy(owner, index, 0.0);
        Ok(())
    }

    /// First attached component of type `T`, or `None`.
    ///
    /// Absence is a normal outcome, not an error; only a dead owner fails.
    pub fn get_component<T: Component>(&self, owner: ObjectId) -> Result<Option<&T>, SceneError> {
        let object = self
            .arena
            .get(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        Ok(object
            .components
            .iter()
            .find_map(|slot| slot.component().as_any().downcast_ref::<T>()))
    }

    /// Mutable access to the first attached component of type `T`
    pub fn get_component_mut<T: Component>(
        &mut self,
        owner: ObjectId,
    ) -> Result<Option<&mut T>, SceneError> {
        let object = self
            .arena
            .get_mut(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        Ok(object
            .components
            .iter_mut()
            .find_map(|slot| slot.component_mut().as_any_mut().downcast_mut::<T>()))
    }

    /// Enable or disable an object.
    ///
    /// Only effective state changes do anything; a disabled object's entire
    /// subtree is skipped by update and draw walks.
    pub fn set_enabled(&mut self, id: ObjectId, enabled: bool) -> Result<(), SceneError> {
        let object = self
            .arena
            .get_mut(id)
            .ok_or(SceneError::ObjectNotAlive(id))?;
        if object.activation.apply(enabled).is_some() {
            log::debug!(
                "object '{}' {}",
                object.name,
                if enabled { "enabled" } else { "disabled" }
            );
        }
        Ok(())
    }

    /// Enable or disable the component at `index`, firing `on_enable` or
    /// `on_disable` only when the effective state changes
    pub fn set_component_enabled(
        &mut self,
        owner: ObjectId,
        index: usize,
        enabled: bool,
    ) -> Result<(), SceneError> {
        let object = self
            .arena
            .get_mut(owner)
            .ok_or(SceneError::ObjectNotAlive(owner))?;
        let len = object.components.len();
        let slot = object
            .components
            .get_mut(index)
            .ok_or(SceneError::ComponentIndexOutOfRange { owner, index, len })?;
        if let Some(event) = slot.activation.apply(enabled) {
            let hook = match event {
                ActivationEvent::Enabled => Hook::Enable,
                ActivationEvent::Disabled => Hook::Disable,
            };
            self.fire_component_hook(owner, index, hook, 0.0);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Start the scene: auto-enable and start every root subtree.
    ///
    /// Idempotent; later attachments are started at attach time instead.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        log::info!("starting scene '{}' ({} roots)", self.name, self.roots.len());
        self.started = true;
        let root_count = self.roots.len();
        for i in 0..root_count {
            let root = match self.roots.get(i) {
                Some(&root) => root,
                None => break,
            };
            self.start_object(root, 0.0);
        }
    }

    /// Tear down every object in the scene immediately.
    ///
    /// Each root subtree goes through the full destroy sequence, so every
    /// component sees `on_disable` and `on_destroy` before the scene is
    /// dropped or reused.
    pub fn shutdown(&mut self) {
        log::info!("shutting down scene '{}'", self.name);
        self.roots.retain(|root| self.arena.contains_key(*root));
        loop {
            let root = match self.roots.first() {
                Some(&root) => root,
                None => break,
            };
            self.destroy_object_now(root);
        }
        // Detached subtrees never reached from a root get torn down too.
        let detached: Vec<ObjectId> = self.arena.keys().collect();
        for id in detached {
            self.destroy_object_now(id);
        }
        self.pending_destroys.clear();
        self.pending_root_removals.clear();
    }

    /// Advance the whole scene by `delta_time` seconds.
    ///
    /// Per node: transform first, then enabled components, then enabled
    /// children, then that node's deferred removals. Deferred destroys and
    /// root removals are applied after every root has been visited.
    pub fn update(&mut self, delta_time: f32) {
        if !self.started {
            log::warn!("scene '{}' updated before start; skipping frame", self.name);
            return;
        }
        self.services.lighting.begin_frame();
        let root_count = self.roots.len();
        for i in 0..root_count {
            let root = match self.roots.get(i) {
                Some(&root) => root,
                None => break,
            };
            let enabled = self
                .arena
                .get(root)
                .is_some_and(|object| object.activation.is_enabled());
            if enabled {
                self.update_object(root, delta_time);
            }
        }
        self.flush_scene_level();
    }

    /// Record draw commands for every enabled object with drawable components.
    ///
    /// The parent world matrix is threaded down the recursion, so each node's
    /// world matrix is computed exactly once per frame. Never mutates the
    /// scene; a failing drawable is logged and skipped.
    pub fn draw(&self, queue: &mut DrawQueue) {
        let identity = Mat4::identity();
        for &root in &self.roots {
            let enabled = self
                .arena
                .get(root)
                .is_some_and(|object| object.activation.is_enabled());
            if enabled {
                self.draw_object(root, &identity, queue);
            }
        }
    }

    /// Record overlay commands for every enabled object with overlay-drawable
    /// components
    pub fn draw_overlay(&self, queue: &mut DrawQueue) {
        let identity = Mat4::identity();
        for &root in &self.roots {
            let enabled = self
                .arena
                .get(root)
                .is_some_and(|object| object.activation.is_enabled());
            if enabled {
                self.draw_object_overlay(root, &identity, queue);
            }
        }
    }

    // ------------------------------------------------------------------
    // Spatial queries
    // ------------------------------------------------------------------

    /// World matrix of an object: the composition of every ancestor's local
    /// matrix down to this object's own.
    ///
    /// Detached objects and roots report world == local. Composed from stack
    /// values only, so this is reentrant and safe to call from any hook.
    pub fn world_matrix(&self, id: ObjectId) -> Result<Mat4, SceneError> {
        let object = self.arena.get(id).ok_or(SceneError::ObjectNotAlive(id))?;
        let local = object.transform.local_matrix();
        match object.parent {
            Some(parent) if self.arena.contains_key(parent) => {
                Ok(self.world_matrix(parent)? * local)
            }
            _ => Ok(local),
        }
    }

    /// Write the world matrix into a caller-supplied buffer.
    ///
    /// Same composition as [`Scene::world_matrix`] for callers that reuse an
    /// output slot across many queries.
    pub fn write_world_matrix(&self, id: ObjectId, out: &mut Mat4) -> Result<(), SceneError> {
        *out = self.world_matrix(id)?;
        Ok(())
    }

    /// World-space position of an object.
    ///
    /// This is the translation column of the world matrix, so ancestor
    /// rotation and scale are applied to the local offset.
    pub fn world_position(&self, id: ObjectId) -> Result<Vec3, SceneError> {
        Ok(math::translation_of(&self.world_matrix(id)?))
    }

    // ------------------------------------------------------------------
    // Internal walks
    // ------------------------------------------------------------------

    fn is_attached(&self, id: ObjectId) -> bool {
        self.roots.contains(&id)
            || self
                .arena
                .get(id)
                .is_some_and(|object| object.parent.is_some())
    }

    fn link_child(&mut self, parent: ObjectId, child: ObjectId) {
        if let Some(object) = self.arena.get_mut(child) {
            object.parent = Some(parent);
        }
        if let Some(object) = self.arena.get_mut(parent) {
            object.children.push(child);
        }
        let parent_in_scene = self
            .arena
            .get(parent)
            .is_some_and(|object| object.in_scene);
        if parent_in_scene {
            self.attach_to_scene(child, 0.0);
        }
    }

    /// Run the attach lifecycle for a subtree that just became reachable:
    /// propagate scene membership, fire pending creates, and start if the
    /// scene has started.
    fn attach_to_scene(&mut self, id: ObjectId, delta_time: f32) {
        self.set_in_scene_recursive(id, true);
        self.create_object(id, delta_time);
        if self.started {
            self.start_object(id, delta_time);
        }
    }

    fn set_in_scene_recursive(&mut self, id: ObjectId, in_scene: bool) {
        let child_count = match self.arena.get_mut(id) {
            Some(object) => {
                object.in_scene = in_scene;
                object.children.len()
            }
            None => return,
        };
        for i in 0..child_count {
            let child = match self.arena.get(id).and_then(|object| object.children.get(i)) {
                Some(&child) => child,
                None => return,
            };
            self.set_in_scene_recursive(child, in_scene);
        }
    }

    fn create_object(&mut self, id: ObjectId, delta_time: f32) {
        let component_count = match self.arena.get_mut(id) {
            Some(object) => {
                if !object.created {
                    object.created = true;
                    log::debug!("created object '{}'", object.name);
                }
                object.components.len()
            }
            None => return,
        };
        for index in 0..component_count {
            let needs_create = self
                .arena
                .get(id)
                .and_then(|object| object.components.get(index))
                .is_some_and(|slot| !slot.created);
            if needs_create {
                if let Some(slot) = self
                    .arena
                    .get_mut(id)
                    .and_then(|object| object.components.get_mut(index))
                {
                    slot.created = true;
                }
                self.fire_component_hook(id, index, Hook::Create, delta_time);
            }
        }
        let child_count = self.arena.get(id).map_or(0, |object| object.children.len());
        for i in 0..child_count {
            let child = match self.arena.get(id).and_then(|object| object.children.get(i)) {
                Some(&child) => child,
                None => return,
            };
            self.create_object(child, delta_time);
        }
    }

    fn start_object(&mut self, id: ObjectId, delta_time: f32) {
        // Auto-enable: Undefined means "never yet decided", so the first
        // start turns the object on. An explicit pre-start disable sticks.
        match self.arena.get_mut(id) {
            Some(object) => {
                if object.activation == Activation::Undefined {
                    object.activation.apply(true);
                    log::debug!("object '{}' enabled", object.name);
                }
            }
            None => return,
        }
        // Children first, then this object's components.
        let child_count = self.arena.get(id).map_or(0, |object| object.children.len());
        for i in 0..child_count {
            let child = match self.arena.get(id).and_then(|object| object.children.get(i)) {
                Some(&child) => child,
                None => return,
            };
            self.start_object(child, delta_time);
        }
        // Mark started before running component starts so that components
        // attached from inside an on_start hook are started at attach time.
        let newly_started = match self.arena.get_mut(id) {
            Some(object) => {
                let first = !object.started;
                object.started = true;
                first
            }
            None => return,
        };
        if newly_started {
            if let Some(object) = self.arena.get(id) {
                log::debug!("started object '{}'", object.name);
            }
        }
        let component_count = self
            .arena
            .get(id)
            .map_or(0, |object| object.components.len());
        for index in 0..component_count {
            self.start_component(id, index, delta_time);
        }
    }

    /// Start one component slot exactly once: auto-enable if its activation
    /// is still undefined, then fire `on_start`
    fn start_component(&mut self, owner: ObjectId, index: usize, delta_time: f32) {
        let enable = match self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
        {
            Some(slot) => {
                if slot.started {
                    return;
                }
                slot.started = true;
                if slot.activation == Activation::Undefined {
                    slot.activation.apply(true);
                    true
                } else {
                    false
                }
            }
            None => return,
        };
        if enable {
            self.fire_component_hook(owner, index, Hook::Enable, delta_time);
        }
        self.fire_component_hook(owner, index, Hook::Start, delta_time);
    }

    fn update_object(&mut self, id: ObjectId, delta_time: f32) {
        // Transform first, so components observe this frame's pose.
        match self.arena.get_mut(id) {
            Some(object) => object.transform.integrate(delta_time),
            None => return,
        }
        // Snapshot counts up front: components and children attached during
        // this object's pass first update next frame.
        let (component_count, child_count) = self
            .arena
            .get(id)
            .map_or((0, 0), |object| (object.components.len(), object.children.len()));
        for index in 0..component_count {
            let enabled = self
                .arena
                .get(id)
                .and_then(|object| object.components.get(index))
                .is_some_and(ComponentSlot::is_enabled);
            if enabled {
                self.fire_component_hook(id, index, Hook::Update, delta_time);
            }
        }
        for i in 0..child_count {
            let child = match self.arena.get(id).and_then(|object| object.children.get(i)) {
                Some(&child) => child,
                None => break,
            };
            let enabled = self
                .arena
                .get(child)
                .is_some_and(|object| object.activation.is_enabled());
            if enabled {
                self.update_object(child, delta_time);
            }
        }
        self.flush_removals(id);
    }

    fn draw_object(&self, id: ObjectId, parent_world: &Mat4, queue: &mut DrawQueue) {
        let object = match self.arena.get(id) {
            Some(object) => object,
            None => return,
        };
        let world = parent_world * object.transform.local_matrix();
        for slot in &object.components {
            if !slot.is_enabled() {
                continue;
            }
            if let Some(drawable) = slot.component().drawable() {
                if let Err(error) = drawable.record(&world, queue) {
                    log::warn!(
                        "skipping draw of {} on '{}': {}",
                        slot.type_name(),
                        object.name,
                        error
                    );
                }
            }
        }
        for &child in &object.children {
            let enabled = self
                .arena
                .get(child)
                .is_some_and(|object| object.activation.is_enabled());
            if enabled {
                self.draw_object(child, &world, queue);
            }
        }
    }

    fn draw_object_overlay(&self, id: ObjectId, parent_world: &Mat4, queue: &mut DrawQueue) {
        let object = match self.arena.get(id) {
            Some(object) => object,
            None => return,
        };
        let world = parent_world * object.transform.local_matrix();
        let world_position = math::translation_of(&world);
        for slot in &object.components {
            if !slot.is_enabled() {
                continue;
            }
            if let Some(drawable) = slot.component().overlay_drawable() {
                if let Err(error) = drawable.record_overlay(world_position, queue) {
                    log::warn!(
                        "skipping overlay of {} on '{}': {}",
                        slot.type_name(),
                        object.name,
                        error
                    );
                }
            }
        }
        for &child in &object.children {
            let enabled = self
                .arena
                .get(child)
                .is_some_and(|object| object.activation.is_enabled());
            if enabled {
                self.draw_object_overlay(child, &world, queue);
            }
        }
    }

    // ------------------------------------------------------------------
    // Hook dispatch and deferred mutation
    // ------------------------------------------------------------------

    /// Run one lifecycle hook for the component at `index`.
    ///
    /// The component is lifted out of its slot so it can borrow itself
    /// mutably while the hook's context borrows the scene; it is restored
    /// before any follow-up action (self-removal, self-destroy) is applied.
    fn fire_component_hook(&mut self, owner: ObjectId, index: usize, hook: Hook, delta_time: f32) {
        let mut component = match self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
        {
            Some(slot) => slot.lift(),
            None => return,
        };
        let mut ctx = ComponentContext::new(self, owner, index, delta_time);
        match hook {
            Hook::Create => component.on_create(&mut ctx),
            Hook::Start => component.on_start(&mut ctx),
            Hook::Enable => component.on_enable(&mut ctx),
            Hook::Disable => component.on_disable(&mut ctx),
            Hook::Update => component.on_update(&mut ctx),
            Hook::Destroy => component.on_destroy(&mut ctx),
        }
        let requests = ctx.finish();
        if let Some(slot) = self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
        {
            slot.restore(component);
        }
        if let Some(enabled) = requests.enabled {
            let _ = self.set_component_enabled(owner, index, enabled);
        }
        match requests.action {
            Some(SelfAction::Remove) => self.queue_component_removal(owner, index),
            Some(SelfAction::Destroy) => self.queue_component_destroy(owner, index, delta_time),
            None => {}
        }
    }

    /// Stage a component for bare removal, without lifecycle hooks
    pub(crate) fn queue_component_removal(&mut self, owner: ObjectId, index: usize) {
        if let Some(object) = self.arena.get_mut(owner) {
            if index < object.components.len()
                && !object.pending_component_removals.contains(&index)
            {
                object.pending_component_removals.push(index);
            }
        }
    }

    /// Destroy a component in place: mark it destroyed, disable it, fire
    /// `on_destroy`, and leave removal to the owner's next flush.
    ///
    /// Marking the slot destroyed first makes the call idempotent even when
    /// `on_disable` or `on_destroy` request another destroy of the same slot.
    /// A slot already staged for bare removal can still be destroyed here;
    /// its hooks have not fired yet.
    pub(crate) fn queue_component_destroy(
        &mut self,
        owner: ObjectId,
        index: usize,
        delta_time: f32,
    ) {
        let created = match self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
        {
            Some(slot) if !slot.destroyed => {
                slot.destroyed = true;
                slot.created
            }
            _ => return,
        };
        if let Some(object) = self.arena.get_mut(owner) {
            if !object.pending_component_removals.contains(&index) {
                object.pending_component_removals.push(index);
            }
        }
        // Destroy hooks only pair with a create that actually ran.
        if !created {
            return;
        }
        let disabled = self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
            .and_then(|slot| slot.activation.apply(false))
            .is_some();
        if disabled {
            self.fire_component_hook(owner, index, Hook::Disable, delta_time);
        }
        self.fire_component_hook(owner, index, Hook::Destroy, delta_time);
    }

    /// Queue an object for destruction at the end of the current frame walk
    pub(crate) fn queue_destroy(&mut self, id: ObjectId) {
        if !self.pending_destroys.contains(&id) {
            self.pending_destroys.push(id);
        }
    }

    /// Apply one node's staged removals: components first, then children.
    ///
    /// Component indices are applied in one descending pass, so a batch of
    /// staged indices refers consistently to this frame's layout. Detached
    /// children stay alive in the arena and can be re-attached; destroyed
    /// children are pruned here.
    fn flush_removals(&mut self, id: ObjectId) {
        let mut queued = match self.arena.get_mut(id) {
            Some(object) => std::mem::take(&mut object.pending_component_removals),
            None => return,
        };
        if !queued.is_empty() {
            queued.sort_unstable();
            queued.dedup();
            if let Some(object) = self.arena.get_mut(id) {
                for &index in queued.iter().rev() {
                    if index < object.components.len() {
                        let slot = object.components.remove(index);
                        log::debug!(
                            "removed component {} from '{}'",
                            slot.type_name(),
                            object.name
                        );
                    }
                }
            }
            queued.clear();
        }
        if let Some(object) = self.arena.get_mut(id) {
            object.pending_component_removals = queued;
        }

        let (mut queued_children, mut children) = match self.arena.get_mut(id) {
            Some(object) => (
                std::mem::take(&mut object.pending_child_removals),
                std::mem::take(&mut object.children),
            ),
            None => return,
        };
        if !queued_children.is_empty() || !children.is_empty() {
            children.retain(|child| {
                self.arena.contains_key(*child) && !queued_children.contains(child)
            });
            for &child in &queued_children {
                if self.arena.contains_key(child) {
                    self.clear_attachment(child);
                }
            }
            queued_children.clear();
        }
        if let Some(object) = self.arena.get_mut(id) {
            object.children = children;
            object.pending_child_removals = queued_children;
        }
    }

    /// Detach bookkeeping for a child that was removed but not destroyed
    fn clear_attachment(&mut self, id: ObjectId) {
        if let Some(object) = self.arena.get_mut(id) {
            object.parent = None;
            log::debug!("detached object '{}'", object.name);
        }
        self.set_in_scene_recursive(id, false);
    }

    /// End-of-frame work: deferred destroys, then root detachments and
    /// pruning of destroyed roots
    fn flush_scene_level(&mut self) {
        // Destroy hooks may queue further destroys; drain until quiescent.
        loop {
            let pending = std::mem::take(&mut self.pending_destroys);
            if pending.is_empty() {
                break;
            }
            for &id in &pending {
                self.destroy_object_now(id);
            }
        }
        let mut queued = std::mem::take(&mut self.pending_root_removals);
        let mut roots = std::mem::take(&mut self.roots);
        roots.retain(|root| self.arena.contains_key(*root) && !queued.contains(root));
        for &root in &queued {
            if self.arena.contains_key(root) {
                self.clear_attachment(root);
            }
        }
        queued.clear();
        self.roots = roots;
        self.pending_root_removals = queued;
    }

    /// Immediate recursive teardown: disable, destroy components, destroy
    /// children, unlink from the parent or root list, free the arena slot
    fn destroy_object_now(&mut self, id: ObjectId) {
        if !self.arena.contains_key(id) {
            return;
        }
        if let Some(object) = self.arena.get_mut(id) {
            if object.activation.apply(false).is_some() {
                log::debug!("object '{}' disabled", object.name);
            }
        }
        let component_count = self
            .arena
            .get(id)
            .map_or(0, |object| object.components.len());
        for index in 0..component_count {
            self.destroy_component_hooks(id, index);
        }
        let child_count = self.arena.get(id).map_or(0, |object| object.children.len());
        for i in 0..child_count {
            let child = match self.arena.get(id).and_then(|object| object.children.get(i)) {
                Some(&child) => child,
                None => break,
            };
            self.destroy_object_now(child);
        }
        let parent = self.arena.get(id).and_then(|object| object.parent);
        match parent {
            Some(parent_id) => {
                if let Some(object) = self.arena.get_mut(parent_id) {
                    if !object.pending_child_removals.contains(&id) {
                        object.pending_child_removals.push(id);
                    }
                }
            }
            None => {
                self.roots.retain(|root| *root != id);
            }
        }
        if let Some(object) = self.arena.remove(id) {
            log::debug!(
                "destroyed object '{}' ({} components, {} children)",
                object.name,
                object.components.len(),
                object.children.len()
            );
        }
    }

    /// Final hooks for a component whose owner is being torn down.
    ///
    /// Slots whose teardown hooks already fired are skipped; anything else,
    /// staged for bare removal or not, is disabled and destroyed here.
    /// `on_destroy` only pairs with an `on_create` that actually ran.
    fn destroy_component_hooks(&mut self, owner: ObjectId, index: usize) {
        let created = match self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
        {
            Some(slot) if !slot.destroyed => {
                slot.destroyed = true;
                slot.created
            }
            _ => return,
        };
        if !created {
            return;
        }
        let disabled = self
            .arena
            .get_mut(owner)
            .and_then(|object| object.components.get_mut(index))
            .and_then(|slot| slot.activation.apply(false))
            .is_some();
        if disabled {
            self.fire_component_hook(owner, index, Hook::Disable, 0.0);
        }
        self.fire_component_hook(owner, index, Hook::Destroy, 0.0);
    }
}
