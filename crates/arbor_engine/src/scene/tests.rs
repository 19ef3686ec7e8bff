//! Lifecycle and structural behavior tests
//!
//! These tests drive whole scenes through attach, start, update, and destroy
//! sequences and assert on the exact hook order observed by components. A
//! shared event log records every hook so ordering claims are checked
//! verbatim rather than inferred.

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;

use crate::foundation::math::{constants::HALF_PI, Mat4, Quat, Vec3};
use crate::render::draw_queue::{DrawQueue, MaterialId, MeshId};
use crate::render::error::DrawError;
use crate::scene::component::{Component, Drawable};
use crate::scene::components::MeshRendererComponent;
use crate::scene::context::ComponentContext;
use crate::scene::error::SceneError;
use crate::scene::object::{GameObject, ObjectId};
use crate::scene::scene::Scene;

type EventLog = Rc<RefCell<Vec<String>>>;

fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn events(log: &EventLog) -> Vec<String> {
    log.borrow().clone()
}

fn drain(log: &EventLog) -> Vec<String> {
    log.borrow_mut().drain(..).collect()
}

fn count_of(log: &EventLog, event: &str) -> usize {
    log.borrow().iter().filter(|e| e.as_str() == event).count()
}

/// Records every hook invocation into a shared log
struct Recorder {
    label: &'static str,
    log: EventLog,
}

impl Recorder {
    fn new(label: &'static str, log: &EventLog) -> Self {
        Self {
            label,
            log: Rc::clone(log),
        }
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{event}", self.label));
    }
}

impl Component for Recorder {
    fn on_create(&mut self, _ctx: &mut ComponentContext) {
        self.record("create");
    }
    fn on_start(&mut self, _ctx: &mut ComponentContext) {
        self.record("start");
    }
    fn on_enable(&mut self, _ctx: &mut ComponentContext) {
        self.record("enable");
    }
    fn on_disable(&mut self, _ctx: &mut ComponentContext) {
        self.record("disable");
    }
    fn on_update(&mut self, _ctx: &mut ComponentContext) {
        self.record("update");
    }
    fn on_destroy(&mut self, _ctx: &mut ComponentContext) {
        self.record("destroy");
    }
}

/// Stages one child for removal during its owner's first update
struct RemoveChildOnce {
    target: ObjectId,
    done: bool,
}

impl RemoveChildOnce {
    fn new(target: ObjectId) -> Self {
        Self {
            target,
            done: false,
        }
    }
}

impl Component for RemoveChildOnce {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        if !self.done {
            self.done = true;
            assert!(ctx.remove_child(self.target));
        }
    }
}

/// Queues the owner for destruction during its first update
struct DestroyOwnerOnce {
    done: bool,
}

impl Component for DestroyOwnerOnce {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        if !self.done {
            self.done = true;
            ctx.destroy_owner();
        }
    }
}

/// Adds a recorder-carrying child during its owner's first update
struct SpawnChildOnce {
    log: EventLog,
    spawned: Option<ObjectId>,
}

impl SpawnChildOnce {
    fn new(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
            spawned: None,
        }
    }
}

impl Component for SpawnChildOnce {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        if self.spawned.is_none() {
            let child = GameObject::new("spawned").with_component(Recorder::new("child", &self.log));
            self.spawned = Some(ctx.add_child(child));
        }
    }
}

/// Stages two sibling recorders for removal during one update
struct RemoveTwoRecorders {
    done: bool,
}

impl Component for RemoveTwoRecorders {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        if !self.done {
            self.done = true;
            assert!(ctx.remove_component::<Recorder>());
            assert!(ctx.remove_component::<Recorder>());
        }
    }
}

/// Disables itself during its first update
struct DisableSelfOnce {
    done: bool,
}

impl Component for DisableSelfOnce {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        if !self.done {
            self.done = true;
            ctx.set_self_enabled(false);
        }
    }
}

/// Marker with no behavior, used for typed sibling queries
struct Marker {
    value: u32,
}

impl Component for Marker {}

/// Looks up a sibling marker during update and logs the result
struct SiblingProbe {
    log: EventLog,
}

impl Component for SiblingProbe {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        let found = match ctx.get_component::<Marker>() {
            Some(marker) => format!("marker:{}", marker.value),
            None => "marker:none".to_owned(),
        };
        self.log.borrow_mut().push(found);
        let count = format!("components:{}", ctx.component_count());
        self.log.borrow_mut().push(count);
    }
}

/// Drawable whose recording always fails
struct BrokenGlyph;

impl Component for BrokenGlyph {
    fn drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

impl Drawable for BrokenGlyph {
    fn record(&self, _world: &Mat4, _queue: &mut DrawQueue) -> Result<(), DrawError> {
        Err(DrawError::UnknownMesh(404))
    }
}

fn started_scene() -> Scene {
    let mut scene = Scene::new("test");
    scene.start();
    scene
}

// ----------------------------------------------------------------------
// Lifecycle ordering
// ----------------------------------------------------------------------

#[test]
fn test_create_precedes_start_precedes_first_update() {
    let log = new_log();
    let mut scene = started_scene();
    scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));

    scene.update(0.016);
    scene.update(0.016);

    assert_eq!(
        events(&log),
        vec!["r:create", "r:enable", "r:start", "r:update", "r:update"]
    );
    assert_eq!(count_of(&log, "r:create"), 1);
    assert_eq!(count_of(&log, "r:start"), 1);
}

#[test]
fn test_attach_to_started_scene_fires_hooks_synchronously() {
    let log = new_log();
    let mut scene = started_scene();
    let parent = scene.add_root(GameObject::new("parent"));

    let child = scene
        .add_child(
            parent,
            GameObject::new("child").with_component(Recorder::new("g", &log)),
        )
        .unwrap();

    // Everything up to start happened inside add_child, before any update.
    assert_eq!(events(&log), vec!["g:create", "g:enable", "g:start"]);
    assert!(scene.object(child).unwrap().is_in_scene());

    // Updates begin with the next frame.
    scene.update(0.016);
    assert_eq!(count_of(&log, "g:update"), 1);
}

#[test]
fn test_attach_before_scene_start_defers_enable_and_start() {
    let log = new_log();
    let mut scene = Scene::new("test");
    scene.add_root(GameObject::new("early").with_component(Recorder::new("r", &log)));

    // Creation is immediate even in a not-yet-started scene.
    assert_eq!(drain(&log), vec!["r:create"]);

    scene.start();
    assert_eq!(drain(&log), vec!["r:enable", "r:start"]);
}

#[test]
fn test_scene_start_is_idempotent() {
    let log = new_log();
    let mut scene = Scene::new("test");
    scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));

    scene.start();
    scene.start();

    assert_eq!(count_of(&log, "r:enable"), 1);
    assert_eq!(count_of(&log, "r:start"), 1);
}

#[test]
fn test_update_before_start_is_skipped() {
    let log = new_log();
    let mut scene = Scene::new("test");
    scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));

    scene.update(0.016);
    assert_eq!(count_of(&log, "r:update"), 0);
}

#[test]
fn test_component_added_after_start_catches_up_immediately() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("obj"));

    scene
        .add_component(id, Recorder::new("late", &log))
        .unwrap();
    assert_eq!(events(&log), vec!["late:create", "late:enable", "late:start"]);
}

#[test]
fn test_explicitly_disabled_component_still_starts_without_enable() {
    let log = new_log();
    let mut scene = Scene::new("test");
    let id = scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));

    // Decide the state before start: enable then disable.
    scene.set_component_enabled(id, 0, true).unwrap();
    scene.set_component_enabled(id, 0, false).unwrap();
    drain(&log);

    scene.start();
    // No auto-enable: the state was already decided. The start body runs.
    assert_eq!(events(&log), vec!["r:start"]);

    scene.update(0.016);
    assert_eq!(count_of(&log, "r:update"), 0);
}

// ----------------------------------------------------------------------
// Enable and disable
// ----------------------------------------------------------------------

#[test]
fn test_enable_twice_fires_on_enable_once() {
    let log = new_log();
    let mut scene = Scene::new("test");
    let id = scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));
    drain(&log);

    scene.set_component_enabled(id, 0, true).unwrap();
    scene.set_component_enabled(id, 0, true).unwrap();
    assert_eq!(events(&log), vec!["r:enable"]);
}

#[test]
fn test_alternating_enable_fires_in_order() {
    let log = new_log();
    let mut scene = Scene::new("test");
    let id = scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));
    drain(&log);

    scene.set_component_enabled(id, 0, true).unwrap();
    scene.set_component_enabled(id, 0, false).unwrap();
    scene.set_component_enabled(id, 0, true).unwrap();
    assert_eq!(events(&log), vec!["r:enable", "r:disable", "r:enable"]);
}

#[test]
fn test_pre_start_disable_sticks_through_start() {
    let log = new_log();
    let mut scene = Scene::new("test");
    let id = scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));
    drain(&log);

    // Undefined counts as disabled, so nothing fires; the explicit choice
    // is still recorded and start must not auto-enable over it.
    scene.set_component_enabled(id, 0, false).unwrap();
    assert!(events(&log).is_empty());

    scene.start();
    assert_eq!(events(&log), vec!["r:start"]);
    assert!(!scene.is_component_enabled(id, 0).unwrap());

    scene.update(0.016);
    assert_eq!(count_of(&log, "r:update"), 0);
}

#[test]
fn test_disabled_object_gates_entire_subtree() {
    let log = new_log();
    let mut scene = started_scene();
    let parent = scene.add_root(GameObject::new("parent"));
    scene
        .add_child(
            parent,
            GameObject::new("child").with_component(Recorder::new("c", &log)),
        )
        .unwrap();
    drain(&log);

    scene.set_enabled(parent, false).unwrap();
    scene.update(0.016);
    assert_eq!(count_of(&log, "c:update"), 0);
    // Object-level gating does not fire component hooks.
    assert_eq!(count_of(&log, "c:disable"), 0);

    scene.set_enabled(parent, true).unwrap();
    scene.update(0.016);
    assert_eq!(count_of(&log, "c:update"), 1);
}

#[test]
fn test_component_disabling_itself_stops_future_updates() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(
        GameObject::new("obj")
            .with_component(DisableSelfOnce { done: false })
            .with_component(Recorder::new("r", &log)),
    );

    scene.update(0.016);
    scene.update(0.016);

    // The sibling recorder keeps running; the self-disabled slot does not.
    assert_eq!(count_of(&log, "r:update"), 2);
    assert!(!scene.is_component_enabled(id, 0).unwrap());
}

// ----------------------------------------------------------------------
// Deferred structural mutation
// ----------------------------------------------------------------------

#[test]
fn test_removed_child_updates_this_frame_and_is_gone_next() {
    let log = new_log();
    let mut scene = started_scene();
    let parent = scene.add_root(GameObject::new("parent"));
    let child = scene
        .add_child(
            parent,
            GameObject::new("child").with_component(Recorder::new("g", &log)),
        )
        .unwrap();
    scene
        .add_component(parent, RemoveChildOnce::new(child))
        .unwrap();
    drain(&log);

    // The removal is requested during the parent's component pass, before
    // the child pass of the same frame.
    scene.update(0.016);
    assert_eq!(count_of(&log, "g:update"), 1);
    assert!(!scene.object(parent).unwrap().children().contains(&child));

    scene.update(0.016);
    assert_eq!(count_of(&log, "g:update"), 1);

    // Removed is not destroyed: the child lives on, detached.
    assert!(scene.is_alive(child));
    assert!(!scene.object(child).unwrap().is_in_scene());
}

#[test]
fn test_bulk_component_removal_keeps_this_frames_visit_count() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(
        GameObject::new("holder")
            .with_component(RemoveTwoRecorders { done: false })
            .with_component(Recorder::new("a", &log))
            .with_component(Recorder::new("b", &log))
            .with_component(Recorder::new("c", &log)),
    );

    scene.update(0.016);

    // All three recorders were visited this frame despite two being staged.
    assert_eq!(count_of(&log, "a:update"), 1);
    assert_eq!(count_of(&log, "b:update"), 1);
    assert_eq!(count_of(&log, "c:update"), 1);
    // Both removals applied by the time update returned.
    assert_eq!(scene.object(id).unwrap().component_count(), 2);

    scene.update(0.016);
    let total_updates = count_of(&log, "a:update") + count_of(&log, "b:update") + count_of(&log, "c:update");
    assert_eq!(total_updates, 4);
}

#[test]
fn test_child_added_during_update_starts_now_updates_next_frame() {
    let log = new_log();
    let mut scene = started_scene();
    scene.add_root(GameObject::new("spawner").with_component(SpawnChildOnce::new(&log)));

    scene.update(0.016);
    assert_eq!(events(&log), vec!["child:create", "child:enable", "child:start"]);

    scene.update(0.016);
    assert_eq!(count_of(&log, "child:update"), 1);
}

#[test]
fn test_root_removal_applies_at_end_of_frame() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("root").with_component(Recorder::new("r", &log)));

    assert!(scene.remove_root(id).unwrap());
    // Still present for this frame's walk.
    scene.update(0.016);
    assert_eq!(count_of(&log, "r:update"), 1);

    scene.update(0.016);
    assert_eq!(count_of(&log, "r:update"), 1);
    assert!(scene.is_alive(id));
    assert!(scene.roots().is_empty());
}

#[test]
fn test_detached_subtree_can_be_reattached() {
    let log = new_log();
    let mut scene = started_scene();
    let first = scene.add_root(GameObject::new("first"));
    let second = scene.add_root(GameObject::new("second"));
    let child = scene
        .add_child(
            first,
            GameObject::new("wanderer").with_component(Recorder::new("w", &log)),
        )
        .unwrap();

    scene.remove_child(first, child).unwrap();
    scene.update(0.016);
    assert!(!scene.object(child).unwrap().is_in_scene());
    let updates_while_detached = count_of(&log, "w:update");

    scene.attach_child(second, child).unwrap();
    assert!(scene.object(child).unwrap().is_in_scene());
    // Hooks do not re-fire: the component was already created and started.
    assert_eq!(count_of(&log, "w:create"), 1);
    assert_eq!(count_of(&log, "w:start"), 1);

    scene.update(0.016);
    assert_eq!(count_of(&log, "w:update"), updates_while_detached + 1);
}

// ----------------------------------------------------------------------
// Destruction
// ----------------------------------------------------------------------

#[test]
fn test_component_destroy_disables_now_and_removes_at_next_update() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));
    drain(&log);

    scene.destroy_component_at(id, 0).unwrap();
    assert!(!scene.is_component_enabled(id, 0).unwrap());
    assert_eq!(events(&log), vec!["r:disable", "r:destroy"]);
    assert_eq!(scene.object(id).unwrap().component_count(), 1);

    scene.update(0.016);
    assert_eq!(scene.object(id).unwrap().component_count(), 0);
    assert_eq!(count_of(&log, "r:disable"), 1);
    assert_eq!(count_of(&log, "r:update"), 0);
}

#[test]
fn test_staged_removal_still_gets_teardown_hooks_on_owner_destroy() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("obj").with_component(Recorder::new("r", &log)));
    drain(&log);

    // Bare removal stages without hooks; destroying the owner before the
    // flush must still tear the component down.
    assert!(scene.remove_component::<Recorder>(id).unwrap());
    assert!(events(&log).is_empty());

    scene.destroy(id).unwrap();
    assert_eq!(events(&log), vec!["r:disable", "r:destroy"]);
}

#[test]
fn test_object_destroy_tears_down_entire_subtree() {
    let log = new_log();
    let mut scene = started_scene();
    let parent = scene.add_root(GameObject::new("parent").with_component(Recorder::new("p", &log)));
    let child = scene
        .add_child(
            parent,
            GameObject::new("child").with_component(Recorder::new("c", &log)),
        )
        .unwrap();
    drain(&log);

    scene.destroy(parent).unwrap();

    for label in ["p", "c"] {
        assert_eq!(count_of(&log, &format!("{label}:disable")), 1);
        assert_eq!(count_of(&log, &format!("{label}:destroy")), 1);
    }
    assert!(!scene.is_alive(parent));
    assert!(!scene.is_alive(child));
    assert!(scene.roots().is_empty());
}

#[test]
fn test_destroyed_id_is_detected_on_every_entry_point() {
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("doomed"));
    scene.destroy(id).unwrap();

    assert!(!scene.is_alive(id));
    assert_eq!(scene.transform(id).err(), Some(SceneError::ObjectNotAlive(id)));
    assert_eq!(scene.set_enabled(id, true).err(), Some(SceneError::ObjectNotAlive(id)));
    // Double-destroy is an error, not undefined behavior.
    assert_eq!(scene.destroy(id).err(), Some(SceneError::ObjectNotAlive(id)));
}

#[test]
fn test_in_hook_owner_destroy_is_deferred_to_end_of_frame() {
    let log = new_log();
    let mut scene = started_scene();
    let id = scene.add_root(
        GameObject::new("obj")
            .with_component(DestroyOwnerOnce { done: false })
            .with_component(Recorder::new("r", &log)),
    );

    scene.update(0.016);

    // The sibling after the destroyer still ran this frame.
    assert_eq!(count_of(&log, "r:update"), 1);
    assert_eq!(count_of(&log, "r:destroy"), 1);
    assert!(!scene.is_alive(id));
    assert!(scene.roots().is_empty());
}

#[test]
fn test_shutdown_destroys_everything_with_hooks() {
    let log = new_log();
    let mut scene = started_scene();
    scene.add_root(GameObject::new("a").with_component(Recorder::new("a", &log)));
    let b = scene.add_root(GameObject::new("b").with_component(Recorder::new("b", &log)));
    let detached = scene
        .add_child(b, GameObject::new("stray").with_component(Recorder::new("s", &log)))
        .unwrap();
    scene.remove_child(b, detached).unwrap();
    scene.update(0.016);

    scene.shutdown();

    for label in ["a", "b", "s"] {
        assert_eq!(count_of(&log, &format!("{label}:destroy")), 1);
    }
    assert_eq!(scene.object_count(), 0);
}

// ----------------------------------------------------------------------
// Structure and attachment errors
// ----------------------------------------------------------------------

#[test]
fn test_cycle_attachment_is_rejected() {
    let mut scene = started_scene();
    let parent = scene.add_root(GameObject::new("parent"));
    let child = scene.add_child(parent, GameObject::new("child")).unwrap();
    let grandchild = scene.add_child(child, GameObject::new("grandchild")).unwrap();

    scene.remove_root(parent).unwrap();
    scene.update(0.016);

    // The detached root cannot be attached under its own grandchild.
    assert_eq!(
        scene.attach_child(grandchild, parent).err(),
        Some(SceneError::WouldCreateCycle {
            parent: grandchild,
            child: parent,
        })
    );
}

#[test]
fn test_double_attachment_is_rejected() {
    let mut scene = started_scene();
    let a = scene.add_root(GameObject::new("a"));
    let b = scene.add_root(GameObject::new("b"));
    let child = scene.add_child(a, GameObject::new("child")).unwrap();

    assert_eq!(
        scene.attach_child(b, child).err(),
        Some(SceneError::AlreadyAttached(child))
    );
    assert_eq!(
        scene.attach_root(child).err(),
        Some(SceneError::AlreadyAttached(child))
    );
}

#[test]
fn test_component_lookup_miss_is_absent_not_error() {
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("plain"));
    assert!(scene.get_component::<Marker>(id).unwrap().is_none());
}

#[test]
fn test_typed_lookup_finds_first_match() {
    let mut scene = started_scene();
    let id = scene.add_root(
        GameObject::new("obj")
            .with_component(Marker { value: 1 })
            .with_component(Marker { value: 2 }),
    );

    assert_eq!(scene.get_component::<Marker>(id).unwrap().unwrap().value, 1);

    if let Some(marker) = scene.get_component_mut::<Marker>(id).unwrap() {
        marker.value = 9;
    }
    assert_eq!(scene.get_component::<Marker>(id).unwrap().unwrap().value, 9);
}

#[test]
fn test_sibling_query_from_hook_sees_other_components() {
    let log = new_log();
    let mut scene = started_scene();
    scene.add_root(
        GameObject::new("obj")
            .with_component(Marker { value: 7 })
            .with_component(SiblingProbe {
                log: Rc::clone(&log),
            }),
    );

    scene.update(0.016);
    assert_eq!(events(&log), vec!["marker:7", "components:2"]);
}

// ----------------------------------------------------------------------
// Transforms
// ----------------------------------------------------------------------

#[test]
fn test_world_position_sums_pure_translations() {
    let mut scene = started_scene();
    let root = scene.add_root(GameObject::new("root").with_position(Vec3::new(1.0, 0.0, 0.0)));
    let a = scene
        .add_child(root, GameObject::new("a").with_position(Vec3::new(0.0, 1.0, 0.0)))
        .unwrap();
    let b = scene
        .add_child(a, GameObject::new("b").with_position(Vec3::new(0.0, 0.0, 1.0)))
        .unwrap();

    let position = scene.world_position(b).unwrap();
    assert_relative_eq!(position.x, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(position.y, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(position.z, 1.0, epsilon = 1.0e-5);
}

#[test]
fn test_world_matrix_composes_down_the_parent_chain() {
    let mut scene = started_scene();
    let rotation = Quat::from_axis_angle(&Vec3::z_axis(), HALF_PI);
    let root = scene.add_root(
        GameObject::new("root")
            .with_position(Vec3::new(2.0, 0.0, 0.0))
            .with_rotation(rotation),
    );
    let child = scene
        .add_child(root, GameObject::new("child").with_position(Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();

    // Reference: the product of the two local matrices.
    let expected = scene.transform(root).unwrap().local_matrix()
        * scene.transform(child).unwrap().local_matrix();
    let actual = scene.world_matrix(child).unwrap();
    assert_relative_eq!(actual, expected, epsilon = 1.0e-5);

    // Ancestor rotation turns the child's +X offset into +Y.
    let position = scene.world_position(child).unwrap();
    assert_relative_eq!(position.x, 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(position.y, 1.0, epsilon = 1.0e-5);
}

#[test]
fn test_transform_round_trips_exactly() {
    let mut scene = started_scene();
    let id = scene.add_root(GameObject::new("obj"));

    let rotation = Quat::from_axis_angle(&Vec3::y_axis(), 0.3);
    {
        let transform = scene.transform_mut(id).unwrap();
        transform.position = Vec3::new(4.5, -2.0, 0.25);
        transform.rotation = rotation;
        transform.scale = Vec3::new(2.0, 2.0, 2.0);
    }

    let transform = scene.transform(id).unwrap();
    assert_eq!(transform.position, Vec3::new(4.5, -2.0, 0.25));
    assert_eq!(transform.rotation, rotation);
    assert_eq!(transform.scale, Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn test_write_world_matrix_matches_by_value_query() {
    let mut scene = started_scene();
    let root = scene.add_root(GameObject::new("root").with_position(Vec3::new(0.0, 5.0, 0.0)));
    let child = scene
        .add_child(root, GameObject::new("child").with_position(Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();

    let by_value = scene.world_matrix(child).unwrap();
    let mut out = Mat4::identity();
    scene.write_world_matrix(child, &mut out).unwrap();
    assert_relative_eq!(by_value, out, epsilon = 1.0e-6);
}

// ----------------------------------------------------------------------
// Draw walk
// ----------------------------------------------------------------------

#[test]
fn test_failing_drawable_is_skipped_not_fatal() {
    let mut scene = started_scene();
    scene.add_root(
        GameObject::new("mixed")
            .with_component(BrokenGlyph)
            .with_component(MeshRendererComponent::new(MeshId(3), MaterialId(1))),
    );

    let mut queue = DrawQueue::new();
    scene.draw(&mut queue);

    assert_eq!(queue.commands().len(), 1);
    assert_eq!(queue.commands()[0].mesh, MeshId(3));
}
