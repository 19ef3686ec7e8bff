//! Active-scene ownership and switching
//!
//! The manager holds at most one active [`Scene`] and applies scene switches
//! at a safe point: a switch requested mid-frame is queued and performed
//! before the next update, never while a walk over the old scene could still
//! be in progress. The outgoing scene is shut down so its components see
//! their destroy hooks.

use crate::render::draw_queue::DrawQueue;
use crate::scene::scene::Scene;

/// Owns the active scene and coordinates switches between scenes
#[derive(Debug, Default)]
pub struct SceneManager {
    active: Option<Scene>,
    queued: Option<Scene>,
}

impl SceneManager {
    /// Create a manager with no active scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with an initial scene queued for activation
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            active: None,
            queued: Some(scene),
        }
    }

    /// Whether a scene is currently active
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// The active scene, if any
    pub fn active(&self) -> Option<&Scene> {
        self.active.as_ref()
    }

    /// Mutable access to the active scene
    pub fn active_mut(&mut self) -> Option<&mut Scene> {
        self.active.as_mut()
    }

    /// Queue `scene` to replace the active one.
    ///
    /// The swap happens at the start of the next [`SceneManager::update`];
    /// queuing twice before then replaces the earlier queued scene, which is
    /// dropped without ever starting.
    pub fn queue_scene(&mut self, scene: Scene) {
        if let Some(stale) = self.queued.replace(scene) {
            log::warn!(
                "queued scene '{}' replaced before it ever became active",
                stale.name()
            );
        }
    }

    /// Apply any queued switch, start the active scene if needed, and advance
    /// it by `delta_time`
    pub fn update(&mut self, delta_time: f32) {
        self.apply_queued();
        if let Some(scene) = self.active.as_mut() {
            if !scene.is_started() {
                scene.start();
            }
            scene.update(delta_time);
        }
    }

    /// Record the active scene's draw commands
    pub fn draw(&self, queue: &mut DrawQueue) {
        if let Some(scene) = self.active.as_ref() {
            scene.draw(queue);
        }
    }

    /// Record the active scene's overlay commands
    pub fn draw_overlay(&self, queue: &mut DrawQueue) {
        if let Some(scene) = self.active.as_ref() {
            scene.draw_overlay(queue);
        }
    }

    /// Shut down and drop the active scene without a replacement
    pub fn shutdown(&mut self) {
        if let Some(mut scene) = self.active.take() {
            scene.shutdown();
        }
        self.queued = None;
    }

    fn apply_queued(&mut self) {
        if let Some(next) = self.queued.take() {
            if let Some(mut old) = self.active.take() {
                log::info!("switching scene '{}' -> '{}'", old.name(), next.name());
                old.shutdown();
            } else {
                log::info!("activating scene '{}'", next.name());
            }
            self.active = Some(next);
        }
    }
}
