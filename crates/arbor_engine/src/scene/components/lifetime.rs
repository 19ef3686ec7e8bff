//! Lifetime component for time-limited objects
//!
//! Counts down every update and fires a configurable expiry action, so
//! projectiles, effects, and other short-lived objects clean themselves up
//! without bookkeeping in application code.

use crate::scene::{Component, ComponentContext};

/// What happens when a [`LifetimeComponent`] reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryAction {
    /// Queue the owning object for destruction
    DestroyOwner,
    /// Destroy only this component, leaving the owner alive
    DestroySelf,
    /// Disable the owning object without destroying anything
    DisableOwner,
}

/// Destroys or disables its owner after a fixed time
#[derive(Debug, Clone)]
pub struct LifetimeComponent {
    /// Seconds left before the expiry action fires
    pub remaining: f32,

    /// Action taken on expiry
    pub action: ExpiryAction,

    expired: bool,
}

impl LifetimeComponent {
    /// Expire after `seconds`, destroying the owner
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            action: ExpiryAction::DestroyOwner,
            expired: false,
        }
    }

    /// Override the expiry action, chainable
    pub fn with_action(mut self, action: ExpiryAction) -> Self {
        self.action = action;
        self
    }

    /// Whether the countdown has already fired
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Restart the countdown with a fresh duration
    pub fn reset(&mut self, seconds: f32) {
        self.remaining = seconds;
        self.expired = false;
    }
}

impl Component for LifetimeComponent {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        if self.expired {
            return;
        }
        self.remaining -= ctx.delta_time();
        if self.remaining > 0.0 {
            return;
        }
        self.expired = true;
        match self.action {
            ExpiryAction::DestroyOwner => ctx.destroy_owner(),
            ExpiryAction::DestroySelf => ctx.destroy_self(),
            ExpiryAction::DisableOwner => {
                let owner = ctx.owner();
                let _ = ctx.set_enabled(owner, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{GameObject, Scene};

    #[test]
    fn test_owner_destroyed_after_lifetime() {
        let mut scene = Scene::new("test");
        let id = scene.add_root(GameObject::new("spark").with_component(LifetimeComponent::new(0.05)));
        scene.start();

        scene.update(0.03);
        assert!(scene.is_alive(id));

        scene.update(0.03);
        assert!(!scene.is_alive(id));
    }

    #[test]
    fn test_disable_action_keeps_owner_alive() {
        let mut scene = Scene::new("test");
        let id = scene.add_root(
            GameObject::new("beacon").with_component(
                LifetimeComponent::new(0.01).with_action(ExpiryAction::DisableOwner),
            ),
        );
        scene.start();

        scene.update(0.02);
        assert!(scene.is_alive(id));
        assert!(!scene.is_enabled(id).unwrap());
    }

    #[test]
    fn test_destroy_self_removes_only_component() {
        let mut scene = Scene::new("test");
        let id = scene.add_root(
            GameObject::new("holder").with_component(
                LifetimeComponent::new(0.01).with_action(ExpiryAction::DestroySelf),
            ),
        );
        scene.start();
        assert!(scene.get_component::<LifetimeComponent>(id).unwrap().is_some());

        // The expiry update disables and destroys the component, and the
        // owner's end-of-update flush drops the slot.
        scene.update(0.02);
        assert!(scene.is_alive(id));
        assert!(scene.get_component::<LifetimeComponent>(id).unwrap().is_none());
    }
}
