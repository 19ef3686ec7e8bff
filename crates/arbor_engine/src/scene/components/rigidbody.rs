//! Simple rigidbody proxy component
//!
//! Publishes scene gravity into the owner's transform acceleration, damps
//! velocity, and clamps to an optional ground plane. There is no other
//! collision handling; objects fall, coast, and land, nothing more.

use crate::foundation::math::Vec3;
use crate::scene::{Component, ComponentContext};

/// Feeds scene gravity into the owner's acceleration, with optional damping
/// and ground-plane clamp.
///
/// While gravity is on, this component owns the transform's acceleration and
/// rewrites it each frame. The kinematic integrator turns it into velocity on
/// the following frame's pose update.
#[derive(Debug, Clone)]
pub struct RigidbodyComponent {
    /// Whether scene gravity is applied at all
    pub use_gravity: bool,

    /// Multiplier on scene gravity; 1.0 is normal weight
    pub gravity_scale: f32,

    /// Exponential velocity damping per second; 0.0 coasts forever
    pub linear_damping: f32,

    /// Local-space height of the ground plane, if any; the owner's position
    /// never sinks below it and downward velocity is zeroed on contact
    pub ground: Option<f32>,
}

impl Default for RigidbodyComponent {
    fn default() -> Self {
        Self {
            use_gravity: true,
            gravity_scale: 1.0,
            linear_damping: 0.0,
            ground: None,
        }
    }
}

impl RigidbodyComponent {
    /// Rigidbody with normal gravity and no damping
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore gravity entirely; velocity still integrates and damps
    pub fn kinematic() -> Self {
        Self {
            use_gravity: false,
            ..Self::default()
        }
    }

    /// Scale gravity, chainable
    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set linear damping, chainable
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Set the ground plane height, chainable
    pub fn with_ground(mut self, height: f32) -> Self {
        self.ground = Some(height);
        self
    }
}

impl Component for RigidbodyComponent {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        let delta_time = ctx.delta_time();
        let gravity = ctx.physics().gravity * self.gravity_scale;
        let transform = ctx.transform_mut();
        if self.use_gravity {
            transform.acceleration = gravity;
        }
        if self.linear_damping > 0.0 {
            transform.velocity /= 1.0 + self.linear_damping * delta_time;
        }
        if let Some(ground) = self.ground {
            if transform.position.y < ground {
                transform.position.y = ground;
                transform.velocity.y = transform.velocity.y.max(0.0);
            }
        }
    }
}
