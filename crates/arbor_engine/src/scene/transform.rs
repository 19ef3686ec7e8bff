//! Local transform state for scene graph nodes
//!
//! Every game object owns exactly one transform. It stores the node's pose
//! relative to its parent together with first- and second-order kinematic
//! state, and is integrated once per frame before the owner's components run.

use crate::foundation::math::{self, Mat4, Quat, Vec3};

/// Position, rotation, and scale relative to the parent node, plus the
/// kinematic state used by [`Transform::integrate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position relative to the parent
    pub position: Vec3,

    /// Rotation relative to the parent
    pub rotation: Quat,

    /// Per-axis scale factors
    pub scale: Vec3,

    /// Linear velocity in units per second
    pub velocity: Vec3,

    /// Linear acceleration in units per second squared
    pub acceleration: Vec3,

    /// Angular velocity as a scaled rotation axis, radians per second
    pub angular_velocity: Vec3,

    /// Angular acceleration in radians per second squared
    pub angular_acceleration: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            angular_acceleration: Vec3::zeros(),
        }
    }
}

impl Transform {
    /// Create an identity transform at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the position, chainable
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation, chainable
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set a uniform scale, chainable
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Set per-axis scale factors, chainable
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the linear velocity, chainable
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the angular velocity (scaled axis, radians per second), chainable
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Move the position by a delta
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Apply an additional rotation around `axis` by `angle` radians
    pub fn rotate_axis_angle(&mut self, axis: Vec3, angle: f32) {
        if let Some(axis) = nalgebra::Unit::try_new(axis, 1.0e-6) {
            self.rotation = Quat::from_axis_angle(&axis, angle) * self.rotation;
        }
    }

    /// Build the matrix mapping local space into the parent's space.
    ///
    /// Scale, then rotation, then translation.
    pub fn local_matrix(&self) -> Mat4 {
        math::compose_trs(&self.position, &self.rotation, &self.scale)
    }

    /// Advance the kinematic state by `delta_time` seconds.
    ///
    /// Semi-implicit Euler: velocities pick up their accelerations first, the
    /// updated velocities then move the pose. The incremental rotation is
    /// applied on the left so the spin axis is interpreted in parent space.
    pub fn integrate(&mut self, delta_time: f32) {
        self.velocity += self.acceleration * delta_time;
        self.position += self.velocity * delta_time;

        self.angular_velocity += self.angular_acceleration * delta_time;
        if self.angular_velocity.magnitude_squared() > 0.0 {
            let step = Quat::from_scaled_axis(self.angular_velocity * delta_time);
            self.rotation = step * self.rotation;
            self.rotation.renormalize_fast();
        }
    }

    /// Stop all linear and angular motion
    pub fn stop(&mut self) {
        self.velocity = Vec3::zeros();
        self.acceleration = Vec3::zeros();
        self.angular_velocity = Vec3::zeros();
        self.angular_acceleration = Vec3::zeros();
    }
}
