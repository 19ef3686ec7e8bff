//! Constant-rate rotation component

use crate::foundation::math::Vec3;
use crate::scene::{Component, ComponentContext};

/// Rotates its owner around a fixed local axis at a constant rate
#[derive(Debug, Clone)]
pub struct SpinComponent {
    /// Rotation axis in the owner's local space; need not be normalized
    pub axis: Vec3,

    /// Angular speed in radians per second
    pub speed: f32,
}

impl SpinComponent {
    /// Spin around an arbitrary axis
    pub fn new(axis: Vec3, speed: f32) -> Self {
        Self { axis, speed }
    }

    /// Spin around the local Y axis
    pub fn around_y(speed: f32) -> Self {
        Self::new(Vec3::y(), speed)
    }
}

impl Component for SpinComponent {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        let angle = self.speed * ctx.delta_time();
        ctx.transform_mut().rotate_axis_angle(self.axis, angle);
    }
}
