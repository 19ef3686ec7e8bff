//! Demo-specific components

use arbor_engine::foundation::math::constants::TAU;
use arbor_engine::prelude::*;
use rand::Rng;

/// Circles the owner around its parent-space origin
#[derive(Debug, Clone)]
pub struct Orbiter {
    /// Orbit radius in parent-space units
    pub radius: f32,

    /// Height of the orbit plane above the parent origin
    pub height: f32,

    /// Angular speed in radians per second
    pub angular_speed: f32,

    angle: f32,
}

impl Orbiter {
    /// Create an orbiter with the given radius and angular speed
    pub fn new(radius: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            height: 0.0,
            angular_speed,
            angle: 0.0,
        }
    }

    /// Set the orbit plane height, chainable
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl Component for Orbiter {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        self.angle = (self.angle + self.angular_speed * ctx.delta_time()) % TAU;
        ctx.transform_mut().position = Vec3::new(
            self.angle.cos() * self.radius,
            self.height,
            self.angle.sin() * self.radius,
        );
    }
}

/// Continuously emits short-lived falling motes as children of its owner.
///
/// Each mote gets a renderer, gravity, and a lifetime that destroys it a few
/// seconds later, so the scene keeps exercising the full component lifecycle
/// while the demo runs.
pub struct MoteSpawner {
    /// Seconds between spawn attempts
    pub interval: f32,

    /// Cap on simultaneously live motes
    pub max_live: usize,

    mesh: MeshId,
    material: MaterialId,
    until_next: f32,
    total_spawned: u64,
}

impl MoteSpawner {
    /// Create a spawner emitting every `interval` seconds with at most
    /// `max_live` motes alive at once
    pub fn new(interval: f32, max_live: usize, mesh: MeshId, material: MaterialId) -> Self {
        Self {
            interval,
            max_live,
            mesh,
            material,
            until_next: 0.0,
            total_spawned: 0,
        }
    }

    /// Number of motes spawned over the spawner's whole lifetime
    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }
}

impl Component for MoteSpawner {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        self.until_next -= ctx.delta_time();
        if self.until_next > 0.0 || ctx.children().len() >= self.max_live {
            return;
        }
        self.until_next = self.interval;

        let mut rng = rand::thread_rng();
        let position = Vec3::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(2.0..5.0),
            rng.gen_range(-3.0..3.0),
        );
        let velocity = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.0..2.0),
            rng.gen_range(-1.0..1.0),
        );

        self.total_spawned += 1;
        let mote = GameObject::new(format!("mote-{}", self.total_spawned))
            .with_transform(
                Transform::from_position(position)
                    .with_velocity(velocity)
                    .with_uniform_scale(0.2),
            )
            .with_component(MeshRendererComponent::new(self.mesh, self.material))
            .with_component(RigidbodyComponent::new().with_damping(0.2).with_ground(0.0))
            .with_component(LifetimeComponent::new(rng.gen_range(1.5..4.0)));
        let id = ctx.add_child(mote);
        log::debug!("spawned mote {id:?} ({} total)", self.total_spawned);
    }
}
