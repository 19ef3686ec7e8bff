//! Built-in components
//!
//! Small, composable behaviors covering the common needs of scene content:
//! timed cleanup, motion, lighting, and draw recording. Applications define
//! their own components by implementing [`Component`](crate::scene::Component)
//! the same way these do.

pub mod lifetime;
pub mod light;
pub mod mesh_renderer;
pub mod rigidbody;
pub mod screen_label;
pub mod spin;

pub use lifetime::{ExpiryAction, LifetimeComponent};
pub use light::{LightComponent, LightFactory};
pub use mesh_renderer::MeshRendererComponent;
pub use rigidbody::RigidbodyComponent;
pub use screen_label::ScreenLabelComponent;
pub use spin::SpinComponent;
