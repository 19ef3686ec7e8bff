//! Hierarchical game object system
//!
//! A [`Scene`] owns a forest of [`GameObject`]s; each object owns an ordered
//! list of [`Component`]s that receive lifecycle hooks. The hook sequence for
//! a component that lives a full life is:
//!
//! ```text
//! attach ──► on_create ──► on_enable ──► on_start
//!                                           │
//!                                      on_update (per frame)
//!                                           │
//! destroy ──► on_disable ──► on_destroy ──► dropped
//! ```
//!
//! Structural changes requested while the frame walk is running never
//! invalidate it: additions are applied append-only and take effect next
//! frame, removals and destroys are staged in pending queues and flushed at
//! well-defined points. The [`SceneManager`] owns the active scene and
//! applies scene switches between frames.

pub mod components;

mod component;
mod context;
mod error;
mod manager;
mod object;
mod scene;
mod transform;

#[cfg(test)]
mod tests;

pub use component::{Activation, AsAny, Component, Drawable, OverlayDrawable};
pub use context::ComponentContext;
pub use error::SceneError;
pub use manager::SceneManager;
pub use object::{GameObject, ObjectId};
pub use scene::{PhysicsSettings, Scene, SceneServices};
pub use transform::Transform;
