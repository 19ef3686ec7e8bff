//! # Arbor Engine
//!
//! A hierarchical scene-graph game engine core written in Rust.
//!
//! ## Features
//!
//! - **Scene Graph**: Parent/child object trees with composed world transforms
//! - **Component Lifecycle**: `on_create` through `on_destroy` hooks with
//!   deterministic ordering and safe mid-frame structural changes
//! - **Arena Storage**: Generational object ids that detect use-after-destroy
//! - **Backend-Agnostic Drawing**: Scenes record draw commands; presenting
//!   them is a pluggable backend's job
//! - **Config Files**: TOML and RON engine configuration with sane defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arbor_engine::prelude::*;
//!
//! struct Orbiter;
//!
//! impl Component for Orbiter {
//!     fn on_update(&mut self, ctx: &mut ComponentContext) {
//!         let delta = ctx.delta_time();
//!         ctx.transform_mut().rotate_axis_angle(Vec3::y(), delta);
//!     }
//! }
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let mut scene = engine.new_scene("main");
//!         scene.add_root(GameObject::new("pivot").with_component(Orbiter));
//!         engine.queue_scene(scene);
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         if engine.frame_count() > 600 {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut app = MyApp;
//!     Engine::run(EngineConfig::default(), Box::new(NullBackend::new()), &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, EngineConfig, SceneConfig},
        foundation::{
            math::{Mat4, Quat, Vec3},
            time::Timer,
        },
        render::{
            DrawQueue, Light, LightType, LightingEnvironment, MaterialId, MeshId, NullBackend,
            RenderBackend,
        },
        scene::{
            components::{
                ExpiryAction, LifetimeComponent, LightComponent, LightFactory,
                MeshRendererComponent, RigidbodyComponent, ScreenLabelComponent, SpinComponent,
            },
            Component, ComponentContext, GameObject, ObjectId, Scene, SceneError, SceneManager,
            Transform,
        },
        AppError, Application, Engine, EngineError,
    };
}
