//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::scene::SceneError;
use thiserror::Error;

/// Application lifecycle trait.
///
/// Implement this to build a game or tool on the engine. The engine owns the
/// loop; the application owns what happens inside it.
pub trait Application {
    /// Called once before the first frame.
    ///
    /// Build the initial scene here and hand it to the engine with
    /// [`Engine::queue_scene`].
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Called every frame before the scene updates.
    ///
    /// Application-level logic that does not belong in a component goes here:
    /// spawning waves, switching scenes, deciding when to quit.
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Called once when the loop exits, before the active scene is torn down
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene graph error propagated to application level
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Custom application error
    #[error("application error: {0}")]
    Custom(String),
}
