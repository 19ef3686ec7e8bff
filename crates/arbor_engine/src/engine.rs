//! Core engine implementation
//!
//! The engine owns the main loop and the per-frame sequence: advance the
//! timer, run application logic, update the active scene, record draw and
//! overlay commands, and present through the render backend. Everything
//! scene-shaped lives in [`SceneManager`]; everything GPU-shaped lives behind
//! [`RenderBackend`].

use crate::application::Application;
use crate::config::{Config, ConfigError, EngineConfig};
use crate::foundation::time::Timer;
use crate::render::backend::RenderBackend;
use crate::render::draw_queue::DrawQueue;
use crate::render::error::DrawError;
use crate::scene::{Scene, SceneManager};
use thiserror::Error;

/// Coordinates the scene, timing, and presentation subsystems
pub struct Engine {
    scenes: SceneManager,
    backend: Box<dyn RenderBackend>,
    draw_queue: DrawQueue,
    timer: Timer,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create an engine from a configuration and a render backend
    pub fn new(config: EngineConfig, backend: Box<dyn RenderBackend>) -> Self {
        log::info!(
            "initializing engine (backend: {}, max delta: {:.3}s)",
            backend.name(),
            config.max_delta_time
        );
        let timer = Timer::with_max_delta(config.max_delta_time);
        Self {
            scenes: SceneManager::new(),
            backend,
            draw_queue: DrawQueue::new(),
            timer,
            config,
            running: true,
        }
    }

    /// Create an engine from a config file, falling back to defaults when the
    /// file is missing
    pub fn from_config_file(path: &str, backend: Box<dyn RenderBackend>) -> Self {
        Self::new(EngineConfig::load_or_default(path), backend)
    }

    /// Run the main loop with the given application until it quits
    pub fn run<T: Application>(
        config: EngineConfig,
        backend: Box<dyn RenderBackend>,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config, backend);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("initialize: {e}")))?;

        log::info!("starting main loop");
        while engine.running {
            engine.timer.update();
            let delta_time = engine.timer.delta_time();

            app.update(&mut engine, delta_time)
                .map_err(|e| EngineError::Application(format!("update: {e}")))?;

            engine.advance_frame(delta_time)?;
        }

        app.cleanup(&mut engine);
        engine.scenes.shutdown();
        log::info!(
            "engine shutdown after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        Ok(())
    }

    /// New scene pre-seeded with this engine's configured environment
    pub fn new_scene(&self, name: impl Into<String>) -> Scene {
        Scene::new(name)
            .with_physics(self.config.scene.physics())
            .with_lighting(self.config.scene.lighting())
    }

    /// Queue a scene to become active at the start of the next frame
    pub fn queue_scene(&mut self, scene: Scene) {
        self.scenes.queue_scene(scene);
    }

    /// The scene manager
    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    /// Mutable access to the scene manager
    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    /// Draw commands recorded for the most recent frame
    pub fn draw_queue(&self) -> &DrawQueue {
        &self.draw_queue
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clamped seconds elapsed during the last frame
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Frames completed since the engine was created
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Whether the main loop will keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request a clean shutdown at the end of the current frame
    pub fn quit(&mut self) {
        log::info!("engine shutdown requested");
        self.running = false;
    }

    /// One frame of engine-side work: scene update, draw recording, present
    fn advance_frame(&mut self, delta_time: f32) -> Result<(), EngineError> {
        self.scenes.update(delta_time);

        self.draw_queue.clear();
        self.scenes.draw(&mut self.draw_queue);
        self.scenes.draw_overlay(&mut self.draw_queue);

        if let Some(scene) = self.scenes.active() {
            self.backend
                .present(&self.draw_queue, &scene.services().lighting)?;
        }

        let interval = self.config.stats_interval_frames;
        if interval > 0 && self.timer.frame_count() % interval == 0 {
            log::debug!(
                "frame {}: {:.1} fps, {} objects, {} draw commands",
                self.timer.frame_count(),
                self.timer.average_fps(),
                self.scenes.active().map_or(0, Scene::object_count),
                self.draw_queue.len()
            );
        }
        Ok(())
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application callback failed
    #[error("application error: {0}")]
    Application(String),

    /// Backend failed to present a frame
    #[error("render error: {0}")]
    Render(#[from] DrawError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
