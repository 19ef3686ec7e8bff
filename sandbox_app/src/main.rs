//! Headless sandbox scene
//!
//! Builds a small world against the null render backend: a directional sun, a
//! spinning hub with an orbiting lamp, and a fountain that churns short-lived
//! motes through the whole component lifecycle. Runs for a fixed number of
//! frames, then logs what it spawned.

mod components;

use arbor_engine::prelude::*;

use crate::components::{MoteSpawner, Orbiter};

const CUBE_MESH: MeshId = MeshId(1);
const SPHERE_MESH: MeshId = MeshId(2);
const CHALK_MATERIAL: MaterialId = MaterialId(1);
const GLOW_MATERIAL: MaterialId = MaterialId(2);

struct SandboxApp {
    frame_budget: u64,
}

impl Application for SandboxApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let mut scene = engine.new_scene("sandbox");

        scene.add_root(GameObject::new("sun").with_component(LightFactory::sun()));

        let hub = scene.add_root(
            GameObject::new("hub")
                .with_position(Vec3::new(0.0, 1.0, 0.0))
                .with_component(SpinComponent::around_y(0.6))
                .with_component(MeshRendererComponent::new(CUBE_MESH, CHALK_MATERIAL))
                .with_component(
                    ScreenLabelComponent::new("hub").with_color(Vec3::new(1.0, 1.0, 0.2)),
                ),
        );
        scene.add_child(
            hub,
            GameObject::new("lamp")
                .with_component(LightFactory::lamp(12.0))
                .with_component(Orbiter::new(3.0, 1.2).with_height(0.5)),
        )?;

        scene.add_root(
            GameObject::new("fountain")
                .with_component(MoteSpawner::new(0.25, 24, SPHERE_MESH, GLOW_MATERIAL)),
        );

        log::info!(
            "sandbox scene built: {} roots, {} objects",
            scene.roots().len(),
            scene.object_count()
        );
        engine.queue_scene(scene);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if engine.frame_count() >= self.frame_budget {
            log::info!("frame budget of {} reached, quitting", self.frame_budget);
            engine.quit();
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(scene) = engine.scenes().active() {
            let spawned = scene
                .find_root("fountain")
                .and_then(|id| scene.get_component::<MoteSpawner>(id).ok().flatten())
                .map_or(0, MoteSpawner::total_spawned);
            log::info!(
                "sandbox done: {spawned} motes spawned, {} objects still live",
                scene.object_count()
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::load_or_default("sandbox.toml");
    let mut app = SandboxApp { frame_budget: 600 };
    Engine::run(config, Box::new(NullBackend::new()), &mut app)?;
    Ok(())
}
