//! Light source component
//!
//! Lights are regular components: each enabled light re-submits itself to the
//! scene's lighting environment every update, so the set of active lights is
//! always exactly the set of enabled light components that ran this frame.
//! Point lights radiate from the owner's world position; directional lights
//! ignore position entirely.

use crate::foundation::math::Vec3;
use crate::render::lighting::{Light, LightType};
use crate::scene::{Component, ComponentContext};

/// Attaches a light source to the owning object
#[derive(Debug, Clone)]
pub struct LightComponent {
    /// Directional or point
    pub light_type: LightType,

    /// World-space direction, used by directional lights
    pub direction: Vec3,

    /// Light color in linear RGB
    pub color: Vec3,

    /// Intensity multiplier
    pub intensity: f32,

    /// Falloff range, used by point lights
    pub range: f32,
}

impl LightComponent {
    /// Directional light with a fixed world-space direction
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            direction,
            color,
            intensity,
            range: 0.0,
        }
    }

    /// Point light centered on the owner's world position
    pub fn point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            direction: -Vec3::y(),
            color,
            intensity,
            range,
        }
    }
}

impl Component for LightComponent {
    fn on_update(&mut self, ctx: &mut ComponentContext) {
        let light = match self.light_type {
            LightType::Directional => {
                Light::directional(self.direction, self.color, self.intensity)
            }
            LightType::Point => {
                Light::point(ctx.world_position(), self.color, self.intensity, self.range)
            }
        };
        ctx.lighting_mut().submit(light);
    }
}

/// Presets for common light setups
pub struct LightFactory;

impl LightFactory {
    /// Warm, slightly tilted key light resembling late-afternoon sun
    pub fn sun() -> LightComponent {
        LightComponent::directional(
            Vec3::new(-0.4, -1.0, -0.3),
            Vec3::new(1.0, 0.95, 0.85),
            1.2,
        )
    }

    /// Small white fill light
    pub fn lamp(range: f32) -> LightComponent {
        LightComponent::point(Vec3::new(1.0, 1.0, 1.0), 0.8, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::{GameObject, Scene};
    use approx::assert_relative_eq;

    #[test]
    fn test_light_resubmits_each_frame() {
        let mut scene = Scene::new("test");
        scene.add_root(GameObject::new("sun").with_component(LightFactory::sun()));
        scene.start();

        scene.update(0.016);
        assert_eq!(scene.services().lighting.lights().len(), 1);

        // begin_frame clears, the component submits again
        scene.update(0.016);
        assert_eq!(scene.services().lighting.lights().len(), 1);
    }

    #[test]
    fn test_point_light_tracks_world_position() {
        let mut scene = Scene::new("test");
        let parent = scene.add_root(GameObject::new("rig").with_position(Vec3::new(5.0, 0.0, 0.0)));
        scene
            .add_child(
                parent,
                GameObject::new("bulb")
                    .with_position(Vec3::new(0.0, 2.0, 0.0))
                    .with_component(LightFactory::lamp(10.0)),
            )
            .unwrap();
        scene.start();
        scene.update(0.016);

        let lights = scene.services().lighting.lights();
        assert_eq!(lights.len(), 1);
        assert_relative_eq!(lights[0].position.x, 5.0, epsilon = 1.0e-5);
        assert_relative_eq!(lights[0].position.y, 2.0, epsilon = 1.0e-5);
    }

    #[test]
    fn test_disabled_light_not_submitted() {
        let mut scene = Scene::new("test");
        let id = scene.add_root(GameObject::new("lamp").with_component(LightFactory::lamp(5.0)));
        scene.start();
        scene.set_component_enabled(id, 0, false).unwrap();

        scene.update(0.016);
        assert!(scene.services().lighting.lights().is_empty());
    }
}
