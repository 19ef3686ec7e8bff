//! Lighting aggregation
//!
//! Light components re-submit their lights every frame at their current world
//! position; the environment collects them for the backend alongside the
//! scene's persistent ambient term.

use crate::foundation::math::Vec3;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Directional light (like sunlight)
    Directional,
    /// Point light (like a lightbulb)
    Point,
}

/// Light source
#[derive(Debug, Clone)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Light position (for point lights)
    pub position: Vec3,
    /// Light direction (for directional lights)
    pub direction: Vec3,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Light range (for point lights)
    pub range: f32,
}

impl Light {
    /// Create a directional light
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            position: Vec3::zeros(),
            direction: direction.normalize(),
            color,
            intensity,
            range: 0.0,
        }
    }

    /// Create a point light
    pub fn point(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            position,
            direction: Vec3::zeros(),
            color,
            intensity,
            range,
        }
    }
}

/// Per-frame light collection plus persistent ambient lighting
#[derive(Debug, Clone)]
pub struct LightingEnvironment {
    lights: Vec<Light>,
    /// Ambient light color
    pub ambient_color: Vec3,
    /// Ambient light intensity
    pub ambient_intensity: f32,
}

impl LightingEnvironment {
    /// Create an empty lighting environment with dim white ambient
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_intensity: 0.1,
        }
    }

    /// Set ambient lighting, chainable
    pub fn with_ambient(mut self, color: Vec3, intensity: f32) -> Self {
        self.ambient_color = color;
        self.ambient_intensity = intensity;
        self
    }

    /// Drop the previous frame's lights, keeping capacity
    pub fn begin_frame(&mut self) {
        self.lights.clear();
    }

    /// Register a light for the current frame
    pub fn submit(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Lights submitted since the last [`LightingEnvironment::begin_frame`]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

impl Default for LightingEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
