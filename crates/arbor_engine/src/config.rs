//! Configuration system
//!
//! Config types are plain serde structs loaded from `.toml` or `.ron` files,
//! chosen by extension. Every field has a default, so a partial file or no
//! file at all still yields a runnable configuration.

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::render::lighting::LightingEnvironment;
use crate::scene::PhysicsSettings;

/// Loadable, savable configuration
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load from a file if it exists, falling back to defaults otherwise
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at '{path}', using defaults");
                Self::default()
            }
            Err(error) => {
                log::warn!("failed to load config '{path}': {error}; using defaults");
                Self::default()
            }
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents did not parse
    #[error("parse error: {0}")]
    Parse(String),

    /// Value could not be serialized
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Extension is neither `.toml` nor `.ron`
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on a single frame's delta time in seconds; long stalls
    /// are clamped instead of producing one giant simulation step
    pub max_delta_time: f32,

    /// Log a frame statistics line every this many frames; 0 disables
    pub stats_interval_frames: u64,

    /// Initial scene environment
    pub scene: SceneConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_delta_time: 0.25,
            stats_interval_frames: 120,
            scene: SceneConfig::default(),
        }
    }
}

impl Config for EngineConfig {}

/// Scene environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Gravitational acceleration
    pub gravity: Vec3,

    /// Ambient light color in linear RGB
    pub ambient_color: Vec3,

    /// Ambient light intensity
    pub ambient_intensity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            ambient_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_intensity: 0.1,
        }
    }
}

impl SceneConfig {
    /// Physics settings described by this config
    pub fn physics(&self) -> PhysicsSettings {
        PhysicsSettings {
            gravity: self.gravity,
        }
    }

    /// Lighting environment described by this config
    pub fn lighting(&self) -> LightingEnvironment {
        LightingEnvironment::new().with_ambient(self.ambient_color, self.ambient_intensity)
    }
}
