//! # Sandbox Configuration
//!
//! Tunable constants for the player, the generated world and the headless
//! session, loaded once at startup from a JSON file. Every field has a
//! default, so a config file only needs to name the values it changes.
//!
//! ```json
//! { "player": { "speed": 0.2 }, "session": { "frames": 600 } }
//! ```

use std::{
    env::{self, VarError},
    fs,
    path::Path,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application_state::input_script::ScriptStep;

/// Environment variable naming the config file to load.
pub const CONFIG_PATH_VARIABLE: &str = "VOXEL_SANDBOX_CONFIG";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config path variable is set but unusable.
    #[error("cannot read {variable}: {source}")]
    Environment {
        /// Name of the variable
        variable: &'static str,
        /// Why it could not be read
        #[source]
        source: VarError,
    },

    /// The file is not valid JSON for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed correctly but is unusable.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Player movement constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal impulse added per tick of movement input
    pub speed: f32,
    /// Vertical acceleration while airborne (negative is down)
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_force: f32,
    /// Radians of rotation per unit of pointer movement
    pub sensitivity: f32,
    /// Starting position
    pub spawn: [f32; 3],
    /// Maximum distance at which blocks can be targeted; unbounded when absent
    pub reach: Option<f32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            gravity: -9.8,
            jump_force: 5.0,
            sensitivity: 0.01,
            spawn: [0.0, 10.0, 0.0],
            reach: None,
        }
    }
}

/// Extent of the generated world. Columns cover `[min, max)` on X and Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Lowest generated column coordinate
    pub min: i32,
    /// One past the highest generated column coordinate
    pub max: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { min: -10, max: 10 }
    }
}

/// Settings of the headless run loop and its cosmetic collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of frames to simulate
    pub frames: u32,
    /// Length of a full day in seconds
    pub day_duration: f32,
    /// Shortest weather spell, in frames
    pub weather_min_frames: f32,
    /// Longest weather spell, in frames (exclusive)
    pub weather_max_frames: f32,
    /// Seed for the weather picker; random when absent
    pub weather_seed: Option<u64>,
    /// Input to replay; the built-in demo script when absent
    pub input_script: Option<Vec<ScriptStep>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            day_duration: 300.0,
            weather_min_frames: 300.0,
            weather_max_frames: 900.0,
            weather_seed: None,
            input_script: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Player constants
    pub player: PlayerConfig,
    /// World extent
    pub world: WorldConfig,
    /// Session settings
    pub session: SessionConfig,
}

impl SandboxConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SandboxConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads the file named by `VOXEL_SANDBOX_CONFIG`, or the defaults if unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_path_variable(env::var(CONFIG_PATH_VARIABLE))
    }

    fn from_path_variable(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(path) => Self::load(path),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(source) => Err(ConfigError::Environment {
                variable: CONFIG_PATH_VARIABLE,
                source,
            }),
        }
    }

    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("player.speed", self.player.speed),
            ("player.gravity", self.player.gravity),
            ("player.jump_force", self.player.jump_force),
            ("player.sensitivity", self.player.sensitivity),
            ("session.day_duration", self.session.day_duration),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }
        if self.player.spawn.iter().any(|v| !v.is_finite()) {
            return Err(invalid("player.spawn", "coordinates must be finite".into()));
        }
        if self.player.speed <= 0.0 {
            return Err(invalid("player.speed", "must be positive".into()));
        }
        if let Some(reach) = self.player.reach {
            if reach.is_nan() || reach <= 0.0 {
                return Err(invalid("player.reach", "must be positive".into()));
            }
        }
        if self.world.min >= self.world.max {
            return Err(invalid(
                "world",
                format!("min {} must be below max {}", self.world.min, self.world.max),
            ));
        }
        if self.session.day_duration <= 0.0 {
            return Err(invalid("session.day_duration", "must be positive".into()));
        }
        if !(self.session.weather_min_frames > 0.0
            && self.session.weather_min_frames < self.session.weather_max_frames)
        {
            return Err(invalid(
                "session.weather_min_frames",
                "must be positive and below weather_max_frames".into(),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SandboxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player.speed, 0.1);
        assert_eq!(config.player.gravity, -9.8);
        assert_eq!(config.world, WorldConfig { min: -10, max: 10 });
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SandboxConfig::from_json(r#"{ "player": { "jump_force": 7.5 } }"#)
            .expect("config should parse");
        assert_eq!(config.player.jump_force, 7.5);
        assert_eq!(config.player.speed, 0.1);
        assert_eq!(config.session.frames, 600);
    }

    #[test]
    fn unset_path_variable_selects_defaults() {
        let config = SandboxConfig::from_path_variable(Err(VarError::NotPresent))
            .expect("defaults should load");
        assert_eq!(config, SandboxConfig::default());
    }

    #[test]
    fn non_unicode_path_variable_is_an_error() {
        let value = Err(VarError::NotUnicode(std::ffi::OsString::from("sandbox.json")));
        assert!(matches!(
            SandboxConfig::from_path_variable(value),
            Err(ConfigError::Environment {
                variable: CONFIG_PATH_VARIABLE,
                ..
            })
        ));
    }

    #[test]
    fn path_variable_naming_a_missing_file_is_an_io_error() {
        let value = Ok("/nonexistent/voxel-sandbox.json".to_string());
        assert!(matches!(
            SandboxConfig::from_path_variable(value),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = SandboxConfig::from_json("{ player: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_world_is_rejected() {
        let result = SandboxConfig::from_json(r#"{ "world": { "min": 3, "max": 3 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "world", .. })
        ));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let result = SandboxConfig::from_json(r#"{ "player": { "speed": 0.0 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "player.speed", .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SandboxConfig::load("/definitely/not/here/sandbox.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
