use std::fs;
use std::path::Path;
use thiserror::Error;

// Re-export types
pub use self::types::{
    Config, FileSenderConfig, SenderConfig, SerializerConfig, SimulationConfig, TransportConfig,
};
mod types;

// Config error handling
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// Config loader implementation
pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads a config file; `.toml` files are parsed as TOML, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let file_content = fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            Self::from_toml_str(&file_content)
        } else {
            Self::from_json_str(&file_content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let sim = &config.simulation;

        let (width, height) = sim.world_dimensions;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(invalid("World dimensions must be finite and positive"));
        }

        let non_negative = [
            ("cluster_radius", sim.cluster_radius),
            ("attack_radius", sim.attack_radius),
            ("eat_radius", sim.eat_radius),
            ("reproduction_offset", sim.reproduction_offset),
            ("energy_decay", sim.energy_decay),
            ("eat_energy_gain", sim.eat_energy_gain),
            ("cohesion_gain", sim.cohesion_gain),
            ("initial_speed", sim.initial_speed),
            ("reproduction_energy", sim.reproduction_energy),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let positive = [
            ("max_energy", sim.max_energy),
            ("initial_energy", sim.initial_energy),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&sim.reproduce_probability) {
            return Err(invalid("Reproduce probability must lie within [0, 1]"));
        }
        if sim.frame_rate == Some(0) {
            return Err(invalid("Frame rate must be greater than 0"));
        }

        if config.transport.output_frequency == 0 {
            return Err(invalid("Output frequency must be greater than 0"));
        }
        if let SenderConfig::File(file) = &config.transport.sender {
            if file.output_path.trim().is_empty() {
                return Err(invalid("File sender requires an output path"));
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError(message.to_string())
}
