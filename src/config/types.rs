use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}

/// Simulation rules and arena settings.
///
/// Every field falls back to its default when omitted from a config file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub world_dimensions: (f64, f64),
    pub initial_entity_count: usize,
    pub food_count: usize,
    pub max_age: u32,
    /// Energy must be strictly above this for reproduction to succeed.
    pub reproduction_energy: f64,
    /// Gate for eating; not a ceiling on the result.
    pub max_energy: f64,
    pub initial_energy: f64,
    pub initial_speed: f64,
    pub cluster_radius: f64,
    pub attack_radius: f64,
    pub eat_radius: f64,
    pub reproduce_probability: f64,
    pub energy_decay: f64,
    pub eat_energy_gain: f64,
    pub cohesion_gain: f64,
    /// Offspring land within `[-offset, offset]` of the parent on each axis.
    pub reproduction_offset: f64,
    pub seed: Option<u64>,
    /// Ticks per second; `None` runs unthrottled.
    pub frame_rate: Option<u32>,
    pub max_ticks: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_dimensions: (800.0, 800.0),
            initial_entity_count: 50,
            food_count: 200,
            max_age: 500,
            reproduction_energy: 50.0,
            max_energy: 100.0,
            initial_energy: 50.0,
            initial_speed: 1.0,
            cluster_radius: 50.0,
            attack_radius: 30.0,
            eat_radius: 10.0,
            reproduce_probability: 0.01,
            energy_decay: 0.1,
            eat_energy_gain: 20.0,
            cohesion_gain: 0.01,
            reproduction_offset: 10.0,
            seed: None,
            frame_rate: Some(60),
            max_ticks: None,
        }
    }
}

/// Transport-specific configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TransportConfig {
    #[serde(default = "default_serializer")]
    pub serializer: SerializerConfig,
    #[serde(default = "default_sender")]
    pub sender: SenderConfig,
    /// Send every N-th tick.
    #[serde(default = "default_output_frequency")]
    pub output_frequency: u32,
}

fn default_serializer() -> SerializerConfig { SerializerConfig::Json }
fn default_sender() -> SenderConfig { SenderConfig::Null }
fn default_output_frequency() -> u32 { 1 }

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            serializer: default_serializer(),
            sender: default_sender(),
            output_frequency: default_output_frequency(),
        }
    }
}

/// Snapshot encoding
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "serializer_type")]
pub enum SerializerConfig {
    Json,
    Binary,
}

/// Configuration specific to the File sender
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FileSenderConfig {
    pub output_path: String,
}

/// Enum defining the sender type and its specific configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "sender_type", content = "options")] // Nest options
pub enum SenderConfig {
    File(FileSenderConfig),
    Stdout,
    Null,
}
