//! Snapshot types handed to the render shell, plus their serialization and delivery.

mod serializer;
mod sender;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{SenderConfig, SerializerConfig, TransportConfig};
use crate::simulation::food::Food;
use crate::simulation::organism::{Kind, Organism};
use crate::simulation::resources::TickStats;

// Re-export types
pub use self::serializer::{
    BinarySerializer, Framing, JsonSerializer, SerializationError, SerializeObject, Serializer,
};
pub use self::sender::{FileSender, NullSender, Sender, StdoutSender, TransportError};

/// Draw radius for organisms.
pub const ENTITY_DISPLAY_SIZE: u32 = 5;
/// Draw radius for food.
pub const FOOD_DISPLAY_SIZE: u32 = 3;

/// One organism as seen by the render shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub x: f64,
    pub y: f64,
    pub kind: Kind,
    pub size: u32,
}

impl From<&Organism> for EntityState {
    fn from(organism: &Organism) -> Self {
        Self {
            x: organism.position.x,
            y: organism.position.y,
            kind: organism.kind,
            size: ENTITY_DISPLAY_SIZE,
        }
    }
}

/// One food item as seen by the render shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodState {
    pub x: f64,
    pub y: f64,
    /// Optional shell metadata: draw radius hint. Shells may ignore it and
    /// records without it decode as `0`.
    #[serde(default)]
    pub size: u32,
}

impl From<&Food> for FoodState {
    fn from(food: &Food) -> Self {
        Self {
            x: food.position.x,
            y: food.position.y,
            size: FOOD_DISPLAY_SIZE,
        }
    }
}

/// Complete simulation state for serialization.
///
/// `entities` and `food` are what a shell needs to draw a frame. The
/// remaining fields are optional shell metadata: they are always written but
/// default when absent, so a record carrying only the two lists still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Optional shell metadata: completed tick count.
    #[serde(default)]
    pub tick: u64,
    /// Optional shell metadata: seconds since the run loop started.
    #[serde(default)]
    pub timestamp: f64,
    pub entities: Vec<EntityState>,
    pub food: Vec<FoodState>,
    /// Optional shell metadata: counters for the tick.
    #[serde(default)]
    pub stats: TickStats,
}

/// Controller for handling serialization and transport of simulation data
#[derive(Resource)]
pub struct TransportController {
    serializer: Box<dyn Serializer>,
    sender: Box<dyn Sender>,
    output_frequency: u32,
    current_frame: u64,
}

impl TransportController {
    /// Create a new transport controller with the provided serializer and sender
    pub fn new(serializer: Box<dyn Serializer>, sender: Box<dyn Sender>, output_frequency: u32) -> Self {
        Self {
            serializer,
            sender,
            output_frequency: output_frequency.max(1),
            current_frame: 0,
        }
    }

    /// Create a transport controller from configuration
    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let serializer: Box<dyn Serializer> = match config.serializer {
            SerializerConfig::Json => Box::new(JsonSerializer),
            SerializerConfig::Binary => Box::new(BinarySerializer),
        };
        let framing = serializer.framing();

        let sender: Box<dyn Sender> = match &config.sender {
            SenderConfig::File(file) => Box::new(FileSender::new(&file.output_path, framing)?),
            SenderConfig::Stdout => Box::new(StdoutSender::new(framing)),
            SenderConfig::Null => Box::new(NullSender),
        };

        Ok(Self::new(serializer, sender, config.output_frequency))
    }

    /// Serialize and send simulation state, honoring the output frequency.
    /// Returns whether this frame was actually sent.
    pub fn send_simulation_state(&mut self, state: &SimulationState) -> Result<bool, TransportError> {
        self.current_frame += 1;
        if self.current_frame % u64::from(self.output_frequency) != 0 {
            return Ok(false);
        }

        let data = self.serializer.serialize_to_bytes(state)?;
        self.sender.send(&data)?;
        Ok(true)
    }

    /// Flush the sender to ensure data is written
    pub fn flush(&self) -> Result<(), TransportError> {
        self.sender.flush()
    }
}
