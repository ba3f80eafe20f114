pub mod config;      // Configuration loading and validation
pub mod simulation;  // Organisms, food, the per-tick phases and the driver
pub mod transport;   // Snapshot serialization and delivery to the render shell

// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{Config, ConfigError, ConfigLoader, SimulationConfig, TransportConfig};
    pub use crate::simulation::food::{Food, FoodField};
    pub use crate::simulation::organism::{Kind, Organism};
    pub use crate::simulation::population::{LifecycleOutcome, Population};
    pub use crate::simulation::resources::TickStats;
    pub use crate::simulation::{SimulationApp, SimulationError};
    pub use crate::transport::{EntityState, FoodState, SimulationState, TransportController, TransportError};
}
