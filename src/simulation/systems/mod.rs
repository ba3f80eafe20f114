pub mod lifecycle;
pub mod flocking;
pub mod feeding;
pub mod combat;
pub mod bookkeeping;
pub mod state_export;
pub mod transport_integration;

// Re-export system functions for easier access
pub use lifecycle::lifecycle_system;
pub use flocking::flocking_system;
pub use feeding::feeding_system;
pub use combat::combat_system;
pub use bookkeeping::advance_tick_system;
pub use state_export::update_current_simulation_state_resource;
pub use transport_integration::send_simulation_data_system;
