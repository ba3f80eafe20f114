use bevy_ecs::prelude::*;

use crate::simulation::food::FoodField;
use crate::simulation::population::Population;
use crate::simulation::resources::{CurrentSimulationState, TickCounter, TickStats};
use crate::transport::{EntityState, FoodState, SimulationState};

/// System to snapshot organisms and food into the CurrentSimulationState resource.
/// This should run after the tick counter has advanced.
pub fn update_current_simulation_state_resource(
    mut state_resource: ResMut<CurrentSimulationState>,
    population: Res<Population>,
    food: Res<FoodField>,
    counter: Res<TickCounter>,
    stats: Res<TickStats>,
) {
    state_resource.0 = SimulationState {
        tick: counter.tick,
        timestamp: counter.elapsed_seconds,
        entities: population.iter().map(EntityState::from).collect(),
        food: food.iter().map(FoodState::from).collect(),
        stats: *stats,
    };
}
