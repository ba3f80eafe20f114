use bevy_ecs::prelude::*;

use crate::simulation::food::FoodField;
use crate::simulation::population::Population;
use crate::simulation::resources::{SimulationConfigResource, TickStats};

/// Third phase: organisms take food in list order.
pub fn feeding_system(
    mut population: ResMut<Population>,
    mut food: ResMut<FoodField>,
    mut stats: ResMut<TickStats>,
    simulation_config: Res<SimulationConfigResource>,
) {
    stats.food_consumed = population.feed(&mut food, &simulation_config.0);
}
