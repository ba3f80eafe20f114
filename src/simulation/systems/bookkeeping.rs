use bevy_ecs::prelude::*;

use crate::simulation::food::FoodField;
use crate::simulation::population::Population;
use crate::simulation::resources::{TickCounter, TickStats};

/// Closes the tick: bumps the counter and records end-of-tick totals.
pub fn advance_tick_system(
    mut counter: ResMut<TickCounter>,
    mut stats: ResMut<TickStats>,
    population: Res<Population>,
    food: Res<FoodField>,
) {
    counter.tick += 1;
    stats.population = population.len();
    stats.food_remaining = food.len();
}
