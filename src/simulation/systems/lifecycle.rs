//! Contains the Bevy system that moves, ages, culls and breeds the population.

use bevy_ecs::prelude::*;
use tracing::trace;

use crate::simulation::population::Population;
use crate::simulation::resources::{SimRng, SimulationConfigResource, TickStats};

/// First phase of every tick. Resets the tick's statistics before recording
/// births and deaths.
pub fn lifecycle_system(
    mut population: ResMut<Population>,
    mut rng: ResMut<SimRng>,
    mut stats: ResMut<TickStats>,
    simulation_config: Res<SimulationConfigResource>,
) {
    *stats = TickStats::default();

    let outcome = population.run_lifecycle(&simulation_config.0, &mut rng.0);
    stats.births = outcome.births;
    stats.deaths = outcome.deaths;

    if outcome.births > 0 || outcome.deaths > 0 {
        trace!(births = outcome.births, deaths = outcome.deaths, "Lifecycle phase complete");
    }
}
