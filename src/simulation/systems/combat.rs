use bevy_ecs::prelude::*;

use crate::simulation::population::Population;
use crate::simulation::resources::{SimulationConfigResource, TickStats};

/// Last phase. Drained organisms stay in the list until the next lifecycle pass.
pub fn combat_system(
    mut population: ResMut<Population>,
    mut stats: ResMut<TickStats>,
    simulation_config: Res<SimulationConfigResource>,
) {
    stats.kills = population.resolve_combat(&simulation_config.0);
}
