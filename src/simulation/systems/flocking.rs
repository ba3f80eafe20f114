//! Contains the Bevy system applying same-kind cohesion to velocities.

use bevy_ecs::prelude::*;

use crate::simulation::population::Population;
use crate::simulation::resources::SimulationConfigResource;

/// Second phase: velocities change, positions stay put until the next tick's move.
pub fn flocking_system(
    mut population: ResMut<Population>,
    simulation_config: Res<SimulationConfigResource>,
) {
    population.apply_cohesion(&simulation_config.0);
}
