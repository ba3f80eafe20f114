use bevy_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::transport::SimulationState;

/// Completed ticks and wall-clock time since the run started.
#[derive(Resource, Debug, Default)]
pub struct TickCounter {
    pub tick: u64,
    pub elapsed_seconds: f64,
}

/// SimulationConfig as a resource for systems
#[derive(Resource)]
pub struct SimulationConfigResource(pub crate::config::SimulationConfig);

/// The single random stream every phase draws from, so a seed fixes the whole run.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Counters gathered by the phase systems during the current tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    pub births: usize,
    pub deaths: usize,
    pub food_consumed: usize,
    pub kills: usize,
    pub population: usize,
    pub food_remaining: usize,
}

/// Latest snapshot handed to the render shell.
#[derive(Resource, Default)]
pub struct CurrentSimulationState(pub SimulationState);
