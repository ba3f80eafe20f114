pub mod food;
pub mod geometry;
pub mod organism;
pub mod population;
pub mod resources;
pub mod systems;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::config::{Config, ConfigError, ConfigLoader};
use crate::transport::{SimulationState, TransportController, TransportError};
use self::food::FoodField;
use self::population::Population;
use self::resources::{CurrentSimulationState, SimRng, SimulationConfigResource, TickCounter, TickStats};
use self::systems::{
    advance_tick_system, combat_system, feeding_system, flocking_system, lifecycle_system,
    send_simulation_data_system, update_current_simulation_state_resource,
};

const SUMMARY_INTERVAL: u64 = 100;

/// Reasons a [`SimulationApp`] could not be started.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// The main simulation application
pub struct SimulationApp {
    world: World,
    schedule: Schedule,
    config: Config,
    extinction_reported: bool,
}

impl SimulationApp {
    /// Seeds the world from `config` and wires the per-tick schedule.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate or the configured sender cannot be
    /// opened. Validation runs first, so a rejected config never creates files.
    pub fn new(config: Config) -> Result<Self, SimulationError> {
        ConfigLoader::validate(&config)?;
        let controller = TransportController::from_config(&config.transport)?;
        let mut app = Self::build(config);
        app.world.insert_resource(controller);
        Ok(app)
    }

    /// Same as [`SimulationApp::new`] but without any transport; snapshots are
    /// only available through [`SimulationApp::snapshot`].
    pub fn headless(config: Config) -> Result<Self, ConfigError> {
        ConfigLoader::validate(&config)?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let mut world = World::new();
        let mut rng = SimRng::from_seed(config.simulation.seed);

        info!(
            entities = config.simulation.initial_entity_count,
            food = config.simulation.food_count,
            seed = ?config.simulation.seed,
            "Initializing simulation"
        );
        let population = Population::spawn_initial(&config.simulation, &mut rng.0);
        let food = FoodField::populate(
            config.simulation.food_count,
            config.simulation.world_dimensions,
            &mut rng.0,
        );

        world.insert_resource(SimulationConfigResource(config.simulation.clone()));
        world.insert_resource(population);
        world.insert_resource(food);
        world.insert_resource(rng);
        world.insert_resource(TickCounter::default());
        world.insert_resource(TickStats::default());
        world.init_resource::<CurrentSimulationState>();

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                lifecycle_system,
                flocking_system,
                feeding_system,
                combat_system,
                advance_tick_system,
                update_current_simulation_state_resource,
                send_simulation_data_system,
            )
                .chain(),
        );

        Self {
            world,
            schedule,
            config,
            extinction_reported: false,
        }
    }

    /// Advances exactly one tick and publishes its snapshot.
    pub fn step(&mut self) {
        self.schedule.run(&mut self.world);

        let tick = self.tick();
        let stats = *self.stats();
        trace!(tick, ?stats, "Tick complete");

        if tick % SUMMARY_INTERVAL == 0 {
            debug!(
                tick,
                population = stats.population,
                food = stats.food_remaining,
                births = stats.births,
                deaths = stats.deaths,
                kills = stats.kills,
                "Simulation summary"
            );
        }

        if stats.population == 0 && !self.extinction_reported {
            warn!(tick, "Population is extinct");
            self.extinction_reported = true;
        }
    }

    /// Runs ticks until `running` is cleared or `max_ticks` is reached.
    ///
    /// The flag is sampled once per tick, after the snapshot has been sent.
    /// Returns the number of ticks executed by this call.
    pub fn run(&mut self, running: &AtomicBool) -> u64 {
        let frame_duration = self
            .config
            .simulation
            .frame_rate
            .map(|rate| Duration::from_secs_f64(1.0 / f64::from(rate)));
        let max_ticks = self.config.simulation.max_ticks;
        let start = Instant::now();
        let mut executed = 0;

        info!(?frame_duration, ?max_ticks, "Starting simulation run loop");

        loop {
            if max_ticks.is_some_and(|max| self.tick() >= max) {
                info!(tick = self.tick(), "Tick limit reached");
                break;
            }

            let frame_start = Instant::now();
            self.world.resource_mut::<TickCounter>().elapsed_seconds = start.elapsed().as_secs_f64();
            self.step();
            executed += 1;

            if !running.load(Ordering::SeqCst) {
                info!(tick = self.tick(), "Stop signal received");
                break;
            }

            if let Some(frame_duration) = frame_duration {
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    spin_sleep::sleep(frame_duration - elapsed);
                } else {
                    warn!(
                        target_duration_ms = frame_duration.as_millis(),
                        actual_duration_ms = elapsed.as_millis(),
                        "Frame lag detected!"
                    );
                }
            }
        }

        if let Some(controller) = self.world.get_resource::<TransportController>() {
            if let Err(e) = controller.flush() {
                warn!("Failed to flush transport: {}", e);
            }
        }

        executed
    }

    /// Completed ticks.
    pub fn tick(&self) -> u64 {
        self.world.resource::<TickCounter>().tick
    }

    pub fn population(&self) -> &Population {
        self.world.resource::<Population>()
    }

    pub fn population_mut(&mut self) -> Mut<'_, Population> {
        self.world.resource_mut::<Population>()
    }

    pub fn food(&self) -> &FoodField {
        self.world.resource::<FoodField>()
    }

    pub fn stats(&self) -> &TickStats {
        self.world.resource::<TickStats>()
    }

    /// Snapshot produced by the most recent tick.
    pub fn snapshot(&self) -> &SimulationState {
        &self.world.resource::<CurrentSimulationState>().0
    }
}
