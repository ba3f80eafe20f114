use std::sync::atomic::AtomicBool;

use glam::DVec2;
use lifesim::prelude::*;

fn seeded_config(seed: u64) -> Config {
    let mut config = Config::default();
    config.simulation.seed = Some(seed);
    config.simulation.frame_rate = None;
    config
}

#[test]
fn seeded_run_keeps_population_within_growth_bound() {
    let mut app = SimulationApp::headless(seeded_config(0xC0FFEE)).unwrap();
    assert_eq!(app.population().len(), 50);
    assert_eq!(app.food().len(), 200);

    let mut previous = app.population().len();
    let mut food_before = app.food().len();
    for _ in 0..300 {
        app.step();
        let stats = *app.stats();
        let current = app.population().len();

        assert_eq!(stats.population, current);
        assert!(stats.births <= previous, "more births than organisms alive last tick");
        assert!(current <= previous * 2);
        assert_eq!(current, previous + stats.births - stats.deaths);

        assert!(app.food().len() <= food_before);
        assert_eq!(app.food().len(), food_before - stats.food_consumed);

        previous = current;
        food_before = app.food().len();
    }
    assert_eq!(app.tick(), 300);
}

#[test]
fn same_seed_replays_identically() {
    let mut first = SimulationApp::headless(seeded_config(77)).unwrap();
    let mut second = SimulationApp::headless(seeded_config(77)).unwrap();

    for _ in 0..120 {
        first.step();
        second.step();
    }

    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.population().organisms(), second.population().organisms());
}

#[test]
fn snapshot_mirrors_live_state() {
    let mut app = SimulationApp::headless(seeded_config(5)).unwrap();
    app.step();

    let snapshot = app.snapshot().clone();
    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.entities.len(), app.population().len());
    assert_eq!(snapshot.food.len(), app.food().len());
    for (state, organism) in snapshot.entities.iter().zip(app.population().iter()) {
        assert_eq!(state.x, organism.position.x);
        assert_eq!(state.y, organism.position.y);
        assert_eq!(state.kind, organism.kind);
        assert_eq!(state.size, 5);
    }
}

#[test]
fn combat_victim_disappears_on_following_tick() {
    let mut config = seeded_config(1);
    config.simulation.initial_entity_count = 0;
    config.simulation.food_count = 0;
    config.simulation.reproduce_probability = 0.0;
    let mut app = SimulationApp::headless(config).unwrap();

    app.population_mut().push(Organism::new(DVec2::new(100.0, 100.0), DVec2::ZERO, Kind::Red, 50.0));
    app.population_mut().push(Organism::new(DVec2::new(110.0, 100.0), DVec2::ZERO, Kind::Blue, 30.0));

    app.step();
    let organisms = app.population().organisms();
    assert_eq!(organisms.len(), 2);
    assert!((organisms[0].energy - 79.8).abs() < 1e-3);
    assert_eq!(organisms[1].energy, 0.0);
    assert_eq!(app.stats().kills, 1);

    app.step();
    assert_eq!(app.population().len(), 1);
    assert_eq!(app.population().organisms()[0].kind, Kind::Red);
    assert_eq!(app.stats().deaths, 1);
}

#[test]
fn run_honors_tick_limit_and_stop_flag() {
    let mut config = seeded_config(9);
    config.simulation.max_ticks = Some(25);
    let mut app = SimulationApp::new(config).unwrap();

    let running = AtomicBool::new(true);
    assert_eq!(app.run(&running), 25);
    assert_eq!(app.tick(), 25);

    // A cleared flag still lets the current tick finish before stopping.
    let mut app = SimulationApp::headless(seeded_config(9)).unwrap();
    let stopped = AtomicBool::new(false);
    assert_eq!(app.run(&stopped), 1);
    assert_eq!(app.tick(), 1);
}

#[test]
fn extinct_world_keeps_ticking() {
    let mut config = seeded_config(3);
    config.simulation.initial_entity_count = 0;
    let mut app = SimulationApp::headless(config).unwrap();

    for _ in 0..10 {
        app.step();
    }
    assert!(app.population().is_empty());
    assert_eq!(app.food().len(), 200);
    assert_eq!(app.tick(), 10);
}

#[test]
fn constructors_reject_invalid_config() {
    let mut config = seeded_config(4);
    config.simulation.initial_speed = -1.0;
    assert!(matches!(
        SimulationApp::new(config.clone()),
        Err(SimulationError::Config(ConfigError::ValidationError(_)))
    ));
    assert!(matches!(
        SimulationApp::headless(config),
        Err(ConfigError::ValidationError(_))
    ));

    let mut config = seeded_config(4);
    config.simulation.reproduction_offset = f64::INFINITY;
    config.simulation.reproduce_probability = 1.0;
    assert!(SimulationApp::headless(config).is_err());
}
