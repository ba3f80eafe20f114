//! Main executable entry point for the life simulation.
//!
//! This binary initializes logging, loads and validates configuration,
//! installs the Ctrl+C stop signal and then runs the simulation loop.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use lifesim::config::{Config, ConfigLoader};
use lifesim::simulation::SimulationApp;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON or TOML configuration file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stops after this many ticks
    #[arg(long)]
    ticks: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins when set; otherwise info for this crate.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lifesim=info"));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}...", path.display());
            ConfigLoader::from_file(path)?
        }
        None => {
            info!("No configuration file given, using defaults.");
            Config::default()
        }
    };
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.simulation.max_ticks = Some(ticks);
    }

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))?;

    // Validates the config before opening the sender.
    let mut app = SimulationApp::new(config)?;
    info!("Configuration validated successfully.");
    let ticks = app.run(&running);

    info!(
        ticks,
        population = app.population().len(),
        food = app.food().len(),
        "Simulation finished."
    );
    Ok(())
}
