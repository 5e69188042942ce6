/*
 * Headless Flock Runner
 *
 * Runs the fixed-rate loop for a number of ticks and logs population
 * statistics. Useful for profiling and for checking a config file without
 * opening a window.
 */

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossbeam_channel::{bounded, RecvTimeoutError};
use flocking::{SimulationConfig, SimulationHandle, UpdateMode};
use tracing::info;

/// Run the boid flock without a viewer
#[derive(Parser, Debug)]
#[command(name = "boids-headless")]
#[command(version)]
struct Args {
    /// JSON config file; missing fields use defaults
    #[arg(long, env = "BOIDS_CONFIG")]
    config: Option<PathBuf>,

    /// Initial number of boids
    #[arg(long, env = "BOIDS_POPULATION", default_value_t = SimulationConfig::DEFAULT_POPULATION)]
    population: usize,

    /// RNG seed
    #[arg(long, env = "BOIDS_SEED", default_value_t = 0)]
    seed: u64,

    /// Milliseconds between ticks
    #[arg(long, env = "BOIDS_INTERVAL_MS", default_value_t = SimulationConfig::DEFAULT_TICK_INTERVAL_MS)]
    interval_ms: u64,

    /// Ticks to run before exiting
    #[arg(long, env = "BOIDS_TICKS", default_value_t = 500)]
    ticks: u64,

    /// Update boids in place, in pool order
    #[arg(long)]
    sequential: bool,

    /// Log statistics every N ticks
    #[arg(long, default_value_t = 50)]
    report_every: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if args.sequential {
        config.update_mode = UpdateMode::Sequential;
    }

    let mut handle = SimulationHandle::create(config, args.population, args.seed);

    let (done_tx, done_rx) = bounded(1);
    let target = args.ticks;
    let report_every = args.report_every.max(1);
    let mut tick = 0u64;
    handle.on_tick(move |boids| {
        tick += 1;
        if tick % report_every == 0 {
            info!(tick, population = boids.len(), "flock progress");
        }
        if tick == target {
            let _ = done_tx.try_send(());
        }
    });

    if target > 0 {
        handle.start(Duration::from_millis(args.interval_ms))?;
        loop {
            match done_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(()) => break,
                Err(RecvTimeoutError::Timeout) if handle.is_running() => {}
                Err(_) => {
                    handle.stop();
                    bail!("simulation loop ended before reaching {target} ticks");
                }
            }
        }
        handle.stop();
    }

    let stats = handle.debug_info();
    info!(
        ticks = stats.ticks,
        population = stats.population,
        mean_speed = stats.mean_speed,
        last_tick_ms = stats.last_tick_duration.as_secs_f64() * 1000.0,
        "run finished"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
