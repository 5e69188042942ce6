/*
 * Error Module
 *
 * Error types for the outer surfaces of the simulation. Ticking itself
 * never fails; only starting the scheduler and loading a config file can.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the simulation loop's start/stop lifecycle.
#[derive(Debug, Error)]
pub enum LoopError {
    #[error("simulation loop is already running")]
    AlreadyRunning,
    #[error("failed to spawn scheduler thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Errors raised while loading a [`SimulationConfig`](crate::SimulationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
