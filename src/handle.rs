/*
 * Simulation Loop Module
 *
 * SimulationHandle owns a Simulation behind a mutex and, while running, a
 * scheduler thread that ticks it on a fixed cadence. Ticks never overlap:
 * the next tick is due one interval after the previous one started, and a
 * tick that overruns simply delays the next one. Missed ticks are not
 * replayed. A scheduler that died (a subscriber panicked) counts as
 * stopped and is reaped on the next start or stop.
 */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use tracing::{error, info, warn};

use crate::boid::Boid;
use crate::debug::DebugInfo;
use crate::error::LoopError;
use crate::params::{Coefficient, SimulationConfig};
use crate::simulation::{Simulation, TickReport};

type SharedSimulation = Arc<Mutex<Simulation>>;

struct Scheduler {
    stop_tx: Sender<()>,
    thread: JoinHandle<()>,
}

/// Public entry point to the simulation core.
///
/// Dropping the handle stops the scheduler.
pub struct SimulationHandle {
    shared: SharedSimulation,
    scheduler: Option<Scheduler>,
}

impl SimulationHandle {
    /// Build a stopped simulation seeded with `initial_population` random boids.
    pub fn create(config: SimulationConfig, initial_population: usize, rng_seed: u64) -> Self {
        info!(initial_population, rng_seed, "creating flock simulation");
        Self::from_simulation(Simulation::new(config, initial_population, rng_seed))
    }

    pub fn from_simulation(simulation: Simulation) -> Self {
        Self {
            shared: Arc::new(Mutex::new(simulation)),
            scheduler: None,
        }
    }

    /// Begin ticking every `interval` on a dedicated scheduler thread.
    pub fn start(&mut self, interval: Duration) -> Result<(), LoopError> {
        self.reap_dead_scheduler();
        if self.scheduler.is_some() {
            warn!("start requested while the simulation loop is already running");
            return Err(LoopError::AlreadyRunning);
        }

        let (stop_tx, stop_rx) = bounded(1);
        let shared = Arc::clone(&self.shared);
        let thread = thread::Builder::new()
            .name("flock-scheduler".to_string())
            .spawn(move || run_scheduler(shared, interval, stop_rx))?;

        info!(interval_ms = interval.as_millis() as u64, "simulation loop started");
        self.scheduler = Some(Scheduler { stop_tx, thread });
        Ok(())
    }

    /// Halt future ticks and wait for the scheduler to exit. A tick already in
    /// progress completes first. Calling this while stopped does nothing.
    pub fn stop(&mut self) {
        let Some(scheduler) = self.scheduler.take() else {
            return;
        };

        // The scheduler also exits on disconnect, so a full channel is fine
        let _ = scheduler.stop_tx.try_send(());
        drop(scheduler.stop_tx);

        if scheduler.thread.join().is_err() {
            error!("scheduler thread panicked");
        }
        info!("simulation loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.scheduler
            .as_ref()
            .is_some_and(|scheduler| !scheduler.thread.is_finished())
    }

    // Join a scheduler thread that exited on its own
    fn reap_dead_scheduler(&mut self) {
        let finished = self
            .scheduler
            .as_ref()
            .is_some_and(|scheduler| scheduler.thread.is_finished());
        if !finished {
            return;
        }

        if let Some(scheduler) = self.scheduler.take() {
            if scheduler.thread.join().is_err() {
                error!("scheduler thread panicked; simulation loop is stopped");
            } else {
                warn!("scheduler thread exited without a stop request");
            }
        }
    }

    /// Run one tick on the calling thread.
    pub fn tick(&self) -> TickReport {
        lock(&self.shared).tick()
    }

    /// Takes effect from the next tick.
    pub fn set_coefficient(&self, kind: Coefficient, value: f32) {
        lock(&self.shared).set_coefficient(kind, value);
    }

    pub fn update_config<F>(&self, update: F)
    where
        F: FnOnce(&mut SimulationConfig),
    {
        update(lock(&self.shared).config_mut());
    }

    /// Register a callback invoked synchronously at the end of every tick.
    pub fn on_tick<F>(&self, callback: F)
    where
        F: FnMut(&[Boid]) + Send + 'static,
    {
        lock(&self.shared).subscribe(callback);
    }

    pub fn config(&self) -> SimulationConfig {
        lock(&self.shared).config().clone()
    }

    pub fn snapshot(&self) -> Vec<Boid> {
        lock(&self.shared).boids().to_vec()
    }

    pub fn debug_info(&self) -> DebugInfo {
        lock(&self.shared).debug_info()
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

// A panicking subscriber poisons the mutex; the state is still usable
fn lock(shared: &SharedSimulation) -> MutexGuard<'_, Simulation> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn run_scheduler(shared: SharedSimulation, interval: Duration, stop_rx: Receiver<()>) {
    let mut next_due = Instant::now() + interval;

    loop {
        let wait = next_due.saturating_duration_since(Instant::now());
        match stop_rx.recv_timeout(wait) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }

        let started = Instant::now();
        lock(&shared).tick();
        next_due = started + interval;
    }
}
