/*
 * Simulation Module
 *
 * Single-threaded simulation state: the flock, its config, the RNG that
 * drives spawning, and the tick subscribers. One call to `tick` runs the
 * whole pipeline:
 * 1. Lifecycle: drop escaped boids, spawn one at the left edge
 * 2. Forces and integration over the post-lifecycle flock
 * 3. Publish the resulting flock to every subscriber
 */

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::boid::Boid;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::{Coefficient, SimulationConfig};
use crate::physics;

/// Receives a read-only view of the flock at the end of every tick.
pub type TickCallback = Box<dyn FnMut(&[Boid]) + Send>;

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub removed: usize,
    pub population: usize,
}

pub struct Simulation {
    flock: Flock,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    subscribers: Vec<TickCallback>,
    debug_info: DebugInfo,
}

impl Simulation {
    pub fn new(config: SimulationConfig, initial_population: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut flock = Flock::new();
        flock.initialize(initial_population, &config, &mut rng);

        let debug_info = DebugInfo {
            population: flock.len(),
            mean_speed: flock.mean_speed(),
            ..DebugInfo::default()
        };

        Self {
            flock,
            config,
            rng,
            subscribers: Vec::new(),
            debug_info,
        }
    }

    // Start from an explicit flock instead of a random one
    pub fn with_flock(config: SimulationConfig, flock: Flock, seed: u64) -> Self {
        let debug_info = DebugInfo {
            population: flock.len(),
            mean_speed: flock.mean_speed(),
            ..DebugInfo::default()
        };

        Self {
            flock,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            subscribers: Vec::new(),
            debug_info,
        }
    }

    pub fn tick(&mut self) -> TickReport {
        let started = Instant::now();

        let removed = self.flock.apply_lifecycle(&self.config, &mut self.rng);
        physics::update_boids(&mut self.flock, &self.config);

        let tick = self.debug_info.ticks + 1;
        self.debug_info = DebugInfo {
            ticks: tick,
            population: self.flock.len(),
            removed_last_tick: removed,
            spawned_last_tick: 1,
            mean_speed: self.flock.mean_speed(),
            last_tick_duration: started.elapsed(),
        };

        debug!(
            tick,
            population = self.flock.len(),
            removed,
            "tick complete"
        );

        let boids = self.flock.boids();
        for subscriber in &mut self.subscribers {
            subscriber(boids);
        }

        TickReport {
            tick,
            removed,
            population: self.flock.len(),
        }
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&[Boid]) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn set_coefficient(&mut self, kind: Coefficient, value: f32) {
        self.config.set_coefficient(kind, value);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    pub fn boids(&self) -> &[Boid] {
        self.flock.boids()
    }

    pub fn debug_info(&self) -> DebugInfo {
        self.debug_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec2;
    use std::sync::{Arc, Mutex};

    #[test]
    fn empty_simulation_ticks_to_one_boid_at_left_edge() {
        let config = SimulationConfig {
            max_velocity: 0.0,
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(config, 0, 9);
        let report = sim.tick();
        assert_eq!(report.population, 1);
        assert_eq!(report.removed, 0);
        assert_eq!(sim.boids()[0].position.x, 0.0);
    }

    #[test]
    fn escaped_boid_is_gone_after_next_tick() {
        let escaped = Boid::new(Vec2::new(-1.0, 250.0), Vec2::ZERO);
        let inside = Boid::new(Vec2::new(480.0, 250.0), Vec2::new(1.0, 0.0));
        let flock = Flock::from_boids(vec![escaped, inside]);
        let mut sim = Simulation::with_flock(SimulationConfig::default(), flock, 1);

        let report = sim.tick();

        assert_eq!(report.removed, 1);
        assert_eq!(report.population, 2);
        assert!(sim.boids().iter().all(|b| b.position.x >= 0.0));
    }

    #[test]
    fn subscribers_see_the_post_tick_flock() {
        let mut sim = Simulation::new(SimulationConfig::default(), 20, 5);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        sim.subscribe(move |boids| sink.lock().unwrap().push(boids.to_vec()));

        sim.tick();
        sim.tick();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].as_slice(), sim.boids());
    }

    #[test]
    fn coefficient_changes_apply_on_next_tick() {
        let a = Boid::new(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let b = Boid::new(Vec2::new(110.0, 100.0), Vec2::ZERO);
        let mut sim =
            Simulation::with_flock(SimulationConfig::default(), Flock::from_boids(vec![a, b]), 2);

        sim.set_coefficient(Coefficient::Separation, 0.0);
        sim.tick();
        // Without separation the pair has no reason to move apart
        assert_eq!(sim.boids()[0].acceleration, Vec2::ZERO);
        assert_eq!(sim.config().separation_coeff, 0.0);
    }

    #[test]
    fn debug_info_tracks_ticks() {
        let mut sim = Simulation::new(SimulationConfig::default(), 10, 3);
        for _ in 0..5 {
            sim.tick();
        }
        let info = sim.debug_info();
        assert_eq!(info.ticks, 5);
        assert_eq!(info.population, sim.boids().len());
        assert_eq!(info.spawned_last_tick, 1);
    }

    #[test]
    fn same_seed_gives_same_flock() {
        let mut first = Simulation::new(SimulationConfig::default(), 50, 1234);
        let mut second = Simulation::new(SimulationConfig::default(), 50, 1234);
        for _ in 0..10 {
            first.tick();
            second.tick();
        }
        assert_eq!(first.boids(), second.boids());
    }
}
