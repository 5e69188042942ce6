/*
 * Flock Module
 *
 * The agent pool. Owns the ordered list of boids and applies the
 * population lifecycle at the start of every tick: boids that have left
 * the bounds are dropped, then exactly one new boid enters from the left
 * edge. An empty flock therefore always recovers to one boid.
 */

use rand::Rng;

use crate::boid::Boid;
use crate::params::SimulationConfig;

#[derive(Debug, Clone, Default)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    // Replace the pool with `n` boids scattered across the bounds
    pub fn initialize<R: Rng + ?Sized>(&mut self, n: usize, config: &SimulationConfig, rng: &mut R) {
        self.boids.clear();
        self.boids.reserve(n);
        for _ in 0..n {
            self.boids.push(Boid::random(config, rng));
        }
    }

    // Remove out-of-bounds boids, then append one spawned boid.
    // Returns how many boids were removed.
    pub fn apply_lifecycle<R: Rng + ?Sized>(&mut self, config: &SimulationConfig, rng: &mut R) -> usize {
        let before = self.boids.len();
        self.boids.retain(|boid| boid.is_within(config));
        let removed = before - self.boids.len();

        self.boids.push(Boid::spawned(config, rng));
        removed
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn mean_speed(&self) -> f32 {
        if self.boids.is_empty() {
            return 0.0;
        }
        self.boids.iter().map(Boid::speed).sum::<f32>() / self.boids.len() as f32
    }
}
