/*
 * Boid Module
 *
 * This module defines the Boid struct: a point agent with position,
 * velocity and acceleration. Boids carry no identity; the force model only
 * ever looks at their kinematic state.
 *
 * Initial velocities are biased to the right: x is uniform in
 * [0, max_velocity) and y is normally distributed around zero with a
 * standard deviation of a quarter of max_velocity.
 */

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::params::SimulationConfig;
use crate::vector::{Vec2, VectorExt};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
        }
    }

    // Boid placed anywhere inside the bounds, used to seed the pool
    pub fn random<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
        let x = uniform(rng, 0.0, config.bounds.width);
        let y = uniform(rng, 0.0, config.bounds.height);
        Self::new(Vec2::new(x, y), random_velocity(config, rng))
    }

    // Boid entering from the left edge, used by the per-tick spawn
    pub fn spawned<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
        let y = uniform(rng, 0.0, config.bounds.height);
        Self::new(Vec2::new(0.0, y), random_velocity(config, rng))
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn is_within(&self, config: &SimulationConfig) -> bool {
        config.bounds.contains(self.position.x, self.position.y)
    }

    // Endpoints of a segment of `length` centered on the boid, pointing
    // along its velocity. A stationary boid collapses to a point.
    pub fn segment(&self, length: f32) -> (Vec2, Vec2) {
        let half = self.velocity.normalize_to(length) / 2.0;
        (self.position - half, self.position + half)
    }
}

fn random_velocity<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Vec2 {
    let vx = uniform(rng, 0.0, config.max_velocity);
    let vy = normal(rng, 0.0, config.max_velocity / 4.0);
    Vec2::new(vx, vy)
}

// Sample [lo, hi). Degenerate or inverted ranges are fine, unlike gen_range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.gen::<f32>()
}

fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
    let z: f32 = rng.sample(StandardNormal);
    mean + std_dev * z
}
