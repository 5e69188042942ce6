/*
 * Physics Module
 *
 * This module handles the physics of the flocking behavior: the force
 * model (separation, cohesion, alignment) and the integrator that turns
 * forces into new kinematics.
 *
 * Neighbor search is brute force. For each boid every other boid falls in
 * exactly one band:
 * - closer than separation_distance: pushes the boid away
 * - closer than neighbor_distance: pulls it in and aligns velocities
 * - anything further is ignored
 *
 * Raw contributions are summed without distance weighting, then each sum
 * is rescaled to its coefficient. Coefficients are therefore fixed force
 * budgets independent of how many neighbors contributed.
 */

use crate::boid::Boid;
use crate::flock::Flock;
use crate::params::{SimulationConfig, UpdateMode};
use crate::vector::{Vec2, VectorExt};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockForces {
    pub cohesion: Vec2,
    pub alignment: Vec2,
    pub separation: Vec2,
}

impl FlockForces {
    pub fn total(&self) -> Vec2 {
        self.cohesion + self.alignment + self.separation
    }

    // Rescale each force to its configured magnitude
    pub fn normalized(self, config: &SimulationConfig) -> Self {
        Self {
            cohesion: self.cohesion.normalize_to(config.cohesion_coeff),
            alignment: self.alignment.normalize_to(config.alignment_coeff),
            separation: self.separation.normalize_to(config.separation_coeff),
        }
    }
}

// Sum the raw contributions of every other boid on boids[index]
pub fn accumulate_forces(boids: &[Boid], index: usize, config: &SimulationConfig) -> FlockForces {
    let boid = &boids[index];
    let mut forces = FlockForces::default();

    for (j, other) in boids.iter().enumerate() {
        if j == index {
            continue;
        }

        let separation = other.position - boid.position;
        let distance = separation.length();

        if distance < config.separation_distance {
            forces.separation -= separation;
        } else if distance < config.neighbor_distance {
            forces.cohesion += separation;
            forces.alignment += other.velocity - boid.velocity;
        }
    }

    forces
}

pub fn compute_forces(boids: &[Boid], index: usize, config: &SimulationConfig) -> FlockForces {
    accumulate_forces(boids, index, config).normalized(config)
}

// Apply forces to a boid, returning its next state
pub fn integrate(boid: &Boid, forces: &FlockForces, config: &SimulationConfig) -> Boid {
    let acceleration = forces.total().truncate_to(config.max_acceleration);
    let velocity = (boid.velocity + acceleration).truncate_to(config.max_velocity);

    Boid {
        position: boid.position + velocity,
        velocity,
        acceleration,
    }
}

// Run the force and integration phases over the whole flock
pub fn update_boids(flock: &mut Flock, config: &SimulationConfig) {
    match config.update_mode {
        UpdateMode::Snapshot => update_from_snapshot(flock, config),
        UpdateMode::Sequential => update_in_place(flock, config),
    }
}

fn update_from_snapshot(flock: &mut Flock, config: &SimulationConfig) {
    let snapshot = flock.boids().to_vec();

    for (i, boid) in flock.boids_mut().iter_mut().enumerate() {
        let forces = compute_forces(&snapshot, i, config);
        *boid = integrate(&snapshot[i], &forces, config);
    }
}

fn update_in_place(flock: &mut Flock, config: &SimulationConfig) {
    let boids = flock.boids_mut();

    for i in 0..boids.len() {
        let forces = compute_forces(boids, i, config);
        boids[i] = integrate(&boids[i], &forces, config);
    }
}
