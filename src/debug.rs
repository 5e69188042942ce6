/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct: per-tick statistics collected
 * by the simulation and displayed by the viewers.
 *
 * Includes metrics for:
 * - Ticks executed so far
 * - Current population
 * - Boids removed and spawned on the last tick
 * - Mean speed of the flock
 * - Wall-clock duration of the last tick
 */

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebugInfo {
    pub ticks: u64,
    pub population: usize,
    pub removed_last_tick: usize,
    pub spawned_last_tick: usize,
    pub mean_speed: f32,
    pub last_tick_duration: Duration,
}

impl DebugInfo {
    pub fn lines(&self) -> [String; 5] {
        [
            format!("Ticks: {}", self.ticks),
            format!("Boids: {}", self.population),
            format!(
                "Last tick: -{} / +{}",
                self.removed_last_tick, self.spawned_last_tick
            ),
            format!("Mean speed: {:.2}", self.mean_speed),
            format!(
                "Tick time: {:.2} ms",
                self.last_tick_duration.as_secs_f64() * 1000.0
            ),
        ]
    }
}
