/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationConfig struct holding every tunable the
 * flocking rules read. The config is read fresh at the start of each tick,
 * so a controller may change any field between ticks. Values are not
 * validated: a negative coefficient simply reverses its force.
 */

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Rectangle the boids live in, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Strict containment: a point on the edge is outside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > 0.0 && x < self.width && y > 0.0 && y < self.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(960.0, 500.0)
    }
}

/// How integrated state is committed within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Every boid reads the pool as it stood when the force phase began.
    #[default]
    Snapshot,
    /// Boids are updated in place, in pool order; later boids observe
    /// earlier boids' new state. Order dependent.
    Sequential,
}

// The three steering forces a controller can tune
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coefficient {
    Cohesion,
    Alignment,
    Separation,
}

impl Coefficient {
    pub const ALL: [Coefficient; 3] = [
        Coefficient::Cohesion,
        Coefficient::Alignment,
        Coefficient::Separation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Coefficient::Cohesion => "Cohesion Force",
            Coefficient::Alignment => "Alignment Force",
            Coefficient::Separation => "Separation Force",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub cohesion_coeff: f32,
    pub alignment_coeff: f32,
    pub separation_coeff: f32,
    pub separation_distance: f32,
    pub neighbor_distance: f32,
    pub max_velocity: f32,
    pub max_acceleration: f32,
    pub bounds: Bounds,
    pub update_mode: UpdateMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cohesion_coeff: 0.05,
            alignment_coeff: 0.05,
            separation_coeff: 0.05,
            separation_distance: 30.0,
            neighbor_distance: 60.0,
            max_velocity: 2.0,
            max_acceleration: 0.02,
            bounds: Bounds::default(),
            update_mode: UpdateMode::Snapshot,
        }
    }
}

impl SimulationConfig {
    pub const DEFAULT_POPULATION: usize = 500;
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 20;

    pub fn coefficient(&self, kind: Coefficient) -> f32 {
        match kind {
            Coefficient::Cohesion => self.cohesion_coeff,
            Coefficient::Alignment => self.alignment_coeff,
            Coefficient::Separation => self.separation_coeff,
        }
    }

    pub fn set_coefficient(&mut self, kind: Coefficient, value: f32) {
        match kind {
            Coefficient::Cohesion => self.cohesion_coeff = value,
            Coefficient::Alignment => self.alignment_coeff = value,
            Coefficient::Separation => self.separation_coeff = value,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    // Get parameter ranges for UI sliders
    pub fn coefficient_range() -> RangeInclusive<f32> {
        0.0..=0.1
    }

    pub fn coefficient_step() -> f64 {
        0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_edges_count_as_outside() {
        let bounds = Bounds::new(960.0, 500.0);
        assert!(bounds.contains(1.0, 1.0));
        assert!(!bounds.contains(0.0, 250.0));
        assert!(!bounds.contains(960.0, 250.0));
        assert!(!bounds.contains(480.0, 0.0));
        assert!(!bounds.contains(480.0, 500.0));
        assert!(!bounds.contains(-1.0, 250.0));
    }

    #[test]
    fn set_coefficient_touches_only_its_field() {
        let mut config = SimulationConfig::default();
        config.set_coefficient(Coefficient::Alignment, -0.3);
        assert_eq!(config.alignment_coeff, -0.3);
        assert_eq!(config.coefficient(Coefficient::Alignment), -0.3);
        assert_eq!(config.cohesion_coeff, 0.05);
        assert_eq!(config.separation_coeff, 0.05);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "cohesion_coeff": 0.08, "bounds": { "width": 400.0, "height": 300.0 }, "update_mode": "sequential" }"#,
        )
        .unwrap();
        assert_eq!(config.cohesion_coeff, 0.08);
        assert_eq!(config.bounds, Bounds::new(400.0, 300.0));
        assert_eq!(config.update_mode, UpdateMode::Sequential);
        assert_eq!(config.neighbor_distance, 60.0);
        assert_eq!(config.max_acceleration, 0.02);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SimulationConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
