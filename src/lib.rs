/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure of the flocking core. The core is
 * headless; the nannou viewer modules are only built with the `gui` feature.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use debug::DebugInfo;
pub use error::{ConfigError, LoopError};
pub use flock::Flock;
pub use handle::SimulationHandle;
pub use params::{Bounds, Coefficient, SimulationConfig, UpdateMode};
pub use physics::FlockForces;
pub use simulation::{Simulation, TickCallback, TickReport};
pub use vector::{Vec2, VectorExt};

// Define modules
pub mod boid;
pub mod debug;
pub mod error;
pub mod flock;
pub mod handle;
pub mod palette;
pub mod params;
pub mod physics;
pub mod simulation;
pub mod vector;

#[cfg(feature = "gui")]
pub mod renderer;
#[cfg(feature = "gui")]
pub mod ui;

// Constants
pub const SEGMENT_LENGTH: f32 = 20.0;
pub const SEGMENT_WEIGHT: f32 = 2.0;
