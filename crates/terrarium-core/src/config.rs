//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Sun parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunConfig {
    /// Distance from the world center, in cells
    pub distance: f64,
    /// Position in the movement cycle, 0..1
    pub position: f64,
    /// Sunlight intensity
    pub intensity: f64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            distance: 1024.0,
            position: 0.0,
            intensity: 256.0,
        }
    }
}

/// Gravity source parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravityConfig {
    /// Source coordinates
    pub origin: (i32, i32),
    /// Force strength
    pub force: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            force: 1.0,
        }
    }
}

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Length of the square world side, in cells
    pub size: i32,
    /// Sun parameters
    pub sun: SunConfig,
    /// Gravity parameters
    pub gravity: GravityConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 128,
            sun: SunConfig::default(),
            gravity: GravityConfig::default(),
        }
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of ticks to run
    pub num_ticks: u64,
    /// Random seed for reproducible seeding
    pub seed: u64,
    /// World configuration
    pub world: WorldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_ticks: 10_000,
            seed: 0,
            world: WorldConfig::default(),
        }
    }
}
