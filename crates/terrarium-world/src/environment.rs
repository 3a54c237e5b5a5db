//! Ambient environment sources read by transition rules.

use serde::{Deserialize, Serialize};
use terrarium_core::{GravityConfig, SunConfig};

/// The rotating light and heat source.
///
/// Carries parameters only; how rays reach cells is up to the transition
/// rule consuming it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    distance: f64,
    position: f64,
    intensity: f64,
}

impl Sun {
    /// `position` is cyclical and wraps into `[0, 1)`.
    pub fn new(distance: f64, position: f64, intensity: f64) -> Self {
        Self {
            distance,
            position: position.rem_euclid(1.0),
            intensity,
        }
    }

    pub fn from_config(config: &SunConfig) -> Self {
        Self::new(config.distance, config.position, config.intensity)
    }

    /// Distance from the world center, in cells
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Position in the movement cycle, 0..1
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

impl Default for Sun {
    fn default() -> Self {
        Self::from_config(&SunConfig::default())
    }
}

/// A source of gravity.
///
/// Inert configuration until a transition rule models its force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gravity {
    origin: (i32, i32),
    force: f64,
}

impl Gravity {
    pub fn new(origin: (i32, i32), force: f64) -> Self {
        Self { origin, force }
    }

    pub fn from_config(config: &GravityConfig) -> Self {
        Self::new(config.origin, config.force)
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn force(&self) -> f64 {
        self.force
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::from_config(&GravityConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_defaults() {
        let sun = Sun::default();
        assert_eq!(sun.distance(), 1024.0);
        assert_eq!(sun.position(), 0.0);
        assert_eq!(sun.intensity(), 256.0);
    }

    #[test]
    fn test_sun_position_wraps() {
        assert_eq!(Sun::new(1024.0, 1.25, 256.0).position(), 0.25);
        assert_eq!(Sun::new(1024.0, -0.25, 256.0).position(), 0.75);
        assert_eq!(Sun::new(1024.0, 1.0, 256.0).position(), 0.0);
    }

    #[test]
    fn test_gravity_defaults() {
        let gravity = Gravity::default();
        assert_eq!(gravity.origin(), (0, 0));
        assert_eq!(gravity.force(), 1.0);
    }
}
