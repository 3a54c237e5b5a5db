//! Simulation run loop and aggregate grid metrics.

use crate::grid::Grid;
use crate::rule::TransitionRule;
use crate::world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use terrarium_core::{MatterState, Result, SimConfig};
use tracing::info;

/// Aggregate snapshot of the committed grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub occupied: usize,
    pub solids: usize,
    pub liquids: usize,
    pub gases: usize,
    pub total_mass: u64,
    pub mean_temperature: f64,
}

impl Census {
    pub fn of(grid: &Grid) -> Self {
        let mut occupied = 0usize;
        let mut solids = 0usize;
        let mut liquids = 0usize;
        let mut gases = 0usize;
        let mut total_mass = 0u64;
        let mut total_temperature = 0u64;

        for (_, _, cell) in grid.iter_occupied() {
            occupied += 1;
            match cell.matter_state() {
                MatterState::Solid => solids += 1,
                MatterState::Liquid => liquids += 1,
                MatterState::Gas => gases += 1,
                MatterState::Absent => {}
            }
            total_mass += u64::from(cell.mass());
            total_temperature += u64::from(cell.temperature());
        }

        let mean_temperature = if occupied > 0 {
            total_temperature as f64 / occupied as f64
        } else {
            0.0
        };

        Self {
            occupied,
            solids,
            liquids,
            gases,
            total_mass,
            mean_temperature,
        }
    }
}

/// Result of a completed simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_ticks: u64,
    pub final_census: Census,
}

/// Drives a world through a configured number of ticks under one rule.
///
/// Seeding happens between construction and [`Simulation::run`], through
/// [`Simulation::world_mut`] and [`Simulation::seeded_rng`].
pub struct Simulation<R: TransitionRule> {
    world: World,
    rule: R,
    config: SimConfig,
}

impl<R: TransitionRule> Simulation<R> {
    pub fn new(config: SimConfig, rule: R) -> Result<Self> {
        let world = World::from_config(&config.world)?;
        Ok(Self {
            world,
            rule,
            config,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Reproducible rng derived from the configured seed
    pub fn seeded_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.config.seed)
    }

    /// Runs the configured number of ticks and reports the outcome.
    pub fn run(&mut self) -> SimulationResult {
        info!(
            num_ticks = self.config.num_ticks,
            seed = self.config.seed,
            size = self.config.world.size,
            "starting simulation run"
        );

        for _ in 0..self.config.num_ticks {
            self.world.step(&self.rule);
            let tick = self.world.time();

            if tick % 1000 == 0 {
                info!(
                    tick,
                    occupied = self.world.grid().occupied_count(),
                    "simulation progress"
                );
            }

            if tick % 100 == 0 && tick > 0 {
                self.emit_census(tick);
            }
        }

        let final_census = Census::of(self.world.grid());
        info!(
            event = "run_summary",
            total_ticks = self.world.time(),
            occupied = final_census.occupied,
            total_mass = final_census.total_mass,
            mean_temperature = final_census.mean_temperature,
            "simulation run complete"
        );

        SimulationResult {
            total_ticks: self.world.time(),
            final_census,
        }
    }

    fn emit_census(&self, tick: u64) {
        let census = Census::of(self.world.grid());
        info!(
            event = "census",
            tick,
            occupied = census.occupied,
            solids = census.solids,
            liquids = census.liquids,
            gases = census.gases,
            total_mass = census.total_mass,
            mean_temperature = census.mean_temperature,
            "census snapshot"
        );
    }
}
