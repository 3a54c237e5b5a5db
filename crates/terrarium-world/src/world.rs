//! The world: one grid, its environment sources, and the simulation clock.

use crate::environment::{Gravity, Sun};
use crate::grid::Grid;
use crate::rule::{Neighborhood, Transition, TransitionRule};
use serde::{Deserialize, Serialize};
use terrarium_core::{Error, Result, WorldConfig};

/// A simulable universe: a square grid bound to a sun and a gravity source,
/// plus a monotonic tick counter.
///
/// The grid starts empty; initial population is the caller's job, through
/// [`Grid::for_each_in_rect`] and the fill visitors or the seeding helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    grid: Grid,
    sun: Sun,
    gravity: Gravity,
    time: u64,
}

impl World {
    /// Creates a `size x size` world with default environment sources.
    pub fn new(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(Error::InvalidWorldSize { size });
        }
        Ok(Self {
            grid: Grid::new(size, size)?,
            sun: Sun::default(),
            gravity: Gravity::default(),
            time: 0,
        })
    }

    /// Creates a world with environment sources taken from `config`.
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        if config.size <= 0 {
            return Err(Error::InvalidWorldSize { size: config.size });
        }
        Ok(Self {
            grid: Grid::new(config.size, config.size)?,
            sun: Sun::from_config(&config.sun),
            gravity: Gravity::from_config(&config.gravity),
            time: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for seeding and region fills between steps
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }

    /// Ticks elapsed since creation
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Advances the simulation by one tick.
    ///
    /// Runs in two phases. The model phase evaluates `rule` for every
    /// occupied address against the pre-tick grid, buffering the outcomes;
    /// no write reaches the grid until the scan is complete. The commit
    /// phase then applies the buffered outcomes and increments the clock.
    /// External readers only ever observe fully committed ticks.
    pub fn step<R: TransitionRule>(&mut self, rule: &R) {
        let mut pending: Vec<(i32, i32, Transition)> = Vec::new();

        for (x, y, _) in self.grid.iter_occupied() {
            if let Some(view) = Neighborhood::at(&self.grid, x, y) {
                match rule.transition(&view, &self.sun, &self.gravity, self.time) {
                    Transition::Keep => {}
                    outcome => pending.push((x, y, outcome)),
                }
            }
        }

        for (x, y, outcome) in pending {
            match outcome {
                Transition::Become(cell) => self.grid.place(x, y, Some(cell)),
                Transition::Vanish => self.grid.place(x, y, None),
                Transition::Keep => {}
            }
        }

        self.time += 1;
    }
}
