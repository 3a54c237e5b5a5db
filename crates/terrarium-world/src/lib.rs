//! Grid simulation substrate.
//!
//! This crate implements the 2D cell grid, its environment sources, and the
//! two-phase tick protocol that keeps per-cell transitions order-independent.

pub mod environment;
pub mod grid;
pub mod rule;
pub mod seeding;
pub mod simulation;
pub mod world;

pub use environment::{Gravity, Sun};
pub use grid::Grid;
pub use rule::{Neighborhood, Quiescent, Transition, TransitionRule};
pub use seeding::{seed_strata, Band};
pub use simulation::{Census, Simulation, SimulationResult};
pub use world::World;
