//! Error types for the simulation.

use crate::types::{CellType, MatterState};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid cell configuration: {cell_type:?} as {matter_state:?} with integrity {integrity:?}")]
    InvalidCellConfiguration {
        cell_type: CellType,
        matter_state: MatterState,
        integrity: Option<u8>,
    },

    #[error("world size must be positive, got {size}")]
    InvalidWorldSize { size: i32 },
}
