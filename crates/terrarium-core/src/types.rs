//! Shared value types: directions, velocity, and the matter/material taxonomy.

use serde::{Deserialize, Serialize};

/// State of matter a cell can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatterState {
    Absent,
    Solid,
    Liquid,
    Gas,
}

/// Material a cell is made of
///
/// Each material has exactly one legal state of matter and a default mass,
/// used by the named cell constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Void,
    Rock,
    Soil,
    Quartz,
    Water,
    Nitrogen,
    Oxygen,
    Co2,
    Algae,
}

impl CellType {
    /// The only state of matter this material may occupy
    pub fn required_state(&self) -> MatterState {
        match self {
            CellType::Void => MatterState::Absent,
            CellType::Rock | CellType::Soil | CellType::Quartz | CellType::Algae => {
                MatterState::Solid
            }
            CellType::Water => MatterState::Liquid,
            CellType::Nitrogen | CellType::Oxygen | CellType::Co2 => MatterState::Gas,
        }
    }

    /// Default mass for cells of this material
    pub fn default_mass(&self) -> u32 {
        match self {
            CellType::Void => 0,
            CellType::Rock | CellType::Soil | CellType::Quartz => 2,
            CellType::Water
            | CellType::Nitrogen
            | CellType::Oxygen
            | CellType::Co2
            | CellType::Algae => 1,
        }
    }

    /// Whether this material is living matter
    pub fn is_life(&self) -> bool {
        matches!(self, CellType::Algae)
    }
}

/// One of the eight grid-neighbor directions, counterclockwise from East.
///
/// Headings 1..8 map onto these variants; heading 0 (stationary) has no
/// direction and is represented as `None` wherever a heading is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Coordinate delta for this direction (y grows downward)
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// All eight directions in heading order
    pub fn all() -> [Direction; 8] {
        [
            Direction::East,
            Direction::NorthEast,
            Direction::North,
            Direction::NorthWest,
            Direction::West,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
        ]
    }

    /// The four orthogonal directions
    pub fn orthogonal() -> [Direction; 4] {
        [
            Direction::East,
            Direction::North,
            Direction::West,
            Direction::South,
        ]
    }

    /// Heading number of this direction, 1..=8
    pub fn index(&self) -> u8 {
        match self {
            Direction::East => 1,
            Direction::NorthEast => 2,
            Direction::North => 3,
            Direction::NorthWest => 4,
            Direction::West => 5,
            Direction::SouthWest => 6,
            Direction::South => 7,
            Direction::SouthEast => 8,
        }
    }

    /// Direction for a heading number; `None` unless 1..=8
    pub fn from_index(index: u8) -> Option<Direction> {
        match index {
            1 => Some(Direction::East),
            2 => Some(Direction::NorthEast),
            3 => Some(Direction::North),
            4 => Some(Direction::NorthWest),
            5 => Some(Direction::West),
            6 => Some(Direction::SouthWest),
            7 => Some(Direction::South),
            8 => Some(Direction::SouthEast),
            _ => None,
        }
    }
}

/// Speed and direction of cell movement
///
/// A `heading` of `None` is the stationary heading 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Velocity {
    pub magnitude: u32,
    pub heading: Option<Direction>,
}

impl Velocity {
    /// The stationary velocity shared by cells at rest
    pub const ZERO: Velocity = Velocity {
        magnitude: 0,
        heading: None,
    };

    pub fn new(magnitude: u32, heading: Option<Direction>) -> Self {
        Self { magnitude, heading }
    }

    /// Heading number, 0 (stationary) or 1..=8
    pub fn heading_index(&self) -> u8 {
        self.heading.map_or(0, |d| d.index())
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::ZERO
    }
}
