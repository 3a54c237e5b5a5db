//! The cell record and its material presets.

use crate::error::{Error, Result};
use crate::types::{CellType, MatterState, Velocity};
use serde::{Deserialize, Serialize};

/// One grid occupant's physical state.
///
/// A cell is an immutable-shape record: the simulation never mutates one in
/// place but produces a replacement and swaps it into the grid. Construction
/// goes through [`Cell::new`] or a material preset, so an illegal
/// material/state/integrity combination is never representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    matter_state: MatterState,
    cell_type: CellType,
    mass: u32,
    velocity: Velocity,
    temperature: u32,
    integrity: Option<u8>,
}

impl Cell {
    /// Creates a cell, validating the material/state/integrity coupling.
    ///
    /// Solids carry a defined integrity; liquids, gases, and absent matter
    /// never do. The material fixes the legal state of matter.
    pub fn new(
        cell_type: CellType,
        matter_state: MatterState,
        mass: u32,
        velocity: Velocity,
        temperature: u32,
        integrity: Option<u8>,
    ) -> Result<Self> {
        let integrity_ok = match matter_state {
            MatterState::Solid => integrity.is_some(),
            MatterState::Absent | MatterState::Liquid | MatterState::Gas => integrity.is_none(),
        };
        if matter_state != cell_type.required_state() || !integrity_ok {
            return Err(Error::InvalidCellConfiguration {
                cell_type,
                matter_state,
                integrity,
            });
        }

        Ok(Self {
            matter_state,
            cell_type,
            mass,
            velocity,
            temperature,
            integrity,
        })
    }

    fn solid(cell_type: CellType, velocity: Velocity, temperature: u32, integrity: u8) -> Self {
        Self {
            matter_state: MatterState::Solid,
            cell_type,
            mass: cell_type.default_mass(),
            velocity,
            temperature,
            integrity: Some(integrity),
        }
    }

    fn fluid(cell_type: CellType, velocity: Velocity, temperature: u32) -> Self {
        Self {
            matter_state: cell_type.required_state(),
            cell_type,
            mass: cell_type.default_mass(),
            velocity,
            temperature,
            integrity: None,
        }
    }

    /// Absent matter occupying an address
    pub fn void() -> Self {
        Self {
            matter_state: MatterState::Absent,
            cell_type: CellType::Void,
            mass: 0,
            velocity: Velocity::ZERO,
            temperature: 0,
            integrity: None,
        }
    }

    pub fn rock(velocity: Velocity, temperature: u32, integrity: u8) -> Self {
        Self::solid(CellType::Rock, velocity, temperature, integrity)
    }

    pub fn soil(velocity: Velocity, temperature: u32, integrity: u8) -> Self {
        Self::solid(CellType::Soil, velocity, temperature, integrity)
    }

    pub fn quartz(velocity: Velocity, temperature: u32, integrity: u8) -> Self {
        Self::solid(CellType::Quartz, velocity, temperature, integrity)
    }

    pub fn algae(velocity: Velocity, temperature: u32, integrity: u8) -> Self {
        Self::solid(CellType::Algae, velocity, temperature, integrity)
    }

    pub fn water(velocity: Velocity, temperature: u32) -> Self {
        Self::fluid(CellType::Water, velocity, temperature)
    }

    pub fn nitrogen(velocity: Velocity, temperature: u32) -> Self {
        Self::fluid(CellType::Nitrogen, velocity, temperature)
    }

    pub fn oxygen(velocity: Velocity, temperature: u32) -> Self {
        Self::fluid(CellType::Oxygen, velocity, temperature)
    }

    pub fn co2(velocity: Velocity, temperature: u32) -> Self {
        Self::fluid(CellType::Co2, velocity, temperature)
    }

    pub fn matter_state(&self) -> MatterState {
        self.matter_state
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn mass(&self) -> u32 {
        self.mass
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn temperature(&self) -> u32 {
        self.temperature
    }

    /// Structural integrity, defined only for solids
    pub fn integrity(&self) -> Option<u8> {
        self.integrity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_presets() {
        let rock = Cell::rock(Velocity::ZERO, 20, 255);
        assert_eq!(rock.matter_state(), MatterState::Solid);
        assert_eq!(rock.cell_type(), CellType::Rock);
        assert_eq!(rock.mass(), 2);
        assert_eq!(rock.temperature(), 20);
        assert_eq!(rock.integrity(), Some(255));

        let water = Cell::water(Velocity::new(1, Some(Direction::South)), 10);
        assert_eq!(water.matter_state(), MatterState::Liquid);
        assert_eq!(water.mass(), 1);
        assert_eq!(water.integrity(), None);

        let co2 = Cell::co2(Velocity::ZERO, 0);
        assert_eq!(co2.matter_state(), MatterState::Gas);

        let algae = Cell::algae(Velocity::ZERO, 15, 200);
        assert_eq!(algae.matter_state(), MatterState::Solid);
        assert!(algae.cell_type().is_life());
        assert_eq!(algae.integrity(), Some(200));

        let void = Cell::void();
        assert_eq!(void.matter_state(), MatterState::Absent);
        assert_eq!(void.mass(), 0);
        assert_eq!(void.integrity(), None);
    }

    #[test]
    fn test_checked_constructor_accepts_valid() {
        let cell = Cell::new(
            CellType::Soil,
            MatterState::Solid,
            5,
            Velocity::ZERO,
            12,
            Some(100),
        )
        .unwrap();
        assert_eq!(cell.mass(), 5);
        assert_eq!(cell.integrity(), Some(100));
    }

    #[test]
    fn test_liquid_with_integrity_rejected() {
        let err = Cell::new(
            CellType::Water,
            MatterState::Liquid,
            1,
            Velocity::ZERO,
            0,
            Some(255),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCellConfiguration {
                cell_type: CellType::Water,
                matter_state: MatterState::Liquid,
                integrity: Some(255),
            }
        );
    }

    #[test]
    fn test_solid_without_integrity_rejected() {
        assert!(matches!(
            Cell::new(
                CellType::Rock,
                MatterState::Solid,
                2,
                Velocity::ZERO,
                0,
                None
            ),
            Err(Error::InvalidCellConfiguration { .. })
        ));
    }

    #[test]
    fn test_state_material_mismatch_rejected() {
        assert!(matches!(
            Cell::new(
                CellType::Water,
                MatterState::Gas,
                1,
                Velocity::ZERO,
                0,
                None
            ),
            Err(Error::InvalidCellConfiguration { .. })
        ));
        assert!(matches!(
            Cell::new(
                CellType::Nitrogen,
                MatterState::Solid,
                1,
                Velocity::ZERO,
                0,
                Some(10)
            ),
            Err(Error::InvalidCellConfiguration { .. })
        ));
    }

    #[test]
    fn test_cell_serialization() {
        let cell = Cell::quartz(Velocity::new(2, Some(Direction::North)), 30, 180);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
