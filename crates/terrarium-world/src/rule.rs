//! The transition-rule contract and the pre-tick neighborhood view.

use crate::environment::{Gravity, Sun};
use crate::grid::Grid;
use terrarium_core::{Cell, Direction};

/// Read-only view of one occupied address and its neighbors.
///
/// The view always reads the pre-tick grid, so a rule evaluated through it
/// never observes another cell's same-tick next value.
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    x: i32,
    y: i32,
    center: &'a Cell,
}

impl<'a> Neighborhood<'a> {
    /// View centered on `(x, y)`; `None` if the address is empty or out of
    /// bounds.
    pub fn at(grid: &'a Grid, x: i32, y: i32) -> Option<Self> {
        let center = grid.get(x, y).ok()??;
        Some(Self { grid, x, y, center })
    }

    /// The cell under evaluation
    pub fn center(&self) -> &Cell {
        self.center
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Neighbor cell in `direction`; empty addresses and addresses beyond
    /// the world edge both read as `None`.
    pub fn neighbor(&self, direction: Direction) -> Option<&'a Cell> {
        let (dx, dy) = direction.to_delta();
        self.grid.get(self.x + dx, self.y + dy).ok().flatten()
    }

    /// Whether the address in `direction` lies inside the grid
    pub fn in_bounds(&self, direction: Direction) -> bool {
        let (dx, dy) = direction.to_delta();
        self.grid.get(self.x + dx, self.y + dy).is_ok()
    }

    /// All eight neighbor slots in heading order
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, Option<&'a Cell>)> + '_ {
        Direction::all()
            .into_iter()
            .map(move |dir| (dir, self.neighbor(dir)))
    }
}

/// Outcome of evaluating the transition rule at one occupied address
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The occupant carries over unchanged
    Keep,
    /// The occupant is replaced by a new cell
    Become(Cell),
    /// The address becomes empty
    Vanish,
}

/// A per-cell transition rule.
///
/// The rule must be a pure function of its arguments: the pre-tick
/// neighborhood view, the environment sources, and the current time. The
/// step driver evaluates every occupied address against the same pre-tick
/// grid and only then commits the outcomes, so rule results cannot depend on
/// visitation order.
pub trait TransitionRule {
    fn transition(
        &self,
        view: &Neighborhood<'_>,
        sun: &Sun,
        gravity: &Gravity,
        time: u64,
    ) -> Transition;
}

/// Rule that keeps every cell as it is.
///
/// Stands in until a concrete physics is plugged in; useful for exercising
/// the step protocol on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiescent;

impl TransitionRule for Quiescent {
    fn transition(&self, _: &Neighborhood<'_>, _: &Sun, _: &Gravity, _: u64) -> Transition {
        Transition::Keep
    }
}
