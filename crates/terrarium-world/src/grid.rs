//! 2D grid of cells.

use serde::{Deserialize, Serialize};
use terrarium_core::{Cell, Error, Result};

/// A bounded two-dimensional cell container.
///
/// Addresses range over `[0, width) x [0, height)`; anything outside is an
/// invalid address, not a legal empty cell. The grid owns its cells
/// exclusively. Storage is a flat vector indexed `y * width + x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    /// Creates an empty grid; both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(Error::InvalidWorldSize { size: width });
        }
        if height <= 0 {
            return Err(Error::InvalidWorldSize { size: height });
        }
        let size = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![None; size],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Cell at `(x, y)`, or `None` for an empty address
    pub fn get(&self, x: i32, y: i32) -> Result<Option<&Cell>> {
        let index = self.checked_index(x, y)?;
        Ok(self.cells[index].as_ref())
    }

    /// Installs `cell` at `(x, y)` and returns the displaced occupant, if any.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<Cell>) -> Result<Option<Cell>> {
        let index = self.checked_index(x, y)?;
        Ok(std::mem::replace(&mut self.cells[index], cell))
    }

    /// In-bounds write used where coordinates are already validated.
    pub(crate) fn place(&mut self, x: i32, y: i32, cell: Option<Cell>) {
        let index = y as usize * self.width as usize + x as usize;
        self.cells[index] = cell;
    }

    /// Visits every address in the rectangle spanned by two corners.
    ///
    /// The corners may come in either order and may lie outside the grid;
    /// both are floored, their axis-aligned bounding box is clipped to the
    /// grid, and `visitor(grid, x, y)` runs once per remaining address in
    /// column-major order (x ascending, then y ascending). A fully clipped
    /// rectangle visits nothing.
    pub fn for_each_in_rect<F>(&mut self, corner_a: (f64, f64), corner_b: (f64, f64), mut visitor: F)
    where
        F: FnMut(&mut Grid, i32, i32),
    {
        let (ax, ay) = (corner_a.0.floor(), corner_a.1.floor());
        let (bx, by) = (corner_b.0.floor(), corner_b.1.floor());

        // `as` saturates, so arbitrarily large corners clip cleanly.
        let x_lo = (ax.min(bx) as i64).max(0);
        let y_lo = (ay.min(by) as i64).max(0);
        let x_hi = (ax.max(bx) as i64).min(self.width as i64 - 1);
        let y_hi = (ay.max(by) as i64).min(self.height as i64 - 1);

        for x in x_lo..=x_hi {
            for y in y_lo..=y_hi {
                visitor(self, x as i32, y as i32);
            }
        }
    }

    /// Visitor that installs a freshly constructed cell at every address.
    ///
    /// The factory runs once per address, so each cell is independent and
    /// per-cell randomized defaults differ. Any prior occupant is displaced
    /// and dropped.
    pub fn fill_with<F>(mut factory: F) -> impl FnMut(&mut Grid, i32, i32)
    where
        F: FnMut() -> Cell,
    {
        move |grid, x, y| grid.place(x, y, Some(factory()))
    }

    /// Visitor that installs an independent copy of `template` at every
    /// address.
    pub fn fill_from(template: Cell) -> impl FnMut(&mut Grid, i32, i32) {
        move |grid, x, y| grid.place(x, y, Some(template.clone()))
    }

    /// Occupied addresses with their cells, in a fixed deterministic order
    pub fn iter_occupied(&self) -> impl Iterator<Item = (i32, i32, &Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref().map(|cell| {
                let x = (i % self.width as usize) as i32;
                let y = (i / self.width as usize) as i32;
                (x, y, cell)
            })
        })
    }

    /// Number of occupied addresses
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }
}
