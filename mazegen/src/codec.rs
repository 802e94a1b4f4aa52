//! Packed cell keys, the entries of the carving stack.

use std::fmt::Display;

use crate::grid::{Direction, Point};

/// Largest number of cells that fit along either axis of a key.
pub const MAX_CELLS_PER_AXIS: usize = 1 << 8;

/// Largest carve distance that fits in a key.
pub const MAX_DISTANCE: usize = u16::MAX as usize;

/// A maze cell together with its carve distance from the start cell.
///
/// Bits 0..8 hold the cell column, bits 8..16 the cell row and bits 16..32 the distance. Callers
/// keep coordinates below [`MAX_CELLS_PER_AXIS`]; [`CellKey::step`] refuses to leave that range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellKey(u32);

impl CellKey {
    pub fn pack(x: usize, y: usize, distance: usize) -> Self {
        debug_assert!(
            x < MAX_CELLS_PER_AXIS && y < MAX_CELLS_PER_AXIS,
            "cell ({x}, {y}) does not fit in a key"
        );
        debug_assert!(distance <= MAX_DISTANCE, "distance {distance} does not fit in a key");

        Self((x as u32 & 0xff) | ((y as u32 & 0xff) << 8) | ((distance as u32 & 0xffff) << 16))
    }

    pub fn x(self) -> usize {
        (self.0 & 0xff) as usize
    }

    pub fn y(self) -> usize {
        ((self.0 >> 8) & 0xff) as usize
    }

    pub fn distance(self) -> usize {
        (self.0 >> 16) as usize
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// The raster pixel the cell is drawn at.
    pub fn pixel(self) -> Point {
        Point {
            x: self.x() << 1,
            y: self.y() << 1,
        }
    }

    /// The neighboring cell one step away in `direction`, one step further from the start.
    /// Returns `None` when the neighbor would fall outside the key's coordinate range.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x().checked_add_signed(dx)?;
        let y = self.y().checked_add_signed(dy)?;

        if x >= MAX_CELLS_PER_AXIS || y >= MAX_CELLS_PER_AXIS {
            return None;
        }

        Some(Self::pack(x, y, self.distance() + 1))
    }
}

impl Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})@{}", self.x(), self.y(), self.distance())
    }
}
