//! Randomized depth-first carving of a spanning tree over the cell grid.

use log::trace;

use crate::{
    codec::CellKey,
    grid::{Direction, PixelGrid, OPEN, VISITED},
    location::{CellBounds, Location},
    rng::MazeRng,
};

/// Where a carve started and the farthest cell it found that satisfies the target rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Carve {
    pub start: CellKey,
    pub end: CellKey,
}

/// Marks the pixel of every cell as open and unvisited.
pub(crate) fn open_cells(grid: &mut PixelGrid, bounds: &CellBounds) {
    for x in 0..bounds.cells_x() {
        for y in 0..bounds.cells_y() {
            grid.set(x << 1, y << 1, OPEN);
        }
    }
}

pub(crate) struct Carver {
    bounds: CellBounds,
    target: Location,
    stack: Vec<CellKey>,
    start: CellKey,
    end: CellKey,
    farthest: usize,
}

impl Carver {
    /// Starts a carve at `start`. Cells reached later are measured against `target`.
    pub fn new(grid: &mut PixelGrid, bounds: CellBounds, start: (usize, usize), target: Location) -> Self {
        let start = CellKey::pack(start.0, start.1, 0);
        grid.set_point(start.pixel(), VISITED);

        Self {
            bounds,
            target,
            stack: vec![start],
            start,
            end: start,
            farthest: 0,
        }
    }

    pub fn run<R: MazeRng + ?Sized>(mut self, grid: &mut PixelGrid, rng: &mut R) -> Carve {
        let mut carved = 0usize;

        while let Some(current) = self.stack.pop() {
            let mut direction = Direction::from_index(rng.random_range(0, 3));
            for _ in 0..Direction::ALL.len() {
                if self.try_carve(grid, current, direction) {
                    carved += 1;
                    break;
                }
                direction = direction.rotate();
            }
        }

        trace!(
            "carved {} passages from {}, farthest target cell {}",
            carved,
            self.start,
            self.end
        );

        Carve {
            start: self.start,
            end: self.end,
        }
    }

    /// Opens the wall between `current` and its neighbor in `direction` if that neighbor has not
    /// been visited yet.
    fn try_carve(&mut self, grid: &mut PixelGrid, current: CellKey, direction: Direction) -> bool {
        let Some(next) = current.step(direction) else {
            return false;
        };
        if grid.get_point(next.pixel()) != OPEN {
            return false;
        }

        grid.set_point(next.pixel(), VISITED);
        if let Some(edge) = current.pixel().step(direction) {
            grid.set_point(edge, VISITED);
        }

        // current goes back on the stack so its other directions get tried after backtracking
        self.stack.push(current);
        self.stack.push(next);

        if next.distance() > self.farthest && self.bounds.accepts(self.target, next.x(), next.y()) {
            self.farthest = next.distance();
            self.end = next;
        }

        true
    }
}
