//! Opening up the last column and row of even-sized mazes.
//!
//! Cells only sit on even pixels, so an even width leaves the rightmost pixel column outside the
//! cell grid (and an even height the bottom row). Without help that strip would stay solid wall.

use crate::{
    config::BoundaryTuning,
    grid::{ColorIndex, PixelGrid, Point, WALL},
    rng::MazeRng,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Edge {
    Right,
    Bottom,
}

impl Edge {
    fn length(self, grid: &PixelGrid) -> usize {
        match self {
            Edge::Right => grid.height(),
            Edge::Bottom => grid.width(),
        }
    }

    /// The pixel `along` the edge on the last cell line (`outer == false`) or on the strip beyond
    /// it (`outer == true`).
    fn pixel(self, grid: &PixelGrid, along: usize, outer: bool) -> Point {
        match self {
            Edge::Right => Point::new(grid.width() - 2 + outer as usize, along),
            Edge::Bottom => Point::new(along, grid.height() - 2 + outer as usize),
        }
    }
}

/// Extends passages into the uncovered strip of every even axis, right column first. Both passes
/// share one jog counter, so the same random stream always produces the same border.
pub(crate) fn finish_boundary<R: MazeRng + ?Sized>(
    grid: &mut PixelGrid,
    tuning: &BoundaryTuning,
    color: ColorIndex,
    rng: &mut R,
) {
    let mut counter = 0u32;

    if grid.width() % 2 == 0 {
        finish_edge(grid, Edge::Right, &mut counter, tuning, color, rng);
    }
    if grid.height() % 2 == 0 {
        finish_edge(grid, Edge::Bottom, &mut counter, tuning, color, rng);
    }
}

fn finish_edge<R: MazeRng + ?Sized>(
    grid: &mut PixelGrid,
    edge: Edge,
    counter: &mut u32,
    tuning: &BoundaryTuning,
    color: ColorIndex,
    rng: &mut R,
) {
    for along in (0..edge.length(grid)).step_by(2) {
        if !grid.is_open(edge.pixel(grid, along, false)) {
            continue;
        }

        let link = edge.pixel(grid, along + 1, false);
        if grid.is_open(link) && grid.is_open(edge.pixel(grid, along + 2, false)) {
            if rng.percent_chance(tuning.advance_percent) {
                *counter += 1;
            }
            if *counter % tuning.jog_period == 0 {
                // reroute the link between the two cells through the outer strip
                grid.set_point(edge.pixel(grid, along, true), color);
                grid.set_point(link, WALL);
                grid.set_point(edge.pixel(grid, along + 1, true), color);
                grid.set_point(edge.pixel(grid, along + 2, true), color);
                continue;
            }
        }

        grid.set_point(edge.pixel(grid, along, true), color);
    }
}
