use crate::{
    carve::Carve,
    config::MazeConfig,
    grid::{PixelGrid, Point, OPEN, VISITED},
    location::Location,
};

/// Entrance and exit pixels of a finished maze.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Endpoints {
    pub entrance: Point,
    pub exit: Point,
}

/// Turns the carve markers into final colors and stamps the entrance and exit.
///
/// When `flipped` is set the carve ran from the exit rule towards the entrance rule, so its start
/// is the exit of the maze.
pub(crate) fn place_endpoints(
    grid: &mut PixelGrid,
    carve: &Carve,
    flipped: bool,
    config: &MazeConfig,
) -> Endpoints {
    grid.replace(VISITED, OPEN);
    grid.replace(OPEN, config.default_color);

    let (start, end) = if flipped {
        (carve.end, carve.start)
    } else {
        (carve.start, carve.end)
    };

    let entrance = nudge(grid, start.pixel(), config.entrance);
    let exit = nudge(grid, end.pixel(), config.exit);

    grid.set_point(entrance, config.start_color);
    grid.set_point(exit, config.end_color);

    Endpoints { entrance, exit }
}

/// On an even axis the true border is one pixel past the last cell. Endpoints ruled to sit on that
/// border move onto it when a passage leads there.
fn nudge(grid: &PixelGrid, mut point: Point, rule: Location) -> Point {
    if grid.width() % 2 == 0 && rule.is_on_right() && grid.is_open(Point::new(point.x + 1, point.y)) {
        point.x += 1;
    }
    if grid.height() % 2 == 0 && rule.is_on_bottom() && grid.is_open(Point::new(point.x, point.y + 1)) {
        point.y += 1;
    }
    point
}
