use std::fmt::Display;

use log::debug;

use crate::{
    boundary::finish_boundary,
    carve::{open_cells, Carver},
    config::MazeConfig,
    endpoint::place_endpoints,
    error::MazeError,
    find::{MapTrait, PathFinder, PathFinderState},
    grid::{PixelGrid, Point},
    location::CellBounds,
    rng::{self, MazeRng},
};

/// A generated maze: the raster plus where its entrance and exit ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: PixelGrid,
    pub entrance: Point,
    pub exit: Point,
    /// Carve distance, in cells, between the start of the carve and its farthest valid cell.
    pub exit_distance: usize,
    /// The seed the random source was created from, if [`generate`] created it.
    pub seed: Option<u64>,
}

/// Generates a maze from `config`, seeding the random source from `config.seed` or from a fresh
/// random seed that is recorded in the result.
pub fn generate(config: &MazeConfig) -> Result<Maze, MazeError> {
    let seed = config.seed.unwrap_or_else(rng::random_seed);
    debug!("generating {}x{} maze with seed {}", config.width, config.height, seed);

    let mut rng = rng::seeded(seed);
    let mut maze = generate_with_rng(config, &mut rng)?;
    maze.seed = Some(seed);
    Ok(maze)
}

/// Generates a maze drawing all randomness from `rng`. `config.seed` is ignored.
pub fn generate_with_rng<R: MazeRng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<Maze, MazeError> {
    config.validate()?;

    let bounds = CellBounds::from_size(config.width, config.height);
    let mut grid = PixelGrid::new(config.width, config.height);
    open_cells(&mut grid, &bounds);

    // carve outwards from an exact exit rather than towards it from a random entrance
    let flipped = !config.entrance.is_exact() && config.exit.is_exact();
    let (from, towards) = if flipped {
        (config.exit, config.entrance)
    } else {
        (config.entrance, config.exit)
    };
    debug!("carving from {} towards {} (flipped: {})", from, towards, flipped);

    let start = bounds.resolve(from, rng);
    let carve = Carver::new(&mut grid, bounds, start, towards).run(&mut grid, rng);

    finish_boundary(&mut grid, &config.boundary, config.default_color, rng);

    let endpoints = place_endpoints(&mut grid, &carve, flipped, config);
    debug!(
        "entrance at {}, exit at {}, {} cells apart",
        endpoints.entrance,
        endpoints.exit,
        carve.end.distance()
    );

    Ok(Maze {
        grid,
        entrance: endpoints.entrance,
        exit: endpoints.exit,
        exit_distance: carve.end.distance(),
        seed: None,
    })
}

impl Maze {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The pixel path from the entrance to the exit, both included.
    pub fn solution(&self) -> Option<Vec<Point>> {
        let visited = self.grid.create_storage();
        match PathFinder::new(self.entrance, self.exit, visited)
            .finish(&self.grid)
            .0
        {
            PathFinderState::PathFound(result) => Some(result.path),
            _ => None,
        }
    }

    /// The maze as text with the solution path drawn in.
    pub fn display_solution(&self) -> String {
        self.ascii(&self.solution().unwrap_or_default())
    }

    fn ascii(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                out.push(if p == self.entrance {
                    'S'
                } else if p == self.exit {
                    'E'
                } else if !self.grid.is_open(p) {
                    '#'
                } else if path.contains(&p) {
                    '.'
                } else {
                    ' '
                });
            }
            out.push('\n');
        }
        out
    }
}

/// `#` for walls, `S` and `E` for the entrance and exit, blanks for passages.
impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ascii(&[]))
    }
}

#[cfg(test)]
mod test {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::{
        grid::{Direction, WALL},
        location::Location,
    };

    const SIZES: [(usize, usize); 8] = [
        (3, 3),
        (4, 4),
        (9, 9),
        (10, 9),
        (9, 10),
        (10, 10),
        (21, 14),
        (32, 5),
    ];

    fn maze(width: usize, height: usize, entrance: Location, exit: Location, seed: u64) -> Maze {
        generate(
            &MazeConfig::new(width, height)
                .with_placement(entrance, exit)
                .with_seed(seed),
        )
        .unwrap()
    }

    /// Number of open pixels reachable from `from`.
    fn reachable(grid: &PixelGrid, from: Point) -> usize {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            for (n, _) in grid.neighbors_of(p) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len()
    }

    fn is_tree(grid: &PixelGrid, root: Point) -> bool {
        let vertices = grid.points().filter(|p| grid.is_open(*p)).count();
        let edges = grid
            .points()
            .filter(|p| grid.is_open(*p))
            .flat_map(|p| [Direction::Right, Direction::Down].map(|d| p.step(d)))
            .flatten()
            .filter(|p| grid.is_open(*p))
            .count();

        reachable(grid, root) == vertices && edges + 1 == vertices
    }

    #[test]
    fn test_corner_to_corner() {
        let maze = maze(9, 9, Location::TopLeft, Location::BottomRight, 42);
        assert_eq!(maze.entrance, Point::new(0, 0));
        assert_eq!(maze.exit, Point::new(8, 8));
        assert_eq!(maze.grid.get(0, 0), 7);
        assert_eq!(maze.grid.get(8, 8), 2);
        assert_eq!(maze.seed, Some(42));
        assert!(is_tree(&maze.grid, maze.entrance));
    }

    #[test]
    fn test_rejects_shared_exact_rule() {
        let config = MazeConfig::new(5, 5)
            .with_placement(Location::Center, Location::Center)
            .with_seed(1);
        assert_eq!(
            generate(&config),
            Err(MazeError::InvalidPlacement {
                entrance: Location::Center,
                exit: Location::Center
            })
        );
    }

    #[test]
    fn test_rejects_small_sizes() {
        assert!(matches!(
            generate(&MazeConfig::new(2, 5)),
            Err(MazeError::InvalidDimensions {
                width: 2,
                height: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_wall_colored_passages() {
        let config = MazeConfig {
            default_color: WALL,
            ..MazeConfig::new(9, 9).with_seed(42)
        };
        assert_eq!(
            generate(&config),
            Err(MazeError::WallColor {
                field: "default-color"
            })
        );

        let config = MazeConfig {
            start_color: WALL,
            ..MazeConfig::new(9, 9)
        };
        let mut rng = rng::seeded(42);
        assert_eq!(
            generate_with_rng(&config, &mut rng),
            Err(MazeError::WallColor {
                field: "start-color"
            })
        );
    }

    #[test]
    fn test_largest_size() {
        let maze = maze(512, 7, Location::LeftSide, Location::RightSide, 8);
        // even width: the exit moves onto the border column
        assert_eq!(maze.exit.x, 511);
        assert!(is_tree(&maze.grid, maze.entrance));
    }

    #[test]
    fn test_perfect_maze() {
        for (width, height) in SIZES {
            for seed in 0..40 {
                let maze = maze(width, height, Location::Anywhere, Location::Anywhere, seed);
                assert!(is_tree(&maze.grid, maze.entrance), "{width}x{height} seed {seed}\n{}", maze.grid);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for rule in Location::ALL {
            let a = maze(17, 12, rule, Location::Anywhere, 77);
            let b = maze(17, 12, rule, Location::Anywhere, 77);
            assert_eq!(a, b);
        }

        let seeded = MazeConfig::new(17, 12).with_seed(5);
        let mut rng = rng::seeded(5);
        assert_eq!(
            generate(&seeded).unwrap().grid,
            generate_with_rng(&seeded, &mut rng).unwrap().grid
        );
    }

    #[test]
    fn test_random_seed_recorded() {
        let first = generate(&MazeConfig::new(11, 11)).unwrap();
        let seed = first.seed.unwrap();
        let again = generate(&MazeConfig::new(11, 11).with_seed(seed)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_anywhere_endpoints_distinct() {
        for seed in 0..1000 {
            let maze = maze(9, 9, Location::Anywhere, Location::Anywhere, seed);
            assert_ne!(maze.entrance, maze.exit, "seed {seed}");
            assert!(maze.exit_distance > 0);
        }
    }

    #[test]
    fn test_rules_satisfied() {
        for (width, height) in SIZES {
            let bounds = CellBounds::from_size(width, height);
            for entrance in Location::ALL {
                for exit in Location::ALL {
                    let config = MazeConfig::new(width, height).with_placement(entrance, exit);
                    if config.validate().is_err() {
                        continue;
                    }
                    for seed in 0..5 {
                        let maze = generate(&config.clone().with_seed(seed)).unwrap();
                        let tag = format!("{width}x{height} {entrance}->{exit} seed {seed}");

                        assert_ne!(maze.entrance, maze.exit, "{tag}");
                        assert!(
                            bounds.accepts(entrance, maze.entrance.x / 2, maze.entrance.y / 2),
                            "{tag}: entrance {}",
                            maze.entrance
                        );
                        assert!(
                            bounds.accepts(exit, maze.exit.x / 2, maze.exit.y / 2),
                            "{tag}: exit {}",
                            maze.exit
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_colors_contained() {
        for (width, height) in SIZES {
            for seed in 0..10 {
                let config = MazeConfig {
                    start_color: 12,
                    end_color: 4,
                    default_color: 9,
                    ..MazeConfig::new(width, height)
                        .with_placement(Location::TopSide, Location::BottomRight)
                        .with_seed(seed)
                };
                let maze = generate(&config).unwrap();

                assert_eq!(maze.grid.count(12), 1);
                assert_eq!(maze.grid.count(4), 1);
                assert_eq!(
                    maze.grid.count(WALL) + maze.grid.count(9) + 2,
                    width * height,
                    "{width}x{height} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_even_sides_nudged_to_border() {
        for seed in 0..30 {
            // the right column is finished before the bottom row, so only the x nudge applies
            let maze = maze(10, 10, Location::TopLeft, Location::BottomRight, seed);
            assert_eq!(maze.entrance, Point::new(0, 0));
            assert_eq!(maze.exit, Point::new(9, 8), "seed {seed}");
        }
    }

    #[test]
    fn test_flip_keeps_requested_sides() {
        for seed in 0..30 {
            let maze = maze(11, 9, Location::LeftSide, Location::BottomRight, seed);
            assert_eq!(maze.entrance.x, 0);
            assert_eq!(maze.exit, Point::new(10, 8));
        }
    }

    #[test]
    fn test_solution() {
        let maze = maze(15, 15, Location::TopLeft, Location::BottomRight, 3);
        let path = maze.solution().unwrap();
        assert_eq!(path.first(), Some(&maze.entrance));
        assert_eq!(path.last(), Some(&maze.exit));
        assert!(path.len() >= 29);

        let text = maze.display_solution();
        assert_eq!(text.lines().count(), 15);
        assert_eq!(text.matches('.').count(), path.len() - 2);
        assert!(text.starts_with('S'));
        assert_eq!(maze.to_string().matches('.').count(), 0);
    }
}
