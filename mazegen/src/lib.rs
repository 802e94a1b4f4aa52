//! Perfect maze images.
//!
//! A maze is carved into a [`PixelGrid`] whose even pixels are cells and whose odd pixels are the
//! walls between them. [`generate`] turns a [`MazeConfig`] into a [`Maze`]: a depth-first carve from
//! one placement rule, with the exit put on the deepest cell that satisfies the other.
//!
//! ```no_run
//! use mazegen::{generate, Location, MazeConfig};
//!
//! let config = MazeConfig::new(21, 15)
//!     .with_placement(Location::TopLeft, Location::BottomSide)
//!     .with_seed(42);
//! let maze = generate(&config).unwrap();
//! println!("{}", maze);
//! ```

mod boundary;
mod carve;
pub mod codec;
pub mod config;
mod endpoint;
pub mod error;
pub mod find;
pub mod grid;
pub mod location;
pub mod maze;
pub mod rng;
pub mod util;

pub use config::{BoundaryTuning, MazeConfig};
pub use error::MazeError;
pub use find::{MapStorage, MapTrait, PathFinder, PathFinderState, PathResult, Visited};
pub use grid::{ColorIndex, Direction, PixelGrid, Point, WALL};
pub use location::{CellBounds, Location};
pub use maze::{generate, generate_with_rng, Maze};
pub use rng::MazeRng;
pub use util::{to_image, ARCADE_PALETTE};
