use crate::find::{MapStorage, MapTrait, NodeReference};
use std::{fmt::Display, str::FromStr};

/// A palette index. What each index looks like is up to the renderer.
pub type ColorIndex = u8;

/// Pixels that were never carved.
pub const WALL: ColorIndex = 0;
/// A cell that has not been reached by the carve yet.
pub(crate) const OPEN: ColorIndex = 1;
/// A cell or edge the carve has passed through.
pub(crate) const VISITED: ColorIndex = 2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The point one pixel away in `direction`, if it does not go below zero.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl NodeReference for Point {}

/// The four carving directions, listed in clockwise order starting at the top.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// The next direction clockwise.
    pub fn rotate(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A rectangular raster of palette indices, stored row by row.
///
/// Reads outside the raster return [`WALL`] and writes outside it are ignored, so the generator can
/// look past the border without bounds checks of its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<ColorIndex>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![WALL; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> ColorIndex {
        self.index(x, y).map_or(WALL, |i| self.pixels[i])
    }

    pub fn set(&mut self, x: usize, y: usize, color: ColorIndex) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn get_point(&self, point: Point) -> ColorIndex {
        self.get(point.x, point.y)
    }

    pub fn set_point(&mut self, point: Point, color: ColorIndex) {
        self.set(point.x, point.y, color)
    }

    pub fn is_open(&self, point: Point) -> bool {
        self.get_point(point) != WALL
    }

    /// Replaces every pixel of color `from` with `to`.
    pub fn replace(&mut self, from: ColorIndex, to: ColorIndex) {
        for pixel in self.pixels.iter_mut().filter(|p| **p == from) {
            *pixel = to;
        }
    }

    /// Number of pixels with the given color.
    pub fn count(&self, color: ColorIndex) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// All points of the raster in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point { x, y }))
    }
}

/// One character per pixel: `.` for walls, a hex digit for any other palette index.
impl Display for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for pixel in row {
                match pixel {
                    0 => write!(f, ".")?,
                    c => write!(f, "{:x}", c)?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for PixelGrid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = PixelGrid::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                anyhow::bail!("row {} has {} pixels, expected {}", y, row.chars().count(), width);
            }
            for (x, c) in row.chars().enumerate() {
                let color = match c {
                    '.' => WALL,
                    c => c
                        .to_digit(16)
                        .ok_or_else(|| anyhow::anyhow!("Invalid pixel '{}' at ({}, {})", c, x, y))?
                        as ColorIndex,
                };
                grid.set(x, y, color);
            }
        }

        Ok(grid)
    }
}

/// A MapStorage that holds one value per pixel of a grid
#[derive(Debug)]
pub struct CellStorage<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn get(&self, node: Self::Reference) -> T {
        self.cells[node.y * self.width + node.x]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.cells[node.y * self.width + node.x]
    }
}

impl MapTrait for PixelGrid {
    type Reference = Point;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.x < self.width && node.y < self.height
    }

    /// Open pixels connect to their open 4-neighbors at unit cost
    fn neighbors_of(&self, node: Self::Reference) -> impl Iterator<Item = (Self::Reference, usize)> {
        let mut points = Vec::with_capacity(4);

        if self.is_open(node) {
            for direction in Direction::ALL {
                if let Some(p) = node.step(direction) {
                    if self.is_open(p) {
                        points.push((p, 1));
                    }
                }
            }
        }

        points.into_iter()
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage {
            width: self.width,
            cells: vec![Default::default(); self.width * self.height],
        }
    }
}
