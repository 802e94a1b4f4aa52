use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::MazeError, rng::MazeRng};

/// Where an entrance or exit may be placed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    #[default]
    Anywhere,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftSide,
    TopSide,
    RightSide,
    BottomSide,
    Center,
}

impl Location {
    pub const ALL: [Location; 10] = [
        Location::Anywhere,
        Location::TopLeft,
        Location::TopRight,
        Location::BottomLeft,
        Location::BottomRight,
        Location::LeftSide,
        Location::TopSide,
        Location::RightSide,
        Location::BottomSide,
        Location::Center,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Location::TopLeft | Location::TopRight | Location::BottomLeft | Location::BottomRight
        )
    }

    pub fn is_side(self) -> bool {
        matches!(
            self,
            Location::LeftSide | Location::TopSide | Location::RightSide | Location::BottomSide
        )
    }

    /// Rules that name a single cell and leave nothing to chance.
    pub fn is_exact(self) -> bool {
        self.is_corner() || self == Location::Center
    }

    pub fn is_on_right(self) -> bool {
        matches!(
            self,
            Location::TopRight | Location::BottomRight | Location::RightSide
        )
    }

    pub fn is_on_bottom(self) -> bool {
        matches!(
            self,
            Location::BottomLeft | Location::BottomRight | Location::BottomSide
        )
    }

    fn name(self) -> &'static str {
        match self {
            Location::Anywhere => "anywhere",
            Location::TopLeft => "top-left",
            Location::TopRight => "top-right",
            Location::BottomLeft => "bottom-left",
            Location::BottomRight => "bottom-right",
            Location::LeftSide => "left-side",
            Location::TopSide => "top-side",
            Location::RightSide => "right-side",
            Location::BottomSide => "bottom-side",
            Location::Center => "center",
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Location {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Location::ALL
            .into_iter()
            .find(|l| l.name() == wanted)
            .ok_or_else(|| MazeError::UnknownLocation(s.to_string()))
    }
}

/// The largest cell indices of a raster, used to turn [`Location`] rules into cells.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CellBounds {
    pub max_x: usize,
    pub max_y: usize,
}

impl CellBounds {
    /// Cells sit on even pixels, so a side of `n` pixels holds `ceil(n / 2)` cells.
    pub fn from_size(width: usize, height: usize) -> Self {
        Self {
            max_x: width.div_ceil(2).saturating_sub(1),
            max_y: height.div_ceil(2).saturating_sub(1),
        }
    }

    pub fn cells_x(&self) -> usize {
        self.max_x + 1
    }

    pub fn cells_y(&self) -> usize {
        self.max_y + 1
    }

    pub fn center(&self) -> (usize, usize) {
        (self.max_x >> 1, self.max_y >> 1)
    }

    /// The cell an exact rule names, `None` for rules with a free axis.
    pub fn exact_cell(&self, rule: Location) -> Option<(usize, usize)> {
        match rule {
            Location::TopLeft => Some((0, 0)),
            Location::TopRight => Some((self.max_x, 0)),
            Location::BottomLeft => Some((0, self.max_y)),
            Location::BottomRight => Some((self.max_x, self.max_y)),
            Location::Center => Some(self.center()),
            _ => None,
        }
    }

    /// Picks a cell satisfying `rule`. Both random coordinates are always drawn, so the random
    /// stream advances the same way whatever the rule.
    pub fn resolve<R: MazeRng + ?Sized>(&self, rule: Location, rng: &mut R) -> (usize, usize) {
        let rand_x = rng.random_range(0, self.max_x);
        let rand_y = rng.random_range(0, self.max_y);

        match rule {
            Location::Anywhere => (rand_x, rand_y),
            Location::LeftSide => (0, rand_y),
            Location::RightSide => (self.max_x, rand_y),
            Location::TopSide => (rand_x, 0),
            Location::BottomSide => (rand_x, self.max_y),
            exact => self.exact_cell(exact).unwrap_or((rand_x, rand_y)),
        }
    }

    /// Whether the cell at `(x, y)` satisfies `rule`.
    pub fn accepts(&self, rule: Location, x: usize, y: usize) -> bool {
        match rule {
            Location::Anywhere => true,
            Location::LeftSide => x == 0,
            Location::RightSide => x == self.max_x,
            Location::TopSide => y == 0,
            Location::BottomSide => y == self.max_y,
            exact => self.exact_cell(exact) == Some((x, y)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn test_bounds() {
        assert_eq!(
            CellBounds::from_size(9, 9),
            CellBounds { max_x: 4, max_y: 4 }
        );
        assert_eq!(
            CellBounds::from_size(10, 9),
            CellBounds { max_x: 4, max_y: 4 }
        );
        assert_eq!(
            CellBounds::from_size(4, 5),
            CellBounds { max_x: 1, max_y: 2 }
        );
        assert_eq!(CellBounds::from_size(3, 3).center(), (0, 0));
        assert_eq!(CellBounds::from_size(9, 7).center(), (2, 1));
    }

    #[test]
    fn test_classification() {
        let exact: Vec<Location> = Location::ALL.into_iter().filter(|l| l.is_exact()).collect();
        assert_eq!(
            exact,
            vec![
                Location::TopLeft,
                Location::TopRight,
                Location::BottomLeft,
                Location::BottomRight,
                Location::Center
            ]
        );

        assert_eq!(Location::ALL.iter().filter(|l| l.is_side()).count(), 4);
        assert!(!Location::Anywhere.is_exact());
        assert!(!Location::Anywhere.is_side());

        let right: Vec<Location> = Location::ALL.into_iter().filter(|l| l.is_on_right()).collect();
        assert_eq!(
            right,
            vec![
                Location::TopRight,
                Location::BottomRight,
                Location::RightSide
            ]
        );
        let bottom: Vec<Location> = Location::ALL.into_iter().filter(|l| l.is_on_bottom()).collect();
        assert_eq!(
            bottom,
            vec![
                Location::BottomLeft,
                Location::BottomRight,
                Location::BottomSide
            ]
        );
    }

    #[test]
    fn test_resolve_exact() {
        let bounds = CellBounds::from_size(9, 7);
        let mut rng = seeded(0);
        assert_eq!(bounds.resolve(Location::TopLeft, &mut rng), (0, 0));
        assert_eq!(bounds.resolve(Location::TopRight, &mut rng), (4, 0));
        assert_eq!(bounds.resolve(Location::BottomLeft, &mut rng), (0, 3));
        assert_eq!(bounds.resolve(Location::BottomRight, &mut rng), (4, 3));
        assert_eq!(bounds.resolve(Location::Center, &mut rng), (2, 1));
    }

    #[test]
    fn test_resolve_is_accepted() {
        let bounds = CellBounds::from_size(15, 10);
        for seed in 0..50 {
            let mut rng = seeded(seed);
            for rule in Location::ALL {
                let (x, y) = bounds.resolve(rule, &mut rng);
                assert!(x <= bounds.max_x && y <= bounds.max_y);
                assert!(bounds.accepts(rule, x, y), "{rule} resolved to ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_sides_fix_one_axis() {
        let bounds = CellBounds::from_size(15, 10);
        let mut ys = std::collections::HashSet::new();
        for seed in 0..100 {
            let mut rng = seeded(seed);
            let (x, y) = bounds.resolve(Location::LeftSide, &mut rng);
            assert_eq!(x, 0);
            ys.insert(y);
        }
        assert!(ys.len() > 1);

        assert!(bounds.accepts(Location::BottomSide, 3, bounds.max_y));
        assert!(!bounds.accepts(Location::BottomSide, 3, 0));
        assert!(!bounds.accepts(Location::TopRight, bounds.max_x, 1));
    }

    #[test]
    fn test_resolve_consumes_same_randomness() {
        let bounds = CellBounds::from_size(21, 21);
        let mut a = seeded(3);
        let mut b = seeded(3);
        bounds.resolve(Location::TopLeft, &mut a);
        bounds.resolve(Location::Anywhere, &mut b);
        assert_eq!(a.random_range(0, 1_000_000), b.random_range(0, 1_000_000));
    }

    #[test]
    fn test_parse() {
        for rule in Location::ALL {
            assert_eq!(rule.to_string().parse::<Location>().unwrap(), rule);
        }
        assert_eq!("Bottom_Right".parse::<Location>().unwrap(), Location::BottomRight);
        assert!(matches!(
            "middle".parse::<Location>(),
            Err(MazeError::UnknownLocation(_))
        ));
    }
}
