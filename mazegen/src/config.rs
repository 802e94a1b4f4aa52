use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    codec::MAX_CELLS_PER_AXIS,
    error::MazeError,
    grid::{ColorIndex, WALL},
    location::{CellBounds, Location},
};

/// Largest raster side that still fits every cell into a [`crate::codec::CellKey`].
pub const MAX_SIDE: usize = MAX_CELLS_PER_AXIS * 2;

/// Everything that describes one maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub entrance: Location,
    pub exit: Location,
    pub start_color: ColorIndex,
    pub end_color: ColorIndex,
    pub default_color: ColorIndex,
    /// `None` picks a random seed per generation.
    pub seed: Option<u64>,
    pub boundary: BoundaryTuning,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            entrance: Location::Anywhere,
            exit: Location::Anywhere,
            start_color: 7,
            end_color: 2,
            default_color: 1,
            seed: None,
            boundary: BoundaryTuning::default(),
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_placement(mut self, entrance: Location, exit: Location) -> Self {
        self.entrance = entrance;
        self.exit = exit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reads a JSON config. Missing keys take their default values.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Rejects requests that cannot produce a maze with two distinct endpoints.
    pub fn validate(&self) -> Result<(), MazeError> {
        let placement_error = || MazeError::InvalidPlacement {
            entrance: self.entrance,
            exit: self.exit,
        };

        if self.entrance == self.exit && self.entrance.is_exact() {
            return Err(placement_error());
        }

        if !(3..=MAX_SIDE).contains(&self.width) || !(3..=MAX_SIDE).contains(&self.height) {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
                max: MAX_SIDE,
            });
        }

        // different exact rules can still land on one cell, e.g. top-left and center on 3x3
        let bounds = CellBounds::from_size(self.width, self.height);
        if let (Some(a), Some(b)) = (
            bounds.exact_cell(self.entrance),
            bounds.exact_cell(self.exit),
        ) {
            if a == b {
                return Err(placement_error());
            }
        }

        for (field, color) in [
            ("start-color", self.start_color),
            ("end-color", self.end_color),
            ("default-color", self.default_color),
        ] {
            if color == WALL {
                return Err(MazeError::WallColor { field });
            }
        }

        if self.boundary.jog_period == 0 {
            return Err(MazeError::InvalidTuning);
        }

        Ok(())
    }
}

/// Knobs for how the last row and column of even-sized mazes get opened up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BoundaryTuning {
    /// Chance in percent that a straight stretch of border advances the jog counter.
    pub advance_percent: u32,
    /// A jog is cut whenever the counter is a multiple of this.
    pub jog_period: u32,
}

impl Default for BoundaryTuning {
    fn default() -> Self {
        Self {
            advance_percent: 80,
            jog_period: 3,
        }
    }
}
