use crate::location::Location;

/// Reasons a maze request is rejected. All of them are raised before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// The entrance and exit rules would pin both endpoints to the same single cell.
    #[error("incompatible entrance ({entrance}) and exit ({exit}) placement")]
    InvalidPlacement { entrance: Location, exit: Location },

    #[error("invalid maze size {width}x{height}: each side must be between 3 and {max} pixels")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max: usize,
    },

    /// A passage or endpoint color equal to the wall color would hide it in the image.
    #[error("{field} must not be the wall color 0")]
    WallColor { field: &'static str },

    #[error("boundary jog period must be at least 1")]
    InvalidTuning,

    #[error("unknown location: {0}")]
    UnknownLocation(String),
}
