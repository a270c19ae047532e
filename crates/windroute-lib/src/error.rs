use thiserror::Error;

/// Convenient result alias for the windroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A linear space was built with a non-positive step.
    #[error("linear space delta must be strictly positive (got {delta})")]
    NonPositiveDelta { delta: f64 },

    /// A linear space was built with fewer than two sample points.
    #[error("linear space needs at least two points (got {points})")]
    TooFewPoints { points: usize },

    /// A linear space was built from bounds with `stop` not above `start`.
    #[error("linear space stop must be greater than start ({stop} <= {start})")]
    InvertedBounds { start: f64, stop: f64 },

    /// A checked coordinate lookup fell outside the space range.
    #[error("value {value} is outside the space range [{start}, {stop}]")]
    OutOfRange { value: f64, start: f64, stop: f64 },

    /// A checked integer-index lookup fell outside a 1-D table.
    #[error("index {index} is not in a list of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// A checked integer-index lookup fell outside a 2-D table.
    #[error("index ({x}, {y}) is not in a grid of shape ({x_len}, {y_len})")]
    GridIndexOutOfRange {
        x: usize,
        y: usize,
        x_len: usize,
        y_len: usize,
    },

    /// A polar curve did not provide one sample per wind-speed point.
    #[error("polar curve has {actual} samples, wind-speed space has {expected} points")]
    CurveLength { expected: usize, actual: usize },

    /// The polar wind-speed space starts below zero.
    #[error("wind speed cannot be negative (space starts at {start})")]
    NegativeWindSpeed { start: f64 },

    /// A polar curve contains a negative boat speed.
    #[error("boat speed cannot be negative (got {speed})")]
    NegativeBoatSpeed { speed: f64 },

    /// More wind grids were pushed than the time space can hold.
    #[error("wind field already holds {capacity} grids")]
    WindFieldFull { capacity: usize },

    /// The wind field was built before every time slot received a grid.
    #[error("wind field needs {expected} grids, only {actual} were added")]
    WindFieldIncomplete { expected: usize, actual: usize },
}
