//! Error types shared by curve construction and lookups.

use std::result;

use thiserror::Error;

/// Errors produced while building or querying a curve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height was zero.
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The grid holds more cells than the index type can address.
    #[error("size error: {0}")]
    Size(String),
    /// A coordinate lookup fell outside the grid.
    #[error("coordinate ({x}, {y}) lies outside the {width}x{height} grid")]
    CoordinateOutOfRange {
        /// Queried x coordinate.
        x: u32,
        /// Queried y coordinate.
        y: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// An index lookup fell outside `[0, length)`.
    #[error("index {index} is outside a curve of length {length}")]
    IndexOutOfRange {
        /// Queried index.
        index: u32,
        /// Number of cells on the curve.
        length: u32,
    },
    /// The traversal broke one of its own invariants. This is a builder bug,
    /// never a caller error.
    #[error("traversal invariant violated: {0}")]
    Invariant(String),
    /// No curve is registered under the given name.
    #[error("unknown curve '{0}'")]
    UnknownCurve(String),
}

/// Convenience result alias.
pub type Result<T> = result::Result<T, Error>;
