//! Pseudo-Hilbert curves for arbitrarily sized rectangles.
//!
//! The classical Hilbert curve only exists on `2^n × 2^n` squares. This crate
//! generalises it to any `width × height` grid by recursively splitting the
//! rectangle and stitching the sub-curves end to end, so consecutive indices
//! always land on edge-adjacent cells. The traversal is built once per grid
//! and then queried in O(1) in both directions.
//!
//! ```
//! use pseudohilbert::PseudoHilbert;
//!
//! let curve = PseudoHilbert::new(5, 3)?;
//! let (x, y) = curve.index_to_coordinate(7)?;
//! assert_eq!(curve.coordinate_to_index(x, y)?, 7);
//! # Ok::<(), pseudohilbert::error::Error>(())
//! ```
//!
//! # Supported Curves
//!
//! - Pseudo-Hilbert
//! - Scan (Boustrophedon)

/// Recursive traversal construction.
pub mod builder;
/// Curve implementations.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Entry corners, axes and the symmetries between them.
pub mod orientation;
/// Grid cell coordinates.
pub mod point;
/// Validated grid dimensions.
pub mod rect;
/// The `SpaceCurve` trait.
mod spacecurve;
/// Dense index/coordinate lookup tables.
pub mod tables;

pub use crate::{
    curves::{PseudoHilbert, Scan},
    orientation::{Axis, Corner, Orientation},
    point::Point,
    spacecurve::SpaceCurve,
};

/// Central registry of curve metadata and constructors.
pub mod registry;

/// Construct a curve by name with the default orientation.
///
/// Returns an error if the name is unknown or the grid is invalid.
pub fn curve_from_name(
    name: &str,
    width: u32,
    height: u32,
) -> error::Result<Box<dyn SpaceCurve + 'static>> {
    registry::construct(name, width, height, Orientation::default())
}
