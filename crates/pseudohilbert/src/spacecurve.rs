use std::fmt::Debug;

use crate::{error, point::Point};

/// A traversal of every cell of a `width × height` grid.
///
/// Implementations are immutable after construction and can be shared across
/// threads.
pub trait SpaceCurve: Debug + Send + Sync {
    /// Human-readable curve name.
    fn name(&self) -> &'static str;

    /// Short description of the curve's construction and properties.
    fn info(&self) -> &'static str;

    /// Grid width in cells.
    fn width(&self) -> u32;

    /// Grid height in cells.
    fn height(&self) -> u32;

    /// Total number of cells on the curve.
    fn length(&self) -> u32 {
        self.width() * self.height()
    }

    /// Position of `p` along the curve.
    fn index(&self, p: Point) -> error::Result<u32>;

    /// Cell at position `index` along the curve.
    fn point(&self, index: u32) -> error::Result<Point>;
}
