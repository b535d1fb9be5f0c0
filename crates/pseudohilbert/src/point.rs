//! Grid cell coordinates used by curve implementations.

use std::fmt;

/// A cell on a 2D grid. The origin is the bottom-left cell and `y` grows
/// upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Column, counted from the left edge.
    pub x: u32,
    /// Row, counted from the bottom edge.
    pub y: u32,
}

impl Point {
    /// Create a new `Point`.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        dx.hypot(dy)
    }

    /// Manhattan (taxicab) distance between two cells.
    pub fn manhattan(&self, other: &Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// True when the cells share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<[u32; 2]> for Point {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (u32, u32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
