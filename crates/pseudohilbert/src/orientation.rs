//! Orientation state threaded through curve construction.
//!
//! A curve over a block is described by two perpendicular unit steps: the
//! *major* direction, along which the block is eventually crossed from the
//! entry corner to the exit corner, and the *minor* direction, which points
//! into the block from the entry edge. Four entry corners times two choices of
//! major axis give exactly eight orientations, the rotations and reflections
//! of the base pattern.
//!
//! ```text
//!  +y
//!  |
//!  o----+x
//! ```

use std::fmt;

use crate::{point::Point, rect::Rect};

/// A unit step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+y`
    Up,
    /// `-y`
    Down,
    /// `-x`
    Left,
    /// `+x`
    Right,
}

impl Direction {
    /// Signed `(dx, dy)` of one step.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The opposite step.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Axis the step moves along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }
}

/// A grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Extent of `rect` along this axis.
    pub fn extent(self, rect: &Rect) -> u32 {
        match self {
            Self::X => rect.width(),
            Self::Y => rect.height(),
        }
    }
}

/// One of the four corners of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// `(0, 0)`
    BottomLeft,
    /// `(width - 1, 0)`
    BottomRight,
    /// `(0, height - 1)`
    TopLeft,
    /// `(width - 1, height - 1)`
    TopRight,
}

impl Corner {
    /// All corners.
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopLeft,
        Self::TopRight,
    ];

    /// The cell this corner designates in `rect`.
    pub fn cell(self, rect: &Rect) -> Point {
        let right = rect.width() - 1;
        let top = rect.height() - 1;
        match self {
            Self::BottomLeft => Point::new(0, 0),
            Self::BottomRight => Point::new(right, 0),
            Self::TopLeft => Point::new(0, top),
            Self::TopRight => Point::new(right, top),
        }
    }

    /// Horizontal step pointing into the rectangle from this corner.
    const fn inward_x(self) -> Direction {
        match self {
            Self::BottomLeft | Self::TopLeft => Direction::Right,
            Self::BottomRight | Self::TopRight => Direction::Left,
        }
    }

    /// Vertical step pointing into the rectangle from this corner.
    const fn inward_y(self) -> Direction {
        match self {
            Self::BottomLeft | Self::BottomRight => Direction::Up,
            Self::TopLeft | Self::TopRight => Direction::Down,
        }
    }

    /// The corner whose inward steps are `horizontal` and `vertical`.
    const fn from_inward(horizontal: Direction, vertical: Direction) -> Self {
        match (horizontal, vertical) {
            (Direction::Left, Direction::Up) => Self::BottomRight,
            (Direction::Left, _) => Self::TopRight,
            (_, Direction::Down) => Self::TopLeft,
            _ => Self::BottomLeft,
        }
    }
}

/// Symmetries applied to a parent orientation when deriving a child block's
/// orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// Keep the parent orientation.
    Identity,
    /// Swap major and minor; the entry corner is unchanged.
    Transpose,
    /// Swap and reverse major and minor; the entry corner moves diagonally.
    AntiTranspose,
}

/// Entry corner and traversal axes of a (sub-)curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Direction in which the curve crosses the block.
    major: Direction,
    /// Direction pointing into the block from the entry edge.
    minor: Direction,
}

impl Orientation {
    /// All eight orientations.
    pub const ALL: [Self; 8] = [
        Self::new(Corner::BottomLeft, Axis::X),
        Self::new(Corner::BottomLeft, Axis::Y),
        Self::new(Corner::BottomRight, Axis::X),
        Self::new(Corner::BottomRight, Axis::Y),
        Self::new(Corner::TopLeft, Axis::X),
        Self::new(Corner::TopLeft, Axis::Y),
        Self::new(Corner::TopRight, Axis::X),
        Self::new(Corner::TopRight, Axis::Y),
    ];

    /// Orientation entering at `start` and crossing along `major`.
    pub const fn new(start: Corner, major: Axis) -> Self {
        let (h, v) = (start.inward_x(), start.inward_y());
        match major {
            Axis::X => Self {
                major: h,
                minor: v,
            },
            Axis::Y => Self {
                major: v,
                minor: h,
            },
        }
    }

    /// Major step.
    pub const fn major(self) -> Direction {
        self.major
    }

    /// Minor step.
    pub const fn minor(self) -> Direction {
        self.minor
    }

    /// Axis the curve crosses along.
    pub const fn major_axis(self) -> Axis {
        self.major.axis()
    }

    /// Corner the curve enters from.
    pub const fn start_corner(self) -> Corner {
        match self.major.axis() {
            Axis::X => Corner::from_inward(self.major, self.minor),
            Axis::Y => Corner::from_inward(self.minor, self.major),
        }
    }

    /// Corner the curve leaves from when the major extent allows a
    /// corner-to-corner crossing.
    pub const fn end_corner(self) -> Corner {
        match self.major.axis() {
            Axis::X => Corner::from_inward(self.major.reversed(), self.minor),
            Axis::Y => Corner::from_inward(self.minor, self.major.reversed()),
        }
    }

    /// Derive a child orientation.
    pub const fn apply(self, symmetry: Symmetry) -> Self {
        match symmetry {
            Symmetry::Identity => self,
            Symmetry::Transpose => Self {
                major: self.minor,
                minor: self.major,
            },
            Symmetry::AntiTranspose => Self {
                major: self.minor.reversed(),
                minor: self.major.reversed(),
            },
        }
    }

    /// `(major, minor)` extents of `rect` under this orientation.
    pub fn extents(self, rect: &Rect) -> (u32, u32) {
        let axis = self.major_axis();
        (axis.extent(rect), axis.other().extent(rect))
    }

    /// Adjust the orientation so an adjacent corner-to-corner crossing of
    /// `rect` exists.
    ///
    /// A crossing along an odd major extent with an even minor extent would
    /// have to join two cells of the same checkerboard colour through an even
    /// number of cells, which is impossible. Such orientations, and those
    /// crossing a single-cell major extent, are transposed, keeping the entry
    /// corner.
    pub fn fit(self, rect: &Rect) -> Self {
        let (major, minor) = self.extents(rect);
        if (major % 2 == 1 && minor % 2 == 0) || (major == 1 && minor > 1) {
            self.apply(Symmetry::Transpose)
        } else {
            self
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(Corner::BottomLeft, Axis::X)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.start_corner(), self.major_axis())
    }
}
