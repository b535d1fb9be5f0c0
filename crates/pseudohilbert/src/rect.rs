//! Validated rectangle dimensions shared by all curves.

use crate::{
    error::{self, Error},
    point::Point,
};

/// A `width × height` grid anchored at the origin.
///
/// Construction guarantees both sides are positive and that the cell count
/// fits the `u32` index space, so `length()` never overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Extent along `x`.
    width: u32,
    /// Extent along `y`.
    height: u32,
}

impl Rect {
    /// Validate and build a rectangle.
    pub fn new(width: u32, height: u32) -> error::Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(Error::Size(format!(
                "{width}x{height} grid exceeds u32 index space"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn length(&self) -> u32 {
        self.width * self.height
    }

    /// True if `p` lies inside the rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Row-major offset of `p`, or `None` if it lies outside.
    pub fn offset(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// The four corner cells: bottom-left, bottom-right, top-left, top-right.
    /// Degenerate rectangles repeat cells.
    pub fn corners(&self) -> [Point; 4] {
        let (r, t) = (self.width - 1, self.height - 1);
        [
            Point::new(0, 0),
            Point::new(r, 0),
            Point::new(0, t),
            Point::new(r, t),
        ]
    }

    /// Reject `p` with a range error if it lies outside.
    pub fn check(&self, p: Point) -> error::Result<()> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(Error::CoordinateOutOfRange {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Reject `index` with a range error if it is not below `length()`.
    pub fn check_index(&self, index: u32) -> error::Result<()> {
        let length = self.length();
        if index < length {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, length })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sides() {
        assert_eq!(
            Rect::new(0, 4),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(matches!(
            Rect::new(3, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_oversized_grids() {
        assert!(matches!(Rect::new(1 << 16, 1 << 16), Err(Error::Size(_))));
        assert!(Rect::new(1 << 16, (1 << 16) - 1).is_ok());
    }

    #[test]
    fn offsets_are_row_major() -> error::Result<()> {
        let r = Rect::new(5, 3)?;
        assert_eq!(r.length(), 15);
        assert_eq!(r.offset(Point::new(0, 0)), Some(0));
        assert_eq!(r.offset(Point::new(4, 0)), Some(4));
        assert_eq!(r.offset(Point::new(0, 1)), Some(5));
        assert_eq!(r.offset(Point::new(4, 2)), Some(14));
        assert_eq!(r.offset(Point::new(5, 0)), None);
        assert_eq!(r.offset(Point::new(0, 3)), None);
        Ok(())
    }

    #[test]
    fn range_checks() -> error::Result<()> {
        let r = Rect::new(4, 4)?;
        assert!(r.check(Point::new(3, 3)).is_ok());
        assert!(matches!(
            r.check(Point::new(4, 0)),
            Err(Error::CoordinateOutOfRange { x: 4, y: 0, .. })
        ));
        assert!(r.check_index(15).is_ok());
        assert_eq!(
            r.check_index(16),
            Err(Error::IndexOutOfRange {
                index: 16,
                length: 16
            })
        );
        Ok(())
    }

    #[test]
    fn corners() -> error::Result<()> {
        let r = Rect::new(5, 3)?;
        assert_eq!(
            r.corners(),
            [
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(0, 2),
                Point::new(4, 2)
            ]
        );
        Ok(())
    }
}
