//! Recursive construction of the pseudo-Hilbert traversal order.
//!
//! A block is described by its entry cell, an [`Orientation`] and its extents
//! along the orientation's major and minor directions. Every block is crossed
//! from its entry corner to the corner `major_len - 1` steps away along the
//! major direction. Blocks are split until they degenerate into lines:
//!
//! * Long blocks (`2w > 3h`) are cut across the major axis into two halves
//!   that keep the parent orientation.
//! * Other blocks are visited in a U: the lower part of the minor axis is
//!   covered by a transposed block climbing away from the entry edge, a full
//!   width block crosses the remaining rows, and an anti-transposed block
//!   descends back to the exit corner.
//!
//! Split points are moved to even values where possible so every child can be
//! crossed corner-to-corner with unit steps. Given a root orientation that
//! passes [`Orientation::fit`], every block produced by the recursion does.

use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::{
    error::{self, Error},
    orientation::{Orientation, Symmetry},
    point::Point,
    rect::Rect,
};

/// Child orientations for the two-way split.
const PAIR_SLOTS: [Symmetry; 2] = [Symmetry::Identity, Symmetry::Identity];

/// Child orientations for the U-shaped three-way split.
const U_SLOTS: [Symmetry; 3] = [
    Symmetry::Transpose,
    Symmetry::Identity,
    Symmetry::AntiTranspose,
];

/// A sub-rectangle awaiting traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Block {
    /// Entry cell, in absolute grid coordinates.
    origin: (i64, i64),
    /// Entry corner and axes.
    orientation: Orientation,
    /// Extent along the major direction.
    major_len: u32,
    /// Extent along the minor direction.
    minor_len: u32,
}

impl Block {
    /// The cell `along` steps in the major direction and `across` steps in the
    /// minor direction from the entry cell.
    fn offset(&self, along: u32, across: u32) -> (i64, i64) {
        let (mx, my) = self.orientation.major().delta();
        let (nx, ny) = self.orientation.minor().delta();
        let (a, b) = (i64::from(along), i64::from(across));
        (
            self.origin.0 + mx * a + nx * b,
            self.origin.1 + my * a + ny * b,
        )
    }

    /// Child block sharing this block's frame of reference.
    fn child(
        &self,
        origin: (i64, i64),
        symmetry: Symmetry,
        major_len: u32,
        minor_len: u32,
    ) -> Self {
        Self {
            origin,
            orientation: self.orientation.apply(symmetry),
            major_len,
            minor_len,
        }
    }

    /// Split a block with both extents greater than one, in visiting order.
    fn split(&self) -> SmallVec<[Self; 3]> {
        let (w, h) = (self.major_len, self.minor_len);
        if 2 * u64::from(w) > 3 * u64::from(h) {
            let mut w2 = w / 2;
            if w2 % 2 == 1 && w > 2 {
                w2 += 1;
            }
            trace!(w, h, w2, "pair split");
            let [first, second] = PAIR_SLOTS;
            smallvec![
                self.child(self.origin, first, w2, h),
                self.child(self.offset(w2, 0), second, w - w2, h),
            ]
        } else {
            let w2 = w / 2;
            let mut h2 = h / 2;
            if h2 % 2 == 1 && h > 2 {
                h2 += 1;
            }
            trace!(w, h, w2, h2, "u split");
            let [up, across, down] = U_SLOTS;
            smallvec![
                self.child(self.origin, up, h2, w2),
                self.child(self.offset(0, h2), across, w, h - h2),
                self.child(self.offset(w - 1, h2 - 1), down, h2, w - w2),
            ]
        }
    }
}

/// Recursion limit for a rectangle. The split policy roughly halves one
/// extent per level, so the limit only trips on a builder bug.
fn max_depth(rect: &Rect) -> u32 {
    let longest = rect.width().max(rect.height());
    2 * (u32::BITS - longest.leading_zeros()) + 2
}

/// Accumulates visited cells while walking blocks.
struct Walker {
    /// Cells in traversal order.
    cells: Vec<Point>,
    /// Depth limit for this rectangle.
    max_depth: u32,
}

impl Walker {
    /// Append a grid cell, rejecting cells outside the non-negative quadrant.
    fn push(&mut self, (x, y): (i64, i64)) -> error::Result<()> {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return Err(Error::Invariant(format!(
                "builder stepped outside the grid at ({x}, {y})"
            )));
        };
        self.cells.push(Point::new(x, y));
        Ok(())
    }

    /// Visit every cell of `block` in curve order.
    fn walk(&mut self, block: Block, depth: u32) -> error::Result<()> {
        if depth > self.max_depth {
            return Err(Error::Invariant(format!(
                "recursion depth {depth} exceeds limit {}",
                self.max_depth
            )));
        }
        if block.minor_len == 1 {
            for along in 0..block.major_len {
                self.push(block.offset(along, 0))?;
            }
            return Ok(());
        }
        if block.major_len == 1 {
            for across in 0..block.minor_len {
                self.push(block.offset(0, across))?;
            }
            return Ok(());
        }
        for child in block.split() {
            self.walk(child, depth + 1)?;
        }
        Ok(())
    }
}

/// Build the traversal of `rect` entering at the start corner of
/// `orientation`.
///
/// The orientation is first passed through [`Orientation::fit`]; the fitted
/// orientation is returned alongside the cells. The sequence visits every cell
/// exactly once, consecutive cells are adjacent, and the last cell is the
/// fitted orientation's end corner.
pub fn build(rect: &Rect, orientation: Orientation) -> error::Result<(Orientation, Vec<Point>)> {
    let fitted = orientation.fit(rect);
    let (major_len, minor_len) = fitted.extents(rect);
    let start = fitted.start_corner().cell(rect);

    let mut walker = Walker {
        cells: Vec::with_capacity(rect.length() as usize),
        max_depth: max_depth(rect),
    };
    walker.walk(
        Block {
            origin: (i64::from(start.x), i64::from(start.y)),
            orientation: fitted,
            major_len,
            minor_len,
        },
        0,
    )?;
    Ok((fitted, walker.cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::{Axis, Corner};

    fn cells(width: u32, height: u32) -> error::Result<Vec<(u32, u32)>> {
        let rect = Rect::new(width, height)?;
        let (_, seq) = build(&rect, Orientation::default())?;
        Ok(seq.into_iter().map(Into::into).collect())
    }

    #[test]
    fn single_cell() -> error::Result<()> {
        assert_eq!(cells(1, 1)?, vec![(0, 0)]);
        Ok(())
    }

    #[test]
    fn lines() -> error::Result<()> {
        assert_eq!(cells(4, 1)?, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(cells(1, 3)?, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(cells(5, 1)?, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        Ok(())
    }

    #[test]
    fn two_by_two() -> error::Result<()> {
        assert_eq!(cells(2, 2)?, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
        Ok(())
    }

    #[test]
    fn four_by_four_is_classical() -> error::Result<()> {
        assert_eq!(
            cells(4, 4)?,
            vec![
                (0, 0),
                (1, 0),
                (1, 1),
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 3),
                (1, 2),
                (2, 2),
                (2, 3),
                (3, 3),
                (3, 2),
                (3, 1),
                (2, 1),
                (2, 0),
                (3, 0),
            ]
        );
        Ok(())
    }

    #[test]
    fn five_by_three() -> error::Result<()> {
        assert_eq!(
            cells(5, 3)?,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 1),
                (1, 0),
                (2, 0),
                (2, 1),
                (2, 2),
                (3, 2),
                (4, 2),
                (4, 1),
                (3, 1),
                (3, 0),
                (4, 0),
            ]
        );
        Ok(())
    }

    #[test]
    fn fitted_orientation_is_reported() -> error::Result<()> {
        let rect = Rect::new(5, 4)?;
        let (fitted, seq) = build(&rect, Orientation::default())?;
        assert_eq!(fitted.major_axis(), Axis::Y);
        assert_eq!(seq.first(), Some(&Point::new(0, 0)));
        assert_eq!(seq.last(), Some(&Point::new(0, 3)));
        Ok(())
    }

    #[test]
    fn every_orientation_starts_and_ends_on_corners() -> error::Result<()> {
        for (w, h) in [(2, 2), (3, 7), (6, 5), (9, 9), (12, 3), (1, 6), (1, 7), (7, 1)] {
            let rect = Rect::new(w, h)?;
            for o in Orientation::ALL {
                let (fitted, seq) = build(&rect, o)?;
                assert_eq!(seq.len(), rect.length() as usize);
                assert_eq!(seq[0], o.start_corner().cell(&rect), "{w}x{h} {o}");
                assert_eq!(
                    seq[seq.len() - 1],
                    fitted.end_corner().cell(&rect),
                    "{w}x{h} {o}"
                );
                assert!(
                    seq.windows(2).all(|p| p[0].is_adjacent(&p[1])),
                    "{w}x{h} {o} not continuous"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn depth_limit_is_generous() -> error::Result<()> {
        assert_eq!(max_depth(&Rect::new(1, 1)?), 4);
        assert_eq!(max_depth(&Rect::new(89, 3)?), 16);
        // Deep, lopsided rectangles build within the limit.
        build(&Rect::new(4096, 3)?, Orientation::new(Corner::TopRight, Axis::Y))?;
        build(&Rect::new(1000, 1000)?, Orientation::default())?;
        Ok(())
    }
}
