//! Dense lookup tables materialised from a traversal sequence.

use crate::{
    error::{self, Error},
    point::Point,
    rect::Rect,
};

/// Marks a coordinate slot that no cell has claimed yet.
const UNSET: u32 = u32::MAX;

/// Bidirectional index/coordinate lookup for one traversal.
///
/// Both tables hold exactly `rect.length()` entries and are exact inverses of
/// each other. They are immutable once built.
#[derive(Debug, Clone)]
pub struct IndexTables {
    /// Grid the tables cover.
    rect: Rect,
    /// Row-major coordinate → index.
    coordinate_to_index: Vec<u32>,
    /// Index → coordinate.
    index_to_coordinate: Vec<Point>,
}

impl IndexTables {
    /// Assign each cell of `seq` its position in the sequence.
    ///
    /// Fails with [`Error::Invariant`] unless `seq` is a bijection onto `rect`.
    pub fn from_sequence(rect: Rect, seq: &[Point]) -> error::Result<Self> {
        let length = rect.length() as usize;
        if seq.len() != length {
            return Err(Error::Invariant(format!(
                "sequence holds {} cells, {}x{} grid needs {length}",
                seq.len(),
                rect.width(),
                rect.height()
            )));
        }

        let mut coordinate_to_index = vec![UNSET; length];
        for (index, &p) in seq.iter().enumerate() {
            let slot = rect.offset(p).ok_or_else(|| {
                Error::Invariant(format!("cell {p} at index {index} lies outside the grid"))
            })?;
            if coordinate_to_index[slot] != UNSET {
                return Err(Error::Invariant(format!(
                    "cell {p} visited at both {} and {index}",
                    coordinate_to_index[slot]
                )));
            }
            // `length` fits in u32, so every index does too.
            coordinate_to_index[slot] = index as u32;
        }

        Ok(Self {
            rect,
            coordinate_to_index,
            index_to_coordinate: seq.to_vec(),
        })
    }

    /// The grid covered by the tables.
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Position of `(x, y)` along the traversal.
    pub fn coordinate_to_index(&self, x: u32, y: u32) -> error::Result<u32> {
        let p = Point::new(x, y);
        self.rect.check(p)?;
        let slot = y as usize * self.rect.width() as usize + x as usize;
        Ok(self.coordinate_to_index[slot])
    }

    /// Cell at position `index` along the traversal.
    pub fn index_to_coordinate(&self, index: u32) -> error::Result<Point> {
        self.rect.check_index(index)?;
        Ok(self.index_to_coordinate[index as usize])
    }

    /// All cells in traversal order.
    pub fn traversal(&self) -> &[Point] {
        &self.index_to_coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(cells: &[(u32, u32)]) -> Vec<Point> {
        cells.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn builds_inverse_tables() -> error::Result<()> {
        let rect = Rect::new(2, 2)?;
        let seq = pts(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let t = IndexTables::from_sequence(rect, &seq)?;

        assert_eq!(t.coordinate_to_index(0, 0)?, 0);
        assert_eq!(t.coordinate_to_index(0, 1)?, 1);
        assert_eq!(t.coordinate_to_index(1, 1)?, 2);
        assert_eq!(t.coordinate_to_index(1, 0)?, 3);
        for (i, p) in seq.iter().enumerate() {
            assert_eq!(t.index_to_coordinate(i as u32)?, *p);
        }
        assert_eq!(t.traversal(), seq.as_slice());
        Ok(())
    }

    #[test]
    fn rejects_duplicates() -> error::Result<()> {
        let rect = Rect::new(2, 1)?;
        let err = IndexTables::from_sequence(rect, &pts(&[(0, 0), (0, 0)])).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)), "{err}");
        Ok(())
    }

    #[test]
    fn rejects_out_of_grid_cells() -> error::Result<()> {
        let rect = Rect::new(2, 1)?;
        let err = IndexTables::from_sequence(rect, &pts(&[(0, 0), (2, 0)])).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)), "{err}");
        Ok(())
    }

    #[test]
    fn rejects_short_sequences() -> error::Result<()> {
        let rect = Rect::new(3, 1)?;
        let err = IndexTables::from_sequence(rect, &pts(&[(0, 0), (1, 0)])).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)), "{err}");
        Ok(())
    }

    #[test]
    fn queries_are_range_checked() -> error::Result<()> {
        let rect = Rect::new(1, 2)?;
        let t = IndexTables::from_sequence(rect, &pts(&[(0, 0), (0, 1)]))?;
        assert!(matches!(
            t.coordinate_to_index(1, 0),
            Err(Error::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            t.coordinate_to_index(0, 2),
            Err(Error::CoordinateOutOfRange { .. })
        ));
        assert_eq!(
            t.index_to_coordinate(2),
            Err(Error::IndexOutOfRange {
                index: 2,
                length: 2
            })
        );
        Ok(())
    }
}
