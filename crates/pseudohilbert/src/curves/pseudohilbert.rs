use tracing::debug;

use crate::{
    builder, error,
    orientation::Orientation,
    point::Point,
    rect::Rect,
    spacecurve::SpaceCurve,
    tables::IndexTables,
};

/// A Hilbert-like curve over an arbitrary `width × height` rectangle.
///
/// The traversal is built once at construction and materialised into dense
/// lookup tables; queries are O(1). Consecutive indices always map to
/// edge-adjacent cells, and a 2^n × 2^n grid yields the classical Hilbert
/// order.
#[derive(Debug, Clone)]
pub struct PseudoHilbert {
    /// Orientation actually used, after fitting to the grid.
    orientation: Orientation,
    /// Lookup tables for both directions.
    tables: IndexTables,
}

impl PseudoHilbert {
    /// Build a curve entering at the bottom-left cell and crossing along `x`
    /// where the grid's parity allows.
    pub fn new(width: u32, height: u32) -> error::Result<Self> {
        Self::with_orientation(width, height, Orientation::default())
    }

    /// Build a curve entering at `orientation`'s start corner.
    ///
    /// The major axis is a preference: when an adjacent crossing along it is
    /// impossible the axes are swapped, see [`Orientation::fit`].
    pub fn with_orientation(
        width: u32,
        height: u32,
        orientation: Orientation,
    ) -> error::Result<Self> {
        let rect = Rect::new(width, height)?;
        let (orientation, seq) = builder::build(&rect, orientation)?;
        let tables = IndexTables::from_sequence(rect, &seq)?;
        debug!(width, height, %orientation, "built pseudo-Hilbert curve");
        Ok(Self {
            orientation,
            tables,
        })
    }

    /// Position of `(x, y)` along the curve.
    pub fn coordinate_to_index(&self, x: u32, y: u32) -> error::Result<u32> {
        self.tables.coordinate_to_index(x, y)
    }

    /// Cell at position `index` along the curve.
    pub fn index_to_coordinate(&self, index: u32) -> error::Result<(u32, u32)> {
        self.tables.index_to_coordinate(index).map(Into::into)
    }

    /// The fitted orientation the curve was built with.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells in curve order.
    pub fn traversal(&self) -> &[Point] {
        self.tables.traversal()
    }

    /// First cell of the curve, always a corner of the grid.
    pub fn start(&self) -> Point {
        self.traversal()[0]
    }

    /// Last cell of the curve.
    pub fn end(&self) -> Point {
        self.traversal()[self.traversal().len() - 1]
    }
}

impl SpaceCurve for PseudoHilbert {
    fn name(&self) -> &'static str {
        "Pseudo-Hilbert"
    }

    fn info(&self) -> &'static str {
        "Hilbert curve generalised to arbitrary rectangles by recursive\n\
        two- and three-way splits with even split points. Continuous on\n\
        every grid; starts and ends on corners; matches the classical\n\
        Hilbert curve on 2^n squares."
    }

    fn width(&self) -> u32 {
        self.tables.rect().width()
    }

    fn height(&self) -> u32 {
        self.tables.rect().height()
    }

    fn length(&self) -> u32 {
        self.tables.rect().length()
    }

    fn index(&self, p: Point) -> error::Result<u32> {
        self.tables.coordinate_to_index(p.x, p.y)
    }

    fn point(&self, index: u32) -> error::Result<Point> {
        self.tables.index_to_coordinate(index)
    }
}
