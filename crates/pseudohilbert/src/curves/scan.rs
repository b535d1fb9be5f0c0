use crate::{
    error,
    orientation::Orientation,
    point::Point,
    rect::Rect,
    spacecurve::SpaceCurve,
};

/// Bidirectional raster (boustrophedon) scan.
///
/// Rows run along the orientation's major direction and alternate direction,
/// stacking away from the entry corner along the minor direction. Each of the
/// eight orientations gives a distinct scan. Unlike [`super::PseudoHilbert`]
/// no tables are kept; both lookups are arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct Scan {
    /// Grid extents.
    rect: Rect,
    /// Entry corner and row direction.
    orientation: Orientation,
    /// First cell of the scan.
    start: Point,
}

impl Scan {
    /// Row-by-row scan entering at the bottom-left cell.
    pub fn new(width: u32, height: u32) -> error::Result<Self> {
        Self::with_orientation(width, height, Orientation::default())
    }

    /// Scan entering at `orientation`'s start corner, rows along its major
    /// axis.
    pub fn with_orientation(
        width: u32,
        height: u32,
        orientation: Orientation,
    ) -> error::Result<Self> {
        let rect = Rect::new(width, height)?;
        Ok(Self {
            rect,
            orientation,
            start: orientation.start_corner().cell(&rect),
        })
    }

    /// The orientation the scan was built with.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of one row.
    fn row_len(&self) -> u32 {
        self.orientation.extents(&self.rect).0
    }
}

impl SpaceCurve for Scan {
    fn name(&self) -> &'static str {
        "Scan"
    }

    fn info(&self) -> &'static str {
        "Bidirectional raster scan. Traverses rows alternating left-to-right\n\
        and right-to-left, like an ox ploughing a field. Continuous on every\n\
        grid, but neighbouring rows drift apart in index."
    }

    fn width(&self) -> u32 {
        self.rect.width()
    }

    fn height(&self) -> u32 {
        self.rect.height()
    }

    fn length(&self) -> u32 {
        self.rect.length()
    }

    fn index(&self, p: Point) -> error::Result<u32> {
        self.rect.check(p)?;
        let (mx, my) = self.orientation.major().delta();
        let (nx, ny) = self.orientation.minor().delta();
        let dx = i64::from(p.x) - i64::from(self.start.x);
        let dy = i64::from(p.y) - i64::from(self.start.y);
        // Both projections are non-negative for cells inside the grid.
        let along = (dx * mx + dy * my) as u32;
        let row = (dx * nx + dy * ny) as u32;
        let len = self.row_len();
        let col = if row % 2 == 1 { len - 1 - along } else { along };
        Ok(row * len + col)
    }

    fn point(&self, index: u32) -> error::Result<Point> {
        self.rect.check_index(index)?;
        let len = self.row_len();
        let row = index / len;
        let mut col = index % len;
        if row % 2 == 1 {
            col = len - 1 - col;
        }
        let (mx, my) = self.orientation.major().delta();
        let (nx, ny) = self.orientation.minor().delta();
        let (col, row) = (i64::from(col), i64::from(row));
        let x = i64::from(self.start.x) + mx * col + nx * row;
        let y = i64::from(self.start.y) + my * col + ny * row;
        Ok(Point::new(x as u32, y as u32))
    }
}
