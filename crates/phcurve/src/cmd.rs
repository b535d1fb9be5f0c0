//! Command handlers for the `phcurve` CLI.
//!
//! These functions build the requested curve, run the query or render, and
//! return plain values; printing and file output live in `main`.

use std::{collections::HashSet, fmt, ops::Range};

use anyhow::{Result, bail};
use image::RgbaImage;
use pseudohilbert::{Orientation, Point, SpaceCurve, error, registry};
use tracing::{debug, info};

use crate::map::{StrokeOptions, render_map_image};

/// Largest image side, in pixels, that `map` will produce.
const MAX_IMAGE_SIDE: u32 = 16_384;

/// Curve selection shared by every subcommand.
#[derive(Clone, Copy, Debug)]
pub struct CurveSpec<'a> {
    /// Registered curve name.
    pub pattern: &'a str,
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Requested entry corner and major axis.
    pub orientation: Orientation,
}

impl CurveSpec<'_> {
    /// Build the curve.
    pub fn build(&self) -> Result<Box<dyn SpaceCurve>> {
        let curve = registry::construct(self.pattern, self.width, self.height, self.orientation)?;
        debug!(
            pattern = self.pattern,
            width = self.width,
            height = self.height,
            "constructed curve"
        );
        Ok(curve)
    }
}

/// Render a map of a curve.
///
/// - `scale`: Pixels per grid cell.
/// - `chunk`: Optional [start, end) offsets limiting which part of the curve is drawn.
/// - `stroke`: Stroke rendering options.
pub fn map(
    spec: &CurveSpec<'_>,
    scale: u32,
    chunk: Option<Range<u32>>,
    stroke: StrokeOptions,
) -> Result<RgbaImage> {
    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    if scale == 0 {
        bail!("scale must be >= 1");
    }
    for (label, cells) in [("width", spec.width), ("height", spec.height)] {
        match cells.checked_mul(scale) {
            Some(px) if px <= MAX_IMAGE_SIDE => {}
            _ => bail!(
                "image {label} of {cells} cells at scale {scale} exceeds {MAX_IMAGE_SIDE} pixels"
            ),
        }
    }

    let pattern = spec.build()?;
    let length = pattern.length();
    let chunk = chunk.unwrap_or(0..length);

    if chunk.start >= chunk.end {
        bail!("chunk start must be less than chunk end");
    }

    if chunk.end > length {
        bail!(
            "chunk end {} exceeds curve length {} for pattern '{}'",
            chunk.end,
            length,
            spec.pattern
        );
    }

    info!(scale, start = chunk.start, end = chunk.end, "rendering map");
    Ok(render_map_image(scale, chunk, stroke, &*pattern)?)
}

/// Render the coordinate → index table as text, top row first.
pub fn grid(spec: &CurveSpec<'_>) -> Result<String> {
    let pattern = spec.build()?;
    let cell_width = (pattern.length() - 1).to_string().len();
    let mut out = String::new();
    for y in (0..pattern.height()).rev() {
        let row = (0..pattern.width())
            .map(|x| {
                pattern
                    .index(Point::new(x, y))
                    .map(|i| format!("{i:>cell_width$}"))
            })
            .collect::<error::Result<Vec<_>>>()?;
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    Ok(out)
}

/// Index of the cell `(x, y)`.
pub fn index(spec: &CurveSpec<'_>, x: u32, y: u32) -> Result<u32> {
    Ok(spec.build()?.index(Point::new(x, y))?)
}

/// Cell at `index`.
pub fn point(spec: &CurveSpec<'_>, index: u32) -> Result<Point> {
    Ok(spec.build()?.point(index)?)
}

/// Outcome of verifying a curve's traversal invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of cells on the curve.
    pub length: u32,
    /// First cell.
    pub start: Point,
    /// Last cell.
    pub end: Point,
    /// Whether every cell is visited exactly once and lookups invert.
    pub bijective: bool,
    /// Offsets `i` where cells `i` and `i + 1` are not adjacent.
    pub jumps: Vec<u32>,
}

impl CheckReport {
    /// True when the curve satisfies every checked invariant.
    pub fn passed(&self) -> bool {
        self.bijective && self.jumps.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        writeln!(f, "length: {}", self.length)?;
        writeln!(f, "start: {}", self.start)?;
        writeln!(f, "end: {}", self.end)?;
        writeln!(f, "bijective: {}", yes_no(self.bijective))?;
        write!(f, "continuous: {}", yes_no(self.jumps.is_empty()))?;
        if !self.jumps.is_empty() {
            write!(f, " (jumps after {:?})", self.jumps)?;
        }
        Ok(())
    }
}

/// Walk the whole curve and verify bijection and adjacency.
pub fn check(spec: &CurveSpec<'_>) -> Result<CheckReport> {
    let pattern = spec.build()?;
    let length = pattern.length();
    let mut seen = HashSet::with_capacity(length as usize);
    let mut bijective = true;
    let mut jumps = Vec::new();
    let mut prev: Option<Point> = None;

    for i in 0..length {
        let p = pattern.point(i)?;
        bijective &= seen.insert(p) && pattern.index(p)? == i;
        if let Some(q) = prev
            && !q.is_adjacent(&p)
        {
            jumps.push(i - 1);
        }
        prev = Some(p);
    }

    Ok(CheckReport {
        length,
        start: pattern.point(0)?,
        end: pattern.point(length - 1)?,
        bijective,
        jumps,
    })
}
