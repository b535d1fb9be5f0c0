//! Image rendering helpers used by the CLI.
//!
//! A curve is drawn as a polyline through the centres of its cells, in index
//! order. Each grid cell occupies a `scale × scale` pixel square and the grid
//! origin is the bottom-left of the image.

use std::ops::Range;

use image::{Rgba, RgbaImage};
use pseudohilbert::{Point, SpaceCurve, error};

/// Colors used when rendering a map image.
#[derive(Clone, Copy, Debug)]
pub struct MapPalette {
    /// Color for the curve strokes.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

/// Stroke styling for rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Colors for foreground/background.
    pub palette: MapPalette,
}

/// Pixel centre of `p` on a grid `rows` cells high, flipping `y` so the
/// origin sits at the bottom.
fn cell_center(p: Point, scale: u32, rows: u32) -> (i64, i64) {
    let scale = i64::from(scale);
    let half = scale / 2;
    let flipped = i64::from(rows) - 1 - i64::from(p.y);
    (i64::from(p.x) * scale + half, flipped * scale + half)
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = i64::from(size.is_multiple_of(2));
    for y in (cy - radius)..=(cy + radius + extra) {
        for x in (cx - radius)..=(cx + radius + extra) {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a straight segment between two cell centres. Curve steps are always
/// axis-aligned, so a simple walk along the longer axis suffices.
fn draw_segment(
    img: &mut RgbaImage,
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    col: Rgba<u8>,
    line_width: u32,
) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs());
    if steps == 0 {
        stamp_square(img, x0, y0, line_width, col);
        return;
    }
    for i in 0..=steps {
        let x = x0 + (x1 - x0) * i / steps;
        let y = y0 + (y1 - y0) * i / steps;
        stamp_square(img, x, y, line_width, col);
    }
}

/// Render the cells of `pattern` with indices in `chunk`.
///
/// The image is `width * scale` by `height * scale` pixels; callers are
/// responsible for keeping that within reasonable bounds.
pub fn render_map_image(
    scale: u32,
    chunk: Range<u32>,
    stroke: StrokeOptions,
    pattern: &dyn SpaceCurve,
) -> error::Result<RgbaImage> {
    let (cols, rows) = (pattern.width(), pattern.height());
    let mut img = RgbaImage::from_pixel(cols * scale, rows * scale, stroke.palette.background);
    let line_width = stroke.line_width.max(1);
    let end = chunk.end.min(pattern.length());

    if chunk.start >= end {
        return Ok(img);
    }

    let mut prev = cell_center(pattern.point(chunk.start)?, scale, rows);
    // A lone cell still gets a dot.
    draw_segment(&mut img, prev, prev, stroke.palette.foreground, line_width);
    for idx in (chunk.start + 1)..end {
        let next = cell_center(pattern.point(idx)?, scale, rows);
        draw_segment(&mut img, prev, next, stroke.palette.foreground, line_width);
        prev = next;
    }
    Ok(img)
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use pseudohilbert::{Point, SpaceCurve, error};

    use super::*;

    #[derive(Debug)]
    struct StubPattern {
        width: u32,
        height: u32,
        points: Vec<Point>,
    }

    impl StubPattern {
        fn new(width: u32, height: u32, coords: Vec<[u32; 2]>) -> Self {
            let points = coords.into_iter().map(Point::from).collect();
            Self {
                width,
                height,
                points,
            }
        }
    }

    impl SpaceCurve for StubPattern {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn info(&self) -> &'static str {
            "stub"
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn length(&self) -> u32 {
            self.points.len() as u32
        }

        fn index(&self, p: Point) -> error::Result<u32> {
            Ok(self
                .points
                .iter()
                .position(|candidate| *candidate == p)
                .expect("point not found") as u32)
        }

        fn point(&self, index: u32) -> error::Result<Point> {
            Ok(self.points[index as usize])
        }
    }

    fn stroke() -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            palette: MapPalette {
                foreground: Rgba([1, 2, 3, 255]),
                background: Rgba([0, 0, 0, 0]),
            },
        }
    }

    #[test]
    fn image_is_scaled_grid() -> error::Result<()> {
        let pattern = StubPattern::new(3, 2, vec![[0, 0], [1, 0], [2, 0]]);
        let img = render_map_image(10, 0..3, stroke(), &pattern)?;
        assert_eq!(img.dimensions(), (30, 20));
        Ok(())
    }

    #[test]
    fn origin_is_bottom_left() -> error::Result<()> {
        let pattern = StubPattern::new(2, 2, vec![[0, 0], [1, 0]]);
        let img = render_map_image(10, 0..2, stroke(), &pattern)?;
        // Bottom row of cells has pixel centres at y = 15.
        assert_eq!(img.get_pixel(10, 15), &stroke().palette.foreground);
        assert_eq!(img.get_pixel(10, 5), &stroke().palette.background);
        Ok(())
    }

    #[test]
    fn render_respects_chunk_range() -> error::Result<()> {
        let pattern = StubPattern::new(2, 2, vec![[0, 0], [1, 0], [1, 1]]);
        let s = stroke();

        let full = render_map_image(10, 0..pattern.length(), s, &pattern)?;
        let partial = render_map_image(10, 0..2, s, &pattern)?;

        // Midpoint of the vertical step from (1, 0) to (1, 1).
        assert_eq!(partial.get_pixel(15, 10), &s.palette.background);
        assert_eq!(full.get_pixel(15, 10), &s.palette.foreground);
        Ok(())
    }

    #[test]
    fn single_cell_gets_a_dot() -> error::Result<()> {
        let pattern = StubPattern::new(1, 1, vec![[0, 0]]);
        let img = render_map_image(4, 0..1, stroke(), &pattern)?;
        assert_eq!(img.get_pixel(2, 2), &stroke().palette.foreground);
        Ok(())
    }

    #[test]
    fn empty_chunk_renders_background() -> error::Result<()> {
        let pattern = StubPattern::new(2, 1, vec![[0, 0], [1, 0]]);
        let img = render_map_image(4, 1..1, stroke(), &pattern)?;
        assert!(img.pixels().all(|p| *p == stroke().palette.background));
        Ok(())
    }
}
