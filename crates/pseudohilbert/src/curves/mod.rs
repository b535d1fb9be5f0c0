/// Pseudo-Hilbert curve over arbitrary rectangles.
pub mod pseudohilbert;
/// Bidirectional raster scan.
pub mod scan;

pub use pseudohilbert::PseudoHilbert;
pub use scan::Scan;
