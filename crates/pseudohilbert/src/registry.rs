//! Curve metadata and name-based construction.

use crate::{
    curves::{PseudoHilbert, Scan},
    error::{self, Error},
    orientation::Orientation,
    rect::Rect,
    spacecurve::SpaceCurve,
};

/// Registry entry describing one curve.
#[derive(Debug, Clone, Copy)]
pub struct CurveEntry {
    /// Lookup key used on the command line.
    pub key: &'static str,
    /// Display name.
    pub display: &'static str,
    /// Human-readable size constraints.
    pub constraints: &'static str,
}

/// All registered curves.
pub const REGISTRY: &[CurveEntry] = &[
    CurveEntry {
        key: "pseudohilbert",
        display: "Pseudo-Hilbert",
        constraints: "any width/height >= 1; width*height < 2^32",
    },
    CurveEntry {
        key: "scan",
        display: "Scan",
        constraints: "any width/height >= 1; width*height < 2^32",
    },
];

/// Registered curve keys.
pub const CURVE_NAMES: &[&str] = &["pseudohilbert", "scan"];

/// Look up a registry entry by key.
pub fn entry(name: &str) -> Option<&'static CurveEntry> {
    REGISTRY.iter().find(|e| e.key == name)
}

/// Check that `name` is registered and the grid is valid, without building
/// anything.
pub fn validate(name: &str, width: u32, height: u32) -> error::Result<()> {
    if entry(name).is_none() {
        return Err(Error::UnknownCurve(name.to_string()));
    }
    Rect::new(width, height).map(|_| ())
}

/// Construct a curve by name.
pub fn construct(
    name: &str,
    width: u32,
    height: u32,
    orientation: Orientation,
) -> error::Result<Box<dyn SpaceCurve + 'static>> {
    match name {
        "pseudohilbert" => Ok(Box::new(PseudoHilbert::with_orientation(
            width,
            height,
            orientation,
        )?)),
        "scan" => Ok(Box::new(Scan::with_orientation(width, height, orientation)?)),
        _ => Err(Error::UnknownCurve(name.to_string())),
    }
}
