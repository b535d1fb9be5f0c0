//! Minimal pseudo-Hilbert example: map an index to a cell and back.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A 5x3 grid: neither side is a power of two.
    let curve = pseudohilbert::PseudoHilbert::new(5, 3)?;
    println!(
        "5x3 pseudo-Hilbert: starts at {}, ends at {}",
        curve.start(),
        curve.end()
    );

    let index = 7;
    let (x, y) = curve.index_to_coordinate(index)?;
    println!("Cell at index {index}: ({x}, {y})");

    let round_trip = curve.coordinate_to_index(x, y)?;
    println!("Index for ({x}, {y}): {round_trip}");

    assert_eq!(round_trip, index);

    Ok(())
}
