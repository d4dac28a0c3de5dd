//! Built-in layouts.
//!
//! All four share the same characteristics (20 wide, 5 thick, 10-long pieces,
//! 5° slope increment) and start heading along `+X` with the path surface at
//! the track thickness above the ground plane.

use std::f64::consts::SQRT_2;

use crate::error::LayoutError;
use crate::math::{Point3, Vector3};

use super::{Characteristics, Color, HorizonSpec, LayoutDescriptor, Origin, Section};

/// Number of layouts in the catalog.
pub const LAYOUT_COUNT: usize = 4;

const TRACK_WIDTH: f64 = 20.0;
const TRACK_THICKNESS: f64 = 5.0;
const PIECE_LENGTH: f64 = 10.0;
const SLOPE_INCREMENT_DEGREES: f64 = 5.0;
const TRACK_COLOR: Color = Color(0x90_5020);

/// Names of the catalog layouts, by index.
pub const LAYOUT_NAMES: [&str; LAYOUT_COUNT] = [
    "flat oval",
    "sloped oval",
    "oval with 540° helix",
    "right-hand helix circuit",
];

/// Returns the catalog layout at `index`, clamped into range.
///
/// # Errors
///
/// Returns an error only if the built-in data fails validation.
pub fn select(index: usize) -> Result<LayoutDescriptor, LayoutError> {
    match index.min(LAYOUT_COUNT - 1) {
        0 => flat_oval(),
        1 => sloped_oval(),
        2 => helix_oval(),
        _ => helix_circuit(),
    }
}

/// Returns every catalog layout in index order.
///
/// # Errors
///
/// Returns an error only if the built-in data fails validation.
pub fn layouts() -> Result<Vec<LayoutDescriptor>, LayoutError> {
    (0..LAYOUT_COUNT).map(select).collect()
}

fn characteristics(horizon_distance: f64, ground: &str) -> Result<Characteristics, LayoutError> {
    let horizon = HorizonSpec::parse(
        horizon_distance,
        [
            "homeWestMirrored.jpg",
            "homeEastMirrored.jpg",
            "!8888ff",
            ground,
            "homeNorthMirrored.jpg",
            "homeSouthMirrored.jpg",
        ],
    )?;
    Ok(Characteristics::new(
        TRACK_WIDTH,
        TRACK_THICKNESS,
        PIECE_LENGTH,
        SLOPE_INCREMENT_DEGREES,
        TRACK_COLOR,
        horizon,
    ))
}

fn origin_at(x: f64) -> Origin {
    Origin::new(Point3::new(x, TRACK_THICKNESS, 50.0), Vector3::new(1.0, 0.0, 0.0))
}

/// Two 300-long straights joined by 180° left turns of radius 50, all level.
fn flat_oval() -> Result<LayoutDescriptor, LayoutError> {
    LayoutDescriptor::new(
        characteristics(500.0, "!ffcc22")?,
        origin_at(-150.0),
        vec![
            Section::straight(300.0, 0.0),
            Section::curve_left_degrees(50.0, 180.0, 0.0),
            Section::straight(300.0, 0.0),
            Section::curve_left_degrees(50.0, 180.0, 0.0),
        ],
    )
}

/// The flat oval with one straight climbing 20 and the other descending 20.
fn sloped_oval() -> Result<LayoutDescriptor, LayoutError> {
    LayoutDescriptor::new(
        characteristics(500.0, "concrete.jpg")?,
        origin_at(-150.0),
        vec![
            Section::straight(300.0, 20.0),
            Section::curve_left_degrees(50.0, 180.0, 0.0),
            Section::straight(300.0, -20.0),
            Section::curve_left_degrees(50.0, 180.0, 0.0),
        ],
    )
}

/// An oval whose first turn is a climbing 540° helix.
fn helix_oval() -> Result<LayoutDescriptor, LayoutError> {
    LayoutDescriptor::new(
        characteristics(1500.0, "concrete.jpg")?,
        origin_at(-150.0),
        vec![
            Section::straight(300.0, 10.0),
            Section::curve_left_degrees(50.0, 540.0, 50.0),
            Section::straight(300.0, -25.0),
            Section::curve_left_degrees(50.0, 180.0, -35.0),
        ],
    )
}

/// A circuit with a climbing right-hand 540° helix and a long descent.
fn helix_circuit() -> Result<LayoutDescriptor, LayoutError> {
    LayoutDescriptor::new(
        characteristics(1500.0, "concrete.jpg")?,
        origin_at(-300.0),
        vec![
            Section::straight(300.0, 0.0),
            Section::curve_left_degrees(50.0, 135.0, 10.0),
            Section::curve_right_degrees(50.0, 540.0, 50.0),
            Section::straight(200.0, 0.0),
            Section::curve_left_degrees(50.0, 135.0, -10.0),
            Section::straight(200.0, 0.0),
            Section::curve_left_degrees(50.0, 90.0, 0.0),
            Section::straight(300.0 + 400.0 / SQRT_2, -50.0),
            Section::curve_left_degrees(50.0, 90.0, 0.0),
            Section::straight(200.0, 0.0),
            Section::curve_left_degrees(50.0, 90.0, 0.0),
        ],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn every_layout_validates() {
        assert_eq!(layouts().unwrap().len(), LAYOUT_COUNT);
    }

    #[test]
    fn index_is_clamped() {
        assert_eq!(select(99).unwrap(), select(LAYOUT_COUNT - 1).unwrap());
    }

    #[test]
    fn every_layout_closes_vertically() {
        for layout in layouts().unwrap() {
            assert_relative_eq!(layout.total_rise(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn flat_oval_matches_reference_dimensions() {
        let layout = select(0).unwrap();
        let c = layout.characteristics();
        assert_relative_eq!(c.track_width, 20.0);
        assert_relative_eq!(c.track_thickness, 5.0);
        assert_relative_eq!(c.piece_length, 10.0);
        assert_eq!(layout.sections().len(), 4);
        assert_relative_eq!(layout.origin().location, Point3::new(-150.0, 5.0, 50.0));
    }
}
