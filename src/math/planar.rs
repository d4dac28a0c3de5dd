//! Helpers for the horizontal (XZ) plane. `+Y` is up; positive angles turn
//! counter-clockwise when viewed from above.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Rotation3;

use super::Vector3;

/// Rotates `v` by `angle` radians about the vertical axis.
#[must_use]
pub fn rotate_about_vertical(v: &Vector3, angle: f64) -> Vector3 {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle) * v
}

/// Unit vector pointing to the left of the horizontal direction `direction`.
#[must_use]
pub fn leftward(direction: &Vector3) -> Vector3 {
    rotate_about_vertical(&direction.normalize(), FRAC_PI_2)
}

/// Unit vector pointing to the right of the horizontal direction `direction`.
#[must_use]
pub fn rightward(direction: &Vector3) -> Vector3 {
    rotate_about_vertical(&direction.normalize(), -FRAC_PI_2)
}

/// Projects `v` onto the horizontal plane.
#[must_use]
pub fn horizontal(v: &Vector3) -> Vector3 {
    Vector3::new(v.x, 0.0, v.z)
}

/// Slope angle in radians of a run of horizontal length `run` gaining `rise`.
#[must_use]
pub fn slope_angle(rise: f64, run: f64) -> f64 {
    rise.atan2(run)
}
