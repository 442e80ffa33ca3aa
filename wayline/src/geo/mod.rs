//! Geometries in geographic coordinates (latitude and longitude) and conversion of those
//! into a local cartesian coordinate system (see [`projection`]).

mod datum;
mod point;
pub mod projection;

pub use datum::{Datum, EARTH_EQUATORIAL_RADIUS};
pub use point::GeoPoint;

/// Ratio of a circle's circumference to its diameter, re-exported for callers doing
/// angle math by hand.
pub use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
pub fn deg2rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
pub fn rad2deg(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn angle_conversions_are_inverse() {
        assert_eq!(deg2rad(180.0), PI);
        assert_eq!(rad2deg(PI), 180.0);
        assert_abs_diff_eq!(rad2deg(deg2rad(52.5)), 52.5, epsilon = 1e-12);
    }
}
