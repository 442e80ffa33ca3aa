use super::Projection;
use crate::cartesian::Point;
use crate::error::WaylineError;
use crate::geo::{Datum, GeoPoint};

/// Spherical equirectangular approximation of the neighborhood of the center point.
///
/// Latitude offsets map to meters along the meridian, longitude offsets to meters along
/// the parallel of the center, scaled by the cosine of the center's latitude:
///
/// ```text
/// x = R * (lon - lon0) * cos(lat0)
/// y = R * (lat - lat0)
/// ```
///
/// with the angles in radians and `R` the semimajor axis of the datum. The approximation
/// ignores the flattening of the ellipsoid and the convergence of meridians away from the
/// center, so the error grows with the distance from the center. It never fails and needs
/// no external backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct Equirectangular {
    datum: Datum,
}

impl Equirectangular {
    /// Creates a projection over the given reference ellipsoid.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }
}

impl Projection for Equirectangular {
    fn geo_to_xy(&self, center: &GeoPoint, point: &GeoPoint) -> Result<Point, WaylineError> {
        let lat0 = center.lat_rad();
        let lon0 = center.lon_rad();

        let x = self.datum.semimajor() * (point.lon_rad() - lon0) * lat0.cos();
        let y = self.datum.semimajor() * (point.lat_rad() - lat0);

        Ok(Point::new(x, y))
    }
}
