use super::{backend, Projection};
use crate::cartesian::Point;
use crate::error::WaylineError;
use crate::geo::GeoPoint;

/// Universal Transverse Mercator projection in the zone of the center point.
///
/// The zone is selected by the longitude of the *center*, the hemisphere by the sign of
/// its latitude, and both input points are projected into that single zone. Coordinates
/// are the usual UTM easting and northing in meters, including the false easting of
/// 500 km, so unlike the other strategies the center itself does not map to the origin.
///
/// Delegates to the PROJ backend, so it requires the `proj` feature; without it every
/// call returns [`WaylineError::BackendUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Utm;

impl Utm {
    /// Number of the UTM zone containing the given longitude (in degrees).
    ///
    /// Zones are 6 degrees wide, numbered from 1 starting at 180°W. The antimeridian
    /// itself yields 61, which no zone has; the backend rejects it when the transform is
    /// built.
    pub fn zone_from_lon(lon_deg: f64) -> i32 {
        ((lon_deg + 180.0) / 6.0).floor() as i32 + 1
    }
}

impl Projection for Utm {
    fn geo_to_xy(&self, center: &GeoPoint, point: &GeoPoint) -> Result<Point, WaylineError> {
        let zone = Self::zone_from_lon(center.lon);
        let south = if center.lat < 0.0 { " +south" } else { "" };
        let definition =
            format!("+proj=utm +zone={zone}{south} +datum=WGS84 +units=m +no_defs");
        backend::transform(&definition, point)
    }
}
