use super::{backend, Projection};
use crate::cartesian::Point;
use crate::error::WaylineError;
use crate::geo::GeoPoint;

/// Azimuthal equidistant projection centered at the caller-supplied center point.
///
/// Distances measured from the center to any projected point are true geodesic
/// distances, which makes this projection the reference choice for range-from-center
/// calculations. Delegates to the PROJ backend, so it requires the `proj` feature;
/// without it every call returns [`WaylineError::BackendUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Aeqd;

impl Projection for Aeqd {
    fn geo_to_xy(&self, center: &GeoPoint, point: &GeoPoint) -> Result<Point, WaylineError> {
        let definition = format!(
            "+proj=aeqd +lat_0={} +lon_0={} +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
            center.lat, center.lon
        );
        backend::transform(&definition, point)
    }
}
