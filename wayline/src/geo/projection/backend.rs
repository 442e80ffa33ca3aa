//! Delegation to the PROJ backend, the single point where its availability is decided.

use crate::cartesian::Point;
use crate::error::WaylineError;
use crate::geo::GeoPoint;

/// Definition of the source coordinates of every transform: geographic WGS84.
#[cfg(feature = "proj")]
const WGS84_LONLAT: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Builds the transform from geographic WGS84 to `definition` and applies it to `point`.
///
/// The transform handle lives only for the duration of the call and is released on every
/// exit path.
#[cfg(feature = "proj")]
pub(super) fn transform(definition: &str, point: &GeoPoint) -> Result<Point, WaylineError> {
    use proj::Proj;

    let transform = Proj::new_known_crs(WGS84_LONLAT, definition, None).map_err(|e| {
        WaylineError::ProjectionFailed(format!("failed to create transform: {e}"))
    })?;

    let (x, y) = transform
        .convert((point.lon, point.lat))
        .map_err(|e| WaylineError::ProjectionFailed(format!("transform failed: {e}")))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(WaylineError::ProjectionFailed(format!(
            "transform produced non-finite coordinates for lat {}, lon {}",
            point.lat, point.lon
        )));
    }

    Ok(Point::new(x, y))
}

/// Reports the backend unavailable; the crate is built without it.
#[cfg(not(feature = "proj"))]
pub(super) fn transform(_definition: &str, _point: &GeoPoint) -> Result<Point, WaylineError> {
    Err(WaylineError::BackendUnavailable(
        "the crate is built without the `proj` feature",
    ))
}
