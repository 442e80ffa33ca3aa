use serde::{Deserialize, Serialize};

/// A point on the surface of the Earth in geographic coordinates.
///
/// The altitude is optional: `None` means the altitude is not known, which is not the
/// same as an altitude of zero. None of the operations in this crate read the altitude,
/// but it travels with the point.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Altitude in meters, if known.
    pub alt: Option<f64>,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude values (in degrees), with no
    /// altitude.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            alt: None,
        }
    }

    /// Creates a new point with a known altitude (in meters).
    pub const fn latlon_alt(lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            lat,
            lon,
            alt: Some(alt),
        }
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }
}

/// Creates a new [`GeoPoint`](crate::geo::GeoPoint) from latitude and longitude values
/// (in degrees).
///
/// ```
/// use wayline::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat, 38.0);
/// assert_eq!(point.alt, None);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::GeoPoint::latlon($lat, $lon)
    };
}
