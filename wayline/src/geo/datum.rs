/// Equatorial radius of the Earth in meters, as defined by the WGS84 ellipsoid.
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Parameters of a reference ellipsoid approximating the shape of the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// The WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: EARTH_EQUATORIAL_RADIUS,
        inv_flattening: 298.257223563,
    };

    /// Semimajor axis of the ellipsoid in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
