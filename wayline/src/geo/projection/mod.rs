//! Projections of geographic coordinates onto a local cartesian plane.
//!
//! All projections here share a single operation: [`Projection::geo_to_xy`] maps a
//! geographic point into planar meters relative to a center point. Three strategies are
//! provided, differing in accuracy and in what they require to run:
//!
//! * [`Equirectangular`] scales latitude and longitude offsets linearly on a sphere. It
//!   is a closed formula with no dependencies, accurate to within a fraction of a percent
//!   for points within a few kilometers of the center.
//! * [`Aeqd`] projects through an azimuthal equidistant projection centered at the center
//!   point, preserving true distances from the center. Requires the PROJ backend.
//! * [`Utm`] projects into the Universal Transverse Mercator zone of the center point.
//!   Requires the PROJ backend.
//!
//! The PROJ backend is compiled in with the `proj` cargo feature; [`backend_available`]
//! reports whether it is present. Without it, [`Aeqd`] and [`Utm`] return
//! [`WaylineError::BackendUnavailable`] from every call. There is no silent fallback to
//! the less accurate strategy: callers that can tolerate one substitute it themselves.
//!
//! ```
//! use wayline::geo::projection::{backend_available, Aeqd, Equirectangular, Projection};
//! use wayline::latlon;
//! use wayline::WaylineError;
//!
//! let center = latlon!(52.0, 5.0);
//! let point = latlon!(52.1, 5.1);
//!
//! let planar = match Aeqd.geo_to_xy(&center, &point) {
//!     Err(WaylineError::BackendUnavailable(_)) => {
//!         Equirectangular::default().geo_to_xy(&center, &point)
//!     }
//!     other => other,
//! }?;
//! # Ok::<(), wayline::WaylineError>(())
//! ```

mod aeqd;
mod backend;
mod equirectangular;
mod utm;

pub use aeqd::Aeqd;
pub use equirectangular::Equirectangular;
pub use utm::Utm;

use crate::cartesian::Point;
use crate::error::WaylineError;
use crate::geo::GeoPoint;

/// A strategy converting geographic coordinates to planar meters relative to a center
/// point.
///
/// Implementations are stateless and reentrant; the altitude of the input points is
/// ignored, the output is always planar.
pub trait Projection {
    /// Projects `point` onto the cartesian plane with the origin at `center`.
    fn geo_to_xy(&self, center: &GeoPoint, point: &GeoPoint) -> Result<Point, WaylineError>;
}

/// Selector of the projection strategy, for callers choosing one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// The spherical equirectangular approximation; always available.
    Equirectangular,
    /// The azimuthal equidistant projection; requires the `proj` feature.
    Aeqd,
    /// The Universal Transverse Mercator projection; requires the `proj` feature.
    Utm,
}

impl ProjectionKind {
    /// Creates the projection this kind selects.
    pub fn projection(&self) -> Box<dyn Projection> {
        match self {
            ProjectionKind::Equirectangular => Box::new(Equirectangular::default()),
            ProjectionKind::Aeqd => Box::new(Aeqd),
            ProjectionKind::Utm => Box::new(Utm),
        }
    }
}

/// Whether the external projection backend is compiled in.
///
/// [`Aeqd`] and [`Utm`] return [`WaylineError::BackendUnavailable`] from every call when
/// this returns `false`.
pub fn backend_available() -> bool {
    cfg!(feature = "proj")
}
