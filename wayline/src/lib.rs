//! Wayline provides geometry primitives for working with tracks and areas in planar and
//! geographic coordinates: cumulative polyline lengths with position-by-distance
//! interpolation, polygon areas, and projections of geographic coordinates onto a local
//! cartesian plane.
//!
//! # Quick start
//!
//! Find the point lying a given distance along a track:
//!
//! ```
//! use wayline::cartesian::{point_on_path, Point};
//!
//! let track = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)];
//! let marker = point_on_path(&track, 3.0)?;
//!
//! assert_eq!(marker, Point::new(2.0, 1.0));
//! # Ok::<(), wayline::WaylineError>(())
//! ```
//!
//! Geographic coordinates are converted into planar meters around a center point by one of
//! the [projection strategies](geo::projection):
//!
//! ```
//! use wayline::geo::projection::{Equirectangular, Projection};
//! use wayline::latlon;
//!
//! let center = latlon!(52.0, 5.0);
//! let projection = Equirectangular::default();
//!
//! let xy = projection.geo_to_xy(&center, &latlon!(52.1, 5.1))?;
//! # Ok::<(), wayline::WaylineError>(())
//! ```
//!
//! The azimuthal equidistant and UTM strategies delegate to the PROJ library and are
//! available with the `proj` cargo feature. Without the feature they return
//! [`WaylineError::BackendUnavailable`] instead of falling back to less accurate math, so
//! the caller decides what an acceptable substitute is.

pub mod cartesian;
pub mod error;
pub mod geo;

pub use cartesian::{
    dist, dot, point_on_path, polyline_lengths, BoundPoints, Point, Polygon, Winding,
};
pub use error::WaylineError;
pub use geo::{deg2rad, rad2deg, Datum, GeoPoint, EARTH_EQUATORIAL_RADIUS, PI};
