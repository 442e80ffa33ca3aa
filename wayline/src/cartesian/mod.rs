//! Types and functions on geometries in cartesian coordinates.

mod point;
mod polygon;
mod polyline;

pub use point::{BoundPoints, Point};
pub use polygon::{Polygon, Winding};
pub use polyline::{dist, dot, point_on_path, polyline_lengths};
