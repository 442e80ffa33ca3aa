//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum WaylineError {
    /// A polyline operation was called with an empty point list.
    #[error("point list is empty")]
    EmptyPolyline,

    /// The requested distance along a polyline is negative.
    #[error("distance cannot be negative: {0}")]
    NegativeDistance(f64),

    /// The requested distance exceeds the total length of the polyline.
    #[error("distance {distance} exceeds the polyline length {length}")]
    DistanceOutOfRange {
        /// The requested distance from the start of the polyline.
        distance: f64,
        /// The total length of the polyline.
        length: f64,
    },

    /// No positive-length segment contains the requested distance.
    ///
    /// Not returned while the inputs pass the validation in
    /// [`point_on_path`](crate::cartesian::point_on_path); indicates a broken precondition
    /// in the caller if it ever surfaces.
    #[error("no valid segment found at distance {0}")]
    NoValidSegment(f64),

    /// A projection requiring the external backend was called, but the backend is not
    /// compiled in.
    #[error("projection backend is not available: {0}")]
    BackendUnavailable(&'static str),

    /// The projection backend failed to build or apply a transform.
    #[error("projection failed: {0}")]
    ProjectionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let error = WaylineError::DistanceOutOfRange {
            distance: 10.0,
            length: 9.0,
        };
        assert_eq!(error.to_string(), "distance 10 exceeds the polyline length 9");

        let error = WaylineError::NegativeDistance(-0.5);
        assert_eq!(error.to_string(), "distance cannot be negative: -0.5");
    }
}
