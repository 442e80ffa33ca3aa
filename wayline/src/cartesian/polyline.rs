//! Distance measurement and interpolation along polylines.
//!
//! A polyline is an ordered sequence of points connected by straight segments. The
//! functions here parameterize a polyline by the distance from its start:
//! [`polyline_lengths`] computes the cumulative length at every vertex, and
//! [`point_on_path`] finds the point lying exactly at a given distance, interpolating
//! within the containing segment.
//!
//! Consecutive duplicate points are allowed. They produce zero-length segments, which
//! [`point_on_path`] steps over when locating the segment to interpolate in, so a
//! requested distance never lands on a segment the interpolation cannot be computed on.

use crate::cartesian::point::Point;
use crate::error::WaylineError;

/// Euclidean distance between two points.
///
/// Computed through [`f64::hypot`], which does not overflow or underflow on squaring
/// the coordinate differences.
pub fn dist(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Dot product of 2-dimensional vectors `(ax, ay)` and `(bx, by)`.
pub fn dot(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * bx + ay * by
}

/// Cumulative lengths along a polyline: entry `i` is the distance from the start of the
/// polyline to `points[i]`.
///
/// The first entry is always `0.0`, and the sequence never decreases. For an empty input
/// or a single point the result is a single `0.0`.
pub fn polyline_lengths(points: &[Point]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len().max(1));
    lengths.push(0.0);
    for i in 1..points.len() {
        lengths.push(lengths[i - 1] + dist(points[i - 1], points[i]));
    }
    lengths
}

/// Returns the point lying exactly `distance` along the polyline from its start.
///
/// The distances at the ends of the polyline are handled without interpolation: `0.0`
/// returns the first point and the total length returns the last point. Any distance in
/// between is linearly interpolated within the segment that contains it, skipping
/// zero-length segments produced by consecutive duplicate points.
///
/// # Errors
///
/// * [`WaylineError::EmptyPolyline`] when `points` is empty;
/// * [`WaylineError::NegativeDistance`] when `distance` is negative;
/// * [`WaylineError::DistanceOutOfRange`] when `distance` is greater than the total
///   length of the polyline or is NaN.
///
/// ```
/// use wayline::cartesian::{point_on_path, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
/// assert_eq!(point_on_path(&points, 0.5)?, Point::new(0.5, 0.0));
/// # Ok::<(), wayline::WaylineError>(())
/// ```
pub fn point_on_path(points: &[Point], distance: f64) -> Result<Point, WaylineError> {
    if points.is_empty() {
        return Err(WaylineError::EmptyPolyline);
    }
    if distance < 0.0 {
        return Err(WaylineError::NegativeDistance(distance));
    }

    let lengths = polyline_lengths(points);
    let length = lengths[lengths.len() - 1];

    // A NaN distance fails this check as well, which keeps the search below over real
    // numbers only.
    if distance.is_nan() || distance > length {
        return Err(WaylineError::DistanceOutOfRange { distance, length });
    }

    if distance == 0.0 {
        return Ok(points[0]);
    }
    if distance == length {
        return Ok(points[points.len() - 1]);
    }

    // Right boundary of the containing segment: lengths[i - 1] <= distance < lengths[i].
    let mut i = lengths.partition_point(|&cumulative| cumulative <= distance);

    // Repeated cumulative values are zero-length segments. Step past them so the
    // denominator below is positive.
    while i < lengths.len() && lengths[i] == lengths[i - 1] {
        i += 1;
    }

    if i >= points.len() {
        // Not reachable while the range checks above hold.
        return Err(WaylineError::NoValidSegment(distance));
    }

    let p1 = points[i - 1];
    let p2 = points[i];
    let t = (distance - lengths[i - 1]) / (lengths[i] - lengths[i - 1]);

    Ok(p1 + (p2 - p1) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn dist_zero_and_simple() {
        let p = Point::new(0.0, 0.0);
        assert_eq!(dist(p, p), 0.0);
        assert_eq!(dist(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn dot_basic_cases() {
        assert_eq!(dot(1.0, 0.0, 0.0, 1.0), 0.0);
        assert_eq!(dot(1.0, 2.0, 3.0, 4.0), 11.0);
        assert_eq!(dot(-1.0, 2.0, -3.0, 4.0), 11.0);
    }

    #[test]
    fn lengths_of_empty_and_single_point() {
        assert_eq!(polyline_lengths(&[]), vec![0.0]);
        assert_eq!(polyline_lengths(&[Point::new(1.0, 2.0)]), vec![0.0]);
    }

    #[test]
    fn lengths_are_cumulative() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 0.0),
        ];
        assert_eq!(polyline_lengths(&points), vec![0.0, 5.0, 9.0]);
    }

    #[test]
    fn lengths_never_decrease() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let lengths = polyline_lengths(&points);

        assert_eq!(lengths[0], 0.0);
        assert!(lengths.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn zero_distance_returns_first_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(point_on_path(&points, 0.0), Ok(Point::new(0.0, 0.0)));
    }

    #[test]
    fn full_distance_returns_last_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(point_on_path(&points, 2.0), Ok(Point::new(2.0, 0.0)));
    }

    #[test]
    fn interpolates_in_first_segment() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
        ];
        assert_eq!(point_on_path(&points, 1.0), Ok(Point::new(1.0, 0.0)));
    }

    #[test]
    fn interpolates_in_second_segment() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
        ];
        assert_eq!(point_on_path(&points, 3.0), Ok(Point::new(2.0, 1.0)));
    }

    #[test]
    fn interpolates_along_diagonal() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert_eq!(point_on_path(&points, 2.5), Ok(Point::new(1.5, 2.0)));
    }

    #[test]
    fn skips_zero_length_segments() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(point_on_path(&points, 1.0), Ok(Point::new(1.0, 0.0)));

        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(point_on_path(&points, 1.5), Ok(Point::new(1.5, 0.0)));
    }

    #[test]
    fn rejects_empty_point_list() {
        assert_matches!(point_on_path(&[], 0.0), Err(WaylineError::EmptyPolyline));
    }

    #[test]
    fn rejects_negative_distance() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_matches!(
            point_on_path(&points, -0.1),
            Err(WaylineError::NegativeDistance(_))
        );
    }

    #[test]
    fn rejects_distance_beyond_length() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(
            point_on_path(&points, 2.0),
            Err(WaylineError::DistanceOutOfRange {
                distance: 2.0,
                length: 1.0,
            })
        );
    }

    #[test]
    fn rejects_nan_distance() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_matches!(
            point_on_path(&points, f64::NAN),
            Err(WaylineError::DistanceOutOfRange { .. })
        );
    }

    #[test]
    fn zero_distance_on_zero_length_polyline() {
        let points = [Point::new(1.0, 1.0), Point::new(1.0, 1.0)];
        assert_eq!(point_on_path(&points, 0.0), Ok(Point::new(1.0, 1.0)));
    }
}
