use serde::{Deserialize, Serialize};

use crate::cartesian::point::Point;

/// Winding direction of a polygon's vertex sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// The vertices are ordered clockwise (non-positive signed area).
    Clockwise,
    /// The vertices are ordered counterclockwise (positive signed area).
    CounterClockwise,
}

/// A simple polygon defined by an ordered sequence of vertices.
///
/// The segment between the last and the first vertices is implied, so the vertex list
/// shall not repeat the first vertex at the end. Input that does close itself this way
/// (as, for example, OGC `LineString` rings do) is normalized at construction: a last
/// vertex exactly equal to the first one is dropped and never stored.
///
/// ```
/// use wayline::cartesian::{Point, Polygon};
///
/// let ring = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
///     Point::new(0.0, 0.0),
/// ];
/// let polygon = Polygon::new(ring);
///
/// assert_eq!(polygon.vertices().len(), 4);
/// assert_eq!(polygon.area(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from the given vertices, dropping a closing duplicate of the
    /// first vertex if present.
    ///
    /// The duplicate check is exact equality, same as [`Point`] comparison.
    pub fn new(mut vertices: Vec<Point>) -> Self {
        if vertices.len() >= 2 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Vertices of the polygon, without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Area of the polygon.
    ///
    /// Polygons with fewer than 3 vertices are degenerate and have zero area; this is
    /// not an error.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Signed area of the polygon by the shoelace formula.
    ///
    /// Positive for counterclockwise vertex order, negative for clockwise. Zero for
    /// degenerate polygons.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        // Neumaier summation of the cross terms. The compensation collects what plain
        // addition drops, which for large coordinate offsets is the entire result.
        let mut sum = 0.0;
        let mut compensation = 0.0;
        for i in 0..n {
            let p1 = self.vertices[i];
            let p2 = self.vertices[(i + 1) % n];
            let term = product_difference(p1.x, p2.y, p2.x, p1.y);

            let new_sum = sum + term;
            if sum.abs() >= term.abs() {
                compensation += (sum - new_sum) + term;
            } else {
                compensation += (term - new_sum) + sum;
            }
            sum = new_sum;
        }

        (sum + compensation) / 2.0
    }

    /// Winding direction of the vertex sequence.
    pub fn winding(&self) -> Winding {
        if self.signed_area() <= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// `a * b - c * d` evaluated with a single rounding (Kahan's FMA trick), so that the
/// cross terms of nearly cancelling products stay exact.
fn product_difference(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let cd = c * d;
    let rounding = c.mul_add(d, -cd);
    let difference = a.mul_add(b, -cd);
    difference - rounding
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}
