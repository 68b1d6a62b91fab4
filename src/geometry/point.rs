use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{GeometryError, Result};
use crate::math::{round_coord, Point2, Vector};

use super::{Line, Linear};

/// A point in the plane.
///
/// Coordinates are rounded to the coordinate precision on construction, so
/// equality and hashing are exact comparisons of the rounded values.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point, rounding both coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: round_coord(x),
            y: round_coord(y),
        }
    }

    /// The point `[0, 0]`.
    #[must_use]
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Distance from `[0, 0]`.
    #[must_use]
    pub fn absolute(&self) -> f64 {
        round_coord(self.x.hypot(self.y))
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Raw nalgebra form, used by the solvers.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Snaps a raw point onto the coordinate grid.
    #[must_use]
    pub fn from_point2(p: &Point2) -> Self {
        Self::new(p.x, p.y)
    }

    /// Creates a point from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` unless the vector is 2D.
    pub fn from_vector(vector: &Vector) -> Result<Self> {
        match vector.as_slice() {
            [x, y] => Ok(Self::new(*x, *y)),
            other => Err(GeometryError::DimensionMismatch {
                expected: 2,
                found: other.len(),
            }
            .into()),
        }
    }

    /// Position vector of this point.
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::xy(self.x, self.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        round_coord((self.to_point2() - other.to_point2()).norm())
    }

    /// Perpendicular distance to a line.
    #[must_use]
    pub fn distance_to_line(&self, line: &Line) -> f64 {
        line.distance(self)
    }

    /// Point reflection through `center`.
    #[must_use]
    pub fn reflect_about_point(&self, center: &Self) -> Self {
        Self::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }

    /// Mirror image across `line`.
    #[must_use]
    pub fn reflect_about_line(&self, line: &Line) -> Self {
        let p = self.to_point2();
        let foot = line.point_at(line.param_of(&p));
        Self::new(2.0 * foot.x - p.x, 2.0 * foot.y - p.y)
    }

    /// Returns this point moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl PartialEq for Point {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        p.to_point2()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = crate::error::PlanegeoError;

    /// Parses the `[x, y]` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let format_err = || GeometryError::Format(format!("expected \"[x, y]\", got {s:?}"));
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(format_err)?;
        let (x, y) = inner.split_once(',').ok_or_else(format_err)?;
        let x: f64 = x.trim().parse().map_err(|_| format_err())?;
        let y: f64 = y.trim().parse().map_err(|_| format_err())?;
        if !x.is_finite() || !y.is_finite() {
            return Err(format_err().into());
        }
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanegeoError;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn coordinates_are_rounded() {
        let p = Point::new(1.000_04, -2.999_96);
        assert_abs_diff_eq!(p.x(), 1.0);
        assert_abs_diff_eq!(p.y(), -3.0);
        assert_eq!(p, Point::new(1.0, -3.0));
    }

    #[test]
    fn equal_points_hash_equal() {
        let mut set = HashSet::new();
        set.insert(Point::new(0.1 + 0.2, 0.0));
        set.insert(Point::new(0.3, -0.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(12.5, -3.25);
        assert_abs_diff_eq!(p.distance(&p), 0.0);
        assert_abs_diff_eq!(Point::new(3.0, 4.0).absolute(), 5.0);
    }

    #[test]
    fn reflect_about_point_twice_is_identity() {
        let p = Point::new(1.234, -5.678);
        let c = Point::new(-0.5, 2.25);
        let once = p.reflect_about_point(&c);
        assert_eq!(once, Point::new(-2.234, 10.178));
        assert_eq!(once.reflect_about_point(&c), p);
    }

    #[test]
    fn reflect_about_line() {
        let diagonal = Line::new(Point::origin(), Point::new(1.0, 1.0)).unwrap();
        let p = Point::new(3.0, 1.0);
        assert_eq!(p.reflect_about_line(&diagonal), Point::new(1.0, 3.0));
        assert_abs_diff_eq!(p.distance_to_line(&diagonal), 1.414);
    }

    #[test]
    fn display_form() {
        assert_eq!(Point::new(1.0, -2.5).to_string(), "[1, -2.5]");
        assert_eq!(Point::new(-0.0001, 0.0).to_string(), "[0, 0]");
    }

    #[test]
    fn string_round_trip() {
        for p in [
            Point::new(0.0, 0.0),
            Point::new(-100.125, 3.5),
            Point::new(1e6, -0.001),
            Point::new(2.0 / 3.0, 1.0 / 7.0),
        ] {
            assert_eq!(p.to_string().parse::<Point>().unwrap(), p);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for s in ["1, 2", "[1 2]", "[a, 2]", "[1, 2", "(1, 2)", "[NaN, 1]"] {
            let err = s.parse::<Point>().unwrap_err();
            assert!(
                matches!(err, PlanegeoError::Geometry(GeometryError::Format(_))),
                "{s} -> {err:?}"
            );
        }
    }

    #[test]
    fn vector_conversion() {
        let p = Point::from_vector(&Vector::xy(1.5, 2.0)).unwrap();
        assert_eq!(p, Point::new(1.5, 2.0));
        assert_eq!(p.to_vector(), Vector::xy(1.5, 2.0));
        let v3 = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(Point::from_vector(&v3).is_err());
    }
}
