use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_ray_dist;
use crate::math::{round_coord, Point2};

use super::{ensure_on, solve_x, solve_y, CurveDomain, Line, Linear, Point};

/// A half-line starting at `a` and passing through `b`.
#[derive(Debug, Clone)]
pub struct Ray {
    a: Point,
    b: Point,
}

impl Ray {
    /// Creates the ray from `origin` through `through`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the two points coincide, since
    /// the ray would have no direction.
    pub fn new(origin: Point, through: Point) -> Result<Self> {
        if origin == through {
            return Err(GeometryError::Degenerate(format!("ray from {origin} has no direction")).into());
        }
        Ok(Self::through(origin, through))
    }

    pub(crate) fn through(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The ray's end point.
    #[must_use]
    pub fn origin(&self) -> &Point {
        &self.a
    }

    /// `y` coordinate of the ray at `x`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for vertical rays and for `x`
    /// behind the origin.
    pub fn y(&self, x: f64) -> Result<f64> {
        let y = solve_y(&self.a, &self.b, x)?;
        ensure_on(self, &Point::new(x, y), "y(x)", x)?;
        Ok(y)
    }

    /// `x` coordinate of the ray at `y`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for horizontal rays and for `y`
    /// behind the origin.
    pub fn x(&self, y: f64) -> Result<f64> {
        let x = solve_x(&self.a, &self.b, y)?;
        ensure_on(self, &Point::new(x, y), "x(y)", y)?;
        Ok(x)
    }

    /// The supporting line.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::through(self.a, self.b)
    }

    /// Distance from `point` to the nearest point of the ray.
    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        round_coord(self.raw_distance(&point.to_point2()))
    }
}

impl Linear for Ray {
    fn a(&self) -> &Point {
        &self.a
    }

    fn b(&self) -> &Point {
        &self.b
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, f64::INFINITY)
    }

    fn raw_distance(&self, p: &Point2) -> f64 {
        point_to_ray_dist(p, &self.a.to_point2(), &self.direction())
    }
}

/// Rays are equal when they share the origin and head the same way.
impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.is_collinear_with(other) && self.direction().dot(&other.direction()) > 0.0
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray: ({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ray(ax: f64, ay: f64, bx: f64, by: f64) -> Ray {
        Ray::new(Point::new(ax, ay), Point::new(bx, by)).unwrap()
    }

    #[test]
    fn zero_direction_rejected() {
        assert!(Ray::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0)).is_err());
    }

    #[test]
    fn lookup_respects_origin() {
        let r = ray(0.0, 0.0, 1.0, 2.0);
        assert_abs_diff_eq!(r.y(3.0).unwrap(), 6.0);
        assert_abs_diff_eq!(r.x(4.0).unwrap(), 2.0);
        assert!(r.y(-1.0).is_err());
        assert!(r.x(-0.5).is_err());
    }

    #[test]
    fn vertical_ray_has_no_y_of_x() {
        let r = ray(1.0, 0.0, 1.0, 5.0);
        assert!(r.y(1.0).is_err());
        assert_abs_diff_eq!(r.x(100.0).unwrap(), 1.0);
    }

    #[test]
    fn membership_and_distance() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        assert!(r.contains_point(&Point::new(1000.0, 0.0)));
        assert!(!r.contains_point(&Point::new(-0.01, 0.0)));
        assert_abs_diff_eq!(r.distance(&Point::new(-3.0, 4.0)), 5.0);
        assert_abs_diff_eq!(r.distance(&Point::new(10.0, -2.0)), 2.0);
    }

    #[test]
    fn equality_ignores_second_point_position() {
        assert_eq!(ray(0.0, 0.0, 1.0, 1.0), ray(0.0, 0.0, 7.0, 7.0));
        assert_ne!(ray(0.0, 0.0, 1.0, 1.0), ray(0.0, 0.0, -1.0, -1.0));
        assert_ne!(ray(0.0, 0.0, 1.0, 1.0), ray(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn supporting_line() {
        let r = ray(0.0, 0.0, 1.0, 1.0);
        assert!(r.line().contains_point(&Point::new(-4.0, -4.0)));
        assert_eq!(r.to_string(), "Ray: ([0, 0], [1, 1])");
    }
}
