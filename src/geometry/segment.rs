use std::fmt;

use crate::error::Result;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{round_coord, Point2};

use super::{ensure_on, solve_x, solve_y, CurveDomain, Line, Linear, Point};

/// A bounded segment between `a` and `b`. `a == b` is allowed and has zero length.
#[derive(Debug, Clone)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Creates the segment from `a` to `b`. Never fails; equal end points
    /// give a zero-length segment.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new((self.a.x() + self.b.x()) / 2.0, (self.a.y() + self.b.y()) / 2.0)
    }

    /// The supporting line.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a zero-length segment.
    pub fn line(&self) -> Result<Line> {
        Line::new(self.a, self.b)
    }

    /// `y` coordinate of the segment at `x`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for vertical segments and for `x`
    /// outside the segment's extent.
    pub fn y(&self, x: f64) -> Result<f64> {
        let y = solve_y(&self.a, &self.b, x)?;
        ensure_on(self, &Point::new(x, y), "y(x)", x)?;
        Ok(y)
    }

    /// `x` coordinate of the segment at `y`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for horizontal segments and for `y`
    /// outside the segment's extent.
    pub fn x(&self, y: f64) -> Result<f64> {
        let x = solve_x(&self.a, &self.b, y)?;
        ensure_on(self, &Point::new(x, y), "x(y)", y)?;
        Ok(x)
    }

    /// Distance from `point` to the nearest point of the segment.
    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        round_coord(self.raw_distance(&point.to_point2()))
    }

    /// Joins two collinear segments that overlap or touch into one segment
    /// spanning both. Returns `None` if they are not collinear or do not meet.
    #[must_use]
    pub fn join(&self, other: &Self) -> Option<Self> {
        if self.is_degenerate() {
            return other.contains_point(&self.a).then(|| other.clone());
        }
        if other.is_degenerate() {
            return self.contains_point(&other.a).then(|| self.clone());
        }
        let a = self.a.to_point2();
        if !self.on_supporting_line(&other.a.to_point2()) || !self.on_supporting_line(&other.b.to_point2()) {
            return None;
        }
        let touching = self.contains_point(&other.a)
            || self.contains_point(&other.b)
            || other.contains_point(&self.a);
        if !touching {
            return None;
        }

        let dir = self.direction();
        let ta = self.param_of(&other.a.to_point2());
        let tb = self.param_of(&other.b.to_point2());
        let lo = ta.min(tb).min(0.0);
        let hi = ta.max(tb).max(1.0);
        Some(Self::new(
            Point::from_point2(&(a + dir * lo)),
            Point::from_point2(&(a + dir * hi)),
        ))
    }

    /// Reversed copy (`b` to `a`).
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }
}

impl Linear for Segment {
    fn a(&self) -> &Point {
        &self.a
    }

    fn b(&self) -> &Point {
        &self.b
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn raw_distance(&self, p: &Point2) -> f64 {
        point_to_segment_dist(p, &self.a.to_point2(), &self.b.to_point2())
    }
}

/// Segments are equal when they have the same end points, in either order.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment: ({}, {})", self.a, self.b)
    }
}
