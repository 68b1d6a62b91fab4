use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::{round_coord, Point2, Polynom};

use super::{solve_x, solve_y, CurveDomain, Linear, Point};

/// Normalized equation of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// `y = slope * x + intercept`.
    Sloped { slope: f64, intercept: f64 },
    /// `x = x`.
    Vertical { x: f64 },
}

/// An unbounded line through two distinct points.
///
/// `a` and `b` are just two points on the line; any other pair on the same
/// line describes an equal `Line`.
#[derive(Debug, Clone)]
pub struct Line {
    a: Point,
    b: Point,
    equation: LineEquation,
}

impl Line {
    /// Creates the line through `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `a == b`.
    pub fn new(a: Point, b: Point) -> Result<Self> {
        if a == b {
            return Err(GeometryError::Degenerate(format!(
                "line through {a} needs a second, distinct point"
            ))
            .into());
        }
        Ok(Self::through(a, b))
    }

    /// Builds the line without the distinctness check.
    pub(crate) fn through(a: Point, b: Point) -> Self {
        let dx = b.x() - a.x();
        let equation = if dx == 0.0 {
            LineEquation::Vertical { x: a.x() }
        } else {
            let slope = (b.y() - a.y()) / dx;
            LineEquation::Sloped {
                slope,
                intercept: a.y() - slope * a.x(),
            }
        };
        Self { a, b, equation }
    }

    #[must_use]
    pub fn equation(&self) -> LineEquation {
        self.equation
    }

    /// `y` coordinate of the line at `x`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for vertical lines.
    pub fn y(&self, x: f64) -> Result<f64> {
        solve_y(&self.a, &self.b, x)
    }

    /// `x` coordinate of the line at `y`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for horizontal lines.
    pub fn x(&self, y: f64) -> Result<f64> {
        solve_x(&self.a, &self.b, y)
    }

    /// The line as the polynom `slope * x + intercept`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UndefinedAt` for vertical lines, which are not
    /// a function of `x`.
    pub fn polynom(&self) -> Result<Polynom> {
        match self.equation {
            LineEquation::Sloped { slope, intercept } => Ok(Polynom::new([slope, intercept])),
            LineEquation::Vertical { x } => Err(GeometryError::UndefinedAt {
                query: "polynom",
                value: x,
            }
            .into()),
        }
    }

    /// Line through `point` perpendicular to this one.
    #[must_use]
    pub fn perpendicular(&self, point: &Point) -> Self {
        let d = self.direction();
        Self::through(*point, point.translate(-d.y, d.x))
    }

    /// Line through `point` parallel to this one.
    #[must_use]
    pub fn parallel(&self, point: &Point) -> Self {
        let d = self.direction();
        Self::through(*point, point.translate(d.x, d.y))
    }

    /// Perpendicular distance from `point`.
    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        round_coord(self.raw_distance(&point.to_point2()))
    }

    /// Foot of the perpendicular from `point`.
    #[must_use]
    pub fn project(&self, point: &Point) -> Point {
        Point::from_point2(&self.point_at(self.param_of(&point.to_point2())))
    }
}

impl Linear for Line {
    fn a(&self) -> &Point {
        &self.a
    }

    fn b(&self) -> &Point {
        &self.b
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn raw_distance(&self, p: &Point2) -> f64 {
        point_to_line_dist(p, &self.a.to_point2(), &self.direction())
    }
}

/// Two lines are equal when they describe the same point set, i.e. when
/// they are collinear under coordinate rounding.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.is_collinear_with(other)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: ({}, {})", self.a, self.b)
    }
}
