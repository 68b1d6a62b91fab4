mod circle;
mod line;
mod point;
mod polygon;
mod ray;
mod segment;
mod shape;
mod triangle;

pub use circle::Circle;
pub use line::{Line, LineEquation};
pub use point::Point;
pub use polygon::Polygon;
pub use ray::Ray;
pub use segment::Segment;
pub use shape::{Intersection, Shape, ShapeKind, ShapeRef};
pub use triangle::Triangle;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{point_at, project_param};
use crate::math::polygon_2d::point_in_polygon_even_odd;
use crate::math::{round_coord, same_coord, Point2, Vector2};

/// Parameter domain of a linear primitive, in units of its defining
/// direction `b - a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Clamps `t` into the domain.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }

    /// Whether both ends are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// Shared behavior of the straight primitives (Line, Ray, Segment).
///
/// Each is the set `a + t * (b - a)` for `t` in [`Linear::domain`]. All
/// membership tests compare rounded distances; raw (unrounded) points are
/// accepted so that computed intersection points are tested before they
/// are snapped to the coordinate grid.
pub trait Linear {
    /// First defining point (the origin of a ray).
    fn a(&self) -> &Point;

    /// Second defining point.
    fn b(&self) -> &Point;

    /// Parameter range covered by this primitive.
    fn domain(&self) -> CurveDomain;

    /// Unrounded distance from a raw point to this primitive.
    fn raw_distance(&self, p: &Point2) -> f64;

    /// Defining direction `b - a` (not normalized).
    fn direction(&self) -> Vector2 {
        self.b().to_point2() - self.a().to_point2()
    }

    /// Raw point at parameter `t`.
    fn point_at(&self, t: f64) -> Point2 {
        point_at(&self.a().to_point2(), &self.direction(), t)
    }

    /// Parameter of the projection of `p` onto the supporting line.
    fn param_of(&self, p: &Point2) -> f64 {
        project_param(p, &self.a().to_point2(), &self.direction())
    }

    /// Whether `t` lies in the domain, allowing for coordinate rounding.
    fn contains_param(&self, t: f64) -> bool {
        let overshoot = (t - self.domain().clamp(t)).abs() * self.direction().norm();
        same_coord(overshoot, 0.0)
    }

    /// Whether the raw point lies on this primitive after rounding.
    fn contains_raw(&self, p: &Point2) -> bool {
        same_coord(self.raw_distance(p), 0.0)
    }

    /// Whether the point lies on this primitive.
    fn contains_point(&self, p: &Point) -> bool {
        self.contains_raw(&p.to_point2())
    }

    /// Whether the raw point lies on the unbounded supporting line.
    fn on_supporting_line(&self, p: &Point2) -> bool {
        let dir = self.direction();
        let origin = self.a().to_point2();
        let foot = point_at(&origin, &dir, project_param(p, &origin, &dir));
        same_coord((p - foot).norm(), 0.0)
    }

    /// Whether both primitives lie on one supporting line, under coordinate
    /// rounding.
    ///
    /// Holds when the defining points of either one lie on the supporting
    /// line of the other, so the test is symmetric and agrees with
    /// [`Linear::contains_point`] for grid-rounded inputs.
    fn is_collinear_with<M: Linear>(&self, other: &M) -> bool
    where
        Self: Sized,
    {
        let on_self = self.on_supporting_line(&other.a().to_point2()) && self.on_supporting_line(&other.b().to_point2());
        let on_other = other.on_supporting_line(&self.a().to_point2()) && other.on_supporting_line(&self.b().to_point2());
        on_self || on_other
    }

    /// `a == b`; only a Segment can be built this way.
    fn is_degenerate(&self) -> bool {
        self.a() == self.b()
    }
}

/// Shared behavior of the closed, bounded primitives (Polygon, Triangle).
///
/// A region is the closed point set bounded by its edges. Interior
/// membership follows the even-odd (crossing number) rule, so for
/// self-intersecting outlines a doubly covered area counts as outside.
/// Points on an edge are always inside.
pub trait Region {
    /// Vertices in boundary order.
    fn corners(&self) -> &[Point];

    /// Edges, `edges[i]` running from `corners[i]` to `corners[i + 1]` (cyclic).
    fn boundary(&self) -> &[Segment];

    /// Whether a raw point lies in the closed region.
    fn contains_raw(&self, p: &Point2) -> bool {
        if self.boundary().iter().any(|e| e.contains_raw(p)) {
            return true;
        }
        let outline: Vec<Point2> = self.corners().iter().map(Point::to_point2).collect();
        point_in_polygon_even_odd(p, &outline)
    }

    /// Whether the point lies in the closed region.
    fn contains_point(&self, p: &Point) -> bool {
        self.contains_raw(&p.to_point2())
    }

    /// Whether `other` lists the same vertex cycle, starting anywhere and
    /// running in either direction.
    fn same_outline(&self, other: &[Point]) -> bool {
        let mine = self.corners();
        let n = mine.len();
        if n != other.len() {
            return false;
        }
        let Some(start) = other.iter().position(|p| *p == mine[0]) else {
            return false;
        };
        let forward = (0..n).all(|i| mine[i] == other[(start + i) % n]);
        let backward = (0..n).all(|i| mine[i] == other[(start + n - i) % n]);
        forward || backward
    }
}

/// `y(x)` on the line through `a` and `b`.
pub(crate) fn solve_y(a: &Point, b: &Point, x: f64) -> Result<f64> {
    let dx = b.x() - a.x();
    if same_coord(dx, 0.0) {
        return Err(GeometryError::UndefinedAt { query: "y(x)", value: x }.into());
    }
    let slope = (b.y() - a.y()) / dx;
    Ok(round_coord(a.y() + slope * (x - a.x())))
}

/// `x(y)` on the line through `a` and `b`.
pub(crate) fn solve_x(a: &Point, b: &Point, y: f64) -> Result<f64> {
    let dy = b.y() - a.y();
    if same_coord(dy, 0.0) {
        return Err(GeometryError::UndefinedAt { query: "x(y)", value: y }.into());
    }
    let inverse_slope = (b.x() - a.x()) / dy;
    Ok(round_coord(a.x() + inverse_slope * (y - a.y())))
}

/// Fails with `UndefinedAt` unless `p` lies on the (bounded) primitive.
pub(crate) fn ensure_on<L: Linear>(linear: &L, p: &Point, query: &'static str, value: f64) -> Result<()> {
    if linear.contains_point(p) {
        Ok(())
    } else {
        Err(GeometryError::UndefinedAt { query, value }.into())
    }
}
