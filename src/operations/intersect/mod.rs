//! Intersection engine for every pair of primitives.
//!
//! Dispatch is a single exhaustive match over the 49 ordered `ShapeRef`
//! pairs, folded into the 28 unordered cases. Each case funnels into one of
//! a handful of generic algorithms over the [`Linear`](crate::geometry::Linear)
//! and [`Region`](crate::geometry::Region) traits, so `get_intersect(x, y)`
//! and `get_intersect(y, x)` always run the same code.

mod circle;
mod linear;
mod point;
mod region;

use crate::geometry::{Intersection, Point, ShapeRef};

/// Intersection of two primitives, or `None` if they do not meet.
///
/// Accepts the primitives themselves, `&Shape`, or `ShapeRef`.
#[must_use]
pub fn get_intersect<'a, 'b>(a: impl Into<ShapeRef<'a>>, b: impl Into<ShapeRef<'b>>) -> Option<Intersection> {
    use ShapeRef as S;

    let (a, b) = (a.into(), b.into());
    tracing::trace!(a = ?a.kind(), b = ?b.kind(), "get_intersect");

    match (a, b) {
        (S::Point(p), other) | (other, S::Point(p)) => point::point_shape(p, other),

        (S::Line(l), S::Line(m)) => linear::linear_linear(l, m),
        (S::Line(l), S::Ray(m)) => linear::linear_linear(l, m),
        (S::Line(l), S::Segment(m)) => linear::linear_linear(l, m),
        (S::Ray(l), S::Line(m)) => linear::linear_linear(l, m),
        (S::Ray(l), S::Ray(m)) => linear::linear_linear(l, m),
        (S::Ray(l), S::Segment(m)) => linear::linear_linear(l, m),
        (S::Segment(l), S::Line(m)) => linear::linear_linear(l, m),
        (S::Segment(l), S::Ray(m)) => linear::linear_linear(l, m),
        (S::Segment(l), S::Segment(m)) => linear::linear_linear(l, m),

        (S::Line(l), S::Circle(c)) | (S::Circle(c), S::Line(l)) => circle::linear_circle(l, c),
        (S::Ray(l), S::Circle(c)) | (S::Circle(c), S::Ray(l)) => circle::linear_circle(l, c),
        (S::Segment(l), S::Circle(c)) | (S::Circle(c), S::Segment(l)) => circle::linear_circle(l, c),

        (S::Line(l), S::Polygon(r)) | (S::Polygon(r), S::Line(l)) => region::linear_region(l, r),
        (S::Ray(l), S::Polygon(r)) | (S::Polygon(r), S::Ray(l)) => region::linear_region(l, r),
        (S::Segment(l), S::Polygon(r)) | (S::Polygon(r), S::Segment(l)) => region::linear_region(l, r),
        (S::Line(l), S::Triangle(r)) | (S::Triangle(r), S::Line(l)) => region::linear_region(l, r),
        (S::Ray(l), S::Triangle(r)) | (S::Triangle(r), S::Ray(l)) => region::linear_region(l, r),
        (S::Segment(l), S::Triangle(r)) | (S::Triangle(r), S::Segment(l)) => region::linear_region(l, r),

        (S::Circle(c), S::Circle(d)) => circle::circle_circle(c, d),
        (S::Circle(c), S::Polygon(r)) | (S::Polygon(r), S::Circle(c)) => circle::circle_region(c, r),
        (S::Circle(c), S::Triangle(r)) | (S::Triangle(r), S::Circle(c)) => circle::circle_region(c, r),

        (S::Polygon(r), S::Polygon(q)) => region::region_region(r, q),
        (S::Polygon(r), S::Triangle(q)) => region::region_region(r, q),
        (S::Triangle(r), S::Polygon(q)) => region::region_region(r, q),
        (S::Triangle(r), S::Triangle(q)) => region::region_region(r, q),
    }
}

/// Whether two primitives meet; exactly `get_intersect(a, b).is_some()`.
#[must_use]
pub fn intersects<'a, 'b>(a: impl Into<ShapeRef<'a>>, b: impl Into<ShapeRef<'b>>) -> bool {
    get_intersect(a, b).is_some()
}

/// Method-call form of [`get_intersect`] and [`intersects`], available on
/// every primitive and on [`Shape`](crate::geometry::Shape).
pub trait Intersect {
    /// Intersection with `other`, or `None` if they do not meet.
    fn get_intersect<'o>(&self, other: impl Into<ShapeRef<'o>>) -> Option<Intersection>;

    /// Whether `other` meets this shape.
    fn intersects<'o>(&self, other: impl Into<ShapeRef<'o>>) -> bool {
        self.get_intersect(other).is_some()
    }
}

impl<T> Intersect for T
where
    for<'a> &'a T: Into<ShapeRef<'a>>,
{
    fn get_intersect<'o>(&self, other: impl Into<ShapeRef<'o>>) -> Option<Intersection> {
        get_intersect(self, other)
    }
}

fn push_unique(points: &mut Vec<Point>, p: Point) {
    if !points.contains(&p) {
        points.push(p);
    }
}
