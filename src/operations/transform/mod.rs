mod reflect;
mod translate;

pub use reflect::Reflect;
pub use translate::Translate;

use crate::error::Result;
use crate::geometry::{Circle, Line, Linear, Point, Polygon, Ray, Segment, Shape, ShapeRef, Triangle};

/// Rebuilds `shape` with every defining point passed through `f`.
///
/// Circle radii are kept. The rebuilt primitive goes through its regular
/// constructor, so a map that collapses it reports the usual
/// `GeometryError::Degenerate`.
fn map_points<F>(shape: ShapeRef<'_>, f: F) -> Result<Shape>
where
    F: Fn(&Point) -> Point,
{
    Ok(match shape {
        ShapeRef::Point(p) => f(p).into(),
        ShapeRef::Line(l) => Line::new(f(l.a()), f(l.b()))?.into(),
        ShapeRef::Ray(r) => Ray::new(f(r.a()), f(r.b()))?.into(),
        ShapeRef::Segment(s) => Segment::new(f(s.a()), f(s.b())).into(),
        ShapeRef::Circle(c) => Circle::new(f(c.center()), c.radius())?.into(),
        ShapeRef::Polygon(p) => Polygon::new(p.vertices().iter().map(&f).collect())?.into(),
        ShapeRef::Triangle(t) => Triangle::new(f(t.vertex_a()), f(t.vertex_b()), f(t.vertex_c()))?.into(),
    })
}
