use crate::geometry::{Intersection, Linear, Point, Region, Shape, ShapeRef};

/// A point meets a shape when it lies on it (or, for regions, inside it).
pub(super) fn point_shape(p: &Point, other: ShapeRef<'_>) -> Option<Intersection> {
    let hit = match other {
        ShapeRef::Point(q) => p == q,
        ShapeRef::Line(l) => l.contains_point(p),
        ShapeRef::Ray(r) => r.contains_point(p),
        ShapeRef::Segment(s) => s.contains_point(p),
        ShapeRef::Circle(c) => c.contains_point(p),
        ShapeRef::Polygon(poly) => Region::contains_point(poly, p),
        ShapeRef::Triangle(t) => Region::contains_point(t, p),
    };
    hit.then(|| Intersection::One(Shape::Point(*p)))
}
