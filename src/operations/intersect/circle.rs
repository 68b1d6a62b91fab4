use crate::geometry::{Circle, Intersection, Linear, Point, Region, Shape};
use crate::math::intersect_2d::{circle_circle as circle_contact, line_circle_params, CircleContact};

use super::push_unique;

pub(super) fn linear_circle<L: Linear>(l: &L, c: &Circle) -> Option<Intersection> {
    points_to_intersection(linear_circle_points(l, c))
}

/// Points where a Line/Ray/Segment meets the circle, ordered along `l`.
///
/// A tangent gives one point; secant points outside the domain of `l` are
/// dropped.
pub(super) fn linear_circle_points<L: Linear>(l: &L, c: &Circle) -> Vec<Point> {
    if l.is_degenerate() {
        return if c.contains_point(l.a()) { vec![*l.a()] } else { Vec::new() };
    }
    let mut params = line_circle_params(&l.a().to_point2(), &l.direction(), &c.center().to_point2(), c.radius());
    params.retain(|&t| l.contains_param(t));
    params.sort_by(f64::total_cmp);

    let mut points = Vec::with_capacity(params.len());
    for t in params {
        push_unique(&mut points, Point::from_point2(&l.point_at(t)));
    }
    points
}

pub(super) fn circle_circle(c: &Circle, d: &Circle) -> Option<Intersection> {
    match circle_contact(&c.center().to_point2(), c.radius(), &d.center().to_point2(), d.radius()) {
        CircleContact::Disjoint => None,
        CircleContact::Coincident => Some(Intersection::One(Shape::Circle(c.clone()))),
        CircleContact::Points(raw) => {
            let mut points = Vec::with_capacity(raw.len());
            for p in &raw {
                push_unique(&mut points, Point::from_point2(p));
            }
            // Lexicographic, so that swapping the operands gives the same list.
            points.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
            points_to_intersection(points)
        }
    }
}

/// Points where the circle meets the boundary of a region, in edge order.
///
/// Only contacts count: a circle lying inside the region without touching
/// an edge gives `None`, like one lying outside.
pub(super) fn circle_region<R: Region>(c: &Circle, r: &R) -> Option<Intersection> {
    let mut points = Vec::new();
    for edge in r.boundary() {
        for p in linear_circle_points(edge, c) {
            push_unique(&mut points, p);
        }
    }
    points_to_intersection(points)
}

fn points_to_intersection(points: Vec<Point>) -> Option<Intersection> {
    Intersection::from_shapes(points.into_iter().map(Shape::Point).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::get_intersect;
    use crate::geometry::{Circle, Intersection, Line, Point, Polygon, Ray, Segment, Shape, Triangle};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn circle5() -> Circle {
        Circle::new(Point::origin(), 5.0).unwrap()
    }

    fn points(result: Option<Intersection>) -> Vec<Point> {
        result.map(|r| r.points()).unwrap_or_default()
    }

    #[test]
    fn secant_line_gives_two_points() {
        let l = Line::new(pt(-10.0, 0.0), pt(10.0, 0.0)).unwrap();
        let expected = Intersection::Many(vec![pt(-5.0, 0.0).into(), pt(5.0, 0.0).into()]);
        assert_eq!(get_intersect(&circle5(), &l), Some(expected.clone()));
        assert_eq!(get_intersect(&l, &circle5()), Some(expected));
    }

    #[test]
    fn tangent_line_gives_one_point() {
        let x5 = Line::new(pt(5.0, -1.0), pt(5.0, 1.0)).unwrap();
        assert_eq!(get_intersect(&circle5(), &x5), Some(Intersection::One(Shape::Point(pt(5.0, 0.0)))));
    }

    #[test]
    fn missing_line() {
        let l = Line::new(pt(6.0, 0.0), pt(6.0, 1.0)).unwrap();
        assert!(get_intersect(&circle5(), &l).is_none());
    }

    #[test]
    fn secant_points_are_clipped() {
        let ray = Ray::new(pt(0.0, 0.0), pt(1.0, 0.0)).unwrap();
        assert_eq!(points(get_intersect(&ray, &circle5())), vec![pt(5.0, 0.0)]);

        let inside = Segment::new(pt(-1.0, 0.0), pt(1.0, 0.0));
        assert!(get_intersect(&inside, &circle5()).is_none());

        let chord = Segment::new(pt(5.0, 0.0), pt(-5.0, 0.0));
        assert_eq!(points(get_intersect(&chord, &circle5())), vec![pt(5.0, 0.0), pt(-5.0, 0.0)]);
    }

    #[test]
    fn off_axis_secant() {
        let l = Line::new(pt(0.0, 3.0), pt(1.0, 3.0)).unwrap();
        assert_eq!(points(get_intersect(&l, &circle5())), vec![pt(-4.0, 3.0), pt(4.0, 3.0)]);
    }

    #[test]
    fn crossing_circles() {
        let c1 = circle5();
        let c2 = Circle::new(pt(8.0, 0.0), 5.0).unwrap();
        let expected = vec![pt(4.0, -3.0), pt(4.0, 3.0)];
        assert_eq!(points(get_intersect(&c1, &c2)), expected);
        assert_eq!(get_intersect(&c1, &c2), get_intersect(&c2, &c1));
    }

    #[test]
    fn tangent_and_identical_circles() {
        let c1 = circle5();
        let outside = Circle::new(pt(10.0, 0.0), 5.0).unwrap();
        let inside = Circle::new(pt(2.0, 0.0), 3.0).unwrap();
        assert_eq!(points(get_intersect(&c1, &outside)), vec![pt(5.0, 0.0)]);
        assert_eq!(points(get_intersect(&c1, &inside)), vec![pt(5.0, 0.0)]);
        assert_eq!(get_intersect(&c1, &circle5()), Some(Intersection::One(Shape::Circle(c1.clone()))));
        assert!(get_intersect(&c1, &Circle::new(Point::origin(), 4.0).unwrap()).is_none());
    }

    #[test]
    fn circle_against_region() {
        let square = Polygon::new(vec![pt(-5.0, -5.0), pt(5.0, -5.0), pt(5.0, 5.0), pt(-5.0, 5.0)]).unwrap();
        let touching = points(get_intersect(&circle5(), &square));
        assert_eq!(touching.len(), 4);
        assert!(touching.contains(&pt(5.0, 0.0)));
        assert!(touching.contains(&pt(0.0, -5.0)));

        let inside = Circle::new(Point::origin(), 1.0).unwrap();
        assert!(get_intersect(&square, &inside).is_none());
        assert!(get_intersect(&inside, &square).is_none());
        assert!(!super::super::intersects(&inside, &square));

        let far = Circle::new(pt(20.0, 0.0), 1.0).unwrap();
        assert!(get_intersect(&square, &far).is_none());

        let around = Circle::new(Point::origin(), 50.0).unwrap();
        assert!(get_intersect(&around, &square).is_none());
    }

    #[test]
    fn circle_through_triangle_corner() {
        let t = Triangle::new(pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 4.0)).unwrap();
        let c = Circle::new(pt(-1.0, 0.0), 1.0).unwrap();
        assert_eq!(get_intersect(&t, &c), Some(Intersection::One(Shape::Point(pt(0.0, 0.0)))));
    }
}
