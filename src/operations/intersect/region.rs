use crate::geometry::{Intersection, Linear, Point, Region, Segment, Shape};
use crate::math::same_coord;

use super::linear::linear_linear_shape;
use super::push_unique;

/// The part of a Line/Ray/Segment inside a closed region.
///
/// Boundary contacts split `l` into pieces; a piece is kept when its
/// midpoint is inside. Adjacent kept pieces merge into one Segment and a
/// contact with no kept piece on either side becomes a Point. Parts are
/// ordered along `l`.
pub(super) fn linear_region<L: Linear, R: Region>(l: &L, r: &R) -> Option<Intersection> {
    if l.is_degenerate() {
        return r.contains_point(l.a()).then(|| Intersection::One(Shape::Point(*l.a())));
    }

    let breaks = breakpoints(l, r);
    let at = |t: f64| Point::from_point2(&l.point_at(t));

    let mut parts = Vec::new();
    let mut run_start: Option<f64> = None;
    for (i, &t) in breaks.iter().enumerate() {
        let next_inside = breaks
            .get(i + 1)
            .is_some_and(|&next| r.contains_raw(&l.point_at((t + next) / 2.0)));
        match (run_start, next_inside) {
            (None, true) => run_start = Some(t),
            (None, false) => {
                if r.contains_raw(&l.point_at(t)) {
                    parts.push(Shape::Point(at(t)));
                }
            }
            (Some(_), true) => {}
            (Some(start), false) => {
                parts.push(Shape::Segment(Segment::new(at(start), at(t))));
                run_start = None;
            }
        }
    }
    Intersection::from_shapes(parts)
}

/// Sorted, deduplicated parameters on `l` where it meets the boundary of
/// `r`, plus the finite ends of its domain.
fn breakpoints<L: Linear, R: Region>(l: &L, r: &R) -> Vec<f64> {
    let domain = l.domain();
    let mut breaks = Vec::new();
    for edge in r.boundary() {
        match linear_linear_shape(l, edge) {
            Some(Shape::Point(p)) => breaks.push(l.param_of(&p.to_point2())),
            Some(Shape::Segment(s)) => {
                breaks.push(l.param_of(&s.a().to_point2()));
                breaks.push(l.param_of(&s.b().to_point2()));
            }
            _ => {}
        }
    }
    breaks.extend([domain.t_min, domain.t_max].into_iter().filter(|t| t.is_finite()));

    let scale = l.direction().norm();
    let mut breaks: Vec<f64> = breaks.into_iter().map(|t| domain.clamp(t)).collect();
    breaks.sort_by(f64::total_cmp);
    breaks.dedup_by(|t, prev| same_coord((*t - *prev) * scale, 0.0));
    breaks
}

/// Edge contacts of two regions.
///
/// Identical outlines give the first region; a region nested inside the
/// other without touching it gives the nested one. Otherwise the contacts
/// are returned: shared edge portions as Segments, then crossing Points.
pub(super) fn region_region<R, Q>(r: &R, q: &Q) -> Option<Intersection>
where
    R: Region + Clone + Into<Shape>,
    Q: Region + Clone + Into<Shape>,
{
    if r.same_outline(q.corners()) {
        return Some(Intersection::One(r.clone().into()));
    }

    let mut segments: Vec<Segment> = Vec::new();
    let mut points: Vec<Point> = Vec::new();
    for e in r.boundary() {
        for f in q.boundary() {
            match linear_linear_shape(e, f) {
                Some(Shape::Point(p)) => push_unique(&mut points, p),
                Some(Shape::Segment(s)) => merge_segment(&mut segments, s),
                _ => {}
            }
        }
    }
    points.retain(|p| !segments.iter().any(|s| s.contains_point(p)));

    if segments.is_empty() && points.is_empty() {
        if q.contains_point(&r.corners()[0]) {
            return Some(Intersection::One(r.clone().into()));
        }
        if r.contains_point(&q.corners()[0]) {
            return Some(Intersection::One(q.clone().into()));
        }
        return None;
    }

    let parts = segments
        .into_iter()
        .map(Shape::Segment)
        .chain(points.into_iter().map(Shape::Point))
        .collect();
    Intersection::from_shapes(parts)
}

/// Adds `s`, joining it with every collinear segment it touches.
fn merge_segment(segments: &mut Vec<Segment>, mut s: Segment) {
    let mut i = 0;
    while i < segments.len() {
        if let Some(joined) = segments[i].join(&s) {
            s = joined;
            segments.swap_remove(i);
            i = 0;
        } else {
            i += 1;
        }
    }
    segments.push(s);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::get_intersect;
    use crate::geometry::{Intersection, Line, Point, Polygon, Ray, Segment, Shape, Triangle};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            pt(x0, y0),
            pt(x0 + side, y0),
            pt(x0 + side, y0 + side),
            pt(x0, y0 + side),
        ])
        .unwrap()
    }

    fn one(shape: impl Into<Shape>) -> Option<Intersection> {
        Some(Intersection::One(shape.into()))
    }

    #[test]
    fn line_through_square_gives_chord() {
        let sq = square(0.0, 0.0, 1.0);
        let l = Line::new(pt(-1.0, 0.5), pt(2.0, 0.5)).unwrap();
        let chord = Segment::new(pt(0.0, 0.5), pt(1.0, 0.5));
        assert_eq!(get_intersect(&l, &sq), one(chord.clone()));
        assert_eq!(get_intersect(&sq, &l), one(chord));
    }

    #[test]
    fn line_along_an_edge_gives_the_edge() {
        let sq = square(0.0, 0.0, 1.0);
        let l = Line::new(pt(5.0, 0.0), pt(6.0, 0.0)).unwrap();
        assert_eq!(get_intersect(&l, &sq), one(Segment::new(pt(0.0, 0.0), pt(1.0, 0.0))));
    }

    #[test]
    fn line_touching_a_corner() {
        let sq = square(0.0, 0.0, 1.0);
        let l = Line::new(pt(0.0, 2.0), pt(2.0, 0.0)).unwrap();
        assert_eq!(get_intersect(&l, &sq), one(pt(1.0, 1.0)));
        let miss = Line::new(pt(0.0, 3.0), pt(3.0, 0.0)).unwrap();
        assert!(get_intersect(&miss, &sq).is_none());
    }

    #[test]
    fn ray_starting_inside() {
        let sq = square(0.0, 0.0, 2.0);
        let r = Ray::new(pt(1.0, 1.0), pt(5.0, 1.0)).unwrap();
        assert_eq!(get_intersect(&r, &sq), one(Segment::new(pt(1.0, 1.0), pt(2.0, 1.0))));
    }

    #[test]
    fn segment_inside_is_itself() {
        let sq = square(0.0, 0.0, 4.0);
        let s = Segment::new(pt(1.0, 1.0), pt(3.0, 2.0));
        assert_eq!(get_intersect(&sq, &s), one(s.clone()));
        let outside = Segment::new(pt(5.0, 5.0), pt(6.0, 7.0));
        assert!(get_intersect(&sq, &outside).is_none());
    }

    #[test]
    fn line_through_concave_polygon_gives_two_pieces() {
        // A "U" shape open at the top.
        let u = Polygon::new(vec![
            pt(0.0, 0.0),
            pt(3.0, 0.0),
            pt(3.0, 3.0),
            pt(2.0, 3.0),
            pt(2.0, 1.0),
            pt(1.0, 1.0),
            pt(1.0, 3.0),
            pt(0.0, 3.0),
        ])
        .unwrap();
        let l = Line::new(pt(-1.0, 2.0), pt(4.0, 2.0)).unwrap();
        let expected = Intersection::Many(vec![
            Segment::new(pt(0.0, 2.0), pt(1.0, 2.0)).into(),
            Segment::new(pt(2.0, 2.0), pt(3.0, 2.0)).into(),
        ]);
        assert_eq!(get_intersect(&l, &u), Some(expected));
    }

    #[test]
    fn segment_in_triangle() {
        let t = Triangle::new(pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 4.0)).unwrap();
        let s = Segment::new(pt(-1.0, 1.0), pt(5.0, 1.0));
        assert_eq!(get_intersect(&s, &t), one(Segment::new(pt(0.0, 1.0), pt(3.0, 1.0))));
    }

    #[test]
    fn identical_regions() {
        let sq = square(0.0, 0.0, 1.0);
        let same = Polygon::new(vec![pt(1.0, 1.0), pt(0.0, 1.0), pt(0.0, 0.0), pt(1.0, 0.0)]).unwrap();
        assert_eq!(get_intersect(&sq, &same), one(sq.clone()));

        let t = Triangle::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)).unwrap();
        let as_polygon = t.to_polygon();
        assert_eq!(get_intersect(&t, &as_polygon), one(t.clone()));
        assert_eq!(get_intersect(&as_polygon, &t), one(as_polygon.clone()));
    }

    #[test]
    fn nested_regions_report_the_inner_one() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = Triangle::new(pt(2.0, 2.0), pt(5.0, 2.0), pt(2.0, 5.0)).unwrap();
        assert_eq!(get_intersect(&outer, &inner), one(inner.clone()));
        assert_eq!(get_intersect(&inner, &outer), one(inner.clone()));
        assert!(get_intersect(&square(20.0, 20.0, 1.0), &inner).is_none());
    }

    #[test]
    fn overlapping_squares_cross_at_two_points() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let result = get_intersect(&a, &b).unwrap();
        let expected = Intersection::Many(vec![pt(2.0, 1.0).into(), pt(1.0, 2.0).into()]);
        assert!(result.same_parts(&expected), "{result}");
    }

    #[test]
    fn squares_sharing_an_edge() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(2.0, 0.0, 2.0);
        let shared = Segment::new(pt(2.0, 0.0), pt(2.0, 2.0));
        assert_eq!(get_intersect(&a, &b), one(shared));
    }

    #[test]
    fn grid_rounded_edges_still_overlap() {
        let a = Polygon::new(vec![pt(0.0, 0.0), pt(3.0, 1.0), pt(3.0, 4.0), pt(0.0, 4.0)]).unwrap();
        let on_edge = Segment::new(pt(1.0, 1.0 / 3.0), pt(2.0, 2.0 / 3.0));
        assert_eq!(get_intersect(&on_edge, &a), one(on_edge.clone()));

        let below = Polygon::new(vec![pt(1.0, 1.0 / 3.0), pt(2.0, 2.0 / 3.0), pt(2.0, -3.0), pt(1.0, -3.0)]).unwrap();
        assert_eq!(get_intersect(&a, &below), one(on_edge.clone()));
        assert_eq!(get_intersect(&below, &a), one(on_edge));
    }
}
