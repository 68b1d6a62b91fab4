use crate::geometry::{Intersection, Line, Linear, Point, Ray, Segment, Shape};
use crate::math::intersect_2d::line_line_params;
use crate::math::{round_coord, same_coord};

pub(super) fn linear_linear<L: Linear, M: Linear>(l: &L, m: &M) -> Option<Intersection> {
    linear_linear_shape(l, m).map(Intersection::One)
}

/// Line/Ray/Segment against Line/Ray/Segment.
///
/// Collinear operands (under coordinate rounding) give their overlap, which
/// is whichever of Line, Ray, Segment or Point describes it. Otherwise the
/// supporting lines meet in at most one point, clipped by both parameter
/// domains.
pub(super) fn linear_linear_shape<L: Linear, M: Linear>(l: &L, m: &M) -> Option<Shape> {
    if l.is_degenerate() {
        return m.contains_point(l.a()).then(|| Shape::Point(*l.a()));
    }
    if m.is_degenerate() {
        return l.contains_point(m.a()).then(|| Shape::Point(*m.a()));
    }

    if l.is_collinear_with(m) {
        return collinear_overlap(l, m);
    }

    let (p1, d1) = (l.a().to_point2(), l.direction());
    let (p2, d2) = (m.a().to_point2(), m.direction());
    let (t, u) = line_line_params(&p1, &d1, &p2, &d2)?;
    (l.contains_param(t) && m.contains_param(u)).then(|| Shape::Point(Point::from_point2(&l.point_at(t))))
}

/// Overlap of two collinear primitives, expressed in the parameter of `l`.
fn collinear_overlap<L: Linear, M: Linear>(l: &L, m: &M) -> Option<Shape> {
    let d1 = l.direction();
    let t0 = l.param_of(&m.a().to_point2());
    // Rate of `l`'s parameter per unit of `m`'s parameter; never zero here.
    let k = m.direction().dot(&d1) / d1.norm_squared();
    let to_l = |u: f64| if u.is_infinite() { u * k.signum() } else { t0 + u * k };

    let md = m.domain();
    let (u0, u1) = (to_l(md.t_min), to_l(md.t_max));
    let ld = l.domain();
    let lo = ld.t_min.max(u0.min(u1));
    let hi = ld.t_max.min(u0.max(u1));

    let at = |t: f64| Point::from_point2(&l.point_at(t));
    match (lo.is_finite(), hi.is_finite()) {
        (false, false) => Some(Shape::Line(Line::through(*l.a(), *l.b()))),
        (true, false) => Some(Shape::Ray(Ray::through(at(lo), at(lo + 1.0)))),
        (false, true) => Some(Shape::Ray(Ray::through(at(hi), at(hi - 1.0)))),
        (true, true) => {
            let length = round_coord((hi - lo) * d1.norm());
            if length < 0.0 {
                None
            } else if same_coord(length, 0.0) {
                Some(Shape::Point(at(lo)))
            } else {
                Some(Shape::Segment(Segment::new(at(lo), at(hi))))
            }
        }
    }
}
