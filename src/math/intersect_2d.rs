use super::{round_angle, round_coord, same_coord, Point2, Polynom, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the lines
/// are not parallel. Parallelism is decided on the sine of the angle between
/// the directions, rounded to the angle precision.
#[must_use]
pub fn line_line_params(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Option<(f64, f64)> {
    if is_parallel(d1, d2) {
        return None;
    }
    let cross = d1.perp(d2);
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Whether two directions are parallel (or anti-parallel).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_parallel(d1: &Vector2, d2: &Vector2) -> bool {
    let norms = d1.norm() * d2.norm();
    if norms == 0.0 {
        return true;
    }
    round_angle(d1.perp(d2) / norms) == 0.0
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Parameter of the orthogonal projection of `p` onto the line `origin + t * dir`.
#[must_use]
pub fn project_param(p: &Point2, origin: &Point2, dir: &Vector2) -> f64 {
    let len_sq = dir.norm_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    (p - origin).dot(dir) / len_sq
}

/// Intersection parameters of the line `origin + t * dir` with a circle.
///
/// Substitutes the parametric line into `(x - cx)^2 + (y - cy)^2 = r^2`,
/// giving a quadratic in `t`. Tangency is decided by comparing the rounded
/// center-to-line distance with the rounded radius, so a tangent line yields
/// exactly one parameter (the foot of the perpendicular).
#[must_use]
pub fn line_circle_params(origin: &Point2, dir: &Vector2, center: &Point2, radius: f64) -> Vec<f64> {
    let len_sq = dir.norm_squared();
    if len_sq == 0.0 {
        return Vec::new();
    }
    let foot_t = project_param(center, origin, dir);
    let foot = point_at(origin, dir, foot_t);
    let dist = (center - foot).norm();

    if round_coord(dist) > round_coord(radius) {
        return Vec::new();
    }
    if same_coord(dist, radius) {
        return vec![foot_t];
    }

    let f = origin - center;
    let quadratic = Polynom::new([
        len_sq,
        2.0 * f.dot(dir),
        f.norm_squared() - radius * radius,
    ]);
    quadratic.real_roots().unwrap_or_default()
}

/// Outcome of intersecting two full circles.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleContact {
    /// The circles do not meet.
    Disjoint,
    /// Same center and radius.
    Coincident,
    /// One (tangent) or two crossing points.
    Points(Vec<Point2>),
}

/// Classical two-circle intersection via the radical line.
///
/// Distances are compared after rounding, so external or internal tangency
/// yields exactly one point.
#[must_use]
pub fn circle_circle(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> CircleContact {
    let delta = c2 - c1;
    let dist = delta.norm();

    if same_coord(dist, 0.0) {
        return if same_coord(r1, r2) {
            CircleContact::Coincident
        } else {
            CircleContact::Disjoint
        };
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if round_coord(dist) > round_coord(sum) || round_coord(dist) < round_coord(diff) {
        return CircleContact::Disjoint;
    }

    // Distance from c1 along c1->c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let unit = delta / dist;
    let mid = c1 + unit * a;

    if same_coord(dist, sum) || same_coord(dist, diff) {
        return CircleContact::Points(vec![mid]);
    }

    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let perp = Vector2::new(-unit.y, unit.x);
    CircleContact::Points(vec![mid + perp * h, mid - perp * h])
}
