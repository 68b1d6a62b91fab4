use super::intersect_2d::{point_at, project_param};
use super::{Point2, Vector2};

/// Returns the distance from `p` to the infinite line through `origin` along `dir`.
#[must_use]
pub fn point_to_line_dist(p: &Point2, origin: &Point2, dir: &Vector2) -> f64 {
    let t = project_param(p, origin, dir);
    (p - point_at(origin, dir, t)).norm()
}

/// Returns the distance from `p` to the ray starting at `origin` heading along `dir`.
#[must_use]
pub fn point_to_ray_dist(p: &Point2, origin: &Point2, dir: &Vector2) -> f64 {
    let t = project_param(p, origin, dir).max(0.0);
    (p - point_at(origin, dir, t)).norm()
}

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
///
/// A zero-length segment degenerates to point-to-point distance.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dir = b - a;
    let t = project_param(p, a, &dir).clamp(0.0, 1.0);
    (p - point_at(a, &dir, t)).norm()
}
