use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Even-odd (crossing number) point-in-polygon test.
///
/// Casts a horizontal ray towards +x and counts edge crossings. Boundary
/// points are not handled specially here; callers that treat edges as
/// inside test edge membership first. Self-intersecting polygons follow
/// the even-odd rule.
#[must_use]
pub fn point_in_polygon_even_odd(p: &Point2, points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&points[i], &points[j]);
        // Half-open rule on y avoids double counting at shared vertices.
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pj.x + (p.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_abs_diff_eq!(signed_area_2d(&square()), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert_abs_diff_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_abs_diff_eq!(signed_area_2d(&[Point2::origin()]), 0.0);
        assert_abs_diff_eq!(signed_area_2d(&[]), 0.0);
    }

    #[test]
    fn even_odd_inside_and_outside() {
        assert!(point_in_polygon_even_odd(&Point2::new(0.5, 0.5), &square()));
        assert!(!point_in_polygon_even_odd(&Point2::new(2.0, 2.0), &square()));
        assert!(!point_in_polygon_even_odd(&Point2::new(-0.5, 0.5), &square()));
    }

    #[test]
    fn even_odd_pentagram_center_is_outside() {
        // Star drawn by connecting every second vertex of a regular pentagon.
        let pts: Vec<Point2> = (0..5)
            .map(|k| {
                let a = std::f64::consts::FRAC_PI_2 + f64::from(k * 2) * std::f64::consts::TAU / 5.0;
                Point2::new(a.cos(), a.sin())
            })
            .collect();
        assert!(!point_in_polygon_even_odd(&Point2::origin(), &pts));
        // A tip of the star is covered once.
        assert!(point_in_polygon_even_odd(&Point2::new(0.0, 0.8), &pts));
    }
}
