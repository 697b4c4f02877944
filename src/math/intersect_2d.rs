use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the
/// cross product of the directions is at least `parallel_tolerance`.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    parallel_tolerance: f64,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() < parallel_tolerance {
        return None;
    }
    let delta = p2 - p1;
    let t = delta.perp(d2) / cross;
    let u = delta.perp(d1) / cross;
    Some((t, u))
}

/// Intersection point of two infinite lines, or `None` if they are parallel.
#[must_use]
pub fn line_line_point_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    parallel_tolerance: f64,
) -> Option<Point2> {
    line_line_intersect_2d(p1, d1, p2, d2, parallel_tolerance).map(|(t, _)| point_at(p1, d1, t))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    #[test]
    fn perpendicular_lines_meet() {
        let (t, u) = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(3.0, -2.0),
            &Vector2::new(0.0, 1.0),
            TOL,
        )
        .unwrap();
        assert!((t - 3.0).abs() < 1e-12);
        assert!((u - 2.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_lines_do_not_meet() {
        let hit = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(-2.0, 0.0),
            TOL,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn oblique_intersection_point() {
        let p = line_line_point_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 1.0),
            &Point2::new(4.0, 0.0),
            &Vector2::new(-1.0, 1.0),
            TOL,
        )
        .unwrap();
        assert!((p.x - 2.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }
}
