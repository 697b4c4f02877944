use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
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

/// Returns the index of the leftmost vertex (smallest x), breaking ties by
/// smallest y. `None` for an empty slice.
#[must_use]
pub fn leftmost_bottom_index(points: &[Point2]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut best, mut best_pt) = iter.next()?;
    for (i, pt) in iter {
        if pt.x < best_pt.x - TOLERANCE
            || ((pt.x - best_pt.x).abs() < TOLERANCE && pt.y < best_pt.y)
        {
            best = i;
            best_pt = pt;
        }
    }
    Some(best)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing normal of a direction vector.
#[must_use]
pub fn right_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}
