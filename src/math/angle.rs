use super::{Point2, Vector2};

/// Unit direction for an angle in degrees, measured from +X towards +Y.
#[must_use]
pub fn direction_deg(angle_deg: f64) -> Vector2 {
    let rad = angle_deg.to_radians();
    Vector2::new(rad.cos(), rad.sin())
}

/// Angle of a vector in degrees, in `(-180, 180]`.
#[must_use]
pub fn angle_of_deg(v: &Vector2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_deg(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Endpoint of a ray of `length` from `start` at `angle_deg`.
#[must_use]
pub fn endpoint(start: &Point2, angle_deg: f64, length: f64) -> Point2 {
    start + direction_deg(angle_deg) * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn direction_of_right_angle() {
        let d = direction_deg(90.0);
        assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_round_trip_quadrants() {
        for a in [0.0, 45.0, 135.0, -90.0, 180.0] {
            assert_abs_diff_eq!(angle_of_deg(&direction_deg(a)), a, epsilon = 1e-9);
        }
    }

    #[test]
    fn normalize_wraps_negative_and_large() {
        assert_abs_diff_eq!(normalize_deg(-90.0), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_deg(450.0), 90.0, epsilon = 1e-12);
        assert!(normalize_deg(-1e-20) < 360.0);
    }

    #[test]
    fn endpoint_along_angle() {
        let p = endpoint(&Point2::new(1.0, 1.0), 180.0, 2.0);
        assert_abs_diff_eq!(p.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}
