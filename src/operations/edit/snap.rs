/// Nearest multiple of 90 degrees, if `angle_deg` is within `threshold_deg` of it.
#[must_use]
pub fn snap_to_right_angle(angle_deg: f64, threshold_deg: f64) -> Option<f64> {
    let nearest = (angle_deg / 90.0).round() * 90.0;
    ((angle_deg - nearest).abs() <= threshold_deg).then_some(nearest)
}

/// Rounds to the nearest multiple of 90 degrees when within `threshold_deg`,
/// otherwise returns the angle unchanged.
#[must_use]
pub fn snap_angle(angle_deg: f64, threshold_deg: f64) -> f64 {
    snap_to_right_angle(angle_deg, threshold_deg).unwrap_or(angle_deg)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn snaps_near_right_angles() {
        assert_abs_diff_eq!(snap_angle(88.0, 5.0), 90.0);
        assert_abs_diff_eq!(snap_angle(3.0, 5.0), 0.0);
        assert_abs_diff_eq!(snap_angle(-91.5, 5.0), -90.0);
        assert_abs_diff_eq!(snap_angle(358.0, 5.0), 360.0);
    }

    #[test]
    fn leaves_other_angles_alone() {
        assert_abs_diff_eq!(snap_angle(45.0, 5.0), 45.0);
        assert_abs_diff_eq!(snap_angle(84.0, 5.0), 84.0);
        assert!(snap_to_right_angle(84.0, 5.0).is_none());
    }

    #[test]
    fn threshold_is_configurable() {
        assert_abs_diff_eq!(snap_angle(80.0, 10.0), 90.0);
        assert_abs_diff_eq!(snap_angle(89.9, 0.05), 89.9);
    }
}
