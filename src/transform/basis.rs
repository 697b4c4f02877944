use std::f64::consts::FRAC_PI_2;

use crate::math::{Point3, UnitQuaternion, Vector3};

// Room space: X = width, Y = depth, Z = height (Z up).
// View space: X right, Y up, Z towards the viewer.
// The map (x, y, z) -> (x, z, -y) is a proper rotation (det +1).

/// Rotation taking room axes to view axes: -90 degrees about X.
#[must_use]
pub fn basis_rotation() -> UnitQuaternion {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2)
}

/// Converts a room-space point to view space.
#[must_use]
pub fn to_view_point(p: &Point3) -> Point3 {
    Point3::new(p.x, p.z, -p.y)
}

/// Converts a view-space point back to room space.
#[must_use]
pub fn to_room_point(p: &Point3) -> Point3 {
    Point3::new(p.x, -p.z, p.y)
}

/// Converts a room-space direction to view space.
#[must_use]
pub fn to_view_vector(v: &Vector3) -> Vector3 {
    Vector3::new(v.x, v.z, -v.y)
}

/// Converts a view-space direction back to room space.
#[must_use]
pub fn to_room_vector(v: &Vector3) -> Vector3 {
    Vector3::new(v.x, -v.z, v.y)
}

/// Expresses a room-space orientation in view space (`B * q * B^-1`).
#[must_use]
pub fn to_view_rotation(q: &UnitQuaternion) -> UnitQuaternion {
    let b = basis_rotation();
    b * q * b.inverse()
}

/// Expresses a view-space orientation in room space (`B^-1 * q * B`).
#[must_use]
pub fn to_room_rotation(q: &UnitQuaternion) -> UnitQuaternion {
    let b = basis_rotation();
    b.inverse() * q * b
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn height_becomes_view_up() {
        let up = to_view_point(&Point3::new(0.0, 0.0, 2400.0));
        assert_relative_eq!(up, Point3::new(0.0, 2400.0, 0.0));
    }

    #[test]
    fn swizzle_matches_basis_rotation() {
        let v = Vector3::new(1.5, -2.0, 3.25);
        let rotated = basis_rotation() * v;
        assert_relative_eq!(rotated, to_view_vector(&v), epsilon = 1e-12);
    }

    #[test]
    fn basis_is_proper_rotation() {
        let m = basis_rotation().to_rotation_matrix();
        assert_relative_eq!(m.matrix().determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn point_round_trip_is_exact() {
        let p = Point3::new(123.456, -789.012, 42.0);
        assert_eq!(to_room_point(&to_view_point(&p)), p);
        assert_eq!(to_view_point(&to_room_point(&p)), p);
        let v = Vector3::new(0.1, 0.2, 0.3);
        assert_eq!(to_room_vector(&to_view_vector(&v)), v);
    }

    #[test]
    fn rotation_round_trip() {
        let q = UnitQuaternion::from_euler_angles(0.3, -1.1, 2.0);
        let back = to_room_rotation(&to_view_rotation(&q));
        assert!(back.angle_to(&q) < 1e-6);
    }

    #[test]
    fn room_yaw_is_view_rotation_about_y() {
        // Turning about room Z (up) is turning about view Y (up).
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.7);
        let view = to_view_rotation(&yaw);
        let axis = view.axis().map(|a| a.into_inner());
        assert!(axis.is_some_and(|a| (a.y - 1.0).abs() < 1e-9));
        assert_relative_eq!(view.angle(), 0.7, epsilon = 1e-12);
    }
}
