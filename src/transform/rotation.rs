use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::{UnitQuaternion, Vector3};

/// A fixed global axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> nalgebra::Unit<Vector3> {
        match self {
            Self::X => Vector3::x_axis(),
            Self::Y => Vector3::y_axis(),
            Self::Z => Vector3::z_axis(),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Self::X),
            "Y" | "y" => Ok(Self::Y),
            "Z" | "z" => Ok(Self::Z),
            other => Err(format!("unknown axis {other:?}")),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// One angle-axis pair of a [`RotationSpec`]. Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationStep {
    pub angle_deg: f64,
    pub axis: Axis,
}

impl RotationStep {
    #[must_use]
    pub fn new(angle_deg: f64, axis: Axis) -> Self {
        Self { angle_deg, axis }
    }

    /// Rotation of this step alone.
    #[must_use]
    pub fn quaternion(&self) -> UnitQuaternion {
        UnitQuaternion::from_axis_angle(&self.axis.unit(), self.angle_deg.to_radians())
    }
}

/// Three extrinsic rotations, applied in order about fixed global axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationSpec {
    pub steps: [RotationStep; 3],
}

impl RotationSpec {
    #[must_use]
    pub fn new(first: RotationStep, second: RotationStep, third: RotationStep) -> Self {
        Self {
            steps: [first, second, third],
        }
    }

    /// Single orientation equivalent to applying the steps in order:
    /// `q3 * q2 * q1`, so the first step acts first.
    #[must_use]
    pub fn compose(&self) -> UnitQuaternion {
        let [q1, q2, q3] = self.steps.map(|s| s.quaternion());
        q3 * q2 * q1
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn spec(a: [(f64, Axis); 3]) -> RotationSpec {
        RotationSpec::new(
            RotationStep::new(a[0].0, a[0].1),
            RotationStep::new(a[1].0, a[1].1),
            RotationStep::new(a[2].0, a[2].1),
        )
    }

    #[test]
    fn zero_angles_are_identity_for_any_axes() {
        for axes in [
            [Axis::X, Axis::Y, Axis::Z],
            [Axis::Z, Axis::Z, Axis::X],
            [Axis::Y, Axis::X, Axis::Y],
        ] {
            let q = spec([(0.0, axes[0]), (0.0, axes[1]), (0.0, axes[2])]).compose();
            assert_relative_eq!(q.angle(), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn steps_rotate_about_fixed_axes() {
        // 90 about X, then 90 about global Z.
        let q = spec([(90.0, Axis::X), (90.0, Axis::Z), (0.0, Axis::X)]).compose();
        assert_relative_eq!(q * Vector3::x(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(q * Vector3::y(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn order_matters() {
        let xz = spec([(90.0, Axis::X), (90.0, Axis::Z), (0.0, Axis::Y)]).compose();
        let zx = spec([(90.0, Axis::Z), (90.0, Axis::X), (0.0, Axis::Y)]).compose();
        assert!(xz.angle_to(&zx) > 0.1);
    }

    #[test]
    fn axis_parsing() {
        assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert!("W".parse::<Axis>().is_err());
        assert_eq!(Axis::X.to_string(), "X");
    }
}
