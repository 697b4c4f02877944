use serde::{Deserialize, Serialize};

/// Which end of a wall a joint attaches to. Stored as `0` (start) or `1` (end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Corner {
    Start,
    End,
}

impl From<Corner> for u8 {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::Start => 0,
            Corner::End => 1,
        }
    }
}

impl TryFrom<u8> for Corner {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Start),
            1 => Ok(Self::End),
            other => Err(format!("corner must be 0 or 1, got {other}")),
        }
    }
}

/// Connects a corner of `wall1` to a corner of `wall2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallJoint {
    pub wall1: u32,
    pub corner1: Corner,
    pub wall2: u32,
    pub corner2: Corner,
    /// `true` for a mitered corner, `false` for a butt joint.
    pub miter_back: bool,
    #[serde(default)]
    pub is_interior: bool,
}

impl WallJoint {
    /// Joint in chain order: `wall1`'s end meets `wall2`'s start.
    #[must_use]
    pub fn chained(wall1: u32, wall2: u32, miter_back: bool) -> Self {
        Self {
            wall1,
            corner1: Corner::End,
            wall2,
            corner2: Corner::Start,
            miter_back,
            is_interior: false,
        }
    }

    /// Whether this joint attaches to `corner` of the given wall.
    #[must_use]
    pub fn touches(&self, wall_number: u32, corner: Corner) -> bool {
        (self.wall1 == wall_number && self.corner1 == corner)
            || (self.wall2 == wall_number && self.corner2 == corner)
    }

    /// Returns the wall ending at this joint and the wall starting at it.
    ///
    /// Joints whose corners are not one end and one start fall back to
    /// `(wall1, wall2)`.
    #[must_use]
    pub fn ending_and_starting(&self) -> (u32, u32) {
        if self.corner1 == Corner::Start && self.corner2 == Corner::End {
            (self.wall2, self.wall1)
        } else {
            (self.wall1, self.wall2)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn corner_from_flag() {
        assert_eq!(Corner::try_from(0).unwrap(), Corner::Start);
        assert_eq!(Corner::try_from(1).unwrap(), Corner::End);
        assert!(Corner::try_from(2).is_err());
    }

    #[test]
    fn reversed_joint_reports_ending_wall_first() {
        let joint = WallJoint {
            wall1: 4,
            corner1: Corner::Start,
            wall2: 3,
            corner2: Corner::End,
            miter_back: true,
            is_interior: false,
        };
        assert_eq!(joint.ending_and_starting(), (3, 4));
        assert_eq!(WallJoint::chained(1, 2, false).ending_and_starting(), (1, 2));
    }
}
