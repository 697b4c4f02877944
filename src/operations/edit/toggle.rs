use crate::error::{EditError, Result};
use crate::model::wall_index;
use crate::model::{Room, Wall, WallJoint};

use super::RoomEdit;

/// Flips a wall's `follow_angle` flag.
#[derive(Debug, Clone)]
pub struct ToggleFollowAngle {
    wall_number: u32,
}

impl ToggleFollowAngle {
    #[must_use]
    pub fn new(wall_number: u32) -> Self {
        Self { wall_number }
    }
}

impl RoomEdit for ToggleFollowAngle {
    fn name(&self) -> &'static str {
        "toggle_follow_angle"
    }

    fn try_apply(&self, room: &Room) -> Result<Room> {
        let i = wall_index(&room.walls, self.wall_number)
            .ok_or(EditError::WallNotFound(self.wall_number))?;
        let mut edited = room.clone();
        edited.walls[i].follow_angle = !edited.walls[i].follow_angle;
        Ok(edited)
    }
}

/// Flips a joint between mitered and butt.
#[derive(Debug, Clone)]
pub struct ToggleJointMiter {
    joint_index: usize,
}

impl ToggleJointMiter {
    #[must_use]
    pub fn new(joint_index: usize) -> Self {
        Self { joint_index }
    }
}

impl RoomEdit for ToggleJointMiter {
    fn name(&self) -> &'static str {
        "toggle_joint_miter"
    }

    fn try_apply(&self, room: &Room) -> Result<Room> {
        if self.joint_index >= room.joints.len() {
            return Err(EditError::JointNotFound(self.joint_index).into());
        }
        let mut edited = room.clone();
        let joint = &mut edited.joints[self.joint_index];
        joint.miter_back = !joint.miter_back;
        Ok(edited)
    }
}

/// Flips `follow_angle` on one wall; unknown walls leave `walls` unchanged.
#[must_use]
pub fn toggle_follow_angle(walls: &[Wall], wall_number: u32) -> Vec<Wall> {
    let mut out = walls.to_vec();
    if let Some(i) = wall_index(walls, wall_number) {
        out[i].follow_angle = !out[i].follow_angle;
    }
    out
}

/// Flips `miter_back` on one joint; out-of-range indices leave `joints` unchanged.
#[must_use]
pub fn toggle_joint_miter(joints: &[WallJoint], joint_index: usize) -> Vec<WallJoint> {
    let mut out = joints.to_vec();
    if let Some(joint) = out.get_mut(joint_index) {
        joint.miter_back = !joint.miter_back;
    }
    out
}
