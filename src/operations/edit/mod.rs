//! Interactive edits of a room's wall loop.
//!
//! Every edit is an operation implementing [`RoomEdit`]: `try_apply` returns
//! a new room or the reason the edit was rejected, and `apply` turns a
//! rejection into an unchanged copy of the input. Edits never mutate their
//! input.

mod height;
mod joints;
mod length;
mod move_joint;
mod snap;
mod split;
mod toggle;

pub use height::{update_wall_height, UpdateWallHeight};
pub use joints::rebuild_joints;
pub use length::{update_wall_length, UpdateWallLength};
pub use move_joint::{move_joint, MoveJoint};
pub use snap::{snap_angle, snap_to_right_angle};
pub use split::{split_wall_at_center, SplitWall};
pub use toggle::{toggle_follow_angle, toggle_joint_miter, ToggleFollowAngle, ToggleJointMiter};

use crate::error::Result;
use crate::model::Room;

/// An edit that maps one room to another.
pub trait RoomEdit {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Applies the edit.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Edit` if the edit names a missing wall or joint,
    /// or would leave a wall shorter than the configured minimum.
    fn try_apply(&self, room: &Room) -> Result<Room>;

    /// Applies the edit, returning an unchanged copy of `room` if it is rejected.
    fn apply(&self, room: &Room) -> Room {
        match self.try_apply(room) {
            Ok(edited) => edited,
            Err(err) => {
                tracing::debug!(edit = self.name(), %err, "edit rejected, room unchanged");
                room.clone()
            }
        }
    }
}
