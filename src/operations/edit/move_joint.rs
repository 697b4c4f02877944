use crate::config::KernelConfig;
use crate::error::{EditError, Result};
use crate::math::angle::{angle_of_deg, endpoint, normalize_deg};
use crate::math::Point2;
use crate::model::wall_index;
use crate::model::{Corner, Room, Wall, WallJoint};

use super::snap::snap_angle;
use super::RoomEdit;

/// Drags a corner of the loop to a new point.
#[derive(Debug, Clone)]
pub struct MoveJoint {
    joint_index: usize,
    target: Point2,
    config: KernelConfig,
}

impl MoveJoint {
    /// Creates a new `MoveJoint` edit with the default config.
    #[must_use]
    pub fn new(joint_index: usize, target: Point2) -> Self {
        Self {
            joint_index,
            target,
            config: KernelConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }
}

impl RoomEdit for MoveJoint {
    fn name(&self) -> &'static str {
        "move_joint"
    }

    fn try_apply(&self, room: &Room) -> Result<Room> {
        let walls = drag(
            &room.walls,
            &room.joints,
            self.joint_index,
            self.target,
            &self.config,
        )?;
        Ok(Room {
            walls,
            ..room.clone()
        })
    }
}

/// Moves a joint, returning `walls` unchanged if the edit is rejected.
#[must_use]
pub fn move_joint(
    walls: &[Wall],
    joints: &[WallJoint],
    joint_index: usize,
    new_x: f64,
    new_y: f64,
) -> Vec<Wall> {
    drag(
        walls,
        joints,
        joint_index,
        Point2::new(new_x, new_y),
        &KernelConfig::default(),
    )
    .unwrap_or_else(|err| {
        tracing::debug!(%err, "move_joint rejected");
        walls.to_vec()
    })
}

/// The wall ending at the joint keeps its start and is re-aimed (with angle
/// snapping) at the target. The wall starting at the joint keeps its far end
/// and restarts from where the first wall actually ends after snapping, so
/// the two stay connected even when the snap misses the target.
fn drag(
    walls: &[Wall],
    joints: &[WallJoint],
    joint_index: usize,
    target: Point2,
    config: &KernelConfig,
) -> std::result::Result<Vec<Wall>, EditError> {
    if !target.x.is_finite() || !target.y.is_finite() {
        let value = if target.x.is_finite() {
            target.y
        } else {
            target.x
        };
        return Err(EditError::InvalidValue {
            field: "target",
            value,
        });
    }
    let joint = joints
        .get(joint_index)
        .ok_or(EditError::JointNotFound(joint_index))?;
    let (ending_number, starting_number) = joint.ending_and_starting();
    let a = wall_index(walls, ending_number).ok_or(EditError::WallNotFound(ending_number))?;
    let b = wall_index(walls, starting_number).ok_or(EditError::WallNotFound(starting_number))?;

    let ending = &walls[a];
    let starting = &walls[b];

    let delta_a = target - ending.start;
    let length_a = delta_a.norm();
    ensure_min(ending_number, length_a, config)?;
    let snapped = snap_angle(angle_of_deg(&delta_a), config.snap_threshold_deg);
    let angle_a = normalize_deg(snapped);
    let corner = endpoint(&ending.start, angle_a, length_a);

    let far = partner_at(joints, starting_number, Corner::End)
        .and_then(|next| wall_index(walls, next))
        .map_or_else(|| starting.end(), |next| walls[next].start);
    let delta_b = far - corner;
    let length_b = delta_b.norm();
    ensure_min(starting_number, length_b, config)?;

    let mut out = walls.to_vec();
    out[a].angle_deg = angle_a;
    out[a].length = length_a;
    out[b].start = corner;
    out[b].angle_deg = normalize_deg(angle_of_deg(&delta_b));
    out[b].length = length_b;
    Ok(out)
}

/// The other wall of the joint attached to `corner` of `wall_number`.
fn partner_at(joints: &[WallJoint], wall_number: u32, corner: Corner) -> Option<u32> {
    joints.iter().find_map(|j| {
        if j.wall1 == wall_number && j.corner1 == corner {
            Some(j.wall2)
        } else if j.wall2 == wall_number && j.corner2 == corner {
            Some(j.wall1)
        } else {
            None
        }
    })
}

fn ensure_min(
    wall: u32,
    length: f64,
    config: &KernelConfig,
) -> std::result::Result<(), EditError> {
    if !length.is_finite() || length < config.min_wall_length {
        return Err(EditError::TooShort {
            wall,
            length,
            min: config.min_wall_length,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::RoomError;
    use crate::geometry::verify_chain_closure;

    fn room() -> Room {
        Room::rectangular(1000.0, 1000.0, 2400.0, 100.0).unwrap()
    }

    #[test]
    fn near_axis_drag_snaps_and_stays_connected() {
        let room = room();
        let edited = MoveJoint::new(0, Point2::new(1100.0, 2.0))
            .try_apply(&room)
            .unwrap();
        let first = &edited.walls[0];
        let second = &edited.walls[1];
        assert_abs_diff_eq!(first.angle_deg, 0.0);
        // Snapped corner lands on the x-axis, not on the requested point.
        assert_abs_diff_eq!(second.start.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!((first.end() - second.start).norm(), 0.0, epsilon = 1e-9);
        // Far end still on wall 3's start.
        assert_abs_diff_eq!(
            (second.end() - edited.walls[2].start).norm(),
            0.0,
            epsilon = 1e-9
        );
        assert!(verify_chain_closure(&edited.walls).closed);
    }

    #[test]
    fn oblique_drag_reaches_target() {
        let room = room();
        let edited = MoveJoint::new(0, Point2::new(1100.0, 300.0))
            .try_apply(&room)
            .unwrap();
        let corner = edited.walls[0].end();
        assert_abs_diff_eq!(corner.x, 1100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(corner.y, 300.0, epsilon = 1e-9);
        assert_eq!(edited.walls[1].start, corner);
        assert_eq!(edited.walls[2], room.walls[2]);
        assert_eq!(edited.walls[3], room.walls[3]);
    }

    #[test]
    fn closing_joint_moves_first_wall_start() {
        let room = room();
        let edited = MoveJoint::new(3, Point2::new(-100.0, -100.0))
            .try_apply(&room)
            .unwrap();
        assert_abs_diff_eq!(edited.walls[0].start.x, -100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            (edited.walls[0].end() - edited.walls[1].start).norm(),
            0.0,
            epsilon = 1e-9
        );
        assert!(verify_chain_closure(&edited.walls).closed);
    }

    #[test]
    fn missing_joint_or_collapse_is_rejected() {
        let room = room();
        assert!(matches!(
            MoveJoint::new(9, Point2::new(0.0, 0.0)).try_apply(&room).unwrap_err(),
            RoomError::Edit(EditError::JointNotFound(9))
        ));
        // Dragging onto wall 3's start collapses wall 2.
        let walls = move_joint(&room.walls, &room.joints, 0, 1000.0, 990.0);
        assert_eq!(walls, room.walls);
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let room = room();
        let err = MoveJoint::new(0, Point2::new(f64::NAN, 5.0))
            .try_apply(&room)
            .unwrap_err();
        assert!(matches!(
            err,
            RoomError::Edit(EditError::InvalidValue {
                field: "target",
                ..
            })
        ));
        let edit = MoveJoint::new(0, Point2::new(f64::INFINITY, 0.0));
        assert!(edit.try_apply(&room).is_err());

        let walls = move_joint(&room.walls, &room.joints, 0, f64::NAN, 0.0);
        assert_eq!(walls, room.walls);
        let walls = move_joint(&room.walls, &room.joints, 2, 0.0, f64::NEG_INFINITY);
        assert_eq!(walls, room.walls);
    }

    #[test]
    fn non_finite_length_fails_minimum_check() {
        let config = KernelConfig::default();
        assert!(ensure_min(1, f64::NAN, &config).is_err());
        assert!(ensure_min(1, f64::INFINITY, &config).is_err());
        assert!(ensure_min(1, 500.0, &config).is_ok());
    }

    #[test]
    fn open_chain_uses_own_endpoint() {
        let room = room();
        let joints = vec![room.joints[0].clone()];
        let edited = move_joint(&room.walls, &joints, 0, 1000.0, 100.0);
        // 5.7 degrees is beyond the snap threshold, so the corner is exact.
        // With no joint at wall 2's end, its own end stays put.
        let second = &edited[1];
        assert_abs_diff_eq!(second.start.y, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(second.end().y, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(second.length, 900.0, epsilon = 1e-9);
    }
}
