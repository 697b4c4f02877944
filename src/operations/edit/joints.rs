use std::collections::HashMap;

use crate::model::{Wall, WallJoint};

/// Regenerates the joint cycle for `walls`: joint `i` joins the end of wall
/// `i` to the start of wall `(i + 1) % n`.
///
/// Flags of a pair that already had a joint in `old` (matched by the wall
/// numbers of the ending and starting wall) are kept; new pairs are mitered
/// and exterior. Fewer than 2 walls have no joints.
#[must_use]
pub fn rebuild_joints(walls: &[Wall], old: Option<&[WallJoint]>) -> Vec<WallJoint> {
    let n = walls.len();
    if n < 2 {
        return Vec::new();
    }

    let flags: HashMap<(u32, u32), (bool, bool)> = old
        .unwrap_or_default()
        .iter()
        .map(|j| (j.ending_and_starting(), (j.miter_back, j.is_interior)))
        .collect();

    (0..n)
        .map(|i| {
            let ending = walls[i].wall_number;
            let starting = walls[(i + 1) % n].wall_number;
            let (miter_back, is_interior) = flags
                .get(&(ending, starting))
                .copied()
                .unwrap_or((true, false));
            WallJoint {
                is_interior,
                ..WallJoint::chained(ending, starting, miter_back)
            }
        })
        .collect()
}
