use crate::model::wall_index;
use crate::model::{Corner, Wall, WallJoint};

/// How far a wall is shortened at each end along its tangent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallTrim {
    pub start: f64,
    pub end: f64,
}

impl WallTrim {
    fn add(&mut self, corner: Corner, amount: f64) {
        match corner {
            Corner::Start => self.start += amount,
            Corner::End => self.end += amount,
        }
    }
}

/// Computes the trim of every wall, parallel to `walls`.
///
/// At each joint both walls are shortened by half the thickness of the other,
/// on the end named by the joint's corner flag. Butt and miter joints trim
/// identically. Joints that name a missing wall are skipped.
#[must_use]
pub fn compute_wall_trims(walls: &[Wall], joints: &[WallJoint]) -> Vec<WallTrim> {
    let mut trims = vec![WallTrim::default(); walls.len()];
    for joint in joints {
        let a = wall_index(walls, joint.wall1);
        let b = wall_index(walls, joint.wall2);
        let (Some(a), Some(b)) = (a, b) else {
            tracing::debug!(
                wall1 = joint.wall1,
                wall2 = joint.wall2,
                "joint references a missing wall, skipping trim"
            );
            continue;
        };
        trims[a].add(joint.corner1, walls[b].half_thickness());
        trims[b].add(joint.corner2, walls[a].half_thickness());
    }
    trims
}
