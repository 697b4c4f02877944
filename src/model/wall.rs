use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::math::angle::{direction_deg, endpoint};
use crate::math::{Point2, Vector2};

/// A straight wall segment, stored as the room file describes it.
///
/// Geometry (endpoints, normals) is never cached here; see
/// [`crate::geometry::compute_wall_geometries`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// 1-based identity within one room.
    pub wall_number: u32,
    pub start: Point2,
    /// Direction of the wall in degrees, counter-clockwise from +X.
    pub angle_deg: f64,
    pub length: f64,
    pub height: f64,
    pub thickness: f64,
    /// Slope the top edge to meet a taller neighbour instead of staying flat.
    #[serde(default)]
    pub follow_angle: bool,
    /// Stored fields the kernel does not interpret. Carried through every edit.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Wall {
    /// Creates a wall with no extra attributes and a flat top.
    #[must_use]
    pub fn new(
        wall_number: u32,
        start: Point2,
        angle_deg: f64,
        length: f64,
        height: f64,
        thickness: f64,
    ) -> Self {
        Self {
            wall_number,
            start,
            angle_deg,
            length,
            height,
            thickness,
            follow_angle: false,
            attributes: BTreeMap::new(),
        }
    }

    /// Unit tangent along the wall.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        direction_deg(self.angle_deg)
    }

    /// Computed endpoint: `start + length * direction`.
    #[must_use]
    pub fn end(&self) -> Point2 {
        endpoint(&self.start, self.angle_deg, self.length)
    }

    /// Half of the wall thickness, the offset of each face from the centerline.
    #[must_use]
    pub fn half_thickness(&self) -> f64 {
        self.thickness * 0.5
    }
}
