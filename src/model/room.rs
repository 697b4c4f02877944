use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::angle::{angle_of_deg, endpoint, normalize_deg};
use crate::math::{Point2, TOLERANCE};
use crate::operations::edit::rebuild_joints;

use super::{Product, Wall, WallJoint};

/// One room: the wall loop, its joints, and the products hung on it.
///
/// `joints[i]` connects `walls[i]`'s end to `walls[(i + 1) % n]`'s start once
/// the joints have been rebuilt by the kernel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub walls: Vec<Wall>,
    pub joints: Vec<WallJoint>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Room {
    /// Wraps collections supplied by a file parser verbatim.
    #[must_use]
    pub fn new(walls: Vec<Wall>, joints: Vec<WallJoint>, products: Vec<Product>) -> Self {
        Self {
            walls,
            joints,
            products,
        }
    }

    /// Builds a `width` x `depth` rectangle, counter-clockwise from the origin.
    ///
    /// Walls 1..4 run at 0, 90, 180 and 270 degrees; all joints are mitered.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if any dimension is not positive.
    pub fn rectangular(width: f64, depth: f64, height: f64, thickness: f64) -> Result<Self> {
        for (name, value) in [
            ("width", width),
            ("depth", depth),
            ("height", height),
            ("thickness", thickness),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(GeometryError::Degenerate(format!(
                    "room {name} must be positive, got {value}"
                ))
                .into());
            }
        }

        let sides = [(0.0, width), (90.0, depth), (180.0, width), (270.0, depth)];
        let mut walls = Vec::with_capacity(sides.len());
        let mut start = Point2::origin();
        for (number, (angle, length)) in (1_u32..).zip(sides) {
            walls.push(Wall::new(number, start, angle, length, height, thickness));
            start = endpoint(&start, angle, length);
        }
        let joints = rebuild_joints(&walls, None);
        Ok(Self::new(walls, joints, Vec::new()))
    }

    /// Builds a room whose wall centerlines run through `points` in order,
    /// closing back to the first point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewWalls` for fewer than 3 points, or
    /// `GeometryError::Degenerate` if two consecutive points coincide or a
    /// dimension is not positive.
    pub fn from_points(points: &[Point2], height: f64, thickness: f64) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewWalls(points.len()).into());
        }
        if height.is_nan() || height <= 0.0 || thickness.is_nan() || thickness <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "height {height} and thickness {thickness} must be positive"
            ))
            .into());
        }

        let n = points.len();
        let mut walls = Vec::with_capacity(n);
        for (i, number) in (0..n).zip(1_u32..) {
            let start = points[i];
            let delta = points[(i + 1) % n] - start;
            let length = delta.norm();
            if length < TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "points {i} and {} coincide",
                    (i + 1) % n
                ))
                .into());
            }
            let angle = normalize_deg(angle_of_deg(&delta));
            walls.push(Wall::new(number, start, angle, length, height, thickness));
        }
        let joints = rebuild_joints(&walls, None);
        Ok(Self::new(walls, joints, Vec::new()))
    }

    /// Position of the wall with the given number in the chain.
    #[must_use]
    pub fn wall_index(&self, wall_number: u32) -> Option<usize> {
        wall_index(&self.walls, wall_number)
    }

    /// The wall with the given number.
    #[must_use]
    pub fn wall(&self, wall_number: u32) -> Option<&Wall> {
        self.wall_index(wall_number).map(|i| &self.walls[i])
    }
}

/// Position of the wall with the given number in `walls`.
#[must_use]
pub fn wall_index(walls: &[Wall], wall_number: u32) -> Option<usize> {
    walls.iter().position(|w| w.wall_number == wall_number)
}
