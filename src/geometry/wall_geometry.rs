use crate::math::polygon_2d::{left_normal, right_normal, signed_area_2d};
use crate::math::{Point2, Vector2};
use crate::model::Wall;

/// Rotational direction of the polygon through the wall start points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// One face of a wall: `Inner` faces the room interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Inner,
    Outer,
}

impl Face {
    /// `+1` for the inner face, `-1` for the outer, as a multiple of the inward normal.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Inner => 1.0,
            Self::Outer => -1.0,
        }
    }
}

/// Oriented geometry derived from a stored [`Wall`].
#[derive(Debug, Clone, PartialEq)]
pub struct WallGeometry {
    pub wall_number: u32,
    pub start: Point2,
    pub end: Point2,
    /// Unit vector from `start` to `end`.
    pub tangent: Vector2,
    /// Unit vector pointing into the room.
    pub normal: Vector2,
    pub angle_deg: f64,
    pub length: f64,
    pub thickness: f64,
    pub height: f64,
    /// Effective top height at the start corner (differs from `height` on sloped walls).
    pub start_height: f64,
    /// Effective top height at the end corner.
    pub end_height: f64,
}

impl WallGeometry {
    /// Offset from the centerline to the given face.
    #[must_use]
    pub fn face_offset(&self, face: Face) -> Vector2 {
        self.normal * (face.sign() * self.thickness * 0.5)
    }

    /// Start point of the given face line.
    #[must_use]
    pub fn face_start(&self, face: Face) -> Point2 {
        self.start + self.face_offset(face)
    }

    /// End point of the given face line.
    #[must_use]
    pub fn face_end(&self, face: Face) -> Point2 {
        self.end + self.face_offset(face)
    }
}

/// Winding of the polygon formed by the wall start points.
///
/// A zero-area (degenerate) loop counts as counter-clockwise.
#[must_use]
pub fn room_winding(walls: &[Wall]) -> Winding {
    let starts: Vec<Point2> = walls.iter().map(|w| w.start).collect();
    if signed_area_2d(&starts) < 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Derives endpoints, tangent, inward normal and corner heights for every wall.
///
/// The inward side is chosen once for the whole loop from its winding: to the
/// right of each wall for a clockwise loop, to the left otherwise. Returns an
/// empty vector for fewer than 3 walls.
#[must_use]
pub fn compute_wall_geometries(walls: &[Wall]) -> Vec<WallGeometry> {
    let n = walls.len();
    if n < 3 {
        return Vec::new();
    }
    let winding = room_winding(walls);

    walls
        .iter()
        .enumerate()
        .map(|(i, wall)| {
            let tangent = wall.direction();
            let normal = match winding {
                Winding::Clockwise => right_normal(&tangent),
                Winding::CounterClockwise => left_normal(&tangent),
            };
            let prev = &walls[(i + n - 1) % n];
            let next = &walls[(i + 1) % n];
            WallGeometry {
                wall_number: wall.wall_number,
                start: wall.start,
                end: wall.end(),
                tangent,
                normal,
                angle_deg: wall.angle_deg,
                length: wall.length,
                thickness: wall.thickness,
                height: wall.height,
                start_height: corner_height(wall, prev),
                end_height: corner_height(wall, next),
            }
        })
        .collect()
}

/// Top height of `wall` where it meets `neighbour`.
fn corner_height(wall: &Wall, neighbour: &Wall) -> f64 {
    if wall.follow_angle && neighbour.height > wall.height {
        neighbour.height
    } else {
        wall.height
    }
}
