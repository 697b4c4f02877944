use crate::config::KernelConfig;
use crate::geometry::{compute_wall_geometries, Face, WallGeometry};
use crate::math::Point2;
use crate::model::{Corner, Wall, WallJoint};

use super::polygons::polygons_from_geometries;
use super::trims::compute_wall_trims;

/// Plan-view outline of one wall, counter-clockwise around the wall body
/// when the room itself is counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFootprint {
    pub wall_number: u32,
    pub outer_start: Point2,
    pub outer_end: Point2,
    pub inner_end: Point2,
    pub inner_start: Point2,
}

impl WallFootprint {
    /// Outline vertices in order.
    #[must_use]
    pub fn points(&self) -> [Point2; 4] {
        [
            self.outer_start,
            self.outer_end,
            self.inner_end,
            self.inner_start,
        ]
    }
}

/// How one end of a wall is cut.
#[derive(Debug, Clone, Copy)]
enum EndCut {
    /// Both faces run to their true polygon corners.
    Miter,
    /// Square end at the given distance along the tangent from the wall start.
    Square(f64),
}

/// Builds the outline of every wall, parallel to `walls`.
///
/// Mitered joints cut along the diagonal between the inner and outer corners.
/// At a butt joint the wall ending there runs square through to the outer
/// corner and the wall starting there stops square at the inner corner. An
/// end with no joint is cut square at its (untrimmed) position. Empty for
/// fewer than 3 walls.
#[must_use]
pub fn compute_wall_footprints(walls: &[Wall], joints: &[WallJoint]) -> Vec<WallFootprint> {
    let geometries = compute_wall_geometries(walls);
    if geometries.is_empty() {
        return Vec::new();
    }
    let trims = compute_wall_trims(walls, joints);
    let polygons =
        polygons_from_geometries(&geometries, KernelConfig::default().parallel_tolerance);

    let n = geometries.len();
    geometries
        .iter()
        .enumerate()
        .map(|(i, geo)| {
            let next = (i + 1) % n;
            let along = |p: &Point2| (p - geo.start).dot(&geo.tangent);

            let start_cut = match joint_at(joints, geo.wall_number, Corner::Start) {
                Some(j) if j.miter_back => EndCut::Miter,
                Some(_) => EndCut::Square(along(&polygons.inner[i])),
                None => EndCut::Square(trims[i].start),
            };
            let end_cut = match joint_at(joints, geo.wall_number, Corner::End) {
                Some(j) if j.miter_back => EndCut::Miter,
                Some(_) => EndCut::Square(along(&polygons.outer[next])),
                None => EndCut::Square(geo.length - trims[i].end),
            };

            let (outer_start, inner_start) = match start_cut {
                EndCut::Miter => (polygons.outer[i], polygons.inner[i]),
                EndCut::Square(d) => square_end(geo, d),
            };
            let (outer_end, inner_end) = match end_cut {
                EndCut::Miter => (polygons.outer[next], polygons.inner[next]),
                EndCut::Square(d) => square_end(geo, d),
            };

            WallFootprint {
                wall_number: geo.wall_number,
                outer_start,
                outer_end,
                inner_end,
                inner_start,
            }
        })
        .collect()
}

fn joint_at(joints: &[WallJoint], wall_number: u32, corner: Corner) -> Option<&WallJoint> {
    joints.iter().find(|j| j.touches(wall_number, corner))
}

/// Outer and inner face points at distance `d` along the wall.
fn square_end(geo: &WallGeometry, d: f64) -> (Point2, Point2) {
    let shift = geo.tangent * d;
    (
        geo.face_start(Face::Outer) + shift,
        geo.face_start(Face::Inner) + shift,
    )
}
