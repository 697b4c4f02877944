use crate::config::KernelConfig;
use crate::geometry::{compute_wall_geometries, Face, WallGeometry};
use crate::model::{Wall, WallJoint};

use super::polygons::{polygons_from_geometries, RoomPolygons};
use super::trims::{compute_wall_trims, WallTrim};

/// How far the true offset-polygon corner protrudes past the trimmed wall
/// box at each end, on the outer and inner faces. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MiterExtension {
    pub start: f64,
    pub end: f64,
    pub inner_start: f64,
    pub inner_end: f64,
}

/// Computes miter extensions for every wall, parallel to `walls`.
///
/// Empty for fewer than 3 walls.
#[must_use]
pub fn compute_wall_miter_extensions(walls: &[Wall], joints: &[WallJoint]) -> Vec<MiterExtension> {
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
        .zip(&trims)
        .enumerate()
        .map(|(i, (geo, trim))| {
            let next = (i + 1) % n;
            let (start, end) = face_extension(geo, trim, &polygons, Face::Outer, i, next);
            let (inner_start, inner_end) =
                face_extension(geo, trim, &polygons, Face::Inner, i, next);
            MiterExtension {
                start,
                end,
                inner_start,
                inner_end,
            }
        })
        .collect()
}

/// Start and end extension on one face of a wall.
fn face_extension(
    geo: &WallGeometry,
    trim: &WallTrim,
    polygons: &RoomPolygons,
    face: Face,
    index: usize,
    next: usize,
) -> (f64, f64) {
    let corners = match face {
        Face::Inner => &polygons.inner,
        Face::Outer => &polygons.outer,
    };
    let box_start = geo.face_start(face) + geo.tangent * trim.start;
    let box_end = geo.face_end(face) - geo.tangent * trim.end;
    let start = (box_start - corners[index]).dot(&geo.tangent);
    let end = (corners[next] - box_end).dot(&geo.tangent);
    (start.max(0.0), end.max(0.0))
}
