use crate::config::KernelConfig;
use crate::geometry::{compute_wall_geometries, Face, WallGeometry};
use crate::math::intersect_2d::line_line_point_2d;
use crate::math::Point2;
use crate::model::Wall;

/// Inner and outer perimeter of the wall loop.
///
/// Vertex `i` of each polygon is the corner at the start of wall `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPolygons {
    pub inner: Vec<Point2>,
    pub outer: Vec<Point2>,
}

/// Computes the room polygons with the default parallel tolerance.
#[must_use]
pub fn compute_room_polygons(walls: &[Wall]) -> RoomPolygons {
    compute_room_polygons_with(walls, &KernelConfig::default())
}

/// Offsets each wall's centerline by half its thickness to either side and
/// intersects neighbouring face lines to find the true corners.
///
/// Inner and outer polygons are resolved independently since thickness may
/// differ per wall. Parallel neighbours fall back to the wall's own offset
/// start point. Empty for fewer than 3 walls.
#[must_use]
pub fn compute_room_polygons_with(walls: &[Wall], config: &KernelConfig) -> RoomPolygons {
    let geometries = compute_wall_geometries(walls);
    polygons_from_geometries(&geometries, config.parallel_tolerance)
}

pub(crate) fn polygons_from_geometries(
    geometries: &[WallGeometry],
    parallel_tolerance: f64,
) -> RoomPolygons {
    RoomPolygons {
        inner: face_polygon(geometries, Face::Inner, parallel_tolerance),
        outer: face_polygon(geometries, Face::Outer, parallel_tolerance),
    }
}

fn face_polygon(geometries: &[WallGeometry], face: Face, parallel_tolerance: f64) -> Vec<Point2> {
    let n = geometries.len();
    (0..n)
        .map(|i| {
            let prev = &geometries[(i + n - 1) % n];
            let cur = &geometries[i];
            let fallback = cur.face_start(face);
            line_line_point_2d(
                &prev.face_start(face),
                &prev.tangent,
                &fallback,
                &cur.tangent,
                parallel_tolerance,
            )
            .unwrap_or_else(|| {
                tracing::trace!(
                    wall = cur.wall_number,
                    ?face,
                    "parallel face lines, using offset start point"
                );
                fallback
            })
        })
        .collect()
}
