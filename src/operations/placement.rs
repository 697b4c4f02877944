use crate::geometry::{compute_wall_geometries, WallGeometry};
use crate::math::angle::normalize_deg;
use crate::math::{Point3, UnitQuaternion, Vector3};
use crate::model::wall_index;
use crate::model::{Product, Room, Wall, WallJoint};
use crate::transform::to_view_point;

use super::trim::{compute_wall_trims, WallTrim};

/// World-space placement of a product hung on a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductPlacement {
    pub wall_number: u32,
    /// Room-space position; `z` is the product's elevation.
    pub position: Point3,
    /// Wall angle turned by 180 degrees, in `[0, 360)`. Applied on top of the
    /// product's own rotation.
    pub wall_angle_deg: f64,
}

impl ProductPlacement {
    /// Room-space orientation of the product: a turn about the vertical by
    /// `wall_angle_deg + product_rot_deg`.
    #[must_use]
    pub fn orientation(&self, product_rot_deg: f64) -> UnitQuaternion {
        UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            (self.wall_angle_deg + product_rot_deg).to_radians(),
        )
    }

    /// Position in view space.
    #[must_use]
    pub fn view_position(&self) -> Point3 {
        to_view_point(&self.position)
    }
}

/// Maps a product's wall-relative offset to a room-space position.
///
/// Along the wall the product sits at `trim_start + x + width` (the extra
/// width accounts for the half-turn applied when the product is drawn facing
/// out of the wall); across it, `thickness / 2 + depth` inward so the back
/// face lands on the inner surface.
///
/// Returns `None` for unplaced products (`"0"`), unparseable references,
/// references to a missing wall, and rooms with fewer than 3 walls.
#[must_use]
pub fn compute_product_world_offset(
    product: &Product,
    walls: &[Wall],
    joints: &[WallJoint],
) -> Option<ProductPlacement> {
    let geometries = compute_wall_geometries(walls);
    let trims = compute_wall_trims(walls, joints);
    place(product, walls, &geometries, &trims)
}

/// Places every product of a room, parallel to `room.products`.
#[must_use]
pub fn place_products(room: &Room) -> Vec<Option<ProductPlacement>> {
    let geometries = compute_wall_geometries(&room.walls);
    let trims = compute_wall_trims(&room.walls, &room.joints);
    room.products
        .iter()
        .map(|p| place(p, &room.walls, &geometries, &trims))
        .collect()
}

fn place(
    product: &Product,
    walls: &[Wall],
    geometries: &[WallGeometry],
    trims: &[WallTrim],
) -> Option<ProductPlacement> {
    let wall_ref = product.wall_ref()?;
    let index = wall_index(walls, wall_ref.wall_number)?;
    let geo = geometries.get(index)?;
    let trim = trims.get(index)?;

    let along = trim.start + product.x + product.width;
    let inward = geo.thickness * 0.5 + product.depth;
    let plan = geo.start + geo.tangent * along + geo.normal * inward;

    Some(ProductPlacement {
        wall_number: wall_ref.wall_number,
        position: Point3::new(plan.x, plan.y, product.elev),
        wall_angle_deg: normalize_deg(geo.angle_deg + 180.0),
    })
}
