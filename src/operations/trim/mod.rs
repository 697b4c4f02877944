//! Corner resolution between neighbouring walls: trims, offset polygons,
//! miter extensions and the outline footprints built from them.

mod footprint;
mod miter;
mod polygons;
mod trims;

pub use footprint::{compute_wall_footprints, WallFootprint};
pub use miter::{compute_wall_miter_extensions, MiterExtension};
pub use polygons::{compute_room_polygons, compute_room_polygons_with, RoomPolygons};
pub use trims::{compute_wall_trims, WallTrim};
