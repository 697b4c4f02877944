//! Conversion between the room's native axes and the viewer's, and
//! composition of per-part rotation specs.

mod basis;
mod rotation;

pub use basis::{
    basis_rotation, to_room_point, to_room_rotation, to_room_vector, to_view_point,
    to_view_rotation, to_view_vector,
};
pub use rotation::{Axis, RotationSpec, RotationStep};
