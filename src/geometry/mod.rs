mod chain;
mod wall_geometry;

pub use chain::{
    normalized_wall_order, verify_chain_closure, verify_chain_closure_with, ChainClosure,
};
pub use wall_geometry::{compute_wall_geometries, room_winding, Face, WallGeometry, Winding};
