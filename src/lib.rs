//! Wall-chain geometry and product placement for cabinetry room layouts.
//!
//! A room is a closed loop of straight walls with cabinets hung on them.
//! Everything here is a pure function of the stored walls, joints and
//! products: geometry is recomputed on demand and edits return new rooms.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod transform;

pub use config::KernelConfig;
pub use error::{Result, RoomError};
pub use model::{Corner, Product, Room, Wall, WallJoint, WallRef};
