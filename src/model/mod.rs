mod joint;
mod product;
mod room;
mod wall;

pub use joint::{Corner, WallJoint};
pub use product::{Product, WallRef};
pub use room::{wall_index, Room};
pub use wall::Wall;
