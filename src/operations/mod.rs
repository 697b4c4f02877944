pub mod edit;
pub mod placement;
pub mod trim;
pub mod verify;

pub use edit::RoomEdit;
pub use placement::{compute_product_world_offset, place_products, ProductPlacement};
pub use verify::{ChainIssue, ChainReport, VerifyChain};
