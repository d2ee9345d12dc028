//! Inventory item domain entities.

pub mod model;
pub mod status;

pub use model::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};
pub use status::ItemStatus;
