pub mod inventory;

pub use inventory::{InventoryError, InventoryItem, InventoryManager};
