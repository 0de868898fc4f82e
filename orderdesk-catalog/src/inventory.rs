use orderdesk_core::ProductStock;
use orderdesk_shared::Sku;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Stock level for a single SKU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub sku: Sku,
    pub available_quantity: u32,
}

/// In-memory stock levels keyed by SKU.
///
/// Shared behind an `Arc` with order placement, so updates go through `&self`.
#[derive(Debug, Default)]
pub struct InventoryManager {
    inventory: Mutex<HashMap<Sku, InventoryItem>>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the available quantity for a SKU, replacing any previous record
    pub fn initialize(&self, sku: Sku, available_quantity: u32) {
        self.items().insert(
            sku.clone(),
            InventoryItem {
                sku,
                available_quantity,
            },
        );
    }

    pub fn get(&self, sku: &Sku) -> Option<InventoryItem> {
        self.items().get(sku).cloned()
    }

    pub fn restock(&self, sku: &Sku, quantity: u32) -> Result<(), InventoryError> {
        let mut items = self.items();
        let item = items
            .get_mut(sku)
            .ok_or_else(|| InventoryError::NotFound(sku.to_string()))?;

        item.available_quantity = item.available_quantity.saturating_add(quantity);
        Ok(())
    }

    /// Take units out of stock
    pub fn reserve(&self, sku: &Sku, quantity: u32) -> Result<(), InventoryError> {
        let mut items = self.items();
        let item = items
            .get_mut(sku)
            .ok_or_else(|| InventoryError::NotFound(sku.to_string()))?;

        if item.available_quantity < quantity {
            return Err(InventoryError::InsufficientInventory {
                requested: quantity,
                available: item.available_quantity,
            });
        }

        item.available_quantity -= quantity;
        tracing::debug!(%sku, quantity, remaining = item.available_quantity, "Stock reserved");
        Ok(())
    }

    // Every update leaves the map consistent, so a poisoned lock is still usable
    fn items(&self) -> MutexGuard<'_, HashMap<Sku, InventoryItem>> {
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStock for InventoryManager {
    fn is_in_stock(&self, sku: &Sku) -> bool {
        let in_stock = self
            .get(sku)
            .is_some_and(|item| item.available_quantity > 0);

        tracing::debug!(%sku, in_stock, "Stock check");
        in_stock
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory not found: {0}")]
    NotFound(String),

    #[error("Insufficient inventory: requested {requested}, available {available}")]
    InsufficientInventory { requested: u32, available: u32 },
}
