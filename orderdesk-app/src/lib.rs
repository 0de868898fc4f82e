use std::sync::Arc;

use orderdesk_catalog::{InventoryError, InventoryManager};
use orderdesk_core::CoreResult;
use orderdesk_order::{FulfillmentService, OrderPlacementService, OrderSummary};
use orderdesk_shared::Sku;
use orderdesk_store::{Config, CustomerDirectory, LoggingEmailNotifier, TaxTable};

/// Order placement wired to the in-memory adapters
pub struct App {
    pub service: OrderPlacementService,
    pub inventory: Arc<InventoryManager>,
    pub notifier: Arc<LoggingEmailNotifier>,
}

impl App {
    /// Take a placed order's quantities out of stock.
    ///
    /// All or nothing: if one item cannot be reserved, units already taken for
    /// earlier items are put back.
    pub fn commit_stock(&self, summary: &OrderSummary) -> Result<(), InventoryError> {
        let mut reserved: Vec<(&Sku, u32)> = Vec::with_capacity(summary.items().len());

        for item in summary.items() {
            let sku = &item.product.sku;
            let quantity = item.quantity.get();

            if let Err(e) = self.inventory.reserve(sku, quantity) {
                tracing::warn!(order_id = %summary.order_id(), %sku, error = %e, "Stock reservation failed");
                for (sku, quantity) in reserved {
                    self.inventory.restock(sku, quantity)?;
                }
                return Err(e);
            }
            reserved.push((sku, quantity));
        }

        tracing::info!(order_id = %summary.order_id(), items = reserved.len(), "Stock committed");
        Ok(())
    }
}

pub fn app(config: &Config) -> CoreResult<App> {
    config.validate()?;

    let inventory = Arc::new(InventoryManager::new());
    for stock in &config.inventory {
        inventory.initialize(Sku::new(stock.sku.clone()), stock.quantity);
    }

    let customers = CustomerDirectory::from_config(&config.customers);
    let taxes = TaxTable::from_config(&config.tax_rates);
    let fulfillment = FulfillmentService::new(config.fulfillment.order_number_prefix.clone());
    let notifier = Arc::new(LoggingEmailNotifier::new());

    tracing::debug!(
        skus = config.inventory.len(),
        customers = customers.len(),
        tax_rates = config.tax_rates.len(),
        "Wiring order placement"
    );

    let service = OrderPlacementService::new(
        Arc::new(customers),
        inventory.clone(),
        Arc::new(taxes),
        Arc::new(fulfillment),
        notifier.clone(),
    );

    Ok(App {
        service,
        inventory,
        notifier,
    })
}
