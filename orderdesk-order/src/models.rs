use orderdesk_shared::{CustomerId, OrderItem, TaxEntry};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Result of a successful order placement.
///
/// Only order placement builds one, after validation has passed and the
/// customer has been resolved. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    order_id: Uuid,
    order_number: String,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
    net_total: Decimal,
    taxes: Vec<TaxEntry>,
    total_tax_rate: Decimal,
    total: Decimal,
}

impl OrderSummary {
    pub(crate) fn new(
        order_id: Uuid,
        order_number: String,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        net_total: Decimal,
        taxes: Vec<TaxEntry>,
        total_tax_rate: Decimal,
        total: Decimal,
    ) -> Self {
        Self {
            order_id,
            order_number,
            customer_id,
            items,
            net_total,
            taxes,
            total_tax_rate,
            total,
        }
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of quantity times price over all items, before tax
    pub fn net_total(&self) -> Decimal {
        self.net_total
    }

    pub fn taxes(&self) -> &[TaxEntry] {
        &self.taxes
    }

    /// Sum of the applied tax rates
    pub fn total_tax_rate(&self) -> Decimal {
        self.total_tax_rate
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}
