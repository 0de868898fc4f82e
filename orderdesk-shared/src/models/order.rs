use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use uuid::Uuid;

use super::customer::CustomerId;
use super::product::Product;

/// A line in an order: one product and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl OrderItem {
    pub fn new(product: Product, quantity: NonZeroU32) -> Self {
        Self { product, quantity }
    }

    /// Quantity times unit price, or `None` when it exceeds `Decimal::MAX`
    pub fn line_total(&self) -> Option<Decimal> {
        Decimal::from(self.quantity.get()).checked_mul(self.product.price())
    }
}

/// A customer's request to buy a list of items, in the order given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(customer_id: CustomerId, items: Vec<OrderItem>) -> Self {
        Self { customer_id, items }
    }
}

/// Issued by fulfillment once an order is accepted for processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub order_number: String,
    pub customer_id: CustomerId,
}
