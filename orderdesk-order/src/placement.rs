use orderdesk_core::{CustomerLookup, EmailNotifier, OrderFulfillment, ProductStock, TaxRateLookup};
use orderdesk_shared::{CustomerId, Order, OrderItem, TaxEntry};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::OrderSummary;

/// Validates orders, prices them and hands them to fulfillment
pub struct OrderPlacementService {
    customers: Arc<dyn CustomerLookup>,
    stock: Arc<dyn ProductStock>,
    taxes: Arc<dyn TaxRateLookup>,
    fulfillment: Arc<dyn OrderFulfillment>,
    notifier: Arc<dyn EmailNotifier>,
}

impl OrderPlacementService {
    pub fn new(
        customers: Arc<dyn CustomerLookup>,
        stock: Arc<dyn ProductStock>,
        taxes: Arc<dyn TaxRateLookup>,
        fulfillment: Arc<dyn OrderFulfillment>,
        notifier: Arc<dyn EmailNotifier>,
    ) -> Self {
        Self {
            customers,
            stock,
            taxes,
            fulfillment,
            notifier,
        }
    }

    /// Place an order.
    ///
    /// Fulfillment and the confirmation email each run exactly once when the
    /// order passes validation, and never when it does not. The grand total is
    /// the net total multiplied by the summed tax rates. Totals that do not fit
    /// in a `Decimal` fail with `AmountOverflow`; the net total is checked
    /// before fulfillment, the tax-dependent totals after the tax lookup.
    #[tracing::instrument(name = "place_order", skip(self, order), fields(customer_id = %order.customer_id))]
    pub fn place_order(&self, order: Order) -> Result<OrderSummary, PlaceOrderError> {
        tracing::debug!(items = order.items.len(), "Placing order");

        if let Err(fault) = self.validate(&order.items) {
            tracing::warn!(%fault, "Order rejected");
            return Err(fault);
        }

        let net_total = match net_total(&order.items) {
            Some(net_total) => net_total,
            None => {
                tracing::warn!("Net total overflows");
                return Err(PlaceOrderError::AmountOverflow);
            }
        };

        let confirmation = self.fulfillment.fulfill(&order);

        let customer = match self.customers.get(order.customer_id) {
            Some(customer) => customer,
            None => {
                tracing::warn!(order_id = %confirmation.order_id, "Customer not found");
                return Err(PlaceOrderError::CustomerNotFound(order.customer_id));
            }
        };

        let taxes = self
            .taxes
            .get_tax_entries(customer.postal_code.expose(), &customer.country);

        let Some((total_tax_rate, total)) = sum_tax_rates(&taxes)
            .and_then(|rate| net_total.checked_mul(rate).map(|total| (rate, total)))
        else {
            tracing::warn!(order_id = %confirmation.order_id, %net_total, "Grand total overflows");
            return Err(PlaceOrderError::AmountOverflow);
        };

        let summary = OrderSummary::new(
            confirmation.order_id,
            confirmation.order_number,
            order.customer_id,
            order.items,
            net_total,
            taxes,
            total_tax_rate,
            total,
        );

        self.notifier
            .send_order_confirmation_email(summary.customer_id(), summary.order_id());

        tracing::info!(
            order_id = %summary.order_id(),
            order_number = summary.order_number(),
            net_total = %summary.net_total(),
            total = %summary.total(),
            "Order placed"
        );

        Ok(summary)
    }

    /// Uniqueness and stock are both evaluated, then folded into one fault
    fn validate(&self, items: &[OrderItem]) -> Result<(), PlaceOrderError> {
        let skus_unique = has_unique_skus(items);
        let all_in_stock = items
            .iter()
            .all(|item| self.stock.is_in_stock(&item.product.sku));

        match (skus_unique, all_in_stock) {
            (true, true) => Ok(()),
            (false, true) => Err(PlaceOrderError::SkusNotUnique),
            (true, false) => Err(PlaceOrderError::ProductsNotInStock),
            (false, false) => Err(PlaceOrderError::SkusNotUniqueAndProductsNotInStock),
        }
    }
}

fn has_unique_skus(items: &[OrderItem]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(&item.product.sku))
}

fn net_total(items: &[OrderItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.line_total()?))
}

fn sum_tax_rates(taxes: &[TaxEntry]) -> Option<Decimal> {
    taxes
        .iter()
        .try_fold(Decimal::ZERO, |sum, entry| sum.checked_add(entry.rate))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("Order SKUs are not unique")]
    SkusNotUnique,

    #[error("Order products are not in stock")]
    ProductsNotInStock,

    #[error("Order SKUs are not unique and products are not in stock")]
    SkusNotUniqueAndProductsNotInStock,

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Order total exceeds the representable amount")]
    AmountOverflow,
}

impl PlaceOrderError {
    /// True for faults raised by order validation, before fulfillment
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            PlaceOrderError::SkusNotUnique
                | PlaceOrderError::ProductsNotInStock
                | PlaceOrderError::SkusNotUniqueAndProductsNotInStock
        )
    }
}
