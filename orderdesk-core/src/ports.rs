//! Collaborators consumed by order placement.
//!
//! Each port is a synchronous capability injected at construction. Test suites
//! build doubles from them with the `mocks` feature.

use orderdesk_shared::{Customer, CustomerId, Order, OrderConfirmation, Sku, TaxEntry};
use uuid::Uuid;

/// Customer storage
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait CustomerLookup: Send + Sync {
    /// Resolve a customer, or `None` when the id is unknown
    fn get(&self, customer_id: CustomerId) -> Option<Customer>;
}

/// Product stock levels
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait ProductStock: Send + Sync {
    fn is_in_stock(&self, sku: &Sku) -> bool;
}

/// Tax rates per jurisdiction
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait TaxRateLookup: Send + Sync {
    /// All entries applying to the jurisdiction; empty when none apply
    fn get_tax_entries(&self, postal_code: &str, country: &str) -> Vec<TaxEntry>;
}

/// Accepts an order for processing and issues its confirmation
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait OrderFulfillment: Send + Sync {
    fn fulfill(&self, order: &Order) -> OrderConfirmation;
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait EmailNotifier: Send + Sync {
    fn send_order_confirmation_email(&self, customer_id: CustomerId, order_id: Uuid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_mock_customer_lookup_by_id() {
        let mut lookup = MockCustomerLookup::new();
        lookup
            .expect_get()
            .with(eq(CustomerId(1)))
            .returning(|id| Some(Customer::new(id, "98101", "US")));
        lookup.expect_get().with(eq(CustomerId(2))).returning(|_| None);

        assert_eq!(lookup.get(CustomerId(1)).map(|c| c.country), Some("US".to_string()));
        assert!(lookup.get(CustomerId(2)).is_none());
    }

    #[test]
    fn test_ports_are_object_safe() {
        let mut stock = MockProductStock::new();
        stock.expect_is_in_stock().return_const(true);

        let stock: Box<dyn ProductStock> = Box::new(stock);
        assert!(stock.is_in_stock(&Sku::from("yes")));
    }
}
