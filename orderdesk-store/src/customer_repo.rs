use orderdesk_core::CustomerLookup;
use orderdesk_shared::{Customer, CustomerId};
use std::collections::HashMap;

use crate::app_config::CustomerConfig;

/// In-memory customer storage
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: HashMap<CustomerId, Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(customers: &[CustomerConfig]) -> Self {
        let mut directory = Self::new();
        for customer in customers {
            directory.insert(Customer::new(
                CustomerId(customer.id),
                customer.postal_code.clone(),
                customer.country.clone(),
            ));
        }
        directory
    }

    /// Insert or replace a customer
    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id, customer);
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerLookup for CustomerDirectory {
    fn get(&self, customer_id: CustomerId) -> Option<Customer> {
        let customer = self.customers.get(&customer_id).cloned();
        tracing::debug!(%customer_id, found = customer.is_some(), "Customer lookup");
        customer
    }
}
