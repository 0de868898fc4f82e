pub mod ports;

pub use ports::{CustomerLookup, EmailNotifier, OrderFulfillment, ProductStock, TaxRateLookup};

#[cfg(any(test, feature = "mocks"))]
pub use ports::{
    MockCustomerLookup, MockEmailNotifier, MockOrderFulfillment, MockProductStock,
    MockTaxRateLookup,
};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
