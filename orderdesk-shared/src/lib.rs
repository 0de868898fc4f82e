pub mod models;
pub mod pii;

pub use models::{
    Customer, CustomerId, ModelError, Order, OrderConfirmation, OrderItem, Product, Sku, TaxEntry,
};
pub use pii::Masked;
