pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Customer, CustomerId, TaxEntry};
pub use order::{Order, OrderConfirmation, OrderItem};
pub use product::{ModelError, Product, Sku};
