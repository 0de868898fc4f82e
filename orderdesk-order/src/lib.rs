pub mod fulfillment;
pub mod models;
pub mod placement;

pub use fulfillment::FulfillmentService;
pub use models::OrderSummary;
pub use placement::{OrderPlacementService, PlaceOrderError};
