use orderdesk_core::OrderFulfillment;
use orderdesk_shared::{Order, OrderConfirmation};
use uuid::Uuid;

pub const DEFAULT_ORDER_NUMBER_PREFIX: &str = "ORD";

/// Accepts orders in-process and issues confirmation numbers
#[derive(Debug, Clone)]
pub struct FulfillmentService {
    order_number_prefix: String,
}

impl FulfillmentService {
    pub fn new(order_number_prefix: impl Into<String>) -> Self {
        Self {
            order_number_prefix: order_number_prefix.into(),
        }
    }

    /// Format: {PREFIX}-{timestamp}-{short_id}
    fn generate_order_number(&self, order_id: &Uuid) -> String {
        let timestamp = chrono::Utc::now().timestamp();
        let short_id = &order_id.simple().to_string()[..8];
        format!(
            "{}-{}-{}",
            self.order_number_prefix,
            timestamp,
            short_id.to_uppercase()
        )
    }
}

impl Default for FulfillmentService {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_NUMBER_PREFIX)
    }
}

impl OrderFulfillment for FulfillmentService {
    fn fulfill(&self, order: &Order) -> OrderConfirmation {
        let order_id = Uuid::new_v4();
        let order_number = self.generate_order_number(&order_id);

        tracing::info!(
            %order_id,
            %order_number,
            customer_id = %order.customer_id,
            "Order accepted for fulfillment"
        );

        OrderConfirmation {
            order_id,
            order_number,
            customer_id: order.customer_id,
        }
    }
}
