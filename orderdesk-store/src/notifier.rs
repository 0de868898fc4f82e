use orderdesk_core::EmailNotifier;
use orderdesk_shared::CustomerId;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Records confirmation emails in the log instead of delivering them
#[derive(Debug, Default)]
pub struct LoggingEmailNotifier {
    sent: AtomicUsize,
}

impl LoggingEmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::Relaxed)
    }
}

impl EmailNotifier for LoggingEmailNotifier {
    fn send_order_confirmation_email(&self, customer_id: CustomerId, order_id: Uuid) {
        self.sent.fetch_add(1, Ordering::Relaxed);
        tracing::info!(%customer_id, %order_id, "Sending order confirmation email");
    }
}
