use std::{env, fs, process};

use anyhow::Context;
use orderdesk_app::app;
use orderdesk_shared::Order;
use orderdesk_store::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderdesk_app=info,orderdesk_order=debug,orderdesk_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = env::args()
        .nth(1)
        .context("usage: orderdesk <order.json>")?;

    let config = Config::load().context("Failed to load config")?;
    let app = app(&config).context("Invalid configuration")?;

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let order: Order =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse order in {}", path))?;

    tracing::info!(%path, customer_id = %order.customer_id, "Placing order");

    match app.service.place_order(order) {
        Ok(summary) => {
            app.commit_stock(&summary)
                .with_context(|| format!("Failed to reserve stock for order {}", summary.order_number()))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Err(fault) => {
            tracing::error!(%fault, validation = fault.is_validation_failure(), "Order placement failed");
            eprintln!("Order placement failed: {}", fault);
            process::exit(1);
        }
    }
}
