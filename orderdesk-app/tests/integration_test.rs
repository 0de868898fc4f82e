use std::fs;
use std::path::{Path, PathBuf};

use orderdesk_app::app;
use orderdesk_catalog::InventoryError;
use orderdesk_order::PlaceOrderError;
use orderdesk_shared::{CustomerId, Order};
use orderdesk_store::Config;
use rust_decimal_macros::dec;

fn manifest_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn shipped_config() -> Config {
    Config::load_from(&manifest_dir().join("config"), "test").unwrap()
}

fn sample_order() -> Order {
    let raw = fs::read_to_string(manifest_dir().join("orders/sample_order.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_sample_order_end_to_end() {
    let app = app(&shipped_config()).unwrap();

    let summary = app.service.place_order(sample_order()).unwrap();

    assert_eq!(summary.customer_id(), CustomerId(42));
    assert!(summary.order_number().starts_with("ORD-"));
    assert_eq!(summary.items().len(), 2);
    assert_eq!(summary.taxes().len(), 2);
    assert_eq!(summary.net_total(), dec!(35.0));
    assert_eq!(summary.total_tax_rate(), dec!(1.20));
    assert_eq!(summary.total(), dec!(42.0));
    assert_eq!(app.notifier.sent_count(), 1);
}

#[test]
fn test_customer_without_tax_entries() {
    let app = app(&shipped_config()).unwrap();
    let mut order = sample_order();
    order.customer_id = CustomerId(7);

    let summary = app.service.place_order(order).unwrap();

    assert!(summary.taxes().is_empty());
    assert_eq!(summary.net_total(), dec!(35.0));
    assert_eq!(summary.total(), dec!(0));
}

#[test]
fn test_out_of_stock_item_is_rejected() {
    let app = app(&shipped_config()).unwrap();
    let mut order = sample_order();
    order.items[1].product.sku = "nope".into();

    let result = app.service.place_order(order);

    assert_eq!(result.err(), Some(PlaceOrderError::ProductsNotInStock));
    assert_eq!(app.notifier.sent_count(), 0);
}

#[test]
fn test_duplicate_and_unknown_skus_are_rejected_together() {
    let app = app(&shipped_config()).unwrap();
    let mut order = sample_order();
    order.items[0].product.sku = "ghost".into();
    order.items[1].product.sku = "ghost".into();

    let result = app.service.place_order(order);

    assert_eq!(
        result.err(),
        Some(PlaceOrderError::SkusNotUniqueAndProductsNotInStock)
    );
    assert_eq!(app.notifier.sent_count(), 0);
}

#[test]
fn test_unknown_customer_is_rejected() {
    let app = app(&shipped_config()).unwrap();
    let mut order = sample_order();
    order.customer_id = CustomerId(999);

    let result = app.service.place_order(order);

    assert_eq!(
        result.err(),
        Some(PlaceOrderError::CustomerNotFound(CustomerId(999)))
    );
    assert_eq!(app.notifier.sent_count(), 0);
}

#[test]
fn test_invalid_config_is_refused() {
    let mut config = shipped_config();
    config.customers.push(config.customers[0].clone());

    assert!(app(&config).is_err());
}

#[test]
fn test_placed_order_commits_stock() {
    let app = app(&shipped_config()).unwrap();

    let summary = app.service.place_order(sample_order()).unwrap();
    app.commit_stock(&summary).unwrap();

    let remaining = |sku: &str| app.inventory.get(&sku.into()).unwrap().available_quantity;
    assert_eq!(remaining("yes"), 23);
    assert_eq!(remaining("yay"), 37);
}

#[test]
fn test_failed_stock_commit_puts_units_back() {
    let mut config = shipped_config();
    for stock in config.inventory.iter_mut().filter(|s| s.sku == "yay") {
        stock.quantity = 2;
    }
    let app = app(&config).unwrap();

    // Two units of "yay" are in stock, so placement passes but three cannot be reserved
    let summary = app.service.place_order(sample_order()).unwrap();
    let result = app.commit_stock(&summary);

    assert!(matches!(
        result,
        Err(InventoryError::InsufficientInventory {
            requested: 3,
            available: 2
        })
    ));
    let remaining = |sku: &str| app.inventory.get(&sku.into()).unwrap().available_quantity;
    assert_eq!(remaining("yes"), 25);
    assert_eq!(remaining("yay"), 2);
}

#[test]
fn test_order_total_overflow_is_a_fault() {
    let app = app(&shipped_config()).unwrap();
    let order: Order = serde_json::from_str(
        r#"{
            "customer_id": 42,
            "items": [
                {
                    "product": { "name": "Ledger", "price": "79228162514264337593543950335", "sku": "yes" },
                    "quantity": 2
                }
            ]
        }"#,
    )
    .unwrap();

    let result = app.service.place_order(order);

    assert_eq!(result.err(), Some(PlaceOrderError::AmountOverflow));
    assert_eq!(app.notifier.sent_count(), 0);
}

#[test]
fn test_negative_price_order_does_not_parse() {
    let result = serde_json::from_str::<Order>(
        r#"{
            "customer_id": 42,
            "items": [
                { "product": { "name": "Refund", "price": "-1.00", "sku": "yes" }, "quantity": 1 }
            ]
        }"#,
    );

    assert!(result.is_err());
}
