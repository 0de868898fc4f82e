use orderdesk_core::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub fulfillment: FulfillmentConfig,
    #[serde(default)]
    pub inventory: Vec<StockConfig>,
    #[serde(default)]
    pub customers: Vec<CustomerConfig>,
    #[serde(default)]
    pub tax_rates: Vec<TaxRateConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FulfillmentConfig {
    #[serde(default = "default_order_number_prefix")]
    pub order_number_prefix: String,
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self {
            order_number_prefix: default_order_number_prefix(),
        }
    }
}

fn default_order_number_prefix() -> String {
    "ORD".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct StockConfig {
    pub sku: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CustomerConfig {
    pub id: i64,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TaxRateConfig {
    pub postal_code: String,
    pub country: String,
    pub description: String,
    pub rate: Decimal,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Layered load: `default` (required), then `{run_mode}` and `local`
    /// (both optional), then `ORDERDESK__*` environment variables.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        let source = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&source("default")))
            .add_source(config::File::with_name(&source(run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&source("local")).required(false))
            .add_source(config::Environment::with_prefix("ORDERDESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Reject data the in-memory adapters cannot represent faithfully
    pub fn validate(&self) -> CoreResult<()> {
        if self.fulfillment.order_number_prefix.trim().is_empty() {
            return Err(CoreError::ConfigurationError(
                "fulfillment.order_number_prefix must not be empty".to_string(),
            ));
        }

        let mut skus = HashSet::new();
        for stock in &self.inventory {
            if !skus.insert(stock.sku.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "duplicate inventory sku: {}",
                    stock.sku
                )));
            }
        }

        let mut customer_ids = HashSet::new();
        for customer in &self.customers {
            if !customer_ids.insert(customer.id) {
                return Err(CoreError::ValidationError(format!(
                    "duplicate customer id: {}",
                    customer.id
                )));
            }
        }

        if let Some(rate) = self.tax_rates.iter().find(|r| r.rate < Decimal::ZERO) {
            return Err(CoreError::ValidationError(format!(
                "negative tax rate for {} {}: {}",
                rate.country, rate.description, rate.rate
            )));
        }

        Ok(())
    }
}
