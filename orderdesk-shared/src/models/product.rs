use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock-keeping unit identifying a product
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A sellable product in the catalog. The price is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub name: String,
    price: Decimal,
    pub sku: Sku,
}

/// Wire shape of a product before the price check
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: Decimal,
    sku: Sku,
}

impl TryFrom<RawProduct> for Product {
    type Error = ModelError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        Product::new(raw.name, raw.price, raw.sku)
    }
}

impl Product {
    /// Build a product, rejecting negative prices
    pub fn new(name: impl Into<String>, price: Decimal, sku: Sku) -> Result<Self, ModelError> {
        if price < Decimal::ZERO {
            return Err(ModelError::NegativePrice { sku, price });
        }

        Ok(Self {
            name: name.into(),
            price,
            sku,
        })
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Product {sku} has a negative price: {price}")]
    NegativePrice { sku: Sku, price: Decimal },
}
