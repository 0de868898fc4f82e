use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pii::Masked;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub postal_code: Masked<String>,
    pub country: String,
}

impl Customer {
    pub fn new(id: CustomerId, postal_code: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            postal_code: Masked(postal_code.into()),
            country: country.into(),
        }
    }
}

/// A named tax rate for a jurisdiction (0.05 means 5%)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub description: String,
    pub rate: Decimal,
}

impl TaxEntry {
    pub fn new(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            rate,
        }
    }
}
