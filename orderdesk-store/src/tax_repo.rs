use orderdesk_core::TaxRateLookup;
use orderdesk_shared::TaxEntry;
use std::collections::HashMap;

use crate::app_config::TaxRateConfig;

/// Tax entries keyed by postal code and country.
///
/// Countries are matched case-insensitively; postal codes exactly.
#[derive(Debug, Default)]
pub struct TaxTable {
    entries: HashMap<(String, String), Vec<TaxEntry>>,
}

impl TaxTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(rates: &[TaxRateConfig]) -> Self {
        let mut table = Self::new();
        for rate in rates {
            table.insert(
                &rate.postal_code,
                &rate.country,
                TaxEntry::new(rate.description.clone(), rate.rate),
            );
        }
        table
    }

    /// Add an entry to a jurisdiction, after any already present
    pub fn insert(&mut self, postal_code: &str, country: &str, entry: TaxEntry) {
        self.entries
            .entry(Self::key(postal_code, country))
            .or_default()
            .push(entry);
    }

    fn key(postal_code: &str, country: &str) -> (String, String) {
        (postal_code.to_string(), country.to_uppercase())
    }
}

impl TaxRateLookup for TaxTable {
    fn get_tax_entries(&self, postal_code: &str, country: &str) -> Vec<TaxEntry> {
        let entries = self
            .entries
            .get(&Self::key(postal_code, country))
            .cloned()
            .unwrap_or_default();

        tracing::debug!(country, entries = entries.len(), "Tax lookup");
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_entries_kept_in_insertion_order() {
        let mut table = TaxTable::new();
        table.insert("98101", "US", TaxEntry::new("State", dec!(0.065)));
        table.insert("98101", "US", TaxEntry::new("City", dec!(0.036)));

        let entries = table.get_tax_entries("98101", "US");
        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["State", "City"]);
    }

    #[test]
    fn test_country_is_case_insensitive() {
        let mut table = TaxTable::new();
        table.insert("10115", "de", TaxEntry::new("VAT", dec!(0.19)));

        assert_eq!(table.get_tax_entries("10115", "DE").len(), 1);
    }

    #[test]
    fn test_unknown_jurisdiction_is_empty() {
        let table = TaxTable::new();
        assert!(table.get_tax_entries("00000", "XX").is_empty());
    }
}
