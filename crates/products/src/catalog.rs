use serde::{Deserialize, Serialize};

use kiosko_core::Money;

use crate::price::{PriceParseError, parse_price};

/// A product as exposed by the presentation surface: display name plus the
/// price exactly as shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub price_label: String,
}

impl ProductEntry {
    pub fn new(name: impl Into<String>, price_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_label: price_label.into(),
        }
    }

    pub fn price(&self) -> Result<Money, PriceParseError> {
        parse_price(&self.price_label)
    }
}

/// Ordered list of products offered by the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ProductEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ProductEntry>) -> Self {
        Self { entries }
    }

    /// The storefront's fixed menu.
    pub fn default_menu() -> Self {
        Self::new(vec![
            ProductEntry::new("Croissant", "1,50 €"),
            ProductEntry::new("Napolitana de chocolate", "1,80 €"),
            ProductEntry::new("Tostada con tomate", "2,50 €"),
            ProductEntry::new("Café con leche", "1,20 €"),
            ProductEntry::new("Zumo de naranja", "2,80 €"),
            ProductEntry::new("Bocadillo de jamón", "4,50 €"),
        ])
    }

    pub fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    /// Entry by 1-based menu position.
    pub fn get(&self, position: usize) -> Option<&ProductEntry> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn find(&self, name: &str) -> Option<&ProductEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
