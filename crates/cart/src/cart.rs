use std::collections::HashSet;

use kiosko_core::{DomainError, Entity, Money};

use crate::line_item::LineItem;

/// Ordered collection of line items, at most one per name.
///
/// Every line subtotal and the cart total are representable; they are
/// computed when a line changes, so reading them cannot fail. Pure in-memory
/// state; persistence is [`crate::CartStore`]'s job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
    subtotals: Vec<Money>,
    total: Money,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored items, rejecting invariant violations
    /// (zero quantity, duplicate names, amounts out of range).
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut subtotals = Vec::with_capacity(items.len());
        for item in &items {
            let subtotal = item.ensure_valid()?;
            if !seen.insert(item.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate line for {:?}",
                    item.name
                )));
            }
            subtotals.push(subtotal);
        }
        let total = Money::sum(subtotals.iter().copied())?;
        Ok(Self {
            items,
            subtotals,
            total,
        })
    }

    /// Add one unit of `name`.
    ///
    /// An existing line keeps its original price and gains one unit; `unit_price`
    /// is only used for new lines. Returns the affected line. The cart is left
    /// untouched when the new amounts would be out of range.
    pub fn add(&mut self, name: &str, unit_price: Money) -> Result<&LineItem, DomainError> {
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                let item = &self.items[index];
                let quantity = item.quantity.checked_add(1).ok_or_else(|| {
                    DomainError::invariant(format!("quantity of {name:?} overflows"))
                })?;
                let subtotal = self.subtotals[index].checked_add(item.unit_price)?;
                let total = self.total.checked_add(item.unit_price)?;

                self.items[index].quantity = quantity;
                self.subtotals[index] = subtotal;
                self.total = total;
                Ok(&self.items[index])
            }
            None => {
                let total = self.total.checked_add(unit_price)?;
                self.items.push(LineItem::new(name, unit_price));
                self.subtotals.push(unit_price);
                self.total = total;
                Ok(&self.items[self.items.len() - 1])
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.subtotals.clear();
        self.total = Money::ZERO;
    }

    /// Σ unit price × quantity, exact.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Lines in insertion order with their subtotals.
    pub fn lines(&self) -> impl Iterator<Item = (&LineItem, Money)> + '_ {
        self.items.iter().zip(self.subtotals.iter().copied())
    }

    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
