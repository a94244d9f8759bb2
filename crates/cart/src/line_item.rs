use serde::{Deserialize, Serialize};

use kiosko_core::{DomainError, Entity, Money};

/// One product in the cart. Identified by its exact (case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl LineItem {
    /// New line with quantity 1.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Unit price × quantity. Fails only when the product is out of range.
    pub fn subtotal(&self) -> Result<Money, DomainError> {
        self.unit_price.times(self.quantity)
    }

    /// Check the line invariants and return its subtotal.
    pub(crate) fn ensure_valid(&self) -> Result<Money, DomainError> {
        if self.quantity == 0 {
            return Err(DomainError::invariant(format!(
                "line {:?} has quantity 0",
                self.name
            )));
        }
        self.subtotal()
    }
}

impl Entity for LineItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
