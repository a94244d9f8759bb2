//! Write-through cart store.

use std::sync::Arc;

use kiosko_core::Money;
use kiosko_storage::{KeyValueStore, StorageError, load_json, save_json};

use crate::cart::Cart;
use crate::error::CartError;
use crate::line_item::LineItem;

/// Storage key of the current order.
pub const CART_KEY: &str = "cart-current-order";

/// Cart synchronized to persistent storage on every mutation.
///
/// A mutation is persisted before it becomes visible: if the write fails the
/// in-memory cart is left as it was.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn KeyValueStore>,
}

impl core::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartStore").field("cart", &self.cart).finish()
    }
}

impl CartStore {
    /// Load the persisted cart. Absent, unreadable or malformed records yield
    /// an empty cart.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let cart = read_cart(storage.as_ref());
        Self { cart, storage }
    }

    /// Re-read the persisted record, dropping in-memory state.
    pub fn reload(&mut self) {
        self.cart = read_cart(self.storage.as_ref());
    }

    /// Add one unit of `name` and persist. See [`Cart::add`].
    ///
    /// An add that would put an amount out of range is rejected before
    /// anything is written.
    pub fn add(&mut self, name: &str, unit_price: Money) -> Result<LineItem, CartError> {
        let mut next = self.cart.clone();
        let line = next.add(name, unit_price)?.clone();
        save_json(self.storage.as_ref(), CART_KEY, next.items())?;
        self.cart = next;

        tracing::debug!(item = %line.name, quantity = line.quantity, "cart line added");
        Ok(line)
    }

    /// Empty the cart and delete the persisted record.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(CART_KEY)?;
        self.cart.clear();
        tracing::debug!("cart cleared");
        Ok(())
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Whether a record exists in storage (even an empty one).
    pub fn has_persisted_record(&self) -> Result<bool, StorageError> {
        self.storage.contains(CART_KEY)
    }
}

fn read_cart(storage: &dyn KeyValueStore) -> Cart {
    let items: Vec<LineItem> = match load_json(storage, CART_KEY) {
        Ok(Some(items)) => items,
        Ok(None) => return Cart::new(),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable cart record");
            return Cart::new();
        }
    };

    Cart::from_items(items).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "discarding cart record that breaks line invariants");
        Cart::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosko_storage::InMemoryStore;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn storage() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    #[test]
    fn add_twice_yields_one_line_with_quantity_two() {
        let mut store = CartStore::load(storage());
        store.add("Croissant", money("1.50")).unwrap();
        let line = store.add("Croissant", money("1.50")).unwrap();

        assert_eq!(line.quantity, 2);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.total().fixed(), "3.00");
    }

    #[test]
    fn add_out_of_range_is_rejected_before_persisting() {
        let backing = storage();
        let mut store = CartStore::load(backing.clone());
        let huge = money("50000000000000000000000000000");
        store.add("X", huge).unwrap();
        let persisted = backing.get(CART_KEY).unwrap();

        let err = store.add("X", huge).unwrap_err();
        assert!(matches!(err, CartError::Amount(_)));
        assert_eq!(store.items()[0].quantity, 1);
        assert_eq!(store.total(), huge);
        assert_eq!(backing.get(CART_KEY).unwrap(), persisted);

        let reloaded = CartStore::load(backing);
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].quantity, 1);
    }

    #[test]
    fn every_add_is_persisted() {
        let backing = storage();
        let mut store = CartStore::load(backing.clone());
        store.add("Croissant", money("1.50")).unwrap();

        let raw = backing.get(CART_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "Croissant", "unitPrice": 1.5, "quantity": 1 }])
        );
    }

    #[test]
    fn reload_sees_persisted_items() {
        let backing = storage();
        let mut store = CartStore::load(backing.clone());
        store.add("Café", money("1.20")).unwrap();
        store.add("Zumo", money("2.80")).unwrap();

        let reloaded = CartStore::load(backing);
        assert_eq!(reloaded.cart(), store.cart());
    }

    #[test]
    fn clear_removes_the_record_and_reload_is_empty() {
        let backing = storage();
        let mut store = CartStore::load(backing.clone());
        store.add("Croissant", money("1.50")).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert!(!store.has_persisted_record().unwrap());
        store.reload();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_record_loads_as_empty() {
        let backing = storage();
        backing.set(CART_KEY, "{not json").unwrap();
        assert!(CartStore::load(backing).is_empty());
    }

    #[test]
    fn record_with_wrong_shape_loads_as_empty() {
        let backing = storage();
        backing
            .set(CART_KEY, r#"[{"name":"Croissant","unitPrice":-1,"quantity":1}]"#)
            .unwrap();
        assert!(CartStore::load(backing.clone()).is_empty());

        backing
            .set(CART_KEY, r#"[{"name":"Croissant","unitPrice":1.5,"quantity":0}]"#)
            .unwrap();
        assert!(CartStore::load(backing).is_empty());
    }

    #[test]
    fn record_with_amounts_out_of_range_loads_as_empty() {
        let backing = storage();
        backing
            .set(CART_KEY, r#"[{"name":"X","unitPrice":1e28,"quantity":10}]"#)
            .unwrap();
        let store = CartStore::load(backing.clone());
        assert!(store.is_empty());
        assert_eq!(store.total(), Money::ZERO);
        assert!(store.has_persisted_record().unwrap());

        backing
            .set(
                CART_KEY,
                r#"[{"name":"A","unitPrice":5e28,"quantity":1},{"name":"B","unitPrice":5e28,"quantity":1}]"#,
            )
            .unwrap();
        assert!(CartStore::load(backing).is_empty());
    }

    #[test]
    fn legacy_empty_array_loads_as_empty() {
        let backing = storage();
        backing.set(CART_KEY, "[]").unwrap();
        let store = CartStore::load(backing);
        assert!(store.is_empty());
        assert!(store.has_persisted_record().unwrap());
    }
}
