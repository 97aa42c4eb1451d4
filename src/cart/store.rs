//! Cart Store
//!
//! Owns the ordered list of line items and mirrors it into a
//! [`KeyValueStore`] after every mutation. The in-memory list is the source of
//! truth; storage is only read once, by [`CartStore::load`].

use tracing::{debug, warn};

use super::error::CartResult;
use super::types::{validate, AddOutcome, CartItem, QuantityChange};
use crate::storage::{KeyValueStore, StorageResult, CART_KEY};

/// The shopping cart and its storage handle
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    items: Vec<CartItem>,
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restore the cart saved in `storage`.
    ///
    /// A missing key, an unreadable backend or a malformed payload all yield
    /// an empty cart. Entries that break the cart invariants are normalized:
    /// zero quantities and entries failing the name or price rules are
    /// dropped, and duplicate names are merged.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => normalize(items),
                Err(e) => {
                    warn!("Ignoring corrupted cart payload: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read cart from storage: {}", e);
                Vec::new()
            }
        };

        debug!(items = items.len(), "cart loaded");
        Self { items, storage }
    }

    /// Add one unit of `name`.
    ///
    /// Repeated adds of the same name increment the existing line; the price
    /// of the first add is kept.
    pub fn add(&mut self, name: &str, price: f64) -> CartResult<AddOutcome> {
        validate(name, price)?;

        let outcome = match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                AddOutcome::Incremented {
                    quantity: existing.quantity,
                }
            }
            None => {
                self.items.push(CartItem {
                    name: name.to_string(),
                    price,
                    quantity: 1,
                });
                AddOutcome::Added
            }
        };

        debug!(name, ?outcome, "item added to cart");
        self.persist();
        Ok(outcome)
    }

    /// Remove the line named `name`. Unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<CartItem> {
        let index = self.position(name)?;
        self.remove_at(index)
    }

    /// Remove the line at `index`. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<CartItem> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "remove ignored: index out of range");
            return None;
        }

        let removed = self.items.remove(index);
        debug!(name = %removed.name, "item removed from cart");
        self.persist();
        Some(removed)
    }

    /// Add `delta` to the quantity of `name`; a result <= 0 removes the line.
    /// Unknown names are a no-op.
    pub fn update_quantity(&mut self, name: &str, delta: i64) -> Option<QuantityChange> {
        let index = self.position(name)?;
        self.update_quantity_at(index, delta)
    }

    /// Index-addressed variant of [`CartStore::update_quantity`].
    pub fn update_quantity_at(&mut self, index: usize, delta: i64) -> Option<QuantityChange> {
        let item = self.items.get_mut(index)?;
        let next = i64::from(item.quantity).saturating_add(delta);

        if next <= 0 {
            return self.remove_at(index).map(QuantityChange::Removed);
        }

        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        let quantity = item.quantity;
        debug!(name = %item.name, quantity, "item quantity updated");
        self.persist();
        Some(QuantityChange::Updated { quantity })
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
        self.persist();
    }

    /// Write the full cart to storage, overwriting whatever was there
    pub fn save(&self) -> StorageResult<()> {
        let payload = serde_json::to_string(&self.items)?;
        self.storage.set(CART_KEY, &payload)
    }

    /// Storage failures never abort a mutation; the in-memory cart stays
    /// authoritative and the next successful save catches storage up.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to persist cart: {}", e);
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities (the badge count)
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity`
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// `"Latte x2, Mocha x1"`
    pub fn order_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn normalize(raw: Vec<CartItem>) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = Vec::with_capacity(raw.len());
    for item in raw {
        if item.quantity == 0 {
            continue;
        }
        if let Err(e) = validate(&item.name, item.price) {
            warn!("Dropping stored cart entry: {}", e);
            continue;
        }
        match items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => items.push(item),
        }
    }
    items
}
