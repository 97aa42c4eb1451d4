//! Cart data types
//!
//! - `CartItem`: one line of the cart, keyed by name
//! - `AddOutcome` / `Removed`: what a mutation did, so callers can react

use serde::{Deserialize, Serialize};

use super::error::{CartError, CartResult};

/// A single line item
///
/// Serialized exactly as the storefront always stored it:
/// `{"name": "Latte", "price": 35, "quantity": 2}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique key within the cart
    pub name: String,
    /// Unit price in currency units
    pub price: f64,
    /// Always >= 1 while the item is in a cart
    pub quantity: u32,
}

impl CartItem {
    /// Create a validated item with quantity 1
    pub fn new(name: impl Into<String>, price: f64) -> CartResult<Self> {
        let name = name.into();
        validate(&name, price)?;
        Ok(Self {
            name,
            price,
            quantity: 1,
        })
    }

    /// `price * quantity`
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Input checks applied before an item enters the cart.
///
/// Zero is a valid price (free promotional items); negative and non-finite
/// prices are not.
pub(crate) fn validate(name: &str, price: f64) -> CartResult<()> {
    if name.trim().is_empty() {
        return Err(CartError::EmptyName);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(CartError::InvalidPrice {
            name: name.to_string(),
            price,
        });
    }
    Ok(())
}

/// Result of adding an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended
    Added,
    /// An existing line's quantity went up by one
    Incremented { quantity: u32 },
}

/// Result of changing a line's quantity
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    /// The line survived with this quantity
    Updated { quantity: u32 },
    /// The quantity dropped to zero or below and the line was removed
    Removed(CartItem),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_at_one() {
        let item = CartItem::new("Latte", 35.0).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total(), 35.0);
    }

    #[test]
    fn test_zero_price_allowed() {
        let item = CartItem::new("Free Biscotti", 0.0).unwrap();
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn test_negative_and_nan_prices_rejected() {
        assert!(matches!(
            CartItem::new("Latte", -1.0),
            Err(CartError::InvalidPrice { .. })
        ));
        assert!(matches!(
            CartItem::new("Latte", f64::NAN),
            Err(CartError::InvalidPrice { .. })
        ));
        assert!(matches!(
            CartItem::new("Latte", f64::INFINITY),
            Err(CartError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(CartItem::new("   ", 10.0), Err(CartError::EmptyName));
    }

    #[test]
    fn test_wire_format() {
        let item = CartItem {
            name: "Cappuccino".to_string(),
            price: 38.5,
            quantity: 2,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Cappuccino","price":38.5,"quantity":2}"#);

        // Integer prices written by the old storefront still load
        let legacy: CartItem =
            serde_json::from_str(r#"{"name":"Latte","price":35,"quantity":1}"#).unwrap();
        assert_eq!(legacy.price, 35.0);
    }
}
