//! Cart View projection
//!
//! Turns the cart into what the modal shows. Projection only: nothing here
//! takes `&mut`.

use serde::Serialize;

use super::store::CartStore;
use crate::storage::KeyValueStore;

/// Shown in place of rows when the cart is empty
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Add some delicious items!";

/// One rendered line of the cart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartRow {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Everything the cart modal needs to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: f64,
    pub item_count: u64,
    /// Set only when there are no rows
    pub placeholder: Option<&'static str>,
}

impl CartView {
    pub fn project<S: KeyValueStore>(cart: &CartStore<S>) -> Self {
        if cart.is_empty() {
            return Self {
                rows: Vec::new(),
                total: 0.0,
                item_count: 0,
                placeholder: Some(EMPTY_CART_MESSAGE),
            };
        }

        let rows = cart
            .items()
            .iter()
            .map(|item| CartRow {
                name: item.name.clone(),
                unit_price: item.price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            rows,
            total: cart.total_price(),
            item_count: cart.total_quantity(),
            placeholder: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format an amount with the shop's currency symbol: `R35`, `R38.50`.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}{:.0}", symbol, amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Unit price label shown under each row's name: `R35 each`
pub fn unit_price_label(symbol: &str, price: f64) -> String {
    format!("{} each", format_amount(symbol, price))
}
