//! Brewtopia Cart
//!
//! - **types**: `CartItem` and mutation outcomes
//! - **store**: `CartStore`, the persisted, ordered, name-keyed cart
//! - **view**: read-only projection rendered by the cart modal
//! - **modal**: modal visibility and its scoped outside-click listener
//! - **checkout**: one-way handoff to the payment page
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use brewtopia::cart::{CartStore, CartView};
//! use brewtopia::storage::MemoryStore;
//!
//! let mut cart = CartStore::load(MemoryStore::new());
//! cart.add("Latte", 35.0).unwrap();
//! cart.add("Latte", 35.0).unwrap();
//!
//! let view = CartView::project(&cart);
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.total, 70.0);
//! ```

pub mod checkout;
pub mod error;
pub mod modal;
pub mod store;
pub mod types;
pub mod view;

pub use checkout::{
    Checkout, CheckoutError, CheckoutOutcome, OrderSummary, PaymentLauncher, DEFAULT_PAYMENT_URL,
    EMPTY_CART_NOTICE, REDIRECT_NOTICE,
};
pub use error::{CartError, CartResult};
pub use modal::{CartModal, ClickTarget, ListenerId};
pub use store::CartStore;
pub use types::{AddOutcome, CartItem, QuantityChange};
pub use view::{format_amount, unit_price_label, CartRow, CartView, EMPTY_CART_MESSAGE};

/// Success notification text for an add
pub fn added_message(name: &str) -> String {
    format!("{} added to cart!", name)
}
