//! # Brewtopia
//!
//! Cart and sales dashboard for the Brewtopia coffee shop. This crate is the
//! portable core shared by the `brewtopia` CLI and the `brewtopia-ui` WASM
//! frontend.
//!
//! ## Modules
//!
//! - [`cart`]: persisted cart, cart view projection, modal, checkout handoff
//! - [`notify`]: bounded, auto-expiring toast notifications
//! - [`dashboard`]: static sales datasets, single-instance chart host, theme
//! - [`storage`]: `localStorage`-style key-value backends
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use brewtopia::cart::{CartStore, Checkout, CheckoutError, PaymentLauncher};
//! use brewtopia::notify::NotificationCenter;
//! use brewtopia::storage::MemoryStore;
//!
//! struct Print;
//!
//! impl PaymentLauncher for Print {
//!     fn open(&mut self, url: &str) -> Result<(), CheckoutError> {
//!         println!("Pay at {}", url);
//!         Ok(())
//!     }
//! }
//!
//! let profile = MemoryStore::new();
//! let mut cart = CartStore::load(profile.clone());
//! cart.add("Latte", 35.0).unwrap();
//! cart.add("Mocha", 40.0).unwrap();
//!
//! let mut notices = NotificationCenter::default();
//! let outcome = Checkout::default().run(&cart, &mut Print, &mut notices, 0);
//! assert_eq!(outcome.order().unwrap().total, 75.0);
//!
//! // The cart survives a reload
//! assert_eq!(CartStore::load(profile).total_quantity(), 2);
//! ```

pub mod cart;
pub mod config;
pub mod dashboard;
pub mod notify;
pub mod storage;

// Re-export top-level types for convenience
pub use cart::{
    AddOutcome, CartError, CartItem, CartModal, CartResult, CartStore, CartView, Checkout,
    CheckoutError, CheckoutOutcome, OrderSummary, PaymentLauncher,
};

pub use dashboard::{
    ChartHost, ChartPeriod, ChartRenderer, ChartSpec, DashboardError, Theme, ThemeToggle,
};

pub use notify::{NoticeKind, Notification, NotificationCenter, NotificationSettings, Phase};

pub use storage::{
    FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult, CART_KEY, THEME_KEY,
};

pub use config::{Config, ConfigDiscovery, ConfigError, LoggingConfig};
