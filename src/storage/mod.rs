//! Brewtopia Profile Storage
//!
//! Everything Brewtopia remembers lives in one browser-profile-like key-value
//! store:
//!
//! - **kv**: the [`KeyValueStore`] trait, well-known keys and the in-memory backend
//! - **file**: JSON-file backend used by the CLI
//! - **error**: Error types
//!
//! The WASM frontend adds a `localStorage` backend on top of the same trait.
//!
//! # Example
//!
//! ```rust
//! use brewtopia::storage::{KeyValueStore, MemoryStore, THEME_KEY};
//!
//! let store = MemoryStore::new();
//! store.set(THEME_KEY, "dark").unwrap();
//! assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
//! ```

pub mod error;
pub mod file;
pub mod kv;

pub use error::{StorageError, StorageResult};
pub use file::{FileStore, PROFILE_FILE_NAME};
pub use kv::{KeyValueStore, MemoryStore, CART_KEY, THEME_KEY};
