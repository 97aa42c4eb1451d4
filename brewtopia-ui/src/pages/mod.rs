//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod shop;

pub use dashboard::Dashboard;
pub use shop::Shop;
