//! UI Components
//!
//! Reusable Leptos components for the storefront and dashboard.

pub mod cart_modal;
pub mod chart;
pub mod contact_form;
pub mod nav;
pub mod theme_toggle;
pub mod toast;

pub use cart_modal::CartModal;
pub use chart::SalesChart;
pub use contact_form::ContactForm;
pub use nav::Nav;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
