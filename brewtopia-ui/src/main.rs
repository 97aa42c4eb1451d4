//! Brewtopia Storefront
//!
//! Coffee shop front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Menu with a persistent shopping cart and payment redirect
//! - Toast notifications
//! - Sales dashboard with a period filter
//! - Light/dark theme stored in the browser
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. Cart, notification, chart
//! and theme logic live in the `brewtopia` crate; this crate binds them to
//! the DOM and to `localStorage`.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod storage;

const TOAST_KEYFRAMES: &str = "
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
";

/// Add the toast animations to `<head>` once
fn inject_keyframes() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id("toast-keyframes").is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        web_sys::console::warn_1(&"Could not inject toast keyframes".into());
        return;
    };
    style.set_id("toast-keyframes");
    style.set_text_content(Some(TOAST_KEYFRAMES));
    let _ = head.append_child(&style);
}

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    inject_keyframes();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
