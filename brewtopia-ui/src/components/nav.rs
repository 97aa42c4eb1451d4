//! Navigation Component
//!
//! Header with brand, in-page section links, the dashboard link and the cart
//! badge. On narrow screens the links collapse behind a hamburger button.

use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let open_cart = move |ev: MouseEvent| {
        ev.prevent_default();
        state.menu_open.set(false);
        state.open_cart();
    };

    view! {
        <nav class="navbar">
            <A href="/" class="logo">"☕ Brewtopia"</A>

            <button
                class="hamburger"
                aria-label="Toggle menu"
                on:click=move |_| state.menu_open.update(|open| *open = !*open)
            >
                <span /><span /><span />
            </button>

            <ul class="nav-links" class:show=move || state.menu_open.get()>
                <SectionLink href="#home" label="Home" />
                <SectionLink href="#menu" label="Menu" />
                <SectionLink href="#about" label="About" />
                <SectionLink href="#contact" label="Contact" />
                <li on:click=move |_| state.menu_open.set(false)>
                    <A href="/dashboard">"Dashboard"</A>
                </li>
                <li>
                    <a href="#" id="cart-link" on:click=open_cart>
                        "🛒 Cart "
                        <span id="cart-count" class="cart-count">
                            {move || state.cart_count()}
                        </span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}

/// Link to a section of the shop page. Scrolls smoothly and closes the
/// mobile menu.
#[component]
fn SectionLink(href: &'static str, label: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |ev: MouseEvent| {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(href).ok().flatten());

        // Off the shop page the anchor falls back to normal navigation
        if let Some(target) = target {
            ev.prevent_default();
            target.scroll_into_view();
        }
        state.menu_open.set(false);
    };

    view! {
        <li>
            <a href=href on:click=on_click>{label}</a>
        </li>
    }
}
