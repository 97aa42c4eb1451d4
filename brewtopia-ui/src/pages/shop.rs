//! Shop Page
//!
//! Landing page with the hero, the menu with add-to-cart buttons, the about
//! blurb and the contact form.

use brewtopia::cart::format_amount;
use leptos::*;

use crate::components::ContactForm;
use crate::state::global::GlobalState;

/// A drink or pastry offered on the menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        name: "Espresso",
        description: "Rich, bold and pulled to order.",
        price: 25.0,
    },
    MenuItem {
        name: "Latte",
        description: "Smooth espresso with steamed milk.",
        price: 35.0,
    },
    MenuItem {
        name: "Cappuccino",
        description: "Equal parts espresso, milk and foam.",
        price: 35.0,
    },
    MenuItem {
        name: "Mocha",
        description: "Espresso, chocolate and steamed milk.",
        price: 40.0,
    },
    MenuItem {
        name: "Croissant",
        description: "Buttery and baked every morning.",
        price: 20.0,
    },
    MenuItem {
        name: "Blueberry Muffin",
        description: "Packed with fresh blueberries.",
        price: 22.5,
    },
];

/// Shop page component
#[component]
pub fn Shop() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1>"Welcome to Brewtopia"</h1>
            <p>"Handcrafted coffee, freshly baked treats."</p>
            <a href="#menu" class="btn-primary">"View Menu"</a>
        </section>

        <section id="menu" class="menu">
            <h2>"Our Menu"</h2>
            <div class="menu-grid">
                {MENU.iter().map(|item| view! { <MenuCard item=*item /> }).collect_view()}
            </div>
        </section>

        <section id="about" class="about">
            <h2>"About Us"</h2>
            <p>
                "Brewtopia started as a corner stall with one grinder and a lot of "
                "enthusiasm. Today we roast in small batches and still pour every "
                "cup by hand."
            </p>
        </section>

        <section id="contact" class="contact">
            <h2>"Contact Us"</h2>
            <ContactForm />
        </section>
    }
}

#[component]
fn MenuCard(item: MenuItem) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let price = state
        .settings
        .with_value(|s| format_amount(&s.currency_symbol, item.price));

    view! {
        <div class="menu-item">
            <h3>{item.name}</h3>
            <p>{item.description}</p>
            <span class="price">{price}</span>
            <button
                class="add-to-cart"
                on:click=move |_| state.add_to_cart(item.name, item.price)
            >
                "Add to Cart"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewtopia::cart::CartItem;

    #[test]
    fn test_menu_prices_are_valid() {
        for item in MENU {
            assert!(CartItem::new(item.name, item.price).is_ok(), "{}", item.name);
        }
    }

    #[test]
    fn test_menu_names_unique() {
        let mut names: Vec<_> = MENU.iter().map(|i| i.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), MENU.len());
    }
}
