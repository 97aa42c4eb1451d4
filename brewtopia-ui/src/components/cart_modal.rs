//! Cart Modal Component
//!
//! Overlay listing the cart rows with quantity controls, the grand total and
//! the checkout button. The overlay's click handler only exists while the
//! modal is shown.

use brewtopia::cart::{format_amount, unit_price_label, CartRow, ClickTarget};
use leptos::ev::MouseEvent;
use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn CartModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_overlay_click = move |ev: MouseEvent| {
        let target = ClickTarget::classify(&ev.target(), &ev.current_target());
        state.modal_click(target);
    };

    let symbol = state.settings.with_value(|s| s.currency_symbol.clone());
    let total_symbol = symbol.clone();
    let view_model = create_memo(move |_| state.cart_view());

    view! {
        <Show when=move || state.modal.with(|m| m.is_open())>
            <div id="cart-modal" class="modal" on:click=on_overlay_click>
                <div class="modal-content">
                    <span class="close" on:click=move |_| state.close_cart()>"×"</span>
                    <h2>"Your Cart"</h2>

                    <div id="cart-items">
                        {
                            let symbol = symbol.clone();
                            move || {
                                let cart = view_model.get();
                                match cart.placeholder {
                                    Some(message) => view! {
                                        <div class="empty-cart">{message}</div>
                                    }.into_view(),
                                    None => cart
                                        .rows
                                        .into_iter()
                                        .map(|row| {
                                            let symbol = symbol.clone();
                                            view! { <CartRowView row=row symbol=symbol /> }
                                        })
                                        .collect_view(),
                                }
                            }
                        }
                    </div>

                    <div class="cart-total">
                        "Total: "
                        <span id="cart-total">
                            {
                                let symbol = total_symbol.clone();
                                move || format_amount(&symbol, view_model.get().total)
                            }
                        </span>
                    </div>

                    <div class="cart-actions">
                        <button class="btn-secondary" on:click=move |_| state.clear_cart()>
                            "Clear Cart"
                        </button>
                        <button class="btn-primary" on:click=move |_| state.checkout()>
                            "Checkout"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One line of the cart with -, + and remove controls
#[component]
fn CartRowView(row: CartRow, symbol: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let name = row.name.clone();
    let dec_name = name.clone();
    let inc_name = name.clone();
    let remove_name = name.clone();

    view! {
        <div class="cart-item">
            <div class="cart-item-info">
                <h4>{name}</h4>
                <p>{unit_price_label(&symbol, row.unit_price)}</p>
            </div>
            <div class="cart-item-controls">
                <button on:click=move |_| state.update_quantity(&dec_name, -1)>"-"</button>
                <span class="cart-item-quantity">{row.quantity}</span>
                <button on:click=move |_| state.update_quantity(&inc_name, 1)>"+"</button>
                <button
                    class="cart-item-remove"
                    on:click=move |_| state.remove_from_cart(&remove_name)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
