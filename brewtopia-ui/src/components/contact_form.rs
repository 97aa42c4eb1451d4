//! Contact form
//!
//! Nothing is sent anywhere: submitting thanks the visitor and resets the
//! fields.

use brewtopia::notify::NoticeKind;
use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::global::GlobalState;

pub const CONTACT_THANKS: &str = "Thanks for reaching out! We'll get back to you soon.";

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.notify(CONTACT_THANKS, NoticeKind::Info);

        if let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            form.reset();
        }
    };

    view! {
        <form id="contact-form" class="contact-form" on:submit=on_submit>
            <input type="text" name="name" placeholder="Your name" required />
            <input type="email" name="email" placeholder="Your email" required />
            <textarea name="message" rows="5" placeholder="Your message" required />
            <button type="submit" class="btn-primary">"Send Message"</button>
        </form>
    }
}
