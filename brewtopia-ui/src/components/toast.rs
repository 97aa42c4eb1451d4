//! Toast Notification Component
//!
//! Renders the live notifications of the global notification center.

use brewtopia::notify::{NoticeKind, Phase};
use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let toasts = move || {
        let now = state.clock.get();
        state.notices.with(|center| {
            center
                .active(now)
                .into_iter()
                .map(|(n, phase)| (n.id.get(), n.message.clone(), n.kind, phase))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="notifications">
            <For
                each=toasts
                key=|(id, _, _, phase)| (*id, *phase == Phase::Leaving)
                children=move |(_, message, kind, phase)| view! {
                    <ToastMessage message=message kind=kind leaving=phase == Phase::Leaving />
                }
            />
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    kind: NoticeKind,
    leaving: bool,
) -> impl IntoView {
    let animation = if leaving {
        "slideOut 0.3s ease-in forwards"
    } else {
        "slideIn 0.3s ease-out"
    };

    view! {
        <div
            class=format!("notification {}", kind.as_str())
            style:background-color=kind.background()
            style:animation=animation
        >
            {message}
        </div>
    }
}
