//! Global Application State
//!
//! Reactive wrappers around the core cart, notification and theme objects.
//! Created once by [`provide_global_state`] and shared through context.

use brewtopia::cart::{
    added_message, CartModal, CartStore, CartView, Checkout, CheckoutError, ClickTarget,
    PaymentLauncher,
};
use brewtopia::dashboard::{Theme, ThemeToggle, DARK_CLASS};
use brewtopia::notify::{NoticeKind, NotificationCenter, NotificationSettings};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::storage::LocalStorage;

/// Static settings of the storefront
#[derive(Clone, Debug)]
pub struct UiSettings {
    pub currency_symbol: String,
    pub notifications: NotificationSettings,
    pub checkout: Checkout,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            notifications: NotificationSettings::default(),
            checkout: Checkout::default(),
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Cart mirrored into `localStorage`
    pub cart: RwSignal<CartStore<LocalStorage>>,
    /// Cart modal visibility
    pub modal: RwSignal<CartModal>,
    /// Live toasts
    pub notices: RwSignal<NotificationCenter>,
    /// Timestamp toasts are rendered against, bumped by lifecycle timers
    pub clock: RwSignal<i64>,
    /// Persisted light/dark preference
    pub theme: RwSignal<ThemeToggle<LocalStorage>>,
    /// Mobile nav menu expanded
    pub menu_open: RwSignal<bool>,
    pub settings: StoredValue<UiSettings>,
}

/// Current time in milliseconds
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Timer delay, clamped to what `setTimeout` accepts
fn timer_ms(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let settings = UiSettings::default();
    let theme = ThemeToggle::load(LocalStorage);
    apply_theme(theme.theme());

    let state = GlobalState {
        cart: create_rw_signal(CartStore::load(LocalStorage)),
        modal: create_rw_signal(CartModal::new()),
        notices: create_rw_signal(NotificationCenter::new(settings.notifications)),
        clock: create_rw_signal(now_ms()),
        theme: create_rw_signal(theme),
        menu_open: create_rw_signal(false),
        settings: store_value(settings),
    };

    provide_context(state);
}

/// Toggle the `dark` class on `<body>`
pub fn apply_theme(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

impl GlobalState {
    /// Show a toast and schedule its exit and removal
    pub fn notify(&self, message: impl Into<String>, kind: NoticeKind) {
        let now = now_ms();
        self.notices.update(|n| {
            n.show(message, kind, now);
        });
        self.schedule_expiry(now);
    }

    fn schedule_expiry(&self, shown_at: i64) {
        self.clock.set(shown_at);

        let settings = self.settings.with_value(|s| s.notifications);
        let clock = self.clock;
        let notices = self.notices;

        // Start the slide-out
        Timeout::new(timer_ms(settings.display_ms), move || {
            clock.set(now_ms());
        })
        .forget();

        // Remove once the transition is over
        Timeout::new(timer_ms(settings.lifetime_ms()), move || {
            let now = now_ms();
            notices.update(|n| {
                n.prune(now);
            });
            clock.set(now);
        })
        .forget();
    }

    pub fn add_to_cart(&self, name: &str, price: f64) {
        match self.cart.try_update(|cart| cart.add(name, price)) {
            Some(Ok(_)) => self.notify(added_message(name), NoticeKind::Success),
            Some(Err(e)) => self.notify(e.to_string(), NoticeKind::Error),
            None => {}
        }
    }

    pub fn remove_from_cart(&self, name: &str) {
        self.cart.update(|cart| {
            cart.remove(name);
        });
    }

    pub fn update_quantity(&self, name: &str, delta: i64) {
        self.cart.update(|cart| {
            cart.update_quantity(name, delta);
        });
    }

    pub fn clear_cart(&self) {
        self.cart.update(|cart| cart.clear());
    }

    /// Badge count
    pub fn cart_count(&self) -> u64 {
        self.cart.with(|cart| cart.total_quantity())
    }

    pub fn cart_view(&self) -> CartView {
        self.cart.with(CartView::project)
    }

    pub fn open_cart(&self) {
        self.modal.update(|m| {
            m.open();
        });
    }

    pub fn close_cart(&self) {
        self.modal.update(|m| {
            m.close();
        });
    }

    /// Route a click on the modal overlay
    pub fn modal_click(&self, target: ClickTarget) {
        self.modal.update(|m| {
            m.handle_click(target);
        });
    }

    pub fn checkout(&self) {
        let checkout = self.settings.with_value(|s| s.checkout.clone());
        let now = now_ms();
        let notices = self.notices;

        let outcome = self.cart.with_untracked(|cart| {
            notices.try_update(|n| checkout.run(cart, &mut WindowLauncher, n, now))
        });
        self.schedule_expiry(now);

        if let Some(order) = outcome.as_ref().and_then(|o| o.order()) {
            let line = format!(
                "Checkout {}: {} ({})",
                order.reference, order.summary, order.total
            );
            web_sys::console::log_1(&line.into());
        }
    }

    pub fn toggle_theme(&self) {
        let dark = self.theme.with_untracked(|t| t.is_dark());
        self.set_theme(!dark);
    }

    pub fn set_theme(&self, is_dark: bool) {
        if let Some(theme) = self.theme.try_update(|t| t.set_theme(is_dark)) {
            apply_theme(theme);
        }
    }
}

/// Opens the payment page in a new tab
struct WindowLauncher;

impl PaymentLauncher for WindowLauncher {
    fn open(&mut self, url: &str) -> Result<(), CheckoutError> {
        let launch_error = |reason: String| CheckoutError::Launch {
            url: url.to_string(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| launch_error("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(launch_error("popup blocked".to_string())),
            Err(e) => Err(launch_error(format!("{:?}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_ms_clamps() {
        assert_eq!(timer_ms(3000), 3000);
        assert_eq!(timer_ms(u64::from(u32::MAX) + 1), u32::MAX);
        assert_eq!(timer_ms(u64::MAX), u32::MAX);
    }
}
