//! Checkout handoff
//!
//! Checkout is a one-way redirect: the cart is summarized, the payment page is
//! opened in a new browsing context, and nothing comes back. The cart is left
//! intact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use super::store::CartStore;
use crate::notify::{NotificationCenter, NotificationId};
use crate::storage::KeyValueStore;

/// Payment page opened on checkout
pub const DEFAULT_PAYMENT_URL: &str = "https://pay.yoco.com/rinae-ramadi";

pub const EMPTY_CART_NOTICE: &str = "Your cart is empty!";
pub const REDIRECT_NOTICE: &str = "Redirecting to payment... Please complete your order!";

/// Errors raised by a payment launcher
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The browser refused to open a new window (popup blocker, no window)
    #[error("Could not open payment page {url}: {reason}")]
    Launch { url: String, reason: String },
}

/// Opens the payment page in a new browsing context
pub trait PaymentLauncher {
    fn open(&mut self, url: &str) -> Result<(), CheckoutError>;
}

/// What was handed to the payment page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub reference: Uuid,
    pub total: f64,
    /// `"Latte x2, Mocha x1"`
    pub summary: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Nothing to pay for; no navigation happened
    EmptyCart { notice: NotificationId },
    /// The payment page was opened
    Redirected {
        order: OrderSummary,
        notice: NotificationId,
    },
    /// The launcher failed; no navigation happened
    LaunchFailed {
        error: CheckoutError,
        notice: NotificationId,
    },
}

impl CheckoutOutcome {
    pub fn order(&self) -> Option<&OrderSummary> {
        match self {
            CheckoutOutcome::Redirected { order, .. } => Some(order),
            _ => None,
        }
    }
}

/// Checkout configured with the payment page URL
#[derive(Debug, Clone)]
pub struct Checkout {
    payment_url: String,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_URL)
    }
}

impl Checkout {
    pub fn new(payment_url: impl Into<String>) -> Self {
        Self {
            payment_url: payment_url.into(),
        }
    }

    pub fn payment_url(&self) -> &str {
        &self.payment_url
    }

    /// Hand the cart off to the payment page.
    ///
    /// Emits exactly one notification on every path. The summary is not
    /// passed to the payment page; the fixed payment link accepts no order
    /// parameters.
    pub fn run<S, L>(
        &self,
        cart: &CartStore<S>,
        launcher: &mut L,
        notices: &mut NotificationCenter,
        now_ms: i64,
    ) -> CheckoutOutcome
    where
        S: KeyValueStore,
        L: PaymentLauncher + ?Sized,
    {
        if cart.is_empty() {
            let notice = notices.error(EMPTY_CART_NOTICE, now_ms);
            return CheckoutOutcome::EmptyCart { notice };
        }

        let order = OrderSummary {
            reference: Uuid::new_v4(),
            total: cart.total_price(),
            summary: cart.order_summary(),
            url: self.payment_url.clone(),
            created_at: Utc::now(),
        };

        if let Err(error) = launcher.open(&self.payment_url) {
            warn!("Checkout {} failed: {}", order.reference, error);
            let notice = notices.error(error.to_string(), now_ms);
            return CheckoutOutcome::LaunchFailed { error, notice };
        }

        info!(
            reference = %order.reference,
            total = order.total,
            summary = %order.summary,
            "redirected to payment page"
        );
        let notice = notices.info(REDIRECT_NOTICE, now_ms);
        CheckoutOutcome::Redirected { order, notice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NoticeKind, NotificationSettings};
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Vec<String>,
        fail: bool,
    }

    impl PaymentLauncher for RecordingLauncher {
        fn open(&mut self, url: &str) -> Result<(), CheckoutError> {
            if self.fail {
                return Err(CheckoutError::Launch {
                    url: url.to_string(),
                    reason: "popup blocked".to_string(),
                });
            }
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    fn kinds(notices: &NotificationCenter) -> Vec<NoticeKind> {
        notices.iter().map(|n| n.kind).collect()
    }

    #[test]
    fn test_empty_cart_does_not_navigate() {
        let cart = CartStore::load(MemoryStore::new());
        let mut launcher = RecordingLauncher::default();
        let mut notices = NotificationCenter::new(NotificationSettings::default());

        let outcome = Checkout::default().run(&cart, &mut launcher, &mut notices, 0);

        assert!(matches!(outcome, CheckoutOutcome::EmptyCart { .. }));
        assert!(launcher.opened.is_empty());
        assert_eq!(kinds(&notices), [NoticeKind::Error]);
        assert_eq!(notices.iter().next().unwrap().message, EMPTY_CART_NOTICE);
    }

    #[test]
    fn test_non_empty_cart_opens_payment_page_once() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add("Latte", 35.0).unwrap();
        cart.add("Latte", 35.0).unwrap();
        cart.add("Mocha", 40.0).unwrap();

        let mut launcher = RecordingLauncher::default();
        let mut notices = NotificationCenter::new(NotificationSettings::default());

        let outcome = Checkout::default().run(&cart, &mut launcher, &mut notices, 0);

        let order = outcome.order().unwrap();
        assert_eq!(order.total, 110.0);
        assert_eq!(order.summary, "Latte x2, Mocha x1");
        assert_eq!(launcher.opened, [DEFAULT_PAYMENT_URL]);
        assert_eq!(kinds(&notices), [NoticeKind::Info]);

        // Cart is not cleared by checkout
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_custom_payment_url() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add("Espresso", 25.0).unwrap();

        let mut launcher = RecordingLauncher::default();
        let mut notices = NotificationCenter::default();
        let checkout = Checkout::new("https://pay.example.test/brew");

        checkout.run(&cart, &mut launcher, &mut notices, 0);
        assert_eq!(launcher.opened, ["https://pay.example.test/brew"]);
    }

    #[test]
    fn test_launch_failure_reports_error() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add("Latte", 35.0).unwrap();

        let mut launcher = RecordingLauncher {
            fail: true,
            ..Default::default()
        };
        let mut notices = NotificationCenter::default();

        let outcome = Checkout::default().run(&cart, &mut launcher, &mut notices, 0);
        assert!(matches!(outcome, CheckoutOutcome::LaunchFailed { .. }));
        assert_eq!(kinds(&notices), [NoticeKind::Error]);
    }
}
