//! Cart modal visibility
//!
//! The modal owns its outside-click listener: it is attached when the modal
//! opens and detached when it closes, so nothing inspects page clicks while
//! the cart is hidden.

use tracing::debug;

/// Handle of an attached outside-click listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Which element received a click inside the modal's overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay itself, outside the content box
    Overlay,
    /// Anything inside the content box
    Content,
}

impl ClickTarget {
    /// Identity check: the click is "outside" only when the element that
    /// received it is the overlay the listener is attached to.
    pub fn classify<T: PartialEq>(target: &T, overlay: &T) -> Self {
        if target == overlay {
            ClickTarget::Overlay
        } else {
            ClickTarget::Content
        }
    }
}

#[derive(Debug, Default)]
pub struct CartModal {
    listener: Option<ListenerId>,
    next_listener: u64,
}

impl CartModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the modal. Opening an open modal keeps its existing listener.
    pub fn open(&mut self) -> ListenerId {
        if let Some(id) = self.listener {
            return id;
        }
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listener = Some(id);
        debug!(listener = id.0, "cart modal opened");
        id
    }

    /// Hide the modal, returning the listener that was detached
    pub fn close(&mut self) -> Option<ListenerId> {
        let detached = self.listener.take();
        if let Some(id) = detached {
            debug!(listener = id.0, "cart modal closed");
        }
        detached
    }

    /// Route a click to the modal. Returns `true` when it closed the modal.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        if self.listener.is_none() {
            return false;
        }
        match target {
            ClickTarget::Overlay => self.close().is_some(),
            ClickTarget::Content => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    /// The listener currently attached, if any
    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_lives_only_while_open() {
        let mut modal = CartModal::new();
        assert_eq!(modal.listener(), None);

        let id = modal.open();
        assert_eq!(modal.open(), id);
        assert!(modal.is_open());

        assert_eq!(modal.close(), Some(id));
        assert_eq!(modal.listener(), None);
        assert_eq!(modal.close(), None);

        let reopened = modal.open();
        assert_ne!(reopened, id);
    }

    #[test]
    fn test_outside_click_closes() {
        let mut modal = CartModal::new();
        modal.open();

        assert!(!modal.handle_click(ClickTarget::Content));
        assert!(modal.is_open());

        assert!(modal.handle_click(ClickTarget::Overlay));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_clicks_ignored_while_closed() {
        let mut modal = CartModal::new();
        assert!(!modal.handle_click(ClickTarget::Overlay));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_classify_by_identity() {
        let overlay = "cart-modal";
        assert_eq!(ClickTarget::classify(&"cart-modal", &overlay), ClickTarget::Overlay);
        assert_eq!(ClickTarget::classify(&"cart-items", &overlay), ClickTarget::Content);
    }
}
