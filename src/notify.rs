//! Notification Center
//!
//! Transient toasts. Each one is visible for `display_ms`, then plays its exit
//! transition for `exit_ms`, then expires. The center keeps at most
//! `capacity` live notifications (oldest evicted first) and refreshes an
//! identical live notification instead of stacking a duplicate.
//!
//! Lifecycle is computed from millisecond timestamps supplied by the caller,
//! so the same code runs under browser timers and in tests.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    /// CSS class suffix: `notification success`
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }

    /// Background color of the toast
    pub fn background(&self) -> &'static str {
        match self {
            NoticeKind::Success => "#28a745",
            NoticeKind::Error => "#dc3545",
            NoticeKind::Info => "#007bff",
        }
    }
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Where a notification is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    /// Playing the slide-out transition
    Leaving,
    Expired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NoticeKind,
    /// Unix timestamp in milliseconds of the last (re)show
    pub shown_at: i64,
}

/// Timing and capacity of the center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub capacity: usize,
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            capacity: 5,
            display_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl NotificationSettings {
    /// Time from show to expiry
    pub fn lifetime_ms(&self) -> u64 {
        self.display_ms.saturating_add(self.exit_ms)
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    settings: NotificationSettings,
    entries: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings: NotificationSettings {
                capacity: settings.capacity.max(1),
                ..settings
            },
            entries: VecDeque::new(),
            next_id: 0,
        }
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Show `message` at `now_ms` and return its id.
    ///
    /// If the same message with the same kind is still live, its timer is
    /// restarted and its id returned.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NoticeKind,
        now_ms: i64,
    ) -> NotificationId {
        let message = message.into();
        self.prune(now_ms);

        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|n| n.kind == kind && n.message == message)
        {
            existing.shown_at = now_ms;
            debug!(id = existing.id.0, %kind, "notification refreshed");
            return existing.id;
        }

        while self.entries.len() >= self.settings.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!(id = evicted.id.0, "notification evicted");
            }
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        debug!(id = id.0, %kind, "notification shown");
        self.entries.push_back(Notification {
            id,
            message,
            kind,
            shown_at: now_ms,
        });
        id
    }

    /// `show` stamped with the current wall-clock time
    pub fn show_now(&mut self, message: impl Into<String>, kind: NoticeKind) -> NotificationId {
        self.show(message, kind, chrono::Utc::now().timestamp_millis())
    }

    pub fn success(&mut self, message: impl Into<String>, now_ms: i64) -> NotificationId {
        self.show(message, NoticeKind::Success, now_ms)
    }

    pub fn error(&mut self, message: impl Into<String>, now_ms: i64) -> NotificationId {
        self.show(message, NoticeKind::Error, now_ms)
    }

    pub fn info(&mut self, message: impl Into<String>, now_ms: i64) -> NotificationId {
        self.show(message, NoticeKind::Info, now_ms)
    }

    fn phase_of(&self, notification: &Notification, now_ms: i64) -> Phase {
        let elapsed = now_ms.saturating_sub(notification.shown_at).max(0) as u64;
        if elapsed < self.settings.display_ms {
            Phase::Visible
        } else if elapsed < self.settings.lifetime_ms() {
            Phase::Leaving
        } else {
            Phase::Expired
        }
    }

    /// Lifecycle phase of `id`; evicted or dismissed ids report `Expired`
    pub fn phase(&self, id: NotificationId, now_ms: i64) -> Phase {
        self.entries
            .iter()
            .find(|n| n.id == id)
            .map(|n| self.phase_of(n, now_ms))
            .unwrap_or(Phase::Expired)
    }

    /// Live notifications, oldest first, with their phase
    pub fn active(&self, now_ms: i64) -> Vec<(&Notification, Phase)> {
        self.entries
            .iter()
            .map(|n| (n, self.phase_of(n, now_ms)))
            .filter(|(_, phase)| *phase != Phase::Expired)
            .collect()
    }

    /// Drop expired notifications, returning how many were removed
    pub fn prune(&mut self, now_ms: i64) -> usize {
        let before = self.entries.len();
        let settings = self.settings;
        self.entries.retain(|n| {
            let elapsed = now_ms.saturating_sub(n.shown_at).max(0) as u64;
            elapsed < settings.lifetime_ms()
        });
        before - self.entries.len()
    }

    /// Remove `id` immediately
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter {
        NotificationCenter::new(NotificationSettings::default())
    }

    #[test]
    fn test_huge_display_time_never_expires() {
        let mut center = NotificationCenter::new(NotificationSettings {
            display_ms: u64::MAX,
            ..NotificationSettings::default()
        });
        let id = center.info("x", 0);

        assert_eq!(center.prune(10), 0);
        assert_eq!(center.phase(id, i64::MAX), Phase::Visible);
        assert_eq!(center.settings().lifetime_ms(), u64::MAX);
    }

    #[test]
    fn test_lifecycle_phases() {
        let mut center = center();
        let id = center.success("Latte added to cart!", 1_000);

        assert_eq!(center.phase(id, 1_000), Phase::Visible);
        assert_eq!(center.phase(id, 3_999), Phase::Visible);
        assert_eq!(center.phase(id, 4_000), Phase::Leaving);
        assert_eq!(center.phase(id, 4_299), Phase::Leaving);
        assert_eq!(center.phase(id, 4_300), Phase::Expired);

        assert_eq!(center.prune(4_300), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_repeat_refreshes_instead_of_stacking() {
        let mut center = center();
        let first = center.success("Latte added to cart!", 0);
        let second = center.success("Latte added to cart!", 2_000);

        assert_eq!(first, second);
        assert_eq!(center.len(), 1);
        assert_eq!(center.phase(first, 4_500), Phase::Visible);

        // Same text, different kind is a separate toast
        center.error("Latte added to cart!", 2_000);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut center = NotificationCenter::new(NotificationSettings {
            capacity: 3,
            ..NotificationSettings::default()
        });

        let ids: Vec<_> = (0..5)
            .map(|i| center.info(format!("message {}", i), i))
            .collect();

        assert_eq!(center.len(), 3);
        assert_eq!(center.phase(ids[0], 10), Phase::Expired);
        assert_eq!(center.phase(ids[1], 10), Phase::Expired);
        let live: Vec<_> = center.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(live, ["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut center = NotificationCenter::new(NotificationSettings {
            capacity: 0,
            ..NotificationSettings::default()
        });
        center.info("hello", 0);
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn test_dismiss_and_active() {
        let mut center = center();
        let a = center.success("a", 0);
        let b = center.error("b", 3_100);

        let active = center.active(3_200);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].1, Phase::Leaving);
        assert_eq!(active[1].1, Phase::Visible);

        assert!(center.dismiss(a));
        assert!(!center.dismiss(a));
        assert_eq!(center.active(3_200).len(), 1);
        assert_eq!(center.phase(b, 3_200), Phase::Visible);
    }

    #[test]
    fn test_kind_styles() {
        assert_eq!(NoticeKind::Success.background(), "#28a745");
        assert_eq!(NoticeKind::Error.as_str(), "error");
        assert_eq!(NoticeKind::Info.to_string(), "info");
    }
}
