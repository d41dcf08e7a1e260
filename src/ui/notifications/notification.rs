// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its lifecycle states,
//! and the `Kind` enum used throughout the notification system.

use crate::dom::escape_html;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification kind determines the icon and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Kind {
    /// Parses a kind name; unrecognized names fall back to `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    /// The style-class suffix for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// The icon name shown next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "check",
            Kind::Error => "times",
            Kind::Warning => "exclamation",
            Kind::Info => "info",
        }
    }
}

/// Lifecycle of a notification entry.
///
/// `Pending` entries exist but have not been painted yet; `Dismissing`
/// entries are playing their exit animation and are deleted once the
/// removal hold elapses. There is no `Removed` tombstone: removed entries
/// leave the queue entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Pending,
    Visible,
    Dismissing,
}

/// A transient notification entry.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// Untrusted display text; escape before rendering into HTML.
    text: String,
    created_at: Instant,
    shows_at: Instant,
    dismiss_at: Instant,
    remove_at: Option<Instant>,
    state: Lifecycle,
    /// Remaining auto-dismiss time while hover-paused.
    paused_remaining: Option<Duration>,
}

impl Notification {
    pub(crate) fn new(
        text: impl Into<String>,
        kind: Kind,
        now: Instant,
        paint_delay: Duration,
        dismiss_after: Duration,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            text: text.into(),
            created_at: now,
            shows_at: now + paint_delay,
            dismiss_at: now + dismiss_after,
            remove_at: None,
            state: Lifecycle::Pending,
            paused_remaining: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Raw display text, exactly as supplied.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display text escaped for an HTML text context.
    #[must_use]
    pub fn escaped_text(&self) -> String {
        escape_html(&self.text)
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When this entry transitions from pending to visible.
    #[must_use]
    pub fn shows_at(&self) -> Instant {
        self.shows_at
    }

    /// When the auto-dismiss timer fires (ignored while paused).
    #[must_use]
    pub fn dismiss_at(&self) -> Instant {
        self.dismiss_at
    }

    #[must_use]
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_remaining.is_some()
    }

    pub(crate) fn remove_at(&self) -> Option<Instant> {
        self.remove_at
    }

    pub(crate) fn mark_visible(&mut self) {
        self.state = Lifecycle::Visible;
    }

    pub(crate) fn begin_dismissing(&mut self, now: Instant, removal_hold: Duration) {
        self.state = Lifecycle::Dismissing;
        self.remove_at = Some(now + removal_hold);
        self.paused_remaining = None;
    }

    /// Suspends the auto-dismiss countdown, preserving the remaining time.
    pub(crate) fn pause(&mut self, now: Instant) {
        if self.paused_remaining.is_none() {
            self.paused_remaining = Some(self.dismiss_at.saturating_duration_since(now));
        }
    }

    /// Resumes the auto-dismiss countdown. Returns `true` when the timer
    /// had already logically elapsed while paused, meaning dismissal must
    /// fire immediately.
    pub(crate) fn resume(&mut self, now: Instant) -> bool {
        match self.paused_remaining.take() {
            Some(remaining) if remaining.is_zero() => true,
            Some(remaining) => {
                self.dismiss_at = now + remaining;
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(now: Instant) -> Notification {
        Notification::new(
            "saved",
            Kind::Success,
            now,
            Duration::from_millis(10),
            Duration::from_millis(6_000),
        )
    }

    #[test]
    fn notification_ids_are_unique_and_monotonic() {
        let a = NotificationId::new();
        let b = NotificationId::new();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn kind_from_name_falls_back_to_info() {
        assert_eq!(Kind::from_name("success"), Kind::Success);
        assert_eq!(Kind::from_name("error"), Kind::Error);
        assert_eq!(Kind::from_name("warning"), Kind::Warning);
        assert_eq!(Kind::from_name("info"), Kind::Info);
        assert_eq!(Kind::from_name("debug"), Kind::Info);
        assert_eq!(Kind::from_name(""), Kind::Info);
    }

    #[test]
    fn kind_icons_match_styling_contract() {
        assert_eq!(Kind::Success.icon(), "check");
        assert_eq!(Kind::Error.icon(), "times");
        assert_eq!(Kind::Warning.icon(), "exclamation");
        assert_eq!(Kind::Info.icon(), "info");
    }

    #[test]
    fn new_notification_starts_pending_with_scheduled_times() {
        let now = Instant::now();
        let n = sample(now);
        assert_eq!(n.state(), Lifecycle::Pending);
        assert_eq!(n.shows_at(), now + Duration::from_millis(10));
        assert_eq!(n.dismiss_at(), now + Duration::from_millis(6_000));
        assert!(n.remove_at().is_none());
    }

    #[test]
    fn pause_preserves_remaining_and_resume_rearms() {
        let now = Instant::now();
        let mut n = sample(now);
        n.mark_visible();

        let paused_at = now + Duration::from_millis(2_000);
        n.pause(paused_at);
        assert!(n.is_paused());

        // Resume much later: the remaining 4s must still be honored.
        let resumed_at = now + Duration::from_millis(60_000);
        assert!(!n.resume(resumed_at));
        assert_eq!(n.dismiss_at(), resumed_at + Duration::from_millis(4_000));
    }

    #[test]
    fn resume_after_timer_elapsed_fires_immediately() {
        let now = Instant::now();
        let mut n = sample(now);
        n.mark_visible();

        // Pause after the dismiss deadline already passed.
        n.pause(now + Duration::from_millis(7_000));
        assert!(n.resume(now + Duration::from_millis(8_000)));
    }

    #[test]
    fn escaped_text_neutralizes_markup() {
        let now = Instant::now();
        let n = Notification::new(
            "<script>alert(1)</script>",
            Kind::Info,
            now,
            Duration::from_millis(10),
            Duration::from_millis(6_000),
        );
        assert_eq!(n.escaped_text(), "&lt;script&gt;alert(1)&lt;/script&gt;");
    }
}
