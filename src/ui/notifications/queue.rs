// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Queue` handles display timing, hover pause, and dismissal of
//! notifications, for both programmatic creation and the staggered replay
//! of entries already rendered by the server at page load. All timer
//! behavior is driven through [`Queue::tick`] with an explicit `Instant`,
//! so a stale timer can never mutate an entry that was removed early.

use super::notification::{Kind, Lifecycle, Notification, NotificationId};
use crate::config::Timings;
use crate::diagnostics::DiagnosticsHandle;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Pointer entered a notification; suspend its auto-dismiss timer.
    HoverEnter(NotificationId),
    /// Pointer left a notification; resume its auto-dismiss timer.
    HoverLeave(NotificationId),
    /// Advance every scheduled transition up to the given time.
    Tick,
}

/// Manages the ordered list of transient notifications.
#[derive(Debug)]
pub struct Queue {
    /// Entries in display order (insertion order, top to bottom).
    entries: Vec<Notification>,
    timings: Timings,
    /// Whether the shared container element is shown. Hidden again only
    /// when the last entry is fully removed.
    container_visible: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Queue {
    /// Creates an empty queue using the given timings.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            entries: Vec::new(),
            timings,
            container_visible: false,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle used to record warning and error
    /// notifications.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Enqueues a new notification, returning its ID.
    ///
    /// The entry starts `Pending`, becomes visible after the paint delay,
    /// and auto-dismisses after the base delay. The container is shown
    /// immediately.
    pub fn enqueue(&mut self, text: impl Into<String>, kind: Kind, now: Instant) -> NotificationId {
        let notification = Notification::new(
            text,
            kind,
            now,
            self.timings.paint_delay,
            self.timings.base_delay,
        );
        self.log(&notification);
        let id = notification.id();
        self.entries.push(notification);
        self.container_visible = true;
        id
    }

    /// Replays notifications already rendered by the server at page load.
    ///
    /// Entry `k` (0-indexed) becomes visible after `k` show-staggers and
    /// auto-dismisses after the base delay plus `k` dismiss-staggers, so a
    /// batch never animates or disappears in lockstep.
    pub fn replay_existing<I, S>(&mut self, batch: I, now: Instant) -> Vec<NotificationId>
    where
        I: IntoIterator<Item = (S, Kind)>,
        S: Into<String>,
    {
        let mut ids = Vec::new();
        for (index, (text, kind)) in batch.into_iter().enumerate() {
            let index = index as u32;
            let notification = Notification::new(
                text,
                kind,
                now,
                self.timings.replay_show_stagger * index,
                self.timings.base_delay + self.timings.replay_dismiss_stagger * index,
            );
            self.log(&notification);
            ids.push(notification.id());
            self.entries.push(notification);
        }
        if !self.entries.is_empty() {
            self.container_visible = true;
        }
        ids
    }

    /// Dismisses a notification by ID.
    ///
    /// Idempotent: unknown IDs and entries already dismissing are silent
    /// no-ops, so the manual close racing the auto-dismiss timer converges
    /// on one removal.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) {
        let removal_hold = self.timings.removal_hold;
        if let Some(entry) = self.entry_mut(id) {
            if entry.state() != Lifecycle::Dismissing {
                entry.begin_dismissing(now, removal_hold);
            }
        }
    }

    /// Suspends the auto-dismiss timer of a visible entry (hover enter).
    pub fn pause(&mut self, id: NotificationId, now: Instant) {
        if let Some(entry) = self.entry_mut(id) {
            if entry.state() != Lifecycle::Dismissing {
                entry.pause(now);
            }
        }
    }

    /// Resumes a suspended auto-dismiss timer (hover leave).
    ///
    /// If the timer logically elapsed while paused, dismissal fires
    /// immediately.
    pub fn resume(&mut self, id: NotificationId, now: Instant) {
        let expired = match self.entry_mut(id) {
            Some(entry) => entry.resume(now),
            None => return,
        };
        if expired {
            self.dismiss(id, now);
        }
    }

    /// Advances every scheduled transition up to `now`.
    ///
    /// Drives pending entries to visible, fires due auto-dismiss timers,
    /// deletes entries whose removal hold elapsed, and hides the container
    /// once the queue empties.
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.entries {
            if entry.state() == Lifecycle::Pending && now >= entry.shows_at() {
                entry.mark_visible();
            }
        }

        let due: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|e| {
                e.state() == Lifecycle::Visible && !e.is_paused() && now >= e.dismiss_at()
            })
            .map(Notification::id)
            .collect();
        for id in due {
            self.dismiss(id, now);
        }

        self.entries
            .retain(|e| !matches!(e.remove_at(), Some(at) if at <= now));
        if self.entries.is_empty() {
            self.container_visible = false;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id, now),
            Message::HoverEnter(id) => self.pause(*id, now),
            Message::HoverLeave(id) => self.resume(*id, now),
            Message::Tick => self.tick(now),
        }
    }

    /// Returns the entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Looks up an entry by ID.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// Number of entries not yet fully removed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the shared container element is currently shown.
    #[must_use]
    pub fn container_visible(&self) -> bool {
        self.container_visible
    }

    /// Removes every entry and hides the container.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.container_visible = false;
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.entries.iter_mut().find(|n| n.id() == id)
    }

    fn log(&self, notification: &Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.kind() {
                Kind::Warning => handle.log_warning(notification.text()),
                Kind::Error => handle.log_error(notification.text()),
                Kind::Success | Kind::Info => {}
            }
        }
    }
}
