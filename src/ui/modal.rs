// SPDX-License-Identifier: MPL-2.0
//! Animated modal state machine.
//!
//! Opening locks body scroll and shows the dialog; closing plays an exit
//! animation for a short hold before the modal actually disappears.
//! Escape and backdrop clicks only act while the modal is fully open, so
//! a close already in flight is never restarted.

use std::time::{Duration, Instant};

/// Lifecycle of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
    /// Exit animation is playing; the modal disappears at `until`.
    Closing { until: Instant },
}

/// A single animated modal dialog.
#[derive(Debug)]
pub struct Modal {
    state: ModalState,
    close_hold: Duration,
    scroll_locked: bool,
}

impl Modal {
    /// Creates a closed modal with the given exit-animation hold.
    #[must_use]
    pub fn new(close_hold: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            close_hold,
            scroll_locked: false,
        }
    }

    /// Opens the modal and locks body scroll.
    pub fn open(&mut self) {
        self.state = ModalState::Open;
        self.scroll_locked = true;
    }

    /// Requests a close: the exit animation plays until the hold elapses.
    /// Scroll is released right away. No-op unless the modal is open.
    pub fn close(&mut self, now: Instant) {
        if self.state == ModalState::Open {
            self.state = ModalState::Closing {
                until: now + self.close_hold,
            };
            self.scroll_locked = false;
        }
    }

    /// Completes a pending close once its hold has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let ModalState::Closing { until } = self.state {
            if now >= until {
                self.state = ModalState::Closed;
            }
        }
    }

    /// Escape closes the modal only while it is fully open.
    pub fn escape(&mut self, now: Instant) {
        self.close(now);
    }

    /// A click on the backdrop (outside the dialog) closes the modal.
    pub fn backdrop_click(&mut self, now: Instant) {
        self.close(now);
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Whether the dialog occupies the screen (open or still animating out).
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// Whether body scroll is currently locked by this modal.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}
