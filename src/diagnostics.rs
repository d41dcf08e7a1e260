// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory log of warnings and errors raised by the controllers.
//!
//! Events land in a memory-bounded circular buffer that evicts the oldest
//! entries when capacity is reached. Controllers hold a cheap-to-clone
//! [`DiagnosticsHandle`]; recording an event never blocks and never fails.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::config::defaults::DIAGNOSTIC_BUFFER_CAPACITY;

/// Severity of a recorded diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

/// A single recorded diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    level: Level,
    message: String,
    at: Instant,
}

impl DiagnosticEvent {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Instant::now(),
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When this event was recorded (monotonic).
    #[must_use]
    pub fn at(&self) -> Instant {
        self.at
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates over elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Handle for recording diagnostic events.
///
/// Cheap to clone and shareable across components; all clones feed the
/// same buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    events: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    /// Creates a handle with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DIAGNOSTIC_BUFFER_CAPACITY)
    }

    /// Creates a handle with an explicit buffer capacity (useful in tests).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a warning event.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEvent::new(Level::Warning, message));
    }

    /// Records an error event.
    pub fn log_error(&self, message: impl Into<String>) {
        self.log(DiagnosticEvent::new(Level::Error, message));
    }

    fn log(&self, event: DiagnosticEvent) {
        // A poisoned lock means another holder panicked; dropping the
        // event is preferable to propagating the panic.
        if let Ok(mut buffer) = self.events.lock() {
            buffer.push(event);
        }
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);
        for n in 1..=5 {
            buffer.push(n);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(0);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn handle_records_warnings_and_errors() {
        let handle = DiagnosticsHandle::with_capacity(10);
        handle.log_warning("attribute was not valid JSON");
        handle.log_error("permission fetch failed");

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level(), Level::Warning);
        assert_eq!(events[1].level(), Level::Error);
        assert!(events[1].message().contains("fetch"));
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::with_capacity(10);
        let clone = handle.clone();
        clone.log_warning("from the clone");

        assert_eq!(handle.snapshot().len(), 1);
    }
}
