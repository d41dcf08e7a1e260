// SPDX-License-Identifier: MPL-2.0
//! Transient notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction, then auto-dismiss
//! after a configurable delay. Hovering a notification suspends its
//! timer; server-rendered batches replay with a per-entry stagger.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and lifecycle
//! - [`queue`] - `Queue` for ordering, timing, and dismissal
//!
//! # Usage
//!
//! ```
//! use admin_shell::config::Timings;
//! use admin_shell::ui::notifications::{Kind, Queue};
//! use std::time::Instant;
//!
//! let mut queue = Queue::new(Timings::default());
//! let now = Instant::now();
//! let id = queue.enqueue("User saved correctly", Kind::Success, now);
//! queue.tick(now);
//! assert!(queue.get(id).is_some());
//! ```

mod notification;
mod queue;

pub use notification::{Kind, Lifecycle, Notification, NotificationId};
pub use queue::{Message as NotificationMessage, Queue};
