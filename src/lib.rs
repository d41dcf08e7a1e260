// SPDX-License-Identifier: MPL-2.0
//! `admin_shell` models the client-side interaction state of a
//! server-rendered admin console: transient notifications, blocking
//! loading overlays, exclusive dropdown panels, modals, the sidebar,
//! delete confirmation, live filtering, and the module-permission picker.
//!
//! Every controller is a plain state machine driven by explicit events
//! and explicit `Instant` values, so the whole crate can be exercised
//! without a browser or a real clock.

#![doc(html_root_url = "https://docs.rs/admin_shell/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod forms;
pub mod permissions;
pub mod shell;
pub mod ui;
