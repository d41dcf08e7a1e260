// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: display, auto-dismiss, and batch-replay timing
//! - **Modal**: exit-animation hold
//! - **Layout**: responsive breakpoints and select sizing
//! - **Diagnostics**: event buffer capacity

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a freshly enqueued notification becomes visible, giving
/// the presentation layer one frame to register the entry transition.
pub const NOTIFICATION_PAINT_DELAY_MS: u64 = 10;

/// Time a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_BASE_DELAY_MS: u64 = 6_000;

/// Hold between the dismiss request and the actual removal, covering the
/// exit animation.
pub const NOTIFICATION_REMOVAL_HOLD_MS: u64 = 400;

/// Per-entry appearance offset when replaying a server-rendered batch.
pub const REPLAY_SHOW_STAGGER_MS: u64 = 150;

/// Per-entry auto-dismiss offset when replaying a server-rendered batch.
pub const REPLAY_DISMISS_STAGGER_MS: u64 = 800;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Hold between a modal close request and the modal actually disappearing.
pub const MODAL_CLOSE_HOLD_MS: u64 = 200;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Viewport width below which the sidebar behaves as a mobile drawer.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Viewport width below which multi-selects shrink.
pub const MOBILE_SELECT_BREAKPOINT_PX: u32 = 640;

/// Visible rows of a multi-select on narrow viewports.
pub const MULTI_SELECT_SIZE_MOBILE: u8 = 4;

/// Visible rows of a multi-select on wide viewports.
pub const MULTI_SELECT_SIZE_DESKTOP: u8 = 6;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Capacity of the bounded diagnostic event buffer.
pub const DIAGNOSTIC_BUFFER_CAPACITY: usize = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Notification timing validation
    assert!(NOTIFICATION_PAINT_DELAY_MS > 0);
    assert!(NOTIFICATION_BASE_DELAY_MS > NOTIFICATION_PAINT_DELAY_MS);
    assert!(NOTIFICATION_REMOVAL_HOLD_MS > 0);
    assert!(REPLAY_SHOW_STAGGER_MS > 0);
    // A replayed entry must dismiss strictly later than its predecessor
    // even after both have become visible.
    assert!(REPLAY_DISMISS_STAGGER_MS > REPLAY_SHOW_STAGGER_MS);

    // Modal validation
    assert!(MODAL_CLOSE_HOLD_MS > 0);

    // Layout validation
    assert!(MOBILE_BREAKPOINT_PX > MOBILE_SELECT_BREAKPOINT_PX);
    assert!(MULTI_SELECT_SIZE_DESKTOP > MULTI_SELECT_SIZE_MOBILE);

    // Diagnostics validation
    assert!(DIAGNOSTIC_BUFFER_CAPACITY > 0);
};
