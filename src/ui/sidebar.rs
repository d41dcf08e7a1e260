// SPDX-License-Identifier: MPL-2.0
//! Sidebar navigation drawer.
//!
//! The sidebar, its backdrop, and the body `sidebar-open` flag move in
//! lockstep. On narrow viewports the drawer closes after navigation and
//! whenever the viewport shrinks below the mobile breakpoint.

use crate::config::defaults::MOBILE_BREAKPOINT_PX;

/// State of the sidebar drawer.
#[derive(Debug, Default)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger button: open when closed, close when open.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open sidebar.
    pub fn escape(&mut self) {
        if self.open {
            self.close();
        }
    }

    /// A backdrop click always closes.
    pub fn backdrop_click(&mut self) {
        self.close();
    }

    /// Viewport resize: dropping below the mobile breakpoint closes the
    /// drawer so it never covers a phone-sized page by surprise.
    pub fn handle_resize(&mut self, viewport_width: u32) {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            self.close();
        }
    }

    /// A navigation link was followed; on mobile widths the drawer closes.
    pub fn link_clicked(&mut self, viewport_width: u32) {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            self.close();
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The backdrop is shown exactly while the drawer is open.
    #[must_use]
    pub fn backdrop_visible(&self) -> bool {
        self.open
    }

    /// Whether the body carries the `sidebar-open` flag.
    #[must_use]
    pub fn body_flagged(&self) -> bool {
        self.open
    }
}
