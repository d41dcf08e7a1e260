// SPDX-License-Identifier: MPL-2.0
//! Exclusive dropdown panel groups.
//!
//! A `PanelGroup` holds sibling panels where opening one must close all
//! others. Membership is explicit registration rather than an element-id
//! naming convention, so groups stay inspectable in tests.

use std::collections::BTreeMap;

/// A named group of mutually exclusive panels.
///
/// Invariant: after any [`toggle`], at most one panel is open.
///
/// [`toggle`]: PanelGroup::toggle
#[derive(Debug, Default)]
pub struct PanelGroup {
    panels: BTreeMap<String, bool>,
}

impl PanelGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a panel in its closed state.
    pub fn register(&mut self, id: impl Into<String>) {
        self.register_with_state(id, false);
    }

    /// Registers a panel with the open state the server rendered it in.
    ///
    /// Inconsistent markup with several open panels collapses to the last
    /// one registered, keeping the group invariant.
    pub fn register_with_state(&mut self, id: impl Into<String>, open: bool) {
        if open {
            for state in self.panels.values_mut() {
                *state = false;
            }
        }
        self.panels.insert(id.into(), open);
    }

    /// Closes every other panel, then flips the given panel's state.
    ///
    /// Toggling an already-open panel therefore closes it; toggling any
    /// other panel leaves exactly that panel open. Unknown ids are a
    /// silent no-op.
    pub fn toggle(&mut self, id: &str) {
        if !self.panels.contains_key(id) {
            return;
        }
        for (other, open) in &mut self.panels {
            if other != id {
                *open = false;
            }
        }
        if let Some(open) = self.panels.get_mut(id) {
            *open = !*open;
        }
    }

    /// Closes every panel in the group.
    pub fn close_all(&mut self) {
        for open in self.panels.values_mut() {
            *open = false;
        }
    }

    /// Whether a panel is currently open.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.panels.get(id).copied().unwrap_or(false)
    }

    /// The currently open panel, if any.
    #[must_use]
    pub fn open_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }

    /// Number of registered panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
