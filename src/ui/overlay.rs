// SPDX-License-Identifier: MPL-2.0
//! Blocking loading overlays.
//!
//! The registry owns exactly one global overlay plus any number of
//! overlays scoped to registered containers. The global overlay keeps a
//! baseline class set (`loading-overlay hidden`); hiding strips every
//! class outside the baseline so no theme decoration leaks into the next
//! show cycle. Container overlays are created per `show` call and removed
//! individually without affecting each other or the global overlay.

use crate::dom::{ClassSet, Position};
use std::collections::BTreeMap;

/// Structural classes the global overlay always retains.
const GLOBAL_BASELINE: [&str; 2] = ["loading-overlay", "hidden"];

/// Class name that keeps an overlay off-screen.
const HIDDEN_CLASS: &str = "hidden";

/// Theme applied to container overlays when none is given.
const DEFAULT_CONTAINER_THEME: &str = "mini";

/// Extra styling applied for one show cycle.
#[derive(Debug, Clone, Default)]
pub struct OverlayOptions {
    pub theme: Option<String>,
    pub custom_class: Option<String>,
}

impl OverlayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }
}

/// Identifier of one container-scoped overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayHandle(u64);

impl OverlayHandle {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
struct Container {
    position: Position,
}

#[derive(Debug)]
struct ContainerOverlay {
    container: String,
    classes: ClassSet,
}

/// Registry of the global overlay and all container-scoped overlays.
#[derive(Debug)]
pub struct OverlayRegistry {
    global: ClassSet,
    containers: BTreeMap<String, Container>,
    overlays: BTreeMap<OverlayHandle, ContainerOverlay>,
}

impl OverlayRegistry {
    /// Creates a registry with the global overlay hidden at its baseline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            global: ClassSet::from_names(GLOBAL_BASELINE),
            containers: BTreeMap::new(),
            overlays: BTreeMap::new(),
        }
    }

    /// Shows the global overlay, adding any non-empty option classes.
    ///
    /// Calling this while already visible is additive: classes from the
    /// new options accumulate until the next [`hide_global`].
    ///
    /// [`hide_global`]: OverlayRegistry::hide_global
    pub fn show_global(&mut self, options: &OverlayOptions) {
        if let Some(theme) = &options.theme {
            self.global.insert(theme.clone());
        }
        if let Some(class) = &options.custom_class {
            self.global.insert(class.clone());
        }
        self.global.remove(HIDDEN_CLASS);
    }

    /// Hides the global overlay and strips every class outside the
    /// baseline set.
    pub fn hide_global(&mut self) {
        self.global.retain(|c| GLOBAL_BASELINE.contains(&c));
        self.global.insert(HIDDEN_CLASS);
    }

    /// Whether the global overlay is currently visible.
    #[must_use]
    pub fn global_visible(&self) -> bool {
        !self.global.contains(HIDDEN_CLASS)
    }

    /// Current class set of the global overlay.
    #[must_use]
    pub fn global_classes(&self) -> &ClassSet {
        &self.global
    }

    /// Registers a container that overlays may be scoped to, with its
    /// server-rendered positioning context.
    pub fn register_container(&mut self, id: impl Into<String>, position: Position) {
        self.containers.insert(id.into(), Container { position });
    }

    /// Creates an overlay inside a registered container.
    ///
    /// Returns `None` without any mutation when the container is unknown.
    /// A statically positioned container is switched to relative so the
    /// overlay can anchor to it; an explicit non-static position is never
    /// overridden.
    pub fn show_in_container(
        &mut self,
        container: &str,
        options: &OverlayOptions,
    ) -> Option<OverlayHandle> {
        let entry = self.containers.get_mut(container)?;
        if entry.position.is_static() {
            entry.position = Position::Relative;
        }

        let mut classes = ClassSet::new();
        classes.insert("loading-overlay");
        classes.insert(
            options
                .theme
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTAINER_THEME.to_string()),
        );
        if let Some(class) = &options.custom_class {
            classes.insert(class.clone());
        }

        let handle = OverlayHandle::new();
        self.overlays.insert(
            handle,
            ContainerOverlay {
                container: container.to_string(),
                classes,
            },
        );
        Some(handle)
    }

    /// Removes a container overlay. Idempotent: unknown handles are a
    /// silent no-op.
    pub fn hide_from_container(&mut self, handle: OverlayHandle) {
        self.overlays.remove(&handle);
    }

    /// Class set of a live container overlay.
    #[must_use]
    pub fn overlay_classes(&self, handle: OverlayHandle) -> Option<&ClassSet> {
        self.overlays.get(&handle).map(|o| &o.classes)
    }

    /// Number of live overlays scoped to one container.
    #[must_use]
    pub fn container_overlay_count(&self, container: &str) -> usize {
        self.overlays
            .values()
            .filter(|o| o.container == container)
            .count()
    }

    /// Total number of live container overlays.
    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Positioning context of a registered container.
    #[must_use]
    pub fn container_position(&self, container: &str) -> Option<Position> {
        self.containers.get(container).map(|c| c.position)
    }
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new()
    }
}
