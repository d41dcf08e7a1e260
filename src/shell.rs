// SPDX-License-Identifier: MPL-2.0
//! The page-level shell wiring every controller together.
//!
//! `Shell` is an explicitly constructed aggregate (no module-level
//! singletons): the host builds one per page, registers the elements the
//! server rendered, and feeds it [`Event`] messages. Each user or timer
//! event is delivered to the controller that owns it; `Escape` fans out
//! to every dismissable surface, matching how the page scripts each
//! listened for the key.

use crate::config::Timings;
use crate::diagnostics::DiagnosticsHandle;
use crate::error::Error;
use crate::forms::LoadingForm;
use crate::ui::delete_confirm::{parse_details, DeleteConfirm};
use crate::ui::modal::Modal;
use crate::ui::notifications::{Kind, NotificationId, Queue};
use crate::ui::overlay::OverlayRegistry;
use crate::ui::panels::PanelGroup;
use crate::ui::sidebar::Sidebar;
use std::time::Instant;

/// A user or timer event delivered to the shell.
#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic timer driving every scheduled transition.
    Tick,
    /// Close button of a notification.
    NotificationClosed(NotificationId),
    /// Pointer entered a notification.
    NotificationHoverEnter(NotificationId),
    /// Pointer left a notification.
    NotificationHoverLeave(NotificationId),
    /// Trigger of an exclusive menu panel was clicked.
    MenuToggled(String),
    ModalOpened,
    ModalCloseRequested,
    ModalBackdropClicked,
    SidebarToggled,
    SidebarClosed,
    SidebarBackdropClicked,
    SidebarLinkClicked { viewport_width: u32 },
    ViewportResized { viewport_width: u32 },
    EscapePressed,
    /// A delete button was clicked, carrying its `data-*` payload.
    DeleteRequested {
        url: String,
        title: Option<String>,
        raw_details: Option<String>,
    },
    DeleteCancelled,
    /// A form with `data-loading="true"` was submitted.
    LoadingFormSubmitted(LoadingForm),
}

/// Aggregate of every interaction controller on the page.
#[derive(Debug)]
pub struct Shell {
    notifications: Queue,
    overlays: OverlayRegistry,
    menus: PanelGroup,
    modal: Modal,
    sidebar: Sidebar,
    delete_confirm: DeleteConfirm,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Shell {
    /// Creates a shell with empty controllers using the given timings.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            notifications: Queue::new(timings),
            overlays: OverlayRegistry::new(),
            menus: PanelGroup::new(),
            modal: Modal::new(timings.modal_close_hold),
            sidebar: Sidebar::new(),
            delete_confirm: DeleteConfirm::new(),
            diagnostics: None,
        }
    }

    /// Attaches a diagnostics handle shared by every controller.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.notifications.set_diagnostics(handle.clone());
        self.diagnostics = Some(handle);
    }

    /// Routes one event to the controller that owns it.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Tick => {
                self.notifications.tick(now);
                self.modal.tick(now);
            }
            Event::NotificationClosed(id) => self.notifications.dismiss(id, now),
            Event::NotificationHoverEnter(id) => self.notifications.pause(id, now),
            Event::NotificationHoverLeave(id) => self.notifications.resume(id, now),
            Event::MenuToggled(id) => self.menus.toggle(&id),
            Event::ModalOpened => self.modal.open(),
            Event::ModalCloseRequested => self.modal.close(now),
            Event::ModalBackdropClicked => self.modal.backdrop_click(now),
            Event::SidebarToggled => self.sidebar.toggle(),
            Event::SidebarClosed | Event::SidebarBackdropClicked => self.sidebar.close(),
            Event::SidebarLinkClicked { viewport_width } => {
                self.sidebar.link_clicked(viewport_width);
            }
            Event::ViewportResized { viewport_width } => {
                self.sidebar.handle_resize(viewport_width);
            }
            Event::EscapePressed => {
                self.modal.escape(now);
                self.sidebar.escape();
                self.delete_confirm.escape();
            }
            Event::DeleteRequested {
                url,
                title,
                raw_details,
            } => {
                let details = raw_details
                    .map(|raw| parse_details(&raw, self.diagnostics.as_ref()))
                    .unwrap_or_default();
                self.delete_confirm.open(url, title, details);
            }
            Event::DeleteCancelled => self.delete_confirm.close(),
            Event::LoadingFormSubmitted(form) => {
                self.overlays.show_global(&form.overlay_options());
            }
        }
    }

    /// Shows a notification programmatically, returning its ID.
    pub fn notify(&mut self, text: impl Into<String>, kind: Kind, now: Instant) -> NotificationId {
        self.notifications.enqueue(text, kind, now)
    }

    /// Surfaces a failed background request as an error notification.
    pub fn report_failure(&mut self, error: &Error, now: Instant) -> NotificationId {
        self.notifications
            .enqueue(error.to_string(), Kind::Error, now)
    }

    pub fn notifications(&self) -> &Queue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Queue {
        &mut self.notifications
    }

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OverlayRegistry {
        &mut self.overlays
    }

    pub fn menus(&self) -> &PanelGroup {
        &self.menus
    }

    pub fn menus_mut(&mut self) -> &mut PanelGroup {
        &mut self.menus
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn delete_confirm(&self) -> &DeleteConfirm {
        &self.delete_confirm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Level;
    use crate::ui::notifications::Lifecycle;
    use std::time::Duration;

    fn shell() -> Shell {
        Shell::new(Timings::default())
    }

    #[test]
    fn tick_drives_notifications_and_modal() {
        let mut shell = shell();
        let now = Instant::now();
        let id = shell.notify("saved", Kind::Success, now);
        shell.handle_event(Event::ModalOpened, now);
        shell.handle_event(Event::ModalCloseRequested, now);

        shell.handle_event(Event::Tick, now + Duration::from_millis(250));
        assert_eq!(
            shell.notifications().get(id).unwrap().state(),
            Lifecycle::Visible
        );
        assert!(!shell.modal().is_displayed());
    }

    #[test]
    fn menu_events_keep_exclusivity() {
        let mut shell = shell();
        let now = Instant::now();
        shell.menus_mut().register("menu-security");
        shell.menus_mut().register("menu-reports");

        shell.handle_event(Event::MenuToggled("menu-security".to_string()), now);
        shell.handle_event(Event::MenuToggled("menu-reports".to_string()), now);
        assert_eq!(shell.menus().open_panel(), Some("menu-reports"));
    }

    #[test]
    fn escape_dismisses_every_open_surface() {
        let mut shell = shell();
        let now = Instant::now();
        shell.handle_event(Event::ModalOpened, now);
        shell.handle_event(Event::SidebarToggled, now);
        shell.handle_event(
            Event::DeleteRequested {
                url: "/x/".to_string(),
                title: None,
                raw_details: None,
            },
            now,
        );

        shell.handle_event(Event::EscapePressed, now);
        assert!(!shell.modal().is_open());
        assert!(!shell.sidebar().is_open());
        assert!(!shell.delete_confirm().is_open());
    }

    #[test]
    fn delete_request_parses_details_and_logs_bad_json() {
        let mut shell = shell();
        let handle = DiagnosticsHandle::with_capacity(10);
        shell.set_diagnostics(handle.clone());
        let now = Instant::now();

        shell.handle_event(
            Event::DeleteRequested {
                url: "/security/users/delete/3/".to_string(),
                title: None,
                raw_details: Some("{broken".to_string()),
            },
            now,
        );

        assert!(shell.delete_confirm().is_open());
        assert!(shell.delete_confirm().details().is_empty());
        assert_eq!(handle.snapshot()[0].level(), Level::Warning);
    }

    #[test]
    fn loading_form_submit_shows_the_global_overlay() {
        let mut shell = shell();
        let now = Instant::now();
        let form = LoadingForm::from_attrs(Some("true"), Some("light"), None).unwrap();

        shell.handle_event(Event::LoadingFormSubmitted(form), now);
        assert!(shell.overlays().global_visible());
        assert!(shell.overlays().global_classes().contains("light"));
    }

    #[test]
    fn report_failure_surfaces_an_error_notification() {
        let mut shell = shell();
        let now = Instant::now();
        let id = shell.report_failure(&Error::Network("connection refused".to_string()), now);

        let entry = shell.notifications().get(id).unwrap();
        assert_eq!(entry.kind(), Kind::Error);
        assert!(entry.text().contains("connection refused"));
    }
}
