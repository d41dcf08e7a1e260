// SPDX-License-Identifier: MPL-2.0
//! Delete-confirmation modal.
//!
//! Delete buttons carry the target URL plus an optional JSON-encoded
//! `data-details` attribute describing the record about to be removed.
//! Malformed details must never break the handler: they degrade to "no
//! extra details" and leave a diagnostic warning behind.

use crate::diagnostics::DiagnosticsHandle;
use serde::Deserialize;

/// Title shown when the delete button carries none of its own.
const DEFAULT_TITLE: &str = "Are you sure you want to delete this item?";

/// One row of the confirmation detail list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteDetail {
    pub icon: String,
    pub label: String,
    pub value: String,
}

/// Parses the `data-details` JSON attribute of a delete button.
///
/// Invalid JSON returns an empty list and records a warning; it never
/// propagates an error to the click handler.
pub fn parse_details(raw: &str, diagnostics: Option<&DiagnosticsHandle>) -> Vec<DeleteDetail> {
    match serde_json::from_str(raw) {
        Ok(details) => details,
        Err(err) => {
            if let Some(handle) = diagnostics {
                handle.log_warning(format!("unparsable data-details attribute: {err}"));
            }
            Vec::new()
        }
    }
}

/// State of the delete-confirmation modal.
#[derive(Debug, Default)]
pub struct DeleteConfirm {
    open: bool,
    action_url: Option<String>,
    title: String,
    details: Vec<DeleteDetail>,
}

impl DeleteConfirm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the confirmation form with a target URL, an optional title,
    /// and the detail rows, then opens the modal and locks body scroll.
    pub fn open(&mut self, url: impl Into<String>, title: Option<String>, details: Vec<DeleteDetail>) {
        self.action_url = Some(url.into());
        self.title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        self.details = details;
        self.open = true;
    }

    /// Closes the modal and releases body scroll. The armed URL is kept
    /// until the next open, matching the form element it mirrors.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open confirmation.
    pub fn escape(&mut self) {
        self.close();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body scroll is locked exactly while the modal is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// URL the confirmation form will submit to.
    #[must_use]
    pub fn action_url(&self) -> Option<&str> {
        self.action_url.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn details(&self) -> &[DeleteDetail] {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Level;

    #[test]
    fn parse_details_reads_icon_label_value_rows() {
        let raw = r#"[
            {"icon": "fas fa-user", "label": "User", "value": "amendoza"},
            {"icon": "fas fa-envelope", "label": "Email", "value": "a@b.c"}
        ]"#;
        let details = parse_details(raw, None);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].label, "User");
        assert_eq!(details[1].value, "a@b.c");
    }

    #[test]
    fn malformed_details_degrade_to_empty_with_warning() {
        let handle = DiagnosticsHandle::with_capacity(10);
        let details = parse_details("{not json", Some(&handle));
        assert!(details.is_empty());

        let events = handle.snapshot();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level(), Level::Warning);
    }

    #[test]
    fn open_arms_url_and_falls_back_to_default_title() {
        let mut confirm = DeleteConfirm::new();
        confirm.open("/security/users/delete/3/", None, Vec::new());

        assert!(confirm.is_open());
        assert!(confirm.scroll_locked());
        assert_eq!(confirm.action_url(), Some("/security/users/delete/3/"));
        assert_eq!(confirm.title(), DEFAULT_TITLE);
    }

    #[test]
    fn explicit_title_overrides_the_default() {
        let mut confirm = DeleteConfirm::new();
        confirm.open("/x/", Some("Delete this group?".to_string()), Vec::new());
        assert_eq!(confirm.title(), "Delete this group?");
    }

    #[test]
    fn close_and_escape_release_scroll() {
        let mut confirm = DeleteConfirm::new();
        confirm.open("/x/", None, Vec::new());

        confirm.escape();
        assert!(!confirm.is_open());
        assert!(!confirm.scroll_locked());
        // Escape while closed stays a no-op.
        confirm.escape();
        assert!(!confirm.is_open());
    }
}
