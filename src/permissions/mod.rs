// SPDX-License-Identifier: MPL-2.0
//! Module-permission picker.
//!
//! Selecting a module fetches its permission list from the server and
//! renders each entry as a checkbox row. Bulk-selection helpers cover the
//! "basic permissions" buttons, which match checkboxes by codename prefix.

use crate::dom::escape_html;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Message rendered when a module has no permissions assigned.
pub const EMPTY_PERMISSIONS_MESSAGE: &str = "This module has no assigned permissions.";

/// Codename prefixes covered by the per-model "basic permissions" button.
pub const BASIC_ACTIONS: [&str; 4] = ["view", "add", "change", "delete"];

/// One permission as returned by the module-permission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Permission {
    pub id: u64,
    pub name: String,
    pub codename: String,
}

impl Permission {
    /// Display name escaped for an HTML text context. Permission names
    /// are admin-entered and therefore untrusted.
    #[must_use]
    pub fn escaped_name(&self) -> String {
        escape_html(&self.name)
    }
}

/// Fetches the permissions of a module.
///
/// Performs `GET {base}/security/ajax/module-permissions/{module_id}/`
/// and decodes the JSON array. Any transport or decode failure maps to
/// [`Error::Network`]; callers surface it as an error notification
/// instead of hanging silently.
pub async fn fetch_module_permissions(
    client: &reqwest::Client,
    base_url: &str,
    module_id: u64,
) -> Result<Vec<Permission>> {
    let url = format!(
        "{}/security/ajax/module-permissions/{}/",
        base_url.trim_end_matches('/'),
        module_id
    );
    let response = client
        .get(&url)
        .send()
        .await?
        .error_for_status()
        .map_err(|err| Error::Network(err.to_string()))?;
    Ok(response.json().await?)
}

/// One checkbox of the group-permission form.
#[derive(Debug, Clone)]
pub struct PermissionCheckbox {
    pub model: String,
    pub codename: String,
    pub checked: bool,
}

impl PermissionCheckbox {
    pub fn new(model: impl Into<String>, codename: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            codename: codename.into(),
            checked: false,
        }
    }
}

/// Checks every basic permission (`view_`/`add_`/`change_`/`delete_`)
/// of one model. Other checkboxes keep their state.
pub fn select_basic_for_model(boxes: &mut [PermissionCheckbox], model: &str) {
    for checkbox in boxes.iter_mut().filter(|b| b.model == model) {
        if BASIC_ACTIONS
            .iter()
            .any(|action| checkbox.codename.starts_with(&format!("{action}_")))
        {
            checkbox.checked = true;
        }
    }
}

/// Checks every checkbox whose codename starts with `{action}_`,
/// regardless of model (the global "select all view/add/..." buttons).
pub fn select_all_action(boxes: &mut [PermissionCheckbox], action: &str) {
    let prefix = format!("{action}_");
    for checkbox in boxes.iter_mut() {
        if checkbox.codename.starts_with(&prefix) {
            checkbox.checked = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<PermissionCheckbox> {
        vec![
            PermissionCheckbox::new("user", "view_user"),
            PermissionCheckbox::new("user", "add_user"),
            PermissionCheckbox::new("user", "export_user"),
            PermissionCheckbox::new("group", "view_group"),
            PermissionCheckbox::new("group", "delete_group"),
        ]
    }

    #[test]
    fn permission_deserializes_from_endpoint_payload() {
        let raw = r#"[{"id": 7, "name": "Can view user", "codename": "view_user"}]"#;
        let permissions: Vec<Permission> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            permissions,
            vec![Permission {
                id: 7,
                name: "Can view user".to_string(),
                codename: "view_user".to_string(),
            }]
        );
    }

    #[test]
    fn escaped_name_neutralizes_markup() {
        let permission = Permission {
            id: 1,
            name: "<img src=x>".to_string(),
            codename: "view_user".to_string(),
        };
        assert_eq!(permission.escaped_name(), "&lt;img src=x&gt;");
    }

    #[test]
    fn basic_selection_covers_only_crud_prefixes_of_the_model() {
        let mut boxes = boxes();
        select_basic_for_model(&mut boxes, "user");

        assert!(boxes[0].checked); // view_user
        assert!(boxes[1].checked); // add_user
        assert!(!boxes[2].checked); // export_user has no basic prefix
        assert!(!boxes[3].checked); // other model untouched
    }

    #[test]
    fn select_all_action_spans_models() {
        let mut boxes = boxes();
        select_all_action(&mut boxes, "view");

        assert!(boxes[0].checked);
        assert!(boxes[3].checked);
        assert!(!boxes[1].checked);
        assert!(!boxes[4].checked);
    }

    #[test]
    fn action_prefix_requires_the_underscore() {
        let mut boxes = vec![PermissionCheckbox::new("user", "viewer_user")];
        select_all_action(&mut boxes, "view");
        assert!(!boxes[0].checked);
    }

    #[tokio::test]
    async fn fetch_maps_connection_failure_to_network_error() {
        let client = reqwest::Client::new();
        // Nothing listens on this port; the fetch must fail as Network,
        // never panic or hang.
        let result = fetch_module_permissions(&client, "http://127.0.0.1:9", 1).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
