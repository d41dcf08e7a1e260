// SPDX-License-Identifier: MPL-2.0
//! Form affordances.
//!
//! Forms opt into an automatic loading overlay through a boolean-ish
//! `data-loading` attribute with optional theme/class companions. The
//! remaining helpers cover required-field highlighting and responsive
//! multi-select sizing.

use crate::config::defaults::{
    MOBILE_SELECT_BREAKPOINT_PX, MULTI_SELECT_SIZE_DESKTOP, MULTI_SELECT_SIZE_MOBILE,
};
use crate::ui::overlay::OverlayOptions;

/// Border class for an empty required field after blur.
pub const REQUIRED_MISSING_CLASS: &str = "border-danger-300";

/// Border class for a satisfied required field.
pub const REQUIRED_OK_CLASS: &str = "border-gray-300";

/// Interprets a boolean-ish string attribute. Only the literal `"true"`
/// enables the behavior.
#[must_use]
pub fn parse_bool_attr(value: Option<&str>) -> bool {
    value == Some("true")
}

/// A form that shows the global loading overlay on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingForm {
    pub theme: Option<String>,
    pub custom_class: Option<String>,
}

impl LoadingForm {
    /// Builds a loading form from its `data-*` attributes.
    ///
    /// Returns `None` unless `data-loading` is exactly `"true"`.
    #[must_use]
    pub fn from_attrs(
        loading: Option<&str>,
        theme: Option<&str>,
        custom_class: Option<&str>,
    ) -> Option<Self> {
        if !parse_bool_attr(loading) {
            return None;
        }
        Some(Self {
            theme: theme.filter(|t| !t.is_empty()).map(str::to_string),
            custom_class: custom_class.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }

    /// Options to pass to the overlay registry when the form submits.
    #[must_use]
    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            theme: self.theme.clone(),
            custom_class: self.custom_class.clone(),
        }
    }
}

/// Border class a required field should carry after losing focus.
#[must_use]
pub fn required_border_class(value: &str) -> &'static str {
    if value.trim().is_empty() {
        REQUIRED_MISSING_CLASS
    } else {
        REQUIRED_OK_CLASS
    }
}

/// Visible rows of a multi-select for the given viewport width.
#[must_use]
pub fn multi_select_size(viewport_width: u32) -> u8 {
    if viewport_width < MOBILE_SELECT_BREAKPOINT_PX {
        MULTI_SELECT_SIZE_MOBILE
    } else {
        MULTI_SELECT_SIZE_DESKTOP
    }
}
