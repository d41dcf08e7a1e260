// SPDX-License-Identifier: MPL-2.0
//! Live text filtering for the permission list and the module search box.
//!
//! Matching is case-insensitive substring search over an item's name and
//! description, mirroring what the search widgets derive from the query:
//! per-item visibility, a match count, and the no-results / results-info /
//! dropdown-open flags.

/// One searchable row.
#[derive(Debug, Clone)]
pub struct FilterItem {
    pub name: String,
    pub description: String,
}

impl FilterItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// What the search widget shows for a given query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Visibility per item, in input order.
    pub visible: Vec<bool>,
    pub match_count: usize,
    /// "No results" placeholder is shown.
    pub no_results_visible: bool,
    /// The idle results hint is shown (only while the query is empty).
    pub results_info_visible: bool,
    /// The results dropdown is expanded.
    pub dropdown_open: bool,
}

/// Case-insensitive substring match used by the plain permission filter.
#[must_use]
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Applies a search query over the items.
pub fn apply(items: &[FilterItem], query: &str) -> FilterOutcome {
    let query = query.trim().to_lowercase();
    let visible: Vec<bool> = items
        .iter()
        .map(|item| {
            item.name.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
        })
        .collect();
    let match_count = visible.iter().filter(|v| **v).count();

    FilterOutcome {
        no_results_visible: match_count == 0 && !query.is_empty(),
        results_info_visible: query.is_empty(),
        dropdown_open: !query.is_empty(),
        visible,
        match_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<FilterItem> {
        vec![
            FilterItem::new("Users", "Manage user accounts"),
            FilterItem::new("Groups", "Group membership"),
            FilterItem::new("Modules", "System modules and menus"),
        ]
    }

    #[test]
    fn empty_query_shows_everything_with_idle_hint() {
        let outcome = apply(&items(), "");
        assert_eq!(outcome.visible, vec![true, true, true]);
        assert_eq!(outcome.match_count, 3);
        assert!(outcome.results_info_visible);
        assert!(!outcome.no_results_visible);
        assert!(!outcome.dropdown_open);
    }

    #[test]
    fn query_matches_name_or_description_case_insensitively() {
        let outcome = apply(&items(), "GROUP");
        assert_eq!(outcome.visible, vec![false, true, false]);
        assert!(outcome.dropdown_open);

        // "menus" only appears in a description.
        let outcome = apply(&items(), "menus");
        assert_eq!(outcome.visible, vec![false, false, true]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let outcome = apply(&items(), "  users  ");
        assert_eq!(outcome.match_count, 1);
    }

    #[test]
    fn no_matches_shows_the_placeholder() {
        let outcome = apply(&items(), "zzz");
        assert_eq!(outcome.match_count, 0);
        assert!(outcome.no_results_visible);
        assert!(!outcome.results_info_visible);
        assert!(outcome.dropdown_open);
    }

    #[test]
    fn matches_is_a_plain_substring_check() {
        assert!(matches("Can view user", "VIEW"));
        assert!(!matches("Can view user", "delete"));
    }
}
