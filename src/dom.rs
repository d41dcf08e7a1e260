// SPDX-License-Identifier: MPL-2.0
//! Element-model primitives shared by the controllers.
//!
//! The controllers never touch a real DOM; they mutate these lightweight
//! stand-ins and the presentation layer mirrors them onto elements.

use std::fmt;

/// An ordered set of style classes, preserving insertion order and
/// rejecting duplicates, like a DOM `classList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a class set from an iterator of names, skipping empties
    /// and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Adds a class. Empty names and duplicates are ignored.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() && !self.contains(&name) {
            self.classes.push(name);
        }
    }

    /// Removes a class if present.
    pub fn remove(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    /// Keeps only the classes the predicate accepts.
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.classes.retain(|c| keep(c));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}

/// CSS positioning context of a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    #[must_use]
    pub fn is_static(self) -> bool {
        matches!(self, Position::Static)
    }
}

/// Escapes a string for interpolation into an HTML text context.
///
/// Notification text and permission names come from untrusted input and
/// must pass through here before reaching any HTML-rendering target.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
