// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the interaction controllers.
///
/// Nothing in this crate is fatal: every variant degrades to "feature
/// inactive" at the call site, never to a crashed page.
#[derive(Debug, Clone)]
pub enum Error {
    /// A referenced element (container, panel, form target) is missing.
    ElementNotFound(String),
    /// A `data-*` attribute carried a payload that could not be parsed.
    MalformedAttribute(String),
    /// The permission fetch failed (connection, status, or decode).
    Network(String),
    /// Settings file could not be read or written.
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ElementNotFound(id) => write!(f, "Element not found: {}", id),
            Error::MalformedAttribute(e) => write!(f, "Malformed attribute: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedAttribute(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_element_not_found() {
        let err = Error::ElementNotFound("deleteModal".to_string());
        assert_eq!(format!("{}", err), "Element not found: deleteModal");
    }

    #[test]
    fn display_formats_network_error() {
        let err = Error::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network Error: connection refused");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_malformed_attribute() {
        let json_error = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::MalformedAttribute(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
