//! Widget Configuration
//!
//! The host page configures the widget through `data-*` attributes on
//! `<body>`: either a `data-config` JSON blob, individual attributes, or
//! both (individual attributes win).

use serde::Deserialize;
use tracing::warn;

/// Catalog service used when the host page does not override it
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2/";

/// Items requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page the widget asks for
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Optional heading shown above the list
    pub headline: String,
    pub api_base: String,
    pub page_size: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            headline: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl WidgetConfig {
    /// Read configuration from the document body, falling back to defaults
    pub fn from_body() -> Self {
        let body = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body());
        match body {
            Some(body) => Self::from_attributes(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }

    /// Build from an attribute lookup (`data-config`, `data-headline`,
    /// `data-api-base`, `data-page-size`)
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match get("data-config") {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring malformed data-config");
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(headline) = get("data-headline") {
            config.headline = headline;
        }
        if let Some(base) = get("data-api-base").filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(raw) = get("data-page-size") {
            match raw.trim().parse::<u32>() {
                Ok(size) => config.page_size = size,
                Err(_) => warn!(value = %raw, "ignoring invalid data-page-size"),
            }
        }
        config
    }

    /// Page size, with zero replaced by the default and capped at [`MAX_PAGE_SIZE`]
    pub fn page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size.min(MAX_PAGE_SIZE)
        }
    }
}

/// Base address with exactly one trailing slash
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attributes() {
        let config = WidgetConfig::from_attributes(lookup(&[]));
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_attributes_override_json() {
        let config = WidgetConfig::from_attributes(lookup(&[
            ("data-config", r#"{"headline": "From JSON", "page_size": 5}"#),
            ("data-headline", "Pokédex"),
        ]));
        assert_eq!(config.headline, "Pokédex");
        assert_eq!(config.page_size(), 5);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = WidgetConfig::from_attributes(lookup(&[
            ("data-config", "{not json"),
            ("data-page-size", "many"),
            ("data-api-base", "  "),
        ]));
        assert_eq!(config, WidgetConfig::default());

        let zero = WidgetConfig::from_attributes(lookup(&[("data-page-size", "0")]));
        assert_eq!(zero.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_is_capped() {
        let huge = WidgetConfig::from_attributes(lookup(&[("data-page-size", "4294967295")]));
        assert_eq!(huge.page_size(), MAX_PAGE_SIZE);

        let json = WidgetConfig::from_attributes(lookup(&[("data-config", r#"{"page_size": 500}"#)]));
        assert_eq!(json.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8000/api"), "http://localhost:8000/api/");
        assert_eq!(normalize_base("http://localhost:8000/api//"), "http://localhost:8000/api/");
        assert_eq!(normalize_base(""), DEFAULT_API_BASE);
    }
}
