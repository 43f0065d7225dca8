//! Page configuration

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::OptionsError;

/// Configuration for the rendered documentation page
///
/// A config has no identity beyond its field values: two configs with equal
/// fields render byte-identical pages. It is built once, at handler
/// registration time, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RedocConfig {
    /// Page title, inserted into the `<title>` element
    pub title: String,
    /// URL of the OpenAPI document handed to the viewer; treated as opaque
    /// text, never parsed or validated
    pub spec_url: String,
    /// Content-Security-Policy nonce for the viewer script tag
    pub nonce: String,
    /// Viewer options forwarded verbatim (as JSON) to `Redoc.init`
    pub options: Value,
}

impl Default for RedocConfig {
    fn default() -> Self {
        Self {
            title: "ReDoc".to_string(),
            spec_url: "http://petstore.swagger.io/v2/swagger.json".to_string(),
            nonce: String::new(),
            options: Value::Object(Map::new()),
        }
    }
}

impl RedocConfig {
    /// Create a configuration with a page title and OpenAPI document URL
    pub fn new(title: impl Into<String>, spec_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            spec_url: spec_url.into(),
            ..Default::default()
        }
    }

    /// Set the Content-Security-Policy nonce for the viewer script tag
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }

    /// Set viewer options as a JSON value
    ///
    /// Object keys keep their insertion order through serialization.
    pub fn options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    /// Set viewer options from any serializable type
    ///
    /// Fails when the value has no JSON representation (for example a map
    /// with non-string keys).
    pub fn options_from<T: Serialize>(self, options: &T) -> Result<Self, OptionsError> {
        let value = serde_json::to_value(options)?;
        Ok(self.options(value))
    }
}
