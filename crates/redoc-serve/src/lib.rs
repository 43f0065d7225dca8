//! ReDoc documentation middleware
//!
//! This crate renders the static HTML page that embeds the [ReDoc] API
//! documentation viewer and exposes that page as a reusable HTTP handler.
//! The page itself is a fixed skeleton with four substituted values: the
//! document title, the URL of the OpenAPI document handed to the viewer, an
//! optional Content-Security-Policy nonce for the viewer script tag, and a
//! JSON blob of viewer options forwarded verbatim to `Redoc.init`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use redoc_serve::{Redoc, RedocConfig};
//! use serde_json::json;
//!
//! let docs = Redoc::new(
//!     RedocConfig::new("My API", "https://example.com/openapi.json")
//!         .nonce("rAnd0m")
//!         .options(json!({ "hideDownloadButton": true })),
//! );
//!
//! // `docs` is a tower `Service`; it can also drive any `ResponseSink`
//! // directly via `Redoc::handle`, or build a one-off response through
//! // `redoc_response`.
//! ```
//!
//! # Security
//!
//! `title`, `spec_url` and `nonce` are inserted into the page verbatim, with
//! no HTML or attribute escaping. That passthrough is part of the page's
//! output contract, so values taken from untrusted input can inject markup
//! or script. Sanitize such values before constructing a [`RedocConfig`].
//!
//! [ReDoc]: https://github.com/Redocly/redoc

mod config;
mod error;
mod handler;
mod html;

pub use config::RedocConfig;
pub use error::OptionsError;
pub use handler::{Redoc, ResponseSink};
pub use html::redoc_html;

use bytes::Bytes;
use http::{header, Response, StatusCode};
use http_body_util::Full;

/// Content type declared for every rendered documentation page.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Generate the documentation page as a ready-to-send HTTP response
pub fn redoc_response(config: &RedocConfig) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .body(Full::new(Bytes::from(redoc_html(config))))
        .unwrap()
}
