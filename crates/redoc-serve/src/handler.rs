//! Request handler for the documentation page

use std::convert::Infallible;
use std::future::{ready, Ready};
use std::task::{Context, Poll};

use bytes::Bytes;
use http::{header, HeaderValue};
use http_body_util::Full;
use tower::Service;
use tracing::debug;

use crate::config::RedocConfig;
use crate::html::redoc_html;
use crate::HTML_CONTENT_TYPE;

/// Response-sink capability driven by [`Redoc::handle`]
///
/// The surrounding framework supplies the sink; the handler only ever
/// declares the content type and writes the body, in that order.
pub trait ResponseSink {
    /// Declare the response content type
    fn set_content_type(&mut self, content_type: &str);
    /// Write the full response body
    fn write_body(&mut self, body: String);
}

impl ResponseSink for http::Response<Full<Bytes>> {
    fn set_content_type(&mut self, content_type: &str) {
        let value = HeaderValue::from_str(content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("text/html"));
        self.headers_mut().insert(header::CONTENT_TYPE, value);
    }

    fn write_body(&mut self, body: String) {
        *self.body_mut() = Full::new(Bytes::from(body));
    }
}

/// Reusable documentation-page handler
///
/// Owns an immutable [`RedocConfig`]; every invocation renders the same
/// page. The handler is `Clone` and has no state beyond the config, so one
/// instance can serve any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Redoc {
    config: RedocConfig,
}

impl Redoc {
    /// Create a handler serving the page described by `config`
    pub fn new(config: RedocConfig) -> Self {
        debug!(title = %config.title, spec_url = %config.spec_url, "registering documentation handler");
        Self { config }
    }

    /// The configuration this handler serves
    pub fn config(&self) -> &RedocConfig {
        &self.config
    }

    /// Serve one request: declare the content type, then write the page
    ///
    /// The request is never read or mutated (pass `&()` when there is no
    /// request at all), and the call cannot fail whatever the sink does with
    /// the two writes.
    pub fn handle<R, S: ResponseSink>(&self, _request: &R, sink: &mut S) {
        sink.set_content_type(HTML_CONTENT_TYPE);
        sink.write_body(redoc_html(&self.config));
    }
}

impl<B> Service<http::Request<B>> for Redoc {
    type Response = http::Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: http::Request<B>) -> Self::Future {
        ready(Ok(crate::redoc_response(&self.config)))
    }
}
