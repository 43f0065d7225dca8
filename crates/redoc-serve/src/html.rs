//! Documentation page rendering

use tracing::trace;

use crate::config::RedocConfig;

/// Fixed page skeleton. Every byte outside the four substitution markers is
/// part of the page's output contract and must survive rendering unchanged.
const REDOC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head><title>[[title]]</title>
  <meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/>
  <link href="https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700" rel="stylesheet"/>
  <style>body{margin:0;padding:0;}</style>
</head><body>
  <div id="redoc-container"></div>
  <script nonce='[[nonce]]' src="https://unpkg.com/redoc@latest/bundles/redoc.standalone.js"></script>
</body>
<script>Redoc.init("[[spec-url]]", [[options]], document.getElementById("redoc-container"));</script>
</html>"#;

/// Render the documentation page for `config`
///
/// `title`, `spec_url` and `nonce` are inserted verbatim, with no escaping
/// (see the crate-level security note); `options` is serialized as compact
/// JSON with object keys in insertion order. The function performs no I/O,
/// never fails, and renders byte-identical output for equal configs.
pub fn redoc_html(config: &RedocConfig) -> String {
    trace!(spec_url = %config.spec_url, "rendering documentation page");
    REDOC_TEMPLATE
        .replace("[[title]]", &config.title)
        .replace("[[spec-url]]", &config.spec_url)
        .replace("[[nonce]]", &config.nonce)
        .replace("[[options]]", &config.options.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_each_marker_once() {
        for marker in ["[[title]]", "[[spec-url]]", "[[nonce]]", "[[options]]"] {
            assert_eq!(
                REDOC_TEMPLATE.matches(marker).count(),
                1,
                "marker {} must appear exactly once",
                marker
            );
        }
    }

    #[test]
    fn test_no_marker_survives_rendering() {
        let html = redoc_html(&RedocConfig::default());
        assert!(!html.contains("[["));
        assert!(!html.contains("]]"));
    }

    #[test]
    fn test_fixed_skeleton_bytes() {
        let html = redoc_html(&RedocConfig::default());

        // Bytes that must be identical across all invocations
        assert!(html.contains(r#"<meta charset="utf-8"/>"#));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1"/>"#));
        assert!(html.contains(
            r#"<link href="https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700" rel="stylesheet"/>"#
        ));
        assert!(html.contains("<style>body{margin:0;padding:0;}</style>"));
        assert!(html.contains(r#"<div id="redoc-container"></div>"#));
        assert!(html.contains(r#"src="https://unpkg.com/redoc@latest/bundles/redoc.standalone.js""#));
    }

    #[test]
    fn test_document_structure() {
        let html = redoc_html(&RedocConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));

        let head_open = html.find("<head>").unwrap();
        let head_close = html.find("</head>").unwrap();
        let body_open = html.find("<body>").unwrap();
        let body_close = html.find("</body>").unwrap();
        let title_open = html.find("<title>").unwrap();
        let title_close = html.find("</title>").unwrap();

        assert!(head_open < title_open);
        assert!(title_open < title_close);
        assert!(title_close < head_close);
        assert!(head_close < body_open);
        assert!(body_open < body_close);
    }
}
