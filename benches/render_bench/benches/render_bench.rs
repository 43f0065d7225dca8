//! Renderer benchmarks
//!
//! Measures page rendering for the default configuration and for a config
//! carrying a realistic nested options blob.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use redoc_serve::{redoc_html, RedocConfig};
use serde_json::json;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("default_config", |b| {
        let config = RedocConfig::default();
        b.iter(|| redoc_html(black_box(&config)))
    });

    group.bench_function("nested_options", |b| {
        let config = RedocConfig::new("Petstore API", "http://petstore.swagger.io/v2/swagger.json")
            .nonce("rAnd0m")
            .options(json!({
                "theme": {
                    "colors": { "primary": { "main": "#6EC5AB" } },
                    "typography": { "fontFamily": "Montserrat, Roboto, sans-serif" }
                },
                "hideDownloadButton": true,
                "scrollYOffset": 50
            }));
        b.iter(|| redoc_html(black_box(&config)))
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
