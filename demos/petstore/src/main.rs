//! Petstore documentation demo
//!
//! Run with: cargo run -p petstore-demo
//!
//! Then visit: http://127.0.0.1:8080/docs

use std::convert::Infallible;
use std::net::SocketAddr;

use bytes::Bytes;
use http::{Response, StatusCode};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use redoc_serve::{Redoc, RedocConfig};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

fn route(docs: &Redoc, req: hyper::Request<Incoming>) -> Response<Full<Bytes>> {
    match req.uri().path() {
        "/docs" => {
            let mut response = Response::new(Full::new(Bytes::new()));
            docs.handle(&req, &mut response);
            response
        }
        "/health" => Response::new(Full::new(Bytes::from("OK"))),
        _ => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("not found")))
            .unwrap(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let docs = Redoc::new(
        RedocConfig::new("Petstore API", "http://petstore.swagger.io/v2/swagger.json")
            .options(json!({ "hideDownloadButton": true, "scrollYOffset": 50 })),
    );

    let addr: SocketAddr = "127.0.0.1:8080".parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("petstore docs running on http://{}/docs", addr);

    loop {
        let (stream, _remote_addr) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let docs = docs.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: hyper::Request<Incoming>| {
                let docs = docs.clone();
                async move { Ok::<_, Infallible>(route(&docs, req)) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("connection error: {}", err);
            }
        });
    }
}
