//! Integration tests for the Reformat server.
//!
//! Each test starts an in-process server on an ephemeral loopback port. Set
//! `REFORMAT_ENDPOINT_URL` to run the same tests against an external server
//! instead:
//!
//! ```text
//! REFORMAT_ENDPOINT_URL=http://localhost:8000 cargo test -p reformat-integration
//! ```

use std::sync::{Arc, Once};

use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;

use reformat_core::{ReformatConfig, Reformatter, ReformatterHandler};
use reformat_http::ReformatHttpService;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Start a server on `127.0.0.1:0` in the current runtime and return its base URL.
pub async fn spawn_server(config: &ReformatConfig) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handler = ReformatterHandler::new(Reformatter::new());
    let service = ReformatHttpService::new(Arc::new(handler), config.http_config());

    tokio::spawn(async move {
        let http = HttpConnBuilder::new(TokioExecutor::new());
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let conn = http
                .serve_connection(TokioIo::new(stream), service.clone())
                .into_owned();
            tokio::spawn(async move {
                if let Err(e) = conn.await {
                    tracing::debug!(error = %e, "test connection closed with error");
                }
            });
        }
    });

    Ok(format!("http://{addr}"))
}

/// Base URL of the server under test.
///
/// Uses `REFORMAT_ENDPOINT_URL` if set, otherwise spawns an in-process server
/// with default configuration.
pub async fn endpoint_url() -> String {
    init_tracing();

    if let Ok(url) = std::env::var("REFORMAT_ENDPOINT_URL") {
        return url.trim_end_matches('/').to_owned();
    }

    spawn_server(&ReformatConfig::default())
        .await
        .unwrap_or_else(|e| panic!("failed to start test server: {e}"))
}

/// A plain HTTP client.
#[must_use]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// POST `body` to `/format` with the given content type.
pub async fn post_format(
    base: &str,
    content_type: &str,
    body: impl Into<reqwest::Body>,
) -> reqwest::Response {
    http_client()
        .post(format!("{base}/format"))
        .header("content-type", content_type)
        .body(body)
        .send()
        .await
        .unwrap_or_else(|e| panic!("POST /format failed: {e}"))
}

mod test_divide;
mod test_format;
mod test_routing;
