//! HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};

use reformat_model::error::{ApiError, ApiErrorCode};

use crate::dispatch::{ReformatHandler, dispatch_operation};
use crate::response::{CONTENT_TYPE, ReformatResponseBody, error_to_response};
use crate::router::{allowed_methods, resolve_operation};

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct ReformatHttpConfig {
    /// Maximum accepted request body, in bytes.
    pub max_body_size: usize,
}

impl Default for ReformatHttpConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

/// Hyper `Service` implementation for Reformat.
///
/// Wraps a [`ReformatHandler`] implementation and routes incoming HTTP
/// requests to the matching operation.
#[derive(Debug)]
pub struct ReformatHttpService<H: ReformatHandler> {
    handler: Arc<H>,
    config: Arc<ReformatHttpConfig>,
}

impl<H: ReformatHandler> ReformatHttpService<H> {
    /// Create a new `ReformatHttpService`.
    pub fn new(handler: Arc<H>, config: ReformatHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }
}

impl<H: ReformatHandler> Clone for ReformatHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H, B> hyper::service::Service<http::Request<B>> for ReformatHttpService<H>
where
    H: ReformatHandler,
    B: http_body::Body + Send + 'static,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Response = http::Response<ReformatResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<B>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let config = Arc::clone(&self.config);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &config).await;
            let response = add_common_headers(response, &request_id);
            Ok(response)
        })
    }
}

/// Process a single HTTP request through the full pipeline.
async fn process_request<H, B>(
    req: http::Request<B>,
    handler: &H,
    config: &ReformatHttpConfig,
) -> http::Response<ReformatResponseBody>
where
    H: ReformatHandler,
    B: http_body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let (parts, incoming) = req.into_parts();

    // 1. Route: method + path to an operation.
    let op = match resolve_operation(&parts.method, parts.uri.path()) {
        Ok(op) => op,
        Err(err) => {
            let mut response = error_to_response(&err);
            if err.code == ApiErrorCode::MethodNotAllowed {
                if let Some(allow) = allowed_methods(parts.uri.path()) {
                    response
                        .headers_mut()
                        .insert(http::header::ALLOW, http::HeaderValue::from_static(allow));
                }
            }
            return response;
        }
    };

    // 2. Collect body, bounded by the configured limit.
    let body = match collect_body(incoming, config.max_body_size).await {
        Ok(body) => body,
        Err(err) => return error_to_response(&err),
    };

    // 3. Dispatch to handler.
    match dispatch_operation(handler, op, parts, body).await {
        Ok(response) => response,
        Err(err) => {
            if err.status_code.is_server_error() {
                tracing::error!(operation = %op, error = ?err, "request failed");
            } else {
                tracing::debug!(operation = %op, code = %err.code, "request rejected");
            }
            error_to_response(&err)
        }
    }
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body<B>(incoming: B, limit: usize) -> Result<Bytes, ApiError>
where
    B: http_body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Limited::new(incoming, limit)
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                ApiError::payload_too_large(limit)
            } else {
                tracing::warn!(error = %e, "failed to read request body");
                ApiError::internal_error()
            }
        })
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<ReformatResponseBody>,
    request_id: &str,
) -> http::Response<ReformatResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers
        .entry("content-type")
        .or_insert(http::HeaderValue::from_static(CONTENT_TYPE));

    headers.insert("server", http::HeaderValue::from_static("Reformat"));

    response
}
