//! Handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use reformat_model::error::ApiError;
use reformat_model::operations::Operation;

use crate::response::ReformatResponseBody;

/// Boxed future returned by [`ReformatHandler::handle_operation`].
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<ReformatResponseBody>, ApiError>> + Send>>;

/// Trait that the business logic provider must implement.
///
/// The handler receives the routed operation, the request head (for the
/// query string and headers) and the buffered body, and returns a complete
/// HTTP response. This trait is the boundary between the HTTP transport
/// layer and the business logic layer.
pub trait ReformatHandler: Send + Sync + 'static {
    /// Handle an operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: Operation,
        parts: http::request::Parts,
        body: Bytes,
    ) -> HandlerFuture;
}

/// Dispatch an operation to the handler.
pub async fn dispatch_operation<H: ReformatHandler>(
    handler: &H,
    op: Operation,
    parts: http::request::Parts,
    body: Bytes,
) -> Result<http::Response<ReformatResponseBody>, ApiError> {
    tracing::debug!(operation = %op, body_len = body.len(), "dispatching operation");
    handler.handle_operation(op, parts, body).await
}
