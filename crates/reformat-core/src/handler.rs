//! Handler implementation bridging HTTP to business logic.

use bytes::Bytes;

use reformat_http::dispatch::{HandlerFuture, ReformatHandler};
use reformat_http::response::{ReformatResponseBody, json_response};
use reformat_model::error::ApiError;
use reformat_model::input::FormatInput;
use reformat_model::operations::Operation;

use crate::provider::{Reformatter, parse_divide_query};

/// Handler that bridges the HTTP layer to the [`Reformatter`] provider.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use reformat_core::ReformatterHandler;
/// use reformat_http::ReformatHandler;
/// use reformat_model::Operation;
///
/// let handler = ReformatterHandler::default();
/// let (parts, ()) = http::Request::get("/divide?a=6&b=3")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// # tokio_test::block_on(async {
/// let response = handler
///     .handle_operation(Operation::Divide, parts, Bytes::new())
///     .await
///     .unwrap();
/// assert_eq!(response.status(), http::StatusCode::OK);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct ReformatterHandler {
    provider: Reformatter,
}

impl ReformatterHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Reformatter) -> Self {
        Self { provider }
    }
}

impl ReformatHandler for ReformatterHandler {
    fn handle_operation(
        &self,
        op: Operation,
        parts: http::request::Parts,
        body: Bytes,
    ) -> HandlerFuture {
        let provider = self.provider;
        Box::pin(async move { dispatch(&provider, op, &parts, body) })
    }
}

/// Dispatch an operation to the matching provider method.
fn dispatch(
    provider: &Reformatter,
    op: Operation,
    parts: &http::request::Parts,
    body: Bytes,
) -> Result<http::Response<ReformatResponseBody>, ApiError> {
    match op {
        Operation::Root => serialize(&provider.handle_root()),
        Operation::Health => serialize(&provider.handle_health()),
        Operation::Divide => {
            let input = parse_divide_query(parts.uri.query())?;
            let output = provider.handle_divide(input)?;
            serialize(&output)
        }
        Operation::Format => {
            let input = FormatInput {
                content_type: content_type(&parts.headers),
                body,
            };
            let output = provider.handle_format(&input)?;
            serialize(&output)
        }
    }
}

/// `Content-Type` as text; non-visible-ASCII values count as absent.
fn content_type(headers: &http::HeaderMap) -> Option<String> {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
) -> Result<http::Response<ReformatResponseBody>, ApiError> {
    let json = serde_json::to_vec(output)
        .map_err(|e| ApiError::internal_error().with_source(e))?;
    Ok(json_response(json))
}
