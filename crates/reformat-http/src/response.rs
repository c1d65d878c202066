//! Response serialization and error formatting.

use bytes::Bytes;
use http_body_util::Full;

use reformat_model::error::ApiError;
use reformat_model::output::ErrorOutput;

/// Response body type; every response is a single buffered JSON document.
pub type ReformatResponseBody = Full<Bytes>;

/// Content type for every response.
pub const CONTENT_TYPE: &str = "application/json";

/// Serialize an error into a JSON response body.
///
/// ```json
/// {"detail": "Division by zero is not allowed"}
/// ```
#[must_use]
pub fn error_to_json(error: &ApiError) -> Vec<u8> {
    let output = ErrorOutput {
        detail: error.message.clone(),
    };
    serde_json::to_vec(&output).expect("JSON serialization of error cannot fail")
}

/// Convert an `ApiError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(error: &ApiError) -> http::Response<ReformatResponseBody> {
    let body = Full::new(Bytes::from(error_to_json(error)));

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", CONTENT_TYPE)
        .body(body)
        .expect("valid error response")
}

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>) -> http::Response<ReformatResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(Full::new(Bytes::from(json)))
        .expect("valid JSON response")
}
