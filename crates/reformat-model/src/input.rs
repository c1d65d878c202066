//! Operation inputs.

use bytes::Bytes;

/// Input for the `Divide` operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivideInput {
    /// Dividend.
    pub a: f64,
    /// Divisor.
    pub b: f64,
}

/// Input for the `Format` operation.
#[derive(Debug, Clone, Default)]
pub struct FormatInput {
    /// Raw `Content-Type` header value, if present and visible ASCII.
    pub content_type: Option<String>,
    /// Buffered request body.
    pub body: Bytes,
}
