//! Client-facing error types.
//!
//! Every failure that reaches the transport boundary is an [`ApiError`]. It
//! renders as `{"detail": "<message>"}` with the status of its
//! [`ApiErrorCode`].

use std::fmt;

/// Well-known error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// Request body is not valid UTF-8.
    EncodingError,
    /// Request body is not valid JSON/YAML.
    EnvelopeSyntaxError,
    /// Envelope is not a mapping, lacks the field, or the field is not a string.
    MissingFieldError,
    /// Embedded document text is not valid JSON/YAML.
    InnerSyntaxError,
    /// Division with a zero divisor.
    DivisionByZero,
    /// Missing or malformed request parameter.
    ValidationError,
    /// No route for the path.
    NotFound,
    /// Route exists but not for this method.
    MethodNotAllowed,
    /// Body exceeds the configured limit.
    PayloadTooLarge,
    /// Anything unclassified.
    #[default]
    InternalServerError,
}

impl ApiErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EncodingError => "EncodingError",
            Self::EnvelopeSyntaxError => "EnvelopeSyntaxError",
            Self::MissingFieldError => "MissingFieldError",
            Self::InnerSyntaxError => "InnerSyntaxError",
            Self::DivisionByZero => "DivisionByZero",
            Self::ValidationError => "ValidationError",
            Self::NotFound => "NotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::InternalServerError => "InternalServerError",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::ValidationError => http::StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => http::StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }

    /// Detail used when no specific message is given.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::EncodingError => "Request body is not valid UTF-8",
            Self::EnvelopeSyntaxError => "Request body could not be parsed",
            Self::MissingFieldError => "Missing required field",
            Self::InnerSyntaxError => "Embedded document could not be parsed",
            Self::DivisionByZero => "Division by zero is not allowed",
            Self::ValidationError => "Invalid request parameters",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::PayloadTooLarge => "Request body too large",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error response.
#[derive(Debug)]
pub struct ApiError {
    /// The error code.
    pub code: ApiErrorCode,
    /// Human-readable message returned as `detail`.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl ApiError {
    /// Create a new `ApiError` with the code's default message.
    #[must_use]
    pub fn new(code: ApiErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.default_message().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `ApiError` with a custom message.
    #[must_use]
    pub fn with_message(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Division with a zero divisor.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(ApiErrorCode::DivisionByZero)
    }

    /// Missing or malformed parameter.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::ValidationError, message)
    }

    /// No route for the path.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ApiErrorCode::NotFound)
    }

    /// Route exists but not for this method.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ApiErrorCode::MethodNotAllowed)
    }

    /// Body larger than `limit` bytes.
    #[must_use]
    pub fn payload_too_large(limit: usize) -> Self {
        Self::with_message(
            ApiErrorCode::PayloadTooLarge,
            format!("Request body exceeds {limit} bytes"),
        )
    }

    /// Internal server error with the generic detail.
    ///
    /// The real cause belongs in the logs, never in the response.
    #[must_use]
    pub fn internal_error() -> Self {
        Self::new(ApiErrorCode::InternalServerError)
    }
}
