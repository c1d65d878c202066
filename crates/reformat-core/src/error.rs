//! Pipeline errors and their mapping to client-facing errors.

use reformat_model::error::{ApiError, ApiErrorCode};
use reformat_model::{DocumentError, FormatMode};

/// Why the envelope did not yield the inner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFieldReason {
    /// The envelope is not a mapping.
    NotAMapping,
    /// The mapping has no such key.
    Absent,
    /// The key is present but its value is not a string.
    NotAString,
}

impl MissingFieldReason {
    fn message(self, field: &str) -> String {
        match self {
            Self::NotAMapping => {
                format!("Request body must be a mapping with a '{field}' field")
            }
            Self::Absent => format!("Missing required field: {field}"),
            Self::NotAString => format!("Field '{field}' must be a string"),
        }
    }
}

/// A failure in one stage of the reformatting pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Body bytes are not UTF-8.
    #[error("Request body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Body text is not a valid document in the active mode.
    #[error("Invalid {mode} body: {source}")]
    EnvelopeSyntax {
        /// Active mode.
        mode: FormatMode,
        /// Parser diagnostic.
        source: DocumentError,
    },

    /// Envelope lacks a string under the mode's field.
    #[error("{}", .reason.message(.field))]
    MissingField {
        /// Expected field name.
        field: &'static str,
        /// Which check failed.
        reason: MissingFieldReason,
    },

    /// Inner text is not a valid document in the active mode.
    #[error("Invalid {mode} string: {source}")]
    InnerSyntax {
        /// Active mode.
        mode: FormatMode,
        /// Parser diagnostic.
        source: DocumentError,
    },

    /// Canonical rendering failed.
    #[error("failed to render canonical {mode} output: {source}")]
    Render {
        /// Active mode.
        mode: FormatMode,
        /// Emitter error.
        source: DocumentError,
    },
}

impl PipelineError {
    /// Client-facing error code for this failure.
    #[must_use]
    pub fn code(&self) -> ApiErrorCode {
        match self {
            Self::Encoding(_) => ApiErrorCode::EncodingError,
            Self::EnvelopeSyntax { .. } => ApiErrorCode::EnvelopeSyntaxError,
            Self::MissingField { .. } => ApiErrorCode::MissingFieldError,
            Self::InnerSyntax { .. } => ApiErrorCode::InnerSyntaxError,
            Self::Render { .. } => ApiErrorCode::InternalServerError,
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        let code = err.code();
        if code == ApiErrorCode::InternalServerError {
            // Detail stays generic; the cause travels as the source for logging.
            return Self::internal_error().with_source(err);
        }
        Self::with_message(code, err.to_string()).with_source(err)
    }
}
