//! Inner-text extraction from the envelope.

use reformat_model::{Document, FormatMode};

use crate::error::{MissingFieldReason, PipelineError};

/// Return the string stored under the mode's field (`json_string` or
/// `yaml_string`).
pub fn extract_inner_text(envelope: &Document, mode: FormatMode) -> Result<&str, PipelineError> {
    let field = mode.field_name();
    let missing = |reason| PipelineError::MissingField { field, reason };

    let map = envelope
        .as_object()
        .ok_or_else(|| missing(MissingFieldReason::NotAMapping))?;
    let value = map
        .get(field)
        .ok_or_else(|| missing(MissingFieldReason::Absent))?;
    value
        .as_str()
        .ok_or_else(|| missing(MissingFieldReason::NotAString))
}
