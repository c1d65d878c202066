//! Envelope parsing.

use reformat_model::{Document, FormatMode};

use crate::error::PipelineError;

/// Decode `body` as UTF-8 and parse it with the grammar of `mode`.
pub fn parse_envelope(body: &[u8], mode: FormatMode) -> Result<Document, PipelineError> {
    let text = std::str::from_utf8(body)?;
    mode.parse(text)
        .map_err(|source| PipelineError::EnvelopeSyntax { mode, source })
}
