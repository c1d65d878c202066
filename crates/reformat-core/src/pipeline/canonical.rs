//! Canonical rendering.

use reformat_model::{Document, FormatMode};

use crate::error::PipelineError;

/// Render `document` in the canonical form of `mode`.
///
/// JSON: two-space indent, literal non-ASCII, no trailing newline.
/// YAML: block style, two-space indent, no trailing newline.
pub fn render_canonical(document: &Document, mode: FormatMode) -> Result<String, PipelineError> {
    mode.render(document)
        .map_err(|source| PipelineError::Render { mode, source })
}
