//! The reformatting pipeline.
//!
//! ```text
//! content-type ──► dispatch ──► FormatMode
//! body bytes ────► envelope ──► Document ──► extract ──► inner text
//! inner text ────► inner ─────► Document ──► canonical ──► formatted text
//! ```
//!
//! Every stage is a pure function; the first failure short-circuits with a
//! [`PipelineError`] naming the stage.

pub mod canonical;
pub mod dispatch;
pub mod envelope;
pub mod extract;
pub mod inner;

use reformat_model::FormatMode;

use crate::error::PipelineError;

pub use canonical::render_canonical;
pub use dispatch::select_mode;
pub use envelope::parse_envelope;
pub use extract::extract_inner_text;
pub use inner::parse_inner;

/// Run the full pipeline for one request.
///
/// Returns the canonical rendering of the document embedded in `body`,
/// with every stage using the mode selected from `content_type`.
pub fn reformat(content_type: Option<&str>, body: &[u8]) -> Result<String, PipelineError> {
    let mode = select_mode(content_type);
    reformat_with_mode(mode, body)
}

/// Run the pipeline with an already selected mode.
pub fn reformat_with_mode(mode: FormatMode, body: &[u8]) -> Result<String, PipelineError> {
    let envelope = parse_envelope(body, mode)?;
    let inner_text = extract_inner_text(&envelope, mode)?;
    let document = parse_inner(inner_text, mode)?;
    render_canonical(&document, mode)
}
