//! JSON / YAML format mode.

use std::fmt;

use crate::document::{Document, DocumentError};

/// The format governing a single request.
///
/// The same mode parses the envelope, parses the inner text and renders the
/// canonical output; formats are never mixed within one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatMode {
    /// JSON, the default when the content type is missing or unrecognized.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl FormatMode {
    /// Media types (lowercase, without parameters) that select YAML.
    pub const YAML_MEDIA_TYPES: &[&str] = &[
        "application/yaml",
        "application/x-yaml",
        "text/yaml",
        "text/x-yaml",
    ];

    /// Envelope field that carries the inner document text.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Json => "json_string",
            Self::Yaml => "yaml_string",
        }
    }

    /// Display name used in messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Returns `true` if `essence` (e.g. `application/yaml`) selects YAML.
    #[must_use]
    pub fn is_yaml_media_type(essence: &str) -> bool {
        Self::YAML_MEDIA_TYPES
            .iter()
            .any(|t| t.eq_ignore_ascii_case(essence))
    }

    /// Parse `text` with this mode's grammar.
    pub fn parse(self, text: &str) -> Result<Document, DocumentError> {
        match self {
            Self::Json => Document::from_json_str(text),
            Self::Yaml => Document::from_yaml_str(text),
        }
    }

    /// Render `doc` in this mode's canonical form.
    pub fn render(self, doc: &Document) -> Result<String, DocumentError> {
        match self {
            Self::Json => doc.to_json_pretty(),
            Self::Yaml => doc.to_yaml_block(),
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
