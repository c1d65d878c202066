//! Inner document parsing.

use reformat_model::{Document, FormatMode};

use crate::error::PipelineError;

/// Parse the embedded text with the same grammar as the envelope.
pub fn parse_inner(text: &str, mode: FormatMode) -> Result<Document, PipelineError> {
    mode.parse(text)
        .map_err(|source| PipelineError::InnerSyntax { mode, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_reject_empty_json() {
        let err = parse_inner("", FormatMode::Json).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON string: "));
    }

    #[test]
    fn test_should_reject_unclosed_json() {
        let err = parse_inner(r#"{"name": "John", "age": 30"#, FormatMode::Json).unwrap_err();
        assert!(matches!(err, PipelineError::InnerSyntax { .. }));
    }

    #[test]
    fn test_should_parse_blank_yaml_as_null() {
        assert!(parse_inner("", FormatMode::Yaml).unwrap().is_null());
    }

    #[test]
    fn test_should_reject_bad_yaml_indentation() {
        let err = parse_inner("a:\n  b: 1\n c: 2\n", FormatMode::Yaml).unwrap_err();
        assert!(err.to_string().starts_with("Invalid YAML string: "));
    }
}
