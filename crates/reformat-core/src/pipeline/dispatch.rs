//! Content-type based format selection.

use reformat_model::FormatMode;

/// Select the format mode from a `Content-Type` value.
///
/// YAML media types select [`FormatMode::Yaml`]; parameters such as
/// `charset` are ignored and matching is case-insensitive. Anything else,
/// including a missing or unparsable header, selects JSON.
#[must_use]
pub fn select_mode(content_type: Option<&str>) -> FormatMode {
    let Some(mime) = content_type.and_then(|v| v.trim().parse::<mime::Mime>().ok()) else {
        return FormatMode::Json;
    };

    if FormatMode::is_yaml_media_type(mime.essence_str()) {
        FormatMode::Yaml
    } else {
        FormatMode::Json
    }
}
