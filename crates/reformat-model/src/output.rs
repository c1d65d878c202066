//! Operation outputs.
//!
//! Field names are the JSON keys clients see.

use serde::{Deserialize, Serialize};

/// Output for the `Root` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingOutput {
    /// Greeting text.
    pub message: String,
}

/// Output for the `Divide` operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivideOutput {
    /// `a / b`.
    pub result: f64,
}

/// Output for the `Format` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOutput {
    /// Canonical rendering of the embedded document.
    pub formatted: String,
}

/// Output for the `Health` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthOutput {
    /// Always `"running"` while the server accepts requests.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Human-readable error message.
    pub detail: String,
}
