//! Model types for the Reformat service.
//!
//! This crate holds everything the transport and business layers agree on:
//!
//! - **Document**: the format-agnostic value tree that JSON and YAML parse into
//! - **FormatMode**: the JSON-or-YAML choice made once per request
//! - **Operation**: the routable endpoints
//! - **ApiError**: the client-facing error with its HTTP status
//! - **Input / output**: request and response payloads
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod error;
pub mod input;
pub mod mode;
pub mod operations;
pub mod output;

pub use document::{Document, DocumentError, Map, Number};
pub use error::{ApiError, ApiErrorCode};
pub use mode::FormatMode;
pub use operations::Operation;
