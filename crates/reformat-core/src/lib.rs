//! Reformat business logic.
//!
//! The [`pipeline`] module holds the reformatting stages; [`provider`]
//! exposes one method per operation and [`handler`] bridges it to the HTTP
//! layer.
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod provider;

pub use config::ReformatConfig;
pub use error::PipelineError;
pub use handler::ReformatterHandler;
pub use provider::Reformatter;
