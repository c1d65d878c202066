//! HTTP service layer for Reformat.
//!
//! - **Router**: maps method and path to an [`Operation`](reformat_model::Operation)
//! - **Handler trait**: the boundary between HTTP and business logic
//! - **Service**: hyper `Service` implementation
//! - **Response helpers**: JSON success and `{"detail": ...}` error bodies

pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use dispatch::ReformatHandler;
pub use response::ReformatResponseBody;
pub use service::{ReformatHttpConfig, ReformatHttpService};
