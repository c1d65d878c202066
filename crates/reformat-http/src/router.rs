//! Request router.
//!
//! Routing is a fixed table of `(method, path)` pairs, one per
//! [`Operation`]. Trailing slashes are not normalized.

use reformat_model::error::ApiError;
use reformat_model::operations::Operation;

/// Resolve the operation addressed by a request.
///
/// Unknown paths are `NotFound`; a known path with the wrong method is
/// `MethodNotAllowed`.
pub fn resolve_operation(method: &http::Method, path: &str) -> Result<Operation, ApiError> {
    let op = Operation::from_path(path).ok_or_else(ApiError::not_found)?;

    if *method == op.method() || (*method == http::Method::HEAD && op.method() == http::Method::GET)
    {
        Ok(op)
    } else {
        Err(ApiError::method_not_allowed())
    }
}

/// Value for the `Allow` header on a `405` for `path`.
#[must_use]
pub fn allowed_methods(path: &str) -> Option<&'static str> {
    Operation::from_path(path).map(|op| {
        if op.method() == http::Method::POST {
            "POST"
        } else {
            "GET, HEAD"
        }
    })
}
