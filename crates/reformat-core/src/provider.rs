//! Operation implementations.
//!
//! [`Reformatter`] holds one method per operation; each returns a typed
//! output or an [`ApiError`]. HTTP concerns live in [`crate::handler`].

use reformat_model::error::ApiError;
use reformat_model::input::{DivideInput, FormatInput};
use reformat_model::output::{DivideOutput, FormatOutput, GreetingOutput, HealthOutput};

use crate::pipeline;

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello, FastAPI!";

/// Stateless provider for every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reformatter;

impl Reformatter {
    /// Create a new provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// `GET /`.
    #[must_use]
    pub fn handle_root(&self) -> GreetingOutput {
        GreetingOutput {
            message: GREETING.to_owned(),
        }
    }

    /// `GET /health`.
    #[must_use]
    pub fn handle_health(&self) -> HealthOutput {
        HealthOutput {
            status: "running".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// `GET /divide`.
    pub fn handle_divide(&self, input: DivideInput) -> Result<DivideOutput, ApiError> {
        if input.b == 0.0 {
            return Err(ApiError::division_by_zero());
        }
        Ok(DivideOutput {
            result: input.a / input.b,
        })
    }

    /// `POST /format`.
    pub fn handle_format(&self, input: &FormatInput) -> Result<FormatOutput, ApiError> {
        let formatted = pipeline::reformat(input.content_type.as_deref(), &input.body)?;
        Ok(FormatOutput { formatted })
    }
}

/// Parse `a` and `b` from a URL query string.
///
/// When a parameter repeats, the last occurrence wins.
pub fn parse_divide_query(query: Option<&str>) -> Result<DivideInput, ApiError> {
    let mut a = None;
    let mut b = None;
    for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        match &*key {
            "a" => a = Some(value),
            "b" => b = Some(value),
            _ => {}
        }
    }

    Ok(DivideInput {
        a: parse_float_param("a", a.as_deref())?,
        b: parse_float_param("b", b.as_deref())?,
    })
}

fn parse_float_param(name: &str, raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = raw.ok_or_else(|| {
        ApiError::validation(format!("Missing required query parameter: {name}"))
    })?;
    raw.trim().parse::<f64>().map_err(|_| {
        ApiError::validation(format!(
            "Query parameter '{name}' must be a number, got '{raw}'"
        ))
    })
}
