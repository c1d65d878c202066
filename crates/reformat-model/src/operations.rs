//! Routable operations.

use std::fmt;

/// All supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET /` greeting.
    Root,
    /// `GET /divide?a=&b=`.
    Divide,
    /// `POST /format` reformatting pipeline.
    Format,
    /// `GET /health` liveness probe.
    Health,
}

impl Operation {
    /// All operations, in routing order.
    pub const ALL: [Self; 4] = [Self::Root, Self::Divide, Self::Format, Self::Health];

    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Divide => "Divide",
            Self::Format => "Format",
            Self::Health => "Health",
        }
    }

    /// Request path that addresses this operation.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Divide => "/divide",
            Self::Format => "/format",
            Self::Health => "/health",
        }
    }

    /// The only method the operation accepts.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::Format => http::Method::POST,
            Self::Root | Self::Divide | Self::Health => http::Method::GET,
        }
    }

    /// Look up the operation addressed by `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.path() == path)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
