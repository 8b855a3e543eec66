//! Per-call request options

use std::collections::HashMap;
use std::time::Duration;

/// Options for a single GraphQL call
///
/// Everything here comes from the caller. The client itself sets no timeout.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Overrides the operation name sent in the request body
    pub operation_name: Option<String>,
    /// Deadline for the whole exchange
    pub timeout: Option<Duration>,
    /// Extra request headers
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation name
    #[must_use]
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}
