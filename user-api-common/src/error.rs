//! Structured error body shared by every failing endpoint.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field name to message, one entry per rejected field.
pub type FieldErrors = BTreeMap<String, String>;

/// JSON body rendered for 4xx/5xx responses that carry a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status.
    pub status: u16,
    /// Short reason, e.g. "Validation Failed".
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<FieldErrors>,
    /// Request path the error was produced for.
    pub path: String,
}

impl ErrorResponse {
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            message: message.into(),
            validation_errors: None,
            path: path.into(),
        }
    }

    pub fn with_validation_errors(mut self, errors: FieldErrors) -> Self {
        self.validation_errors = Some(errors);
        self
    }
}
