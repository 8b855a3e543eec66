//! Validation results reported by credential tests

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// One warning or error raised while validating a connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cause: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub friendly_message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolution: String,
}

/// Warnings in the order the API reported them
pub type Warnings = Vec<Diagnostic>;

/// Errors in the order the API reported them
pub type Errors = Vec<Diagnostic>;

/// Outcome of a credential validation.
///
/// `success == false` is a normal answer, not a call failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Warnings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Errors,
}

impl ValidationResult {
    /// Causes of all reported errors
    pub fn error_causes(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|d| d.cause.as_str())
    }
}
