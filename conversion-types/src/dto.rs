//! Data Transfer Objects for the tool-call boundary.
//!
//! External tool-calling layers (a UI shim, an LLM orchestration layer)
//! expect conversion outcomes in the `{"status": ...}` envelope. The
//! core stays a plain `Result`; this module is the only place the wire
//! convention appears.

use serde::{Deserialize, Serialize};

use crate::domain::ConversionResult;
use crate::error::ConversionError;

/// Conversion outcome in the tool-call envelope.
///
/// Serializes as `{"status": "success", ...result fields}` on success
/// and `{"status": "error", "error_message": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResponse {
    Success(ConversionResult),
    Error { error_message: String },
}

impl From<Result<ConversionResult, ConversionError>> for ToolResponse {
    fn from(outcome: Result<ConversionResult, ConversionError>) -> Self {
        match outcome {
            Ok(result) => ToolResponse::Success(result),
            Err(err) => ToolResponse::Error {
                error_message: err.to_string(),
            },
        }
    }
}
