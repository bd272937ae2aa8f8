//! Name generation capability.
//!
//! Modeled as a single interface so handlers and tests never depend on the
//! concrete Gemini client. `GeminiClient` is the sole production
//! implementation; tests substitute stubs.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NameRequest, NameResponse};

/// Errors a generation attempt can produce.
///
/// Every variant is recoverable per-request; the handler boundary maps them
/// to HTTP statuses and nothing here crashes the process.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("upstream call timed out after {0}s")]
    Timeout(u64),

    #[error("upstream call failed: {0}")]
    Upstream(String),

    #[error("upstream returned an empty candidate list")]
    NoCandidates,

    #[error("failed to decode model response: {message}")]
    Decode { message: String, raw: String },

    #[error("model returned no name suggestions")]
    EmptyResult,
}

/// The single capability: generate(name) -> suggestions or error.
#[async_trait]
pub trait NameGenerator: Send + Sync {
    async fn generate(&self, request: &NameRequest) -> Result<NameResponse, GenerateError>;
}
