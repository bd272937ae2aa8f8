//! Gemini Client Module
//!
//! Sole production implementation of the `NameGenerator` capability.
//! Pipeline: build prompt -> generateContent call (bounded deadline) ->
//! normalize markdown-fenced text -> decode strict JSON.

mod client;
mod prompt;
mod response;

pub use client::GeminiClient;
pub use response::{normalize_response, parse_name_response};
