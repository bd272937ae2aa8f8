//! Cleanup and decoding of raw model output.
//!
//! The model is told to return bare JSON but routinely wraps it in a
//! markdown code fence anyway, so the text is normalized before parsing.

use crate::models::NameResponse;
use crate::services::name_service::GenerateError;

/// Strip a surrounding markdown code fence (and its language tag) and trim
/// whitespace. Idempotent: already-clean text comes back unchanged.
pub fn normalize_response(text: &str) -> String {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed.to_string();
    };

    // Drop the language tag on the opening fence line, if any.
    let inner = match inner.find('\n') {
        Some(idx) => &inner[idx + 1..],
        None => inner,
    };

    inner.trim().to_string()
}

/// Parse normalized text into a `NameResponse`.
///
/// All-or-nothing: a parse failure keeps the raw text for diagnostics and a
/// well-formed payload with zero suggestions is rejected outright.
pub fn parse_name_response(raw: &str) -> Result<NameResponse, GenerateError> {
    let cleaned = normalize_response(raw);

    let response: NameResponse = serde_json::from_str(&cleaned)
        .map_err(|e| GenerateError::Decode { message: e.to_string(), raw: cleaned.clone() })?;

    if response.suggestions.is_empty() {
        return Err(GenerateError::EmptyResult);
    }

    Ok(response)
}
