//! Request/response types for the name generation API.
//!
//! The suggestion shape mirrors the JSON schema the model is instructed to
//! produce; the service only parses and forwards it, never mutates it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Inbound generation request.
///
/// `firstName` is accepted as an alias for `english_name` for older clients.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NameRequest {
    #[serde(alias = "firstName")]
    #[validate(length(min = 1, message = "english_name is required"))]
    pub english_name: String,

    /// Optional language hint for the descriptive fields (en/zh).
    #[serde(default)]
    pub language: Option<String>,
}

/// One candidate Chinese name with its metadata, as returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NameSuggestion {
    #[serde(default)]
    pub chinese_name: String,
    #[serde(default)]
    pub pinyin: String,
    #[serde(default)]
    pub characters: Vec<CharacterReading>,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub cultural_notes: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub english_intro: String,
}

/// Per-character pronunciation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterReading {
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub pinyin: String,
}

/// Ordered list of suggestions returned to the caller.
///
/// An empty list is treated as a failed call upstream of this type, so a
/// serialized response always carries at least one suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NameResponse {
    pub suggestions: Vec<NameSuggestion>,
}
