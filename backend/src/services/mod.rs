pub mod gemini;
pub mod name_service;

pub use gemini::GeminiClient;
pub use name_service::{GenerateError, NameGenerator};
