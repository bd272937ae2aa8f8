pub mod name;

pub use name::{CharacterReading, NameRequest, NameResponse, NameSuggestion};
