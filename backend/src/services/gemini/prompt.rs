//! Prompt construction for the name generation scenario.

use crate::models::NameRequest;

const PROMPT_TEMPLATE: &str = include_str!("prompt.md");

/// Build the deterministic prompt sent to the model.
///
/// The template pins the exact JSON schema the decoder expects; the only
/// variable parts are the name itself and an optional language hint for the
/// descriptive fields.
pub fn build_prompt(request: &NameRequest) -> String {
    let mut prompt = PROMPT_TEMPLATE.replace("{english_name}", request.english_name.trim());

    if let Some(language) = request.language.as_deref()
        && language.eq_ignore_ascii_case("zh")
    {
        prompt.push_str(
            "\nWrite the meaning, cultural_notes and personality fields in Chinese; keep english_intro in English.\n",
        );
    }

    prompt
}
