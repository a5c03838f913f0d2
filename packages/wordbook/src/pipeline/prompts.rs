//! Model prompts for entry generation.
//!
//! A single prompt definition drives every run, so there is one source
//! of truth for the field set the normalizer expects.

/// System message: the model must return bare JSON.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that returns ONLY valid JSON objects (no extra text).";

/// Prompt for one study entry.
pub const ENTRY_PROMPT: &str = r#"Word: {word}
Return ONLY one JSON object with these string fields: word, meanings (Japanese), synonyms (English - comma-separated single string), sentence1, sentence2, sentence3.
For 'synonyms' return a comma-separated string (no arrays).
Use natural idiomatic English for example sentences (business/daily TOEIC contexts).
Do NOT add any extra text, explanation, or markdown."#;

/// Fill the entry prompt for a word.
pub fn format_entry_prompt(word: &str) -> String {
    ENTRY_PROMPT.replace("{word}", word)
}
