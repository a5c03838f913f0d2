//! Testing utilities including a mock model client.
//!
//! Useful for testing the pipeline without making real API calls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{Result, WordbookError};
use crate::traits::ai::AI;

/// A mock AI returning scripted responses per word.
///
/// Words without a scripted response get a minimal valid entry; words
/// registered through [`MockAI::fail_word`] error like a dead API.
/// Calls are recorded for assertions.
#[derive(Default)]
pub struct MockAI {
    /// Scripted raw response text by word
    responses: Arc<RwLock<HashMap<String, String>>>,

    /// Words whose model call should fail
    fail_words: Arc<RwLock<Vec<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAI {
    /// Create a new mock with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the raw response text for a word.
    pub fn with_response(self, word: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(word.into(), response.into());
        self
    }

    /// Make the model call fail for a word.
    pub fn fail_word(self, word: impl Into<String>) -> Self {
        self.fail_words.write().unwrap().push(word.into());
        self
    }

    /// Words requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Generate a minimal valid entry for unscripted words.
    fn default_entry(word: &str) -> String {
        serde_json::json!({
            "word": word,
            "meanings": format!("meaning of {}", word),
            "synonyms": "",
            "sentence1": format!("Example one for {}.", word),
            "sentence2": format!("Example two for {}.", word),
            "sentence3": format!("Example three for {}.", word),
        })
        .to_string()
    }
}

#[async_trait]
impl AI for MockAI {
    async fn generate_entry(&self, word: &str) -> Result<String> {
        self.calls.write().unwrap().push(word.to_string());

        if self.fail_words.read().unwrap().iter().any(|w| w == word) {
            return Err(WordbookError::Ai("mock model unavailable".into()));
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(word)
            .cloned()
            .unwrap_or_else(|| Self::default_entry(word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_response_is_returned() {
        let ai = MockAI::new().with_response("run", "{\"word\":\"run\"}");
        let text = ai.generate_entry("run").await.unwrap();
        assert_eq!(text, "{\"word\":\"run\"}");
    }

    #[tokio::test]
    async fn test_unscripted_word_gets_default_entry() {
        let ai = MockAI::new();
        let text = ai.generate_entry("jump").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["word"], "jump");
        assert!(value["sentence3"].is_string());
    }

    #[tokio::test]
    async fn test_fail_word_errors() {
        let ai = MockAI::new().fail_word("jump");
        assert!(ai.generate_entry("jump").await.is_err());
    }

    #[tokio::test]
    async fn test_calls_are_recorded_in_order() {
        let ai = MockAI::new().fail_word("b");
        let _ = ai.generate_entry("a").await;
        let _ = ai.generate_entry("b").await;
        assert_eq!(ai.calls(), ["a", "b"]);
    }
}
