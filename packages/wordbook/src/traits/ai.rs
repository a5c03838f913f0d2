//! AI trait for model-backed entry generation.

use async_trait::async_trait;

use crate::error::Result;

/// Text-generation boundary for study entries.
///
/// Implementations wrap a specific model provider and return the raw
/// response text for one word. The pipeline owns parsing and
/// normalization; implementations only move text. The response is
/// expected to contain exactly one JSON object, but nothing here
/// enforces that.
#[async_trait]
pub trait AI: Send + Sync {
    /// Request one study entry for `word`, returning the raw response
    /// text.
    async fn generate_entry(&self, word: &str) -> Result<String>;
}
