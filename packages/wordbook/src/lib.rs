//! Personal Vocabulary Wordbook Toolchain
//!
//! Reads a word list, asks a language model for meanings, synonyms, and
//! example sentences, normalizes the loosely-structured responses into
//! all-string records, and persists the accumulated wordbook.
//!
//! # Design Philosophy
//!
//! The model is treated as an unreliable text source: every response is
//! re-parsed and coerced into a stable record shape before it touches
//! the store. Words whose response cannot be salvaged simply stay
//! queued for the next run - a rejected word is a normal outcome, not
//! an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wordbook::{load_records, load_words, run_batch, save_records, save_words};
//! use wordbook::{BatchConfig, OpenAI};
//!
//! let ai = OpenAI::from_env()?;
//! let mut queue = load_words(words_path)?;
//! let mut records = load_records(store_path);
//!
//! let report = run_batch(&ai, &mut queue, &mut records, &BatchConfig::default()).await;
//!
//! save_records(store_path, &records)?;
//! save_words(words_path, &queue)?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (AI)
//! - [`types`] - Records, the word queue, batch configuration
//! - [`pipeline`] - Response parsing, normalization, batch orchestration
//! - [`store`] - Whole-file persistence with atomic replace
//! - [`render`] - Plain-text wordbook rendering
//! - [`ai`] - Model provider implementations (OpenAI)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{Result, WordbookError};
pub use traits::ai::AI;
pub use types::{
    config::BatchConfig,
    queue::WordQueue,
    record::{sort_by_word, Record, REQUIRED_FIELDS},
};

// Re-export pipeline components
pub use pipeline::{
    batch::{process_word, run_batch, BatchReport, RejectReason, WordOutcome},
    normalize::{normalize_fields, normalize_record, normalize_synonyms, MAX_SYNONYMS},
    parse::parse_model_response,
    prompts::{format_entry_prompt, ENTRY_PROMPT, SYSTEM_PROMPT},
};

// Re-export persistence and rendering
pub use render::render_wordbook;
pub use store::{load_records, load_words, save_records, save_words};

// Re-export providers and testing utilities
pub use ai::OpenAI;
pub use testing::MockAI;
