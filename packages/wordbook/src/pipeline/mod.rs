//! The wordbook pipeline - parse model responses, normalize records,
//! run batches over the pending word list.

pub mod batch;
pub mod normalize;
pub mod parse;
pub mod prompts;

pub use batch::{process_word, run_batch, BatchReport, RejectReason, WordOutcome};
pub use normalize::{normalize_fields, normalize_record, normalize_synonyms, MAX_SYNONYMS};
pub use parse::parse_model_response;
pub use prompts::{format_entry_prompt, ENTRY_PROMPT, SYSTEM_PROMPT};
