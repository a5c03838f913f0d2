//! Batch pipeline - drive pending words through the model and collect
//! normalized records.

use std::fmt;

use tracing::{info, warn};

use crate::pipeline::normalize::normalize_record;
use crate::pipeline::parse::parse_model_response;
use crate::traits::ai::AI;
use crate::types::{config::BatchConfig, queue::WordQueue, record::Record};

/// Outcome of processing a single word.
#[derive(Debug, Clone)]
pub enum WordOutcome {
    /// Call, parse, and normalization succeeded; the record is ready to
    /// append to the store.
    Accepted(Record),
    /// The word stays queued and will be retried on a later run.
    Rejected(RejectReason),
}

impl WordOutcome {
    /// Whether this outcome carries a record.
    pub fn is_accepted(&self) -> bool {
        matches!(self, WordOutcome::Accepted(_))
    }
}

/// Why a word was rejected this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The model call itself failed.
    CallFailed(String),
    /// The response text held no usable JSON object.
    MalformedResponse,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::CallFailed(message) => write!(f, "model call failed: {}", message),
            RejectReason::MalformedResponse => write!(f, "response held no JSON object"),
        }
    }
}

/// Counters for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Words turned into records this run.
    pub accepted: usize,
    /// Words left in the queue for a later run.
    pub rejected: usize,
}

/// Request, parse, and normalize a single word.
pub async fn process_word<A: AI>(ai: &A, word: &str) -> WordOutcome {
    let text = match ai.generate_entry(word).await {
        Ok(text) => text,
        Err(e) => return WordOutcome::Rejected(RejectReason::CallFailed(e.to_string())),
    };

    match parse_model_response(&text).and_then(normalize_record) {
        Some(record) => WordOutcome::Accepted(record),
        None => WordOutcome::Rejected(RejectReason::MalformedResponse),
    }
}

/// Drain the queue once.
///
/// Accepted words move into `records` and leave the queue; rejected
/// words stay pending and are logged. Per-word failures never abort the
/// run. A fixed pause separates consecutive words to stay polite toward
/// provider rate limits.
pub async fn run_batch<A: AI>(
    ai: &A,
    queue: &mut WordQueue,
    records: &mut Vec<Record>,
    config: &BatchConfig,
) -> BatchReport {
    let mut report = BatchReport::default();
    let pending: Vec<String> = queue.words().to_vec();

    for (index, word) in pending.iter().enumerate() {
        info!("processing: {}", word);

        match process_word(ai, word.as_str()).await {
            WordOutcome::Accepted(record) => {
                records.push(record);
                queue.remove(word);
                report.accepted += 1;
            }
            WordOutcome::Rejected(reason) => {
                warn!("'{}' rejected: {}", word, reason);
                report.rejected += 1;
            }
        }

        if index + 1 < pending.len() {
            tokio::time::sleep(config.delay).await;
        }
    }

    report
}
