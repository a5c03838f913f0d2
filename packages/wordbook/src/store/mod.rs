//! Whole-file persistence for the word list and the record store.
//!
//! Writes go through a temp file in the destination directory followed
//! by an atomic rename, so a crash mid-write never leaves a
//! half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::warn;

use crate::error::{Result, WordbookError};
use crate::types::{queue::WordQueue, record::Record};

/// Load the pending word list: one word or phrase per line, blank lines
/// ignored. A missing or empty list is fatal; no model call should run
/// without work to do.
pub fn load_words(path: &Path) -> Result<WordQueue> {
    if !path.is_file() {
        return Err(WordbookError::WordListMissing {
            path: path.to_path_buf(),
        });
    }

    let queue = WordQueue::from_lines(&fs::read_to_string(path)?);
    if queue.is_empty() {
        return Err(WordbookError::WordListEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(queue)
}

/// Rewrite the word list with only the words still pending.
pub fn save_words(path: &Path, queue: &WordQueue) -> Result<()> {
    let mut text = String::new();
    for word in queue.words() {
        text.push_str(word);
        text.push('\n');
    }
    write_atomic(path, text.as_bytes())
}

/// Load the record store. A missing file, unreadable JSON, or a
/// top-level value that is not an array of records all default to an
/// empty store.
pub fn load_records(path: &Path) -> Vec<Record> {
    let Ok(file) = File::open(path) else {
        return Vec::new();
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(records) => records,
        Err(e) => {
            warn!("ignoring unreadable record store {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Persist the full record store as a pretty-printed JSON array.
/// Non-ASCII text is written literally, not escaped.
pub fn save_records(path: &Path, records: &[Record]) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;
    write_atomic(path, &json)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp);
        writer.write_all(bytes)?;
        writer.flush()?;
    }
    temp.persist(path)
        .map_err(|e| WordbookError::Storage(e.error))?;
    Ok(())
}
