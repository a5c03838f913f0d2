//! The working set of words not yet successfully processed.

/// Pending words and phrases, kept in word-list order.
///
/// Loaded once at pipeline start, drained as words are accepted, and
/// persisted at the end of the run with only the remaining words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordQueue {
    words: Vec<String>,
}

impl WordQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from word-list text: one word or phrase per line,
    /// surrounding whitespace trimmed, blank lines ignored.
    pub fn from_lines(text: &str) -> Self {
        Self {
            words: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Append a word to the queue.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// Remove the first occurrence of `word`. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, word: &str) -> bool {
        match self.words.iter().position(|w| w == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `word` is still pending.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// The pending words, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of pending words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the queue has no pending words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_skips_blanks() {
        let queue = WordQueue::from_lines("run\n\n  jump  \n\t\nlook up\n");
        assert_eq!(queue.words(), ["run", "jump", "look up"]);
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut queue = WordQueue::from_lines("run\njump\nrun");
        assert!(queue.remove("run"));
        assert_eq!(queue.words(), ["jump", "run"]);
        assert!(!queue.remove("walk"));
    }

    #[test]
    fn test_empty_input_gives_empty_queue() {
        assert!(WordQueue::from_lines("").is_empty());
        assert!(WordQueue::from_lines("\n  \n").is_empty());
    }
}
