//! Normalized study records.

use indexmap::IndexMap;

/// One word's study entry after normalization.
///
/// Every value is a plain string. Field order is preserved through
/// serialization so the persisted store stays stable across runs.
pub type Record = IndexMap<String, String>;

/// Fields every record carries after normalization. Additional fields
/// returned by the model are passed through untouched.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "word",
    "meanings",
    "synonyms",
    "sentence1",
    "sentence2",
    "sentence3",
];

/// Sort records by their `word` field, case-insensitively.
///
/// A stable, idempotent transform over the store. Records without a
/// `word` field sort first, as if empty.
pub fn sort_by_word(records: &mut [Record]) {
    records.sort_by_cached_key(|record| {
        record
            .get("word")
            .map(|word| word.to_lowercase())
            .unwrap_or_default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str) -> Record {
        let mut r = Record::new();
        r.insert("word".to_string(), word.to_string());
        r
    }

    fn words(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.get("word").map(String::as_str).unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut records = vec![record("banana"), record("Apple"), record("cherry")];
        sort_by_word(&mut records);
        assert_eq!(words(&records), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut records = vec![record("b"), record("a"), record("C")];
        sort_by_word(&mut records);
        let once = records.clone();
        sort_by_word(&mut records);
        assert_eq!(records, once);
    }

    #[test]
    fn test_sort_tolerates_missing_word_field() {
        let mut records = vec![record("alpha"), Record::new()];
        sort_by_word(&mut records);
        assert_eq!(words(&records), vec!["", "alpha"]);
    }
}
