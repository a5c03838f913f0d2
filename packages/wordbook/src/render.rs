//! Plain-text wordbook rendering.
//!
//! One block per entry: the word, its meanings, the synonyms line when
//! present, and the three example sentences. Consumes only the fields
//! the pipeline guarantees as strings.

use crate::types::record::Record;

/// Render the record store as wordbook text.
pub fn render_wordbook(records: &[Record]) -> String {
    let mut out = String::new();

    for record in records {
        let field = |name: &str| record.get(name).map(String::as_str).unwrap_or("");

        out.push_str(&format!("・ {}\n", field("word")));
        out.push_str(&format!("意味: {}\n", field("meanings")));

        let synonyms = field("synonyms");
        if !synonyms.is_empty() {
            out.push_str(&format!("類義語: {}\n", synonyms));
        }

        for (index, key) in ["sentence1", "sentence2", "sentence3"].iter().enumerate() {
            out.push_str(&format!("例文{}: {}\n", index + 1, field(key)));
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_renders_full_entry() {
        let records = vec![record(&[
            ("word", "run"),
            ("meanings", "走る"),
            ("synonyms", "sprint, dash"),
            ("sentence1", "I run."),
            ("sentence2", "He runs."),
            ("sentence3", "We ran."),
        ])];

        let text = render_wordbook(&records);
        assert!(text.contains("・ run"));
        assert!(text.contains("意味: 走る"));
        assert!(text.contains("類義語: sprint, dash"));
        assert!(text.contains("例文1: I run."));
        assert!(text.contains("例文3: We ran."));
    }

    #[test]
    fn test_empty_synonyms_line_is_omitted() {
        let records = vec![record(&[("word", "run"), ("synonyms", "")])];
        let text = render_wordbook(&records);
        assert!(!text.contains("類義語"));
    }

    #[test]
    fn test_entries_are_separated_by_blank_lines() {
        let records = vec![record(&[("word", "run")]), record(&[("word", "jump")])];
        let text = render_wordbook(&records);
        assert_eq!(text.matches("・ ").count(), 2);
        assert!(text.contains("\n\n・ jump"));
    }

    #[test]
    fn test_empty_store_renders_empty_text() {
        assert_eq!(render_wordbook(&[]), "");
    }
}
