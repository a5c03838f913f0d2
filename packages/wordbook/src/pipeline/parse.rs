//! Response parsing - recover a JSON value from raw model output.

use serde_json::Value;

/// Extract the first well-formed JSON value from raw model output.
///
/// Tries the whole text first, then falls back to the slice from the
/// first `{` to the last `}` to tolerate prose wrapped around the
/// object. Returns `None` for empty or unparseable input; callers treat
/// that as a soft failure and requeue the word.
///
/// The returned value is not guaranteed to be an object. Downstream
/// normalization checks the shape.
pub fn parse_model_response(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        serde_json::from_str(&text[start..=end]).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_exact_json() {
        let obj = json!({"word": "run", "meanings": "走る"});
        let text = serde_json::to_string(&obj).unwrap();
        assert_eq!(parse_model_response(&text), Some(obj));
    }

    #[test]
    fn test_extracts_object_from_surrounding_prose() {
        let parsed = parse_model_response("Sure! {\"word\":\"run\"} Thanks.").unwrap();
        assert_eq!(parsed, json!({"word": "run"}));
    }

    #[test]
    fn test_extracts_object_from_markdown_fence() {
        let text = "```json\n{\"word\": \"run\", \"synonyms\": [\"sprint\"]}\n```";
        let parsed = parse_model_response(text).unwrap();
        assert_eq!(parsed["word"], "run");
    }

    #[test]
    fn test_non_json_returns_none() {
        assert_eq!(parse_model_response("no json here"), None);
    }

    #[test]
    fn test_empty_input_returns_none() {
        assert_eq!(parse_model_response(""), None);
        assert_eq!(parse_model_response("   \n"), None);
    }

    #[test]
    fn test_braces_in_wrong_order_return_none() {
        assert_eq!(parse_model_response("} nothing {"), None);
    }

    #[test]
    fn test_malformed_candidate_returns_none() {
        assert_eq!(parse_model_response("prefix {not: valid json} suffix"), None);
    }

    #[test]
    fn test_non_object_json_is_passed_through() {
        assert_eq!(parse_model_response("[1, 2]"), Some(json!([1, 2])));
        assert_eq!(parse_model_response("42"), Some(json!(42)));
    }

    #[test]
    fn test_nested_braces_survive_extraction() {
        let text = "Answer: {\"word\":\"run\",\"extra\":{\"a\":1}} done";
        let parsed = parse_model_response(text).unwrap();
        assert_eq!(parsed["extra"]["a"], 1);
    }
}
