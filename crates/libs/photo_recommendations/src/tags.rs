use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

/// First `[` through the last `]`, newlines included.
static TAG_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("Tag array pattern is valid"));

/// Extracts hashtag suggestions from generated text.
///
/// Tries [`parse_tag_array`] first and falls back to [`split_tag_text`] over the whole
/// text. Never fails; the worst case is an empty list.
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    if let Some(tags) = parse_tag_array(text) {
        return tags;
    }
    debug!("No JSON tag array in completion, splitting text instead");
    split_tag_text(text)
}

/// Strict tier: the json array embedded in `text`, elements kept in order.
///
/// String elements are returned as-is, anything else as its json text.
#[must_use]
pub fn parse_tag_array(text: &str) -> Option<Vec<String>> {
    let found = TAG_ARRAY.find(text)?;
    let values = serde_json::from_str::<Vec<Value>>(found.as_str()).ok()?;
    Some(
        values
            .into_iter()
            .map(|value| match value {
                Value::String(tag) => tag,
                other => other.to_string(),
            })
            .collect(),
    )
}

/// Heuristic tier: pieces between commas and `#`, trimmed, empties dropped.
#[must_use]
pub fn split_tag_text(text: &str) -> Vec<String> {
    text.split([',', '#'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn array_embedded_in_prose() {
        let text = format!(
            "Sure! Here are some tags: {} Hope that helps.",
            serde_json::json!(["a", "b"])
        );
        assert_eq!(parse_tags(&text), vec!["a", "b"]);
    }

    #[test]
    fn multiline_array() {
        let text = "```json\n[\n  \"#park\",\n  \"#sunny\"\n]\n```";
        assert_eq!(parse_tags(text), vec!["#park", "#sunny"]);
    }

    #[test]
    fn non_string_elements_are_kept() {
        assert_eq!(
            parse_tag_array(r##"[ "#nap", 3, true, null ]"##),
            Some(vec![
                "#nap".to_string(),
                "3".to_string(),
                "true".to_string(),
                "null".to_string()
            ])
        );
    }

    #[test]
    fn duplicates_are_not_removed() {
        assert_eq!(parse_tags(r##"["#nap", "#nap"]"##), vec!["#nap", "#nap"]);
    }

    #[rstest]
    #[case("#park, #sunny, #firststeps", vec!["park", "sunny", "firststeps"])]
    #[case("park,sunny", vec!["park", "sunny"])]
    #[case("#park #sunny", vec!["park", "sunny"])]
    #[case(" , # ,, ", vec![])]
    #[case("", vec![])]
    fn falls_back_to_splitting(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_tags(text), expected);
    }

    #[test]
    fn malformed_array_falls_back_to_full_text() {
        assert_eq!(parse_tag_array(r##"["#park", "#sun"##), None);
        assert_eq!(
            parse_tags(r##"Tags: ["#park", oops]"##),
            vec![r#"Tags: [""#, r#"park""#, "oops]"]
        );
    }

    #[test]
    fn greedy_match_spanning_two_arrays_falls_back() {
        let text = r##"["#a"] or ["#b"]"##;
        assert_eq!(parse_tag_array(text), None);
        assert_eq!(parse_tags(text), vec![r#"[""#, r#"a"] or [""#, r#"b"]"#]);
    }

    #[test]
    fn json_object_is_not_a_tag_array() {
        assert_eq!(parse_tags(r#"{"tags": 1}"#), vec![r#"{"tags": 1}"#]);
    }
}
