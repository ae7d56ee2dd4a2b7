//! Best-effort recovery of a JSON object embedded in free-form model output.

use serde_json::{Map, Value};

/// Returns the first balanced `{...}` substring of `text` that parses as a
/// JSON object.
///
/// Braces inside JSON string literals do not count towards the balance.
/// Candidates that do not parse are skipped and the scan resumes at the next
/// `{`. Returns `None` when no candidate parses. Never fails loudly: callers
/// pick their own fallback.
pub fn try_parse_json_object(text: &str) -> Option<Map<String, Value>> {
    text.match_indices('{').find_map(|(start, _)| {
        let candidate = balanced_object_at(text, start)?;
        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        }
    })
}

fn balanced_object_at(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Reads `map[key]` as a list of strings. Anything else becomes an empty list;
/// non-string elements are dropped.
pub fn string_list(map: &Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_surrounded_by_prose() {
        let map = try_parse_json_object(r#"Here you go: {"skills": ["Go", "Rust"]} Enjoy!"#).unwrap();
        assert_eq!(string_list(&map, "skills"), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_nested_objects_stay_balanced() {
        let map = try_parse_json_object(r#"{"a": {"b": 1}, "c": 2} trailing }"#).unwrap();
        assert_eq!(map["c"], 2);
        assert_eq!(map["a"]["b"], 1);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let map = try_parse_json_object(r#"{"summary": "uses {curly} braces \" and }"}"#).unwrap();
        assert_eq!(map["summary"], r#"uses {curly} braces " and }"#);
    }

    #[test]
    fn test_code_fenced_object() {
        let text = "```json\n{\"score\": 72}\n```";
        assert_eq!(try_parse_json_object(text).unwrap()["score"], 72);
    }

    #[test]
    fn test_no_braces_is_none() {
        assert!(try_parse_json_object("Go\nRust\n").is_none());
    }

    #[test]
    fn test_unbalanced_is_none() {
        assert!(try_parse_json_object(r#"{"skills": ["Go""#).is_none());
    }

    #[test]
    fn test_balanced_but_invalid_is_none() {
        assert!(try_parse_json_object("{not json}").is_none());
    }

    #[test]
    fn test_skips_invalid_candidate_before_object() {
        let map = try_parse_json_object(r#"Format like {skills}. Answer: {"skills": ["Go", "Rust"]}"#).unwrap();
        assert_eq!(string_list(&map, "skills"), vec!["Go", "Rust"]);

        let map = try_parse_json_object(r#"Scale {0-100}: {"score": 88}"#).unwrap();
        assert_eq!(map["score"], 88);
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let map = try_parse_json_object(r#"{"skills": ["Go", 3, null, "Rust"], "n": "x"}"#).unwrap();
        assert_eq!(string_list(&map, "skills"), vec!["Go", "Rust"]);
        assert!(string_list(&map, "n").is_empty());
        assert!(string_list(&map, "missing").is_empty());
    }
}
