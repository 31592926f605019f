//! Fixed textual rewrites for almost-JSON spans.
//!
//! Models frequently emit permissive syntax that violates the JSON grammar:
//! trailing commas, single-quoted strings, bare keys, Python literal
//! spellings. The rewrites below run unconditionally, in a fixed order, on
//! the first plausible bracketed region, followed by a single strict parse.
//! No iteration, no retry loop. Embedded comments and unbalanced quoting
//! inside string values are not repairable here and fail the final parse.

use regex::Regex;
use serde_json::Value;

use super::direct;

/// Locates the first plausible region and applies the five rewrites, then
/// one strict parse of the result.
///
/// Region location uses the greedy first-open/last-close heuristic, object
/// delimiters before array delimiters. The rewrites are heuristic and can
/// over-fix (e.g. a string value containing the bare word `True` gets
/// translated); behavioral compatibility takes precedence over guessing
/// stricter semantics.
pub(crate) fn repair_and_parse(text: &str) -> Option<Value> {
    let span = locate_candidate(text)?;
    let repaired = apply_rewrites(span)?;
    direct::parse_direct(&repaired)
}

fn locate_candidate(text: &str) -> Option<&str> {
    for (open, close) in [('{', '}'), ('[', ']')] {
        if let (Some(start), Some(end)) = (text.find(open), text.rfind(close)) {
            if end > start {
                return Some(&text[start..=end]);
            }
        }
    }
    None
}

/// The five rewrites, in order. Each operates on the previous stage's output.
fn apply_rewrites(span: &str) -> Option<String> {
    // 1. Trailing comma before a closing brace/bracket.
    let trailing_comma = Regex::new(r",\s*([}\]])").ok()?;
    // 2. Single-quoted object keys.
    let single_quoted_key = Regex::new(r"'([^']*)'\s*:").ok()?;
    // 3. Single-quoted string values.
    let single_quoted_value = Regex::new(r":\s*'([^']*)'").ok()?;
    // 4. Bare identifier keys after `{` or `,`.
    let bare_key = Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:").ok()?;
    // 5. Python literal spellings, case-exact.
    let py_true = Regex::new(r"\bTrue\b").ok()?;
    let py_false = Regex::new(r"\bFalse\b").ok()?;
    let py_none = Regex::new(r"\bNone\b").ok()?;

    let out = trailing_comma.replace_all(span, "$1");
    let out = single_quoted_key.replace_all(&out, "\"$1\":");
    let out = single_quoted_value.replace_all(&out, ": \"$1\"");
    let out = bare_key.replace_all(&out, "$1\"$2\":");
    let out = py_true.replace_all(&out, "true");
    let out = py_false.replace_all(&out, "false");
    let out = py_none.replace_all(&out, "null");

    Some(out.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trailing_comma_object() {
        let value = repair_and_parse(r#"{"a": 1, "b": 2,}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_trailing_comma_array() {
        let value = repair_and_parse("[1, 2, 3,]").unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn test_single_quoted_keys_and_values() {
        let value = repair_and_parse(r#"{'name': 'crawler', 'depth': 2}"#).unwrap();
        assert_eq!(value, json!({"name": "crawler", "depth": 2}));
    }

    #[test]
    fn test_bare_keys() {
        let value = repair_and_parse(r#"{name: "crawler", depth: 2}"#).unwrap();
        assert_eq!(value, json!({"name": "crawler", "depth": 2}));
    }

    #[test]
    fn test_python_literals() {
        let value = repair_and_parse(r#"{"active": True, "done": False, "data": None}"#).unwrap();
        assert_eq!(value, json!({"active": true, "done": false, "data": null}));
    }

    #[test]
    fn test_lowercase_literals_untouched() {
        // Case-exact translation only.
        assert!(repair_and_parse(r#"{"x": TRUE}"#).is_none());
    }

    #[test]
    fn test_all_rewrites_combined() {
        let input = "Model said: {'active': True, options: {'retry': None,},}";
        let value = repair_and_parse(input).unwrap();
        assert_eq!(value, json!({"active": true, "options": {"retry": null}}));
    }

    #[test]
    fn test_region_location_skips_prose() {
        let input = r#"Sure! Here you go: {"a": 1,} Enjoy."#;
        let value = repair_and_parse(input).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_object_region_preferred_over_array() {
        let input = r#"[1, 2] then {"a": 1,}"#;
        let value = repair_and_parse(input).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_comments_are_not_repairable() {
        let input = "{\"a\": 1, // inline comment\n\"b\": 2}";
        assert!(repair_and_parse(input).is_none());
    }

    #[test]
    fn test_no_plausible_region() {
        assert!(repair_and_parse("nothing bracketed here").is_none());
    }

    #[test]
    fn test_known_over_fix_of_literal_words() {
        // Accepted limitation: a bare True inside what the model meant as a
        // value string is still translated once quoting is repaired.
        let value = repair_and_parse("{'status': True}").unwrap();
        assert_eq!(value, json!({"status": true}));
    }
}
