//! String-aware delimiter scanning over free-form text.
//!
//! Locates a syntactically balanced `{...}` or `[...]` region anywhere in a
//! response without being confused by delimiter characters inside string
//! literals. Each delimiter pair gets two passes: a greedy first-open /
//! last-close slice, which handles a complete JSON blob followed by trailing
//! commentary, and an exact forward scan tracking nesting depth and string
//! state, used only when the greedy slice fails to parse.

use serde_json::Value;

use super::direct;

/// Scans for a balanced bracketed region.
///
/// Object delimiters are tried first; the array pair runs only when
/// `allow_array` is set and no object candidate parsed.
pub(crate) fn scan_delimited(text: &str, allow_array: bool) -> Option<Value> {
    if let Some(value) = scan_pair(text, '{', '}') {
        return Some(value);
    }
    if allow_array {
        return scan_pair(text, '[', ']');
    }
    None
}

fn scan_pair(text: &str, open: char, close: char) -> Option<Value> {
    let start = text.find(open)?;

    // Greedy pass: first open to last close, inclusive.
    if let Some(end) = text.rfind(close) {
        if end > start {
            if let Some(value) = direct::parse_direct(&text[start..=end]) {
                return Some(value);
            }
        }
    }

    // Exact pass: forward scan from the first opening delimiter. A failed
    // parse of the balanced span aborts this pair; no further spans are tried.
    let end = find_balanced_end(&text[start..], open, close)?;
    direct::parse_direct(&text[start..=start + end])
}

/// Byte offset of the delimiter that returns nesting depth to zero.
///
/// `s` must start at an opening delimiter. Depth only changes outside string
/// literals; an unescaped `"` toggles the in-string state, and a backslash
/// inside a string marks the next character as escaped. Returns `None` when
/// the delimiters never balance.
fn find_balanced_end(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => {
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
            }
            c if c == open && !in_string => {
                depth += 1;
            }
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Delimiter bookkeeping over a whole input, used for failure diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureAnalysis {
    /// Count of `{` without a matching `}` outside string literals.
    pub unclosed_braces: usize,
    /// Count of `[` without a matching `]` outside string literals.
    pub unclosed_brackets: usize,
    /// Whether the input ends inside a string literal.
    pub in_string: bool,
    /// Byte offset where bracketed content starts (first `{` or `[` outside
    /// a string), if any.
    pub bracket_start: Option<usize>,
}

/// Counts unmatched delimiters with the same string-aware rules as the exact
/// scan. Diagnostic only: a likely-truncated response shows up here as
/// unclosed delimiters, but acceptance decisions never consult this.
pub fn analyze_structure(s: &str) -> StructureAnalysis {
    let mut brace_depth: isize = 0;
    let mut bracket_depth: isize = 0;
    let mut in_string = false;
    let mut escape_next = false;
    let mut bracket_start: Option<usize> = None;

    for (i, c) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => {
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
            }
            '{' if !in_string => {
                if bracket_start.is_none() {
                    bracket_start = Some(i);
                }
                brace_depth += 1;
            }
            '}' if !in_string => {
                brace_depth -= 1;
            }
            '[' if !in_string => {
                if bracket_start.is_none() {
                    bracket_start = Some(i);
                }
                bracket_depth += 1;
            }
            ']' if !in_string => {
                bracket_depth -= 1;
            }
            _ => {}
        }
    }

    StructureAnalysis {
        unclosed_braces: brace_depth.max(0) as usize,
        unclosed_brackets: bracket_depth.max(0) as usize,
        in_string,
        bracket_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_balanced_end_simple() {
        assert_eq!(find_balanced_end("{}", '{', '}'), Some(1));
        assert_eq!(find_balanced_end("[]", '[', ']'), Some(1));
    }

    #[test]
    fn test_find_balanced_end_nested() {
        let input = r#"{"a": {"b": "c"}}"#;
        assert_eq!(find_balanced_end(input, '{', '}'), Some(16));

        let input = "[[1, 2], [3, 4]]";
        assert_eq!(find_balanced_end(input, '[', ']'), Some(15));
    }

    #[test]
    fn test_find_balanced_end_ignores_delimiters_in_strings() {
        let input = r#"{"braces": "{ not a brace }"}"#;
        assert_eq!(find_balanced_end(input, '{', '}'), Some(28));
    }

    #[test]
    fn test_find_balanced_end_handles_escaped_quotes() {
        let input = r#"{"message": "He said \"hello\" {x}"}"#;
        assert_eq!(find_balanced_end(input, '{', '}'), Some(input.len() - 1));
    }

    #[test]
    fn test_find_balanced_end_unmatched() {
        assert_eq!(find_balanced_end(r#"{"open": 1"#, '{', '}'), None);
        assert_eq!(find_balanced_end("[1, 2", '[', ']'), None);
    }

    #[test]
    fn test_greedy_pass_handles_trailing_commentary() {
        let input = r#"{"a": 1} and that's all"#;
        let value = scan_delimited(input, true).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_exact_pass_when_greedy_slice_fails() {
        // The stray closing brace in the commentary breaks the greedy slice.
        let input = r#"result: {"a": 1} (note the } above)"#;
        let value = scan_delimited(input, true).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_object_preferred_over_array() {
        let input = r#"ids [1, 2] then {"a": 1}"#;
        let value = scan_delimited(input, true).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_array_requires_opt_in() {
        let input = "values: [1, 2, 3] end";
        assert_eq!(scan_delimited(input, true).unwrap(), json!([1, 2, 3]));
        assert!(scan_delimited(input, false).is_none());
    }

    #[test]
    fn test_unparseable_exact_span_yields_nothing() {
        // Balanced but not JSON; the pair aborts after the exact span fails.
        let input = "{not valid json} trailing";
        assert!(scan_delimited(input, false).is_none());
    }

    #[test]
    fn test_analyze_structure_complete() {
        let analysis = analyze_structure(r#"{"key": [1, 2]}"#);
        assert_eq!(analysis.unclosed_braces, 0);
        assert_eq!(analysis.unclosed_brackets, 0);
        assert!(!analysis.in_string);
        assert_eq!(analysis.bracket_start, Some(0));
    }

    #[test]
    fn test_analyze_structure_truncated() {
        let analysis = analyze_structure(r#"{"items": [{"id": 1}, {"id": 2"#);
        assert_eq!(analysis.unclosed_braces, 2);
        assert_eq!(analysis.unclosed_brackets, 1);
        assert!(!analysis.in_string);
    }

    #[test]
    fn test_analyze_structure_ends_mid_string() {
        let analysis = analyze_structure(r#"{"key": "val"#);
        assert_eq!(analysis.unclosed_braces, 1);
        assert!(analysis.in_string);
    }

    #[test]
    fn test_analyze_structure_no_brackets() {
        let analysis = analyze_structure("plain text");
        assert_eq!(analysis.bracket_start, None);
        assert_eq!(analysis.unclosed_braces, 0);
    }
}
