//! Extraction from markdown code fences.
//!
//! Models often wrap structured answers in triple-backtick fences, sometimes
//! with surrounding commentary or multiple fences (one of which may hold a
//! rejected example rather than the answer). The JSON-tagged pass runs first
//! and is the only one that attempts repair; the generic pass walks every
//! fence in document order and returns the first parseable block.

use regex::Regex;
use serde_json::Value;

use super::{direct, repair};

/// Locates a ```json fence (case-insensitive) and parses its interior.
///
/// The interior gets one strict parse and, failing that, one heuristic repair
/// pass restricted to the fence content. When the fence regex finds no
/// complete open/close pair, a manual scan takes everything from the opening
/// marker to the next closing marker, or to end of input for an unterminated
/// fence.
pub(crate) fn extract_json_fence(content: &str) -> Option<Value> {
    let re = Regex::new(r"(?i)```json\s*\n?([\s\S]*?)\n?```").ok()?;
    if let Some(caps) = re.captures(content) {
        let interior = caps.get(1)?.as_str().trim();
        return parse_or_repair(interior);
    }

    // No structural match: fall back to a manual scan past the open marker.
    let open = Regex::new(r"(?i)```json").ok()?.find(content)?;
    let rest = &content[open.end()..];
    let interior = match rest.find("```") {
        Some(end) => &rest[..end],
        None => rest,
    };
    parse_or_repair(interior.trim())
}

/// Walks generic fenced blocks in document order, returning the first block
/// whose content is valid JSON.
///
/// Blocks whose entire content is a lone language-name token are skipped;
/// they arise when a fence opens with the tag on its own line. No repair is
/// attempted in this pass.
pub(crate) fn extract_generic_fence(content: &str) -> Option<Value> {
    let re = Regex::new(r"```(?:\w+)?\s*\n?([\s\S]*?)\n?```").ok()?;
    for caps in re.captures_iter(content) {
        let block = match caps.get(1) {
            Some(m) => m.as_str().trim(),
            None => continue,
        };
        if block.is_empty() || is_language_token(block) {
            continue;
        }
        if let Some(value) = direct::parse_direct(block) {
            return Some(value);
        }
    }
    None
}

fn parse_or_repair(interior: &str) -> Option<Value> {
    direct::parse_direct(interior).or_else(|| repair::repair_and_parse(interior))
}

/// A single word like `json`, `python` or `c++` with nothing else.
fn is_language_token(block: &str) -> bool {
    !block.contains(char::is_whitespace)
        && block
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '#' | '-'))
}
