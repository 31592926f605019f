//! Strict parse of the whole input.

use serde_json::Value;

/// Attempts a strict parse of the entire (already trimmed) input.
///
/// Any parse error is swallowed; the orchestrator treats `None` as "no
/// candidate" and moves on.
pub(crate) fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}
