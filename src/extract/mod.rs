//! Orchestration of the extraction pipeline.
//!
//! Strategies run in a fixed order over the trimmed input and the first
//! accepted value wins. Each strategy catches its own parse errors and
//! reports "no candidate"; nothing propagates past this module in non-strict
//! mode. Acceptance is shape-based: objects always count, arrays only when
//! the caller opts in, scalars never.

pub(crate) mod direct;
pub(crate) mod fenced;
pub(crate) mod repair;
pub mod scan;

use serde_json::Value;

use crate::attempt::{AttemptOutcome, ExtractionResult, ParseAttempt, Strategy};
use crate::error::ExtractionError;
use crate::value::ExtractedValue;

/// Runs the full strategy pipeline over `text`.
///
/// Returns `Success` with the first accepted value, or `Failure` with one
/// attempt entry per strategy in execution order. Empty or whitespace-only
/// input fails immediately with the single `empty_check` entry.
pub fn try_extract(text: &str, allow_array: bool) -> ExtractionResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ExtractionResult::Failure(vec![ParseAttempt::new(
            Strategy::EmptyCheck,
            AttemptOutcome::NoCandidate,
        )]);
    }

    let mut attempts = Vec::with_capacity(Strategy::PIPELINE.len());
    for strategy in Strategy::PIPELINE {
        let outcome = match run_strategy(strategy, trimmed, allow_array) {
            Some(candidate) => match accept(candidate, allow_array) {
                Some(value) => {
                    tracing::debug!(strategy = %strategy, "extraction strategy succeeded");
                    return ExtractionResult::Success(value);
                }
                None => AttemptOutcome::WrongShape,
            },
            None => AttemptOutcome::NoCandidate,
        };
        attempts.push(ParseAttempt::new(strategy, outcome));
    }

    ExtractionResult::Failure(attempts)
}

/// Non-strict extraction: `None` when no strategy produced an accepted value.
///
/// Total failure is logged at `warn` level with the ordered strategy trace
/// and the delimiter diagnostics; this function never panics and never
/// surfaces an internal parse error.
pub fn extract_value(text: &str, allow_array: bool) -> Option<ExtractedValue> {
    match try_extract(text, allow_array) {
        ExtractionResult::Success(value) => Some(value),
        ExtractionResult::Failure(attempts) => {
            let analysis = scan::analyze_structure(text);
            let tried: Vec<&str> = attempts.iter().map(|a| a.strategy.name()).collect();
            tracing::warn!(
                attempts = ?tried,
                unclosed_braces = analysis.unclosed_braces,
                unclosed_brackets = analysis.unclosed_brackets,
                "no parseable JSON region in response"
            );
            None
        }
    }
}

/// Strict extraction: typed errors carrying the original input and the
/// ordered attempt trace.
pub fn extract_value_strict(
    text: &str,
    allow_array: bool,
) -> Result<ExtractedValue, ExtractionError> {
    try_extract(text, allow_array).into_result_with_context(text)
}

/// Convenience entry point that only accepts object-shaped results.
///
/// A response holding a valid array still yields `None` here.
pub fn extract_object(text: &str) -> Option<ExtractedValue> {
    extract_value(text, false)
}

fn run_strategy(strategy: Strategy, trimmed: &str, allow_array: bool) -> Option<Value> {
    match strategy {
        Strategy::DirectParse => direct::parse_direct(trimmed),
        Strategy::FencedJsonBlock => fenced::extract_json_fence(trimmed),
        Strategy::FencedGenericBlock => fenced::extract_generic_fence(trimmed),
        Strategy::DelimiterScan => scan::scan_delimited(trimmed, allow_array),
        Strategy::HeuristicRepair => repair::repair_and_parse(trimmed),
        // Handled before the pipeline runs.
        Strategy::EmptyCheck => None,
    }
}

fn accept(candidate: Value, allow_array: bool) -> Option<ExtractedValue> {
    match ExtractedValue::from_value(candidate)? {
        value @ ExtractedValue::Object(_) => Some(value),
        value @ ExtractedValue::Array(_) if allow_array => Some(value),
        _ => None,
    }
}
