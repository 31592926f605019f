//! Strategy names and attempt bookkeeping for extraction diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::value::ExtractedValue;

/// Extraction strategies, named for logs and failure diagnostics.
///
/// `EmptyCheck` runs before everything else and is the only entry recorded
/// for empty input; the remaining five run in the order of [`Strategy::PIPELINE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Pre-flight rejection of empty or whitespace-only input.
    EmptyCheck,
    /// Strict parse of the whole trimmed input.
    DirectParse,
    /// JSON-tagged markdown code fence.
    FencedJsonBlock,
    /// Generic markdown code fences, in document order.
    FencedGenericBlock,
    /// String-aware delimiter scan anywhere in the text.
    DelimiterScan,
    /// Fixed textual rewrites followed by one strict re-parse.
    HeuristicRepair,
}

impl Strategy {
    /// The content strategies in canonical execution order.
    pub const PIPELINE: [Strategy; 5] = [
        Strategy::DirectParse,
        Strategy::FencedJsonBlock,
        Strategy::FencedGenericBlock,
        Strategy::DelimiterScan,
        Strategy::HeuristicRepair,
    ];

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::EmptyCheck => "empty_check",
            Strategy::DirectParse => "direct_parse",
            Strategy::FencedJsonBlock => "fenced_json_block",
            Strategy::FencedGenericBlock => "fenced_generic_block",
            Strategy::DelimiterScan => "delimiter_scan",
            Strategy::HeuristicRepair => "heuristic_repair",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a strategy did not produce an accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The strategy found no parseable candidate at all.
    NoCandidate,
    /// The strategy parsed a value whose shape the caller does not accept:
    /// a scalar, or an array when arrays are opted out.
    WrongShape,
}

/// One entry in the ordered attempt trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseAttempt {
    /// Which strategy ran.
    pub strategy: Strategy,
    /// How it fell short.
    pub outcome: AttemptOutcome,
}

impl ParseAttempt {
    pub(crate) fn new(strategy: Strategy, outcome: AttemptOutcome) -> Self {
        ParseAttempt { strategy, outcome }
    }
}

/// Result of running the full extraction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// A strategy produced an accepted object or array.
    Success(ExtractedValue),
    /// Every strategy ran; the trace records each one in order.
    Failure(Vec<ParseAttempt>),
}

impl ExtractionResult {
    /// Returns true if a value was extracted.
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    /// Returns the extracted value for the `Success` case.
    pub fn value(&self) -> Option<&ExtractedValue> {
        match self {
            ExtractionResult::Success(value) => Some(value),
            ExtractionResult::Failure(_) => None,
        }
    }

    /// Consumes the result, returning the extracted value if any.
    pub fn into_value(self) -> Option<ExtractedValue> {
        match self {
            ExtractionResult::Success(value) => Some(value),
            ExtractionResult::Failure(_) => None,
        }
    }

    /// Converts into a `Result`, attaching the original input to the failure.
    ///
    /// A trace consisting of the single `empty_check` entry maps to
    /// [`ExtractionError::EmptyInput`]; anything else maps to
    /// [`ExtractionError::NoParseableRegion`].
    pub fn into_result_with_context(self, original: &str) -> Result<ExtractedValue, ExtractionError> {
        match self {
            ExtractionResult::Success(value) => Ok(value),
            ExtractionResult::Failure(attempts) => {
                if attempts
                    .iter()
                    .any(|attempt| attempt.strategy == Strategy::EmptyCheck)
                {
                    Err(ExtractionError::EmptyInput)
                } else {
                    Err(ExtractionError::NoParseableRegion {
                        text: original.to_string(),
                        attempts,
                    })
                }
            }
        }
    }
}
