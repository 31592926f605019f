//! Error types for extraction failures.

use thiserror::Error;

use crate::attempt::ParseAttempt;

/// Errors surfaced by the strict extraction entry points.
///
/// Non-strict entry points never return these; they collapse every failure
/// into `None` after logging.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractionError {
    /// Input was empty or contained only whitespace.
    #[error("response is empty or whitespace-only")]
    EmptyInput,

    /// Every strategy ran and none produced an accepted value.
    #[error("no parseable JSON region found after {} strategies", .attempts.len())]
    NoParseableRegion {
        /// The original input, unmodified.
        text: String,
        /// Every strategy tried, in execution order.
        attempts: Vec<ParseAttempt>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attempt::{AttemptOutcome, Strategy};

    #[test]
    fn test_error_messages() {
        let empty = ExtractionError::EmptyInput;
        assert!(empty.to_string().contains("empty"));

        let failed = ExtractionError::NoParseableRegion {
            text: "some prose".to_string(),
            attempts: Strategy::PIPELINE
                .iter()
                .map(|&s| ParseAttempt::new(s, AttemptOutcome::NoCandidate))
                .collect(),
        };
        let msg = failed.to_string();
        assert!(msg.contains("no parseable JSON region"));
        assert!(msg.contains("5 strategies"));
    }
}
