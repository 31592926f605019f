//! Resilient JSON extraction from LLM responses.
//!
//! Model output that is supposed to be JSON rarely arrives as clean JSON: it
//! may be wrapped in markdown code fences, surrounded by explanatory text, or
//! written in permissive syntax (trailing commas, single quotes, bare keys,
//! Python literal spellings) that violates the JSON grammar. This crate
//! recovers a structured value — an object or an array — from such responses
//! whenever one is plausibly present, without ever fabricating structure:
//! every returned value is the result of a strict `serde_json` parse of some
//! substring of the input.
//!
//! # Extraction Strategies
//!
//! The engine tries the following strategies in a fixed order and returns the
//! first accepted value:
//! 1. Direct parse of the whole trimmed input
//! 2. JSON-tagged markdown code fence (parse, then heuristic repair of the
//!    fence interior)
//! 3. Generic markdown code fences, in document order
//! 4. String-aware delimiter scan for an object (then an array) anywhere in
//!    the text
//! 5. Heuristic repair: five fixed textual rewrites, then one strict re-parse
//!
//! Arrays are accepted only when the caller opts in with `allow_array`.
//! Scalar values are never returned. On total failure the non-strict entry
//! points return `None` (and log the attempt trace); the strict entry point
//! returns a typed error carrying the original input and every strategy
//! tried, in order.
//!
//! # Example
//!
//! ```
//! use llm_json_extract::extract_value;
//!
//! // JSON object embedded in commentary
//! let response = "Here is the plan: {\"action\": \"crawl\", \"depth\": 2} - good luck!";
//! let value = extract_value(response, true).unwrap();
//! assert!(value.is_object());
//!
//! // Plain text yields no value
//! assert!(extract_value("no structured output here", true).is_none());
//! ```
//!
//! The engine is a pure, synchronous function of its input: no shared state,
//! no I/O, safe to call concurrently. No input size cap is enforced — every
//! stage is a linear scan — so callers handling adversarially large payloads
//! should bound input length themselves.

pub mod attempt;
pub mod error;
pub mod extract;
pub mod value;

pub use attempt::{AttemptOutcome, ExtractionResult, ParseAttempt, Strategy};
pub use error::ExtractionError;
pub use extract::scan::{analyze_structure, StructureAnalysis};
pub use extract::{extract_object, extract_value, extract_value_strict, try_extract};
pub use value::ExtractedValue;
