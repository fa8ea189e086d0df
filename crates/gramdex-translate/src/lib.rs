//! Regex to n-gram boolean-query translation.
//!
//! Given a regular expression, this crate derives a boolean formula over
//! fixed-length substrings (grams) such that any string matching the regex
//! is guaranteed to satisfy the formula. A search system evaluates the
//! formula against an n-gram inverted index to discard documents that
//! cannot possibly match, and only runs the regex engine on the survivors.
//!
//! The derivation is the gram-query algorithm from Russ Cox's
//! "Regular Expression Matching with a Trigram Index"
//! (<https://swtch.com/~rsc/regexp/regexp4.html>), generalized over the
//! gram length:
//! - `info` - the per-node analysis record (exact/prefix/suffix sets)
//! - `analyze` - the recursive walk over the `regex-syntax` HIR
//! - `translate` - entry points
//!
//! The formula over-approximates: a document satisfying it may still fail
//! the regex (false positives are expected), but a document failing it can
//! never match (no false negatives). Precision is bounded: whenever a
//! derived set grows past its cap, that branch degrades to "match anything"
//! rather than erroring.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod analyze;
mod info;
mod translate;

#[cfg(test)]
mod analyze_tests;

pub use gramdex_core::BooleanQuery;
pub use translate::{DEFAULT_GRAM_LENGTH, translate, translate_with_gram_length};

/// Errors from translating a regex into a gram query.
///
/// Precision loss is never an error: oversized sets degrade to the coarse
/// "match anything" approximation internally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The pattern was rejected by the regex parser. Patterns come from
    /// user queries; the caller should surface this without retrying.
    #[error("invalid regex `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: Box<regex_syntax::Error>,
    },

    /// Gram length must be at least 1.
    #[error("gram length must be positive, got {0}")]
    InvalidGramLength(usize),
}

/// Result type for translation.
pub type Result<T> = std::result::Result<T, Error>;
