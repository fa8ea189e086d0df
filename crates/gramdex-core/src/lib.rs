//! Core data structures for gramdex:
//! - `query` - the n-gram boolean query tree handed to an inverted-index executor
//! - `set` - bounded literal-set arithmetic used while deriving queries
//!
//! Everything here is plain immutable data. The regex analysis that produces
//! these values lives in `gramdex-translate`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod query;
pub mod set;

#[cfg(test)]
mod set_tests;

pub use query::BooleanQuery;
pub use set::{LiteralSet, Orientation, SetOverflow, grams_of};
pub use set::{MAX_EXACT_SIZE, MAX_SET_SIZE};
