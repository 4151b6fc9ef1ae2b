//! Icon catalogue search.
//!
//! Filters an in-memory icon index with a multi-term query.
//!
//! # Matching
//!
//! - The query is lower-cased and split on single spaces into terms.
//! - An icon matches when every term is a substring of its name or of its tags.
//! - The empty query matches everything, in index order.
//! - The filter never sorts; display order is applied by the caller.
//!
//! # Engine
//!
//! [`SearchEngine`] owns the index, the current query and the derived result
//! set. It is the single writer of that state and recomputes results
//! synchronously on every query change.

mod config;
mod engine;
mod index;
mod query;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use engine::SearchEngine;
pub use query::{SearchQuery, filter};
pub use results::SearchResults;
