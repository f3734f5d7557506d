//! Search submission seam.
//!
//! The search box only forwards its term to an external search view; the
//! query is never executed here.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Query parameter carrying the search term.
pub const SEARCH_PARAM: &str = "q";

/// Characters escaped in the query component.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Search request emitted on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term exactly as typed.
    pub term: String,
}

impl SearchQuery {
    /// Create a query for a term.
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// Query string for the search results view (e.g. `?q=nrql%20syntax`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!("?{SEARCH_PARAM}={}", utf8_percent_encode(&self.term, QUERY))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Error reported by a [`SearchSink`].
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search view could not be reached.
    #[error("Search view unavailable: {0}")]
    Unavailable(String),
    /// The search view refused the query.
    #[error("Search query rejected: {0}")]
    Rejected(String),
}

/// Receiver of submitted searches.
///
/// Failures are logged by the caller and never affect layout state.
pub trait SearchSink {
    /// Deliver a submitted query.
    fn submit(&mut self, query: &SearchQuery) -> Result<(), SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        assert_eq!(SearchQuery::new("apm").to_query_string(), "?q=apm");
    }

    #[test]
    fn test_query_string_escapes_term() {
        assert_eq!(
            SearchQuery::new("nrql syntax & limits").to_query_string(),
            "?q=nrql%20syntax%20%26%20limits"
        );
        assert_eq!(SearchQuery::new("a+b=c#d").to_string(), "?q=a%2Bb%3Dc%23d");
    }

    #[test]
    fn test_empty_term() {
        assert_eq!(SearchQuery::new("").to_query_string(), "?q=");
    }
}
