// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query validation.
//!
//! The presentation layer hands us whatever the user typed. The only thing
//! that makes a query invalid is being empty after trimming; everything else
//! (punctuation, accents, thousand-character strings) is a legitimate query
//! that simply may not match anything. An invalid query is a distinct outcome
//! from a query with no results, and the caller is expected to show different
//! messaging for each.

use std::fmt;

/// Error type for query validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query was empty or whitespace-only after trimming.
    Empty,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Empty => write!(f, "query is empty after trimming whitespace"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Validate a raw user-entered query.
///
/// Trims leading and trailing whitespace and rejects the result if nothing is
/// left. Empty input and whitespace-only input produce the same
/// [`QueryError::Empty`]; the caller cannot tell them apart and has no reason
/// to.
///
/// Validation is idempotent: feeding a validated query back in returns it
/// unchanged. There is no upper length bound and no character restrictions.
///
/// Callers must run this before [`search()`](crate::search()): `search`
/// assumes a validated query and does not re-check.
pub fn validate_query(raw: &str) -> Result<String, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }
    Ok(trimmed.to_string())
}
