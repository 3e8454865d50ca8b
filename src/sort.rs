// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Date ordering for result sets.
//!
//! `last_updated` travels as an ISO-8601 string and is only parsed here, at
//! the moment a caller asks for a date-ordered view. A string that fails to
//! parse is a data-integrity defect in the upstream content store and is
//! surfaced as [`SortError::InvalidDateFormat`]; there is no partial sort and
//! no fallback parsing that would mask it.

use crate::types::SearchResult;
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Error type for date sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A result's `last_updated` string is not valid ISO-8601/RFC 3339.
    InvalidDateFormat {
        /// The offending timestamp string, verbatim.
        value: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidDateFormat { value, source } => {
                write!(f, "invalid lastUpdated date {value:?}: {source}")
            }
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::InvalidDateFormat { source, .. } => Some(source),
        }
    }
}

/// Parse one result's timestamp, mapping failure to [`SortError`].
fn parse_last_updated(result: &SearchResult) -> Result<DateTime<FixedOffset>, SortError> {
    DateTime::parse_from_rfc3339(&result.last_updated).map_err(|source| {
        SortError::InvalidDateFormat {
            value: result.last_updated.clone(),
            source,
        }
    })
}

/// Return a new result sequence ordered by `last_updated`.
///
/// `ascending = false` puts the most recent result first. Every timestamp is
/// parsed before anything is ordered, so a single malformed date fails the
/// whole call instead of producing a half-trusted ordering.
///
/// The sort is stable in both directions: results with equal instants keep
/// their relative input order. The input slice is not mutated.
pub fn sort_by_date(
    results: &[SearchResult],
    ascending: bool,
) -> Result<Vec<SearchResult>, SortError> {
    let mut keyed: Vec<(DateTime<FixedOffset>, SearchResult)> = results
        .iter()
        .map(|r| Ok((parse_last_updated(r)?, r.clone())))
        .collect::<Result<_, SortError>>()?;

    if ascending {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    } else {
        // Swapped operands under the same stable sort, so ties still keep
        // input order.
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    }

    Ok(keyed.into_iter().map(|(_, r)| r).collect())
}
