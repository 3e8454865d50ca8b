//! The search function: ordered multi-field matching with per-page dedup.
//!
//! # Matching rule
//!
//! For every page, the query is tested as a case-insensitive substring
//! against each field in [`SEARCH_FIELD_ORDER`]. The first field that matches
//! supplies the snippet and ends the scan for that page, so a page yields at
//! most one result no matter how many of its fields contain the query.
//!
//! # Unicode Support
//!
//! Comparison goes through [`fold`] (NFC + Unicode lowercase), so accented
//! and non-ASCII characters fold correctly. The stored text is never altered:
//! snippets and titles come back exactly as the content store supplied them.
//!
//! # No index
//!
//! Every call rescans the full page collection. The datasets this serves are
//! hundreds of pages, not millions; callers needing more should build an
//! inverted index a layer up.

use crate::query::{validate_query, QueryError};
use crate::types::{
    MatchField, Page, SearchResult, SEARCH_FIELD_ORDER, TITLE_MATCH_SNIPPET, UNTITLED_PAGE_TITLE,
};
use crate::utils::{contains_fold, fold};
use log::{debug, trace};
use std::collections::HashSet;

/// Find the first field of `page` containing the folded query.
///
/// Fields are tried in [`SEARCH_FIELD_ORDER`]; absent fields never match.
/// Email-module entries are tried in stored order and the first hit supplies
/// the snippet.
fn first_matching_field(page: &Page, folded_query: &str) -> Option<(MatchField, String)> {
    for field in SEARCH_FIELD_ORDER {
        let snippet = match field {
            MatchField::Title => page
                .title
                .as_deref()
                .filter(|t| contains_fold(t, folded_query))
                .map(|_| TITLE_MATCH_SNIPPET.to_string()),
            MatchField::Body => page
                .body
                .as_deref()
                .filter(|b| contains_fold(b, folded_query))
                .map(str::to_string),
            MatchField::ImageCaption => page
                .image_caption
                .as_deref()
                .filter(|c| contains_fold(c, folded_query))
                .map(str::to_string),
            MatchField::ImageAccessibilityLabel => page
                .image_accessibility_label
                .as_deref()
                .filter(|l| contains_fold(l, folded_query))
                .map(str::to_string),
            MatchField::Email => page
                .email_module
                .iter()
                .find(|entry| contains_fold(entry, folded_query))
                .cloned(),
        };
        if let Some(snippet) = snippet {
            return Some((field, snippet));
        }
    }
    None
}

/// Build the result record for a matching page.
fn result_for(page: &Page, field: MatchField, snippet: String) -> SearchResult {
    SearchResult {
        page_id: page.identifier.clone(),
        page_title: page
            .title
            .clone()
            .unwrap_or_else(|| UNTITLED_PAGE_TITLE.to_string()),
        matched_snippet: snippet,
        matched_field: field,
        last_updated: page.last_updated.clone(),
        image_attached: page.image.clone().unwrap_or_default(),
    }
}

/// Search the page collection for the validated query.
///
/// The query must already have passed [`validate_query`]; this function does
/// not re-validate. Results come back in input order (stable), deduplicated
/// by page identifier: when the same identifier appears more than once in
/// `pages`, the first occurrence wins and later ones are skipped.
///
/// An empty return value means "no results", which is a normal outcome, not
/// an error. Sorting is a separate step, see
/// [`sort_by_date`](crate::sort_by_date).
pub fn search(query: &str, pages: &[Page]) -> Vec<SearchResult> {
    let folded_query = fold(query);

    let mut seen: HashSet<&str> = HashSet::with_capacity(pages.len());
    let mut results = Vec::new();

    for page in pages {
        // Identifier-only dedup key: a page contributes at most one result.
        if !seen.insert(page.identifier.as_str()) {
            trace!("skipping duplicate page identifier {}", page.identifier);
            continue;
        }
        if let Some((field, snippet)) = first_matching_field(page, &folded_query) {
            trace!(
                "page {} matched in field {}",
                page.identifier,
                field.as_str()
            );
            results.push(result_for(page, field, snippet));
        }
    }

    debug!(
        "search for {:?} over {} pages yielded {} results",
        query,
        pages.len(),
        results.len()
    );
    results
}

/// Validate a raw query, then search.
///
/// One-call convenience for callers that do not need to hold the trimmed
/// query themselves. `Err(QueryError::Empty)` means "prompt the user again";
/// `Ok(vec![])` means "no results found". The two must be rendered
/// differently.
pub fn execute(raw_query: &str, pages: &[Page]) -> Result<Vec<SearchResult>, QueryError> {
    let query = validate_query(raw_query)?;
    Ok(search(&query, pages))
}
