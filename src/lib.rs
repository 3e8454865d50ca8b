//! Multi-field substring search over content pages, with date sorting.
//!
//! This crate is the search core of an in-app content search feature. It
//! validates a raw user query, scans a caller-supplied page collection for
//! case-insensitive substring matches across an ordered list of fields, and
//! exposes a separate stable sort over the result set by last-updated date.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  query.rs   │────▶│   search.rs   │────▶│   sort.rs   │
//! │ (validate_  │     │ (search, per- │     │ (sort_by_   │
//! │   query)    │     │  page dedup)  │     │   date)     │
//! └─────────────┘     └───────────────┘     └─────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              types.rs / utils.rs                     │
//! │  (Page, SearchResult, SEARCH_FIELD_ORDER,           │
//! │   fold/contains_fold case-insensitive comparison)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Contract
//!
//! - Callers run [`validate_query`] first and show an "invalid search" notice
//!   on [`QueryError::Empty`]; [`search()`] assumes a validated query.
//! - [`search()`] returning an empty vector means "no results found", which
//!   is a normal outcome and gets its own messaging. It is never an error.
//! - [`sort_by_date`] is an explicit separate step; `search` output is in
//!   input-page order.
//!
//! Everything is pure and synchronous: inputs are borrowed snapshots, outputs
//! are freshly allocated, and no state survives a call. Concurrent callers
//! need no coordination. Debouncing, cancellation of stale searches, and all
//! other UI concerns belong to the presentation layer.
//!
//! # Usage
//!
//! ```
//! use pagesearch::{validate_query, search, sort_by_date, Page};
//!
//! let pages = vec![Page {
//!     identifier: "page-1".to_string(),
//!     title: Some("Meeting Notes".to_string()),
//!     body: Some("quarterly meeting".to_string()),
//!     image_caption: None,
//!     image_accessibility_label: None,
//!     image: None,
//!     email_module: vec![],
//!     last_updated: "2024-03-05T00:00:00Z".to_string(),
//! }];
//!
//! let query = validate_query("  meeting ").expect("non-empty query");
//! let results = search(&query, &pages);
//! let newest_first = sort_by_date(&results, false).expect("parseable dates");
//! assert_eq!(newest_first[0].page_title, "Meeting Notes");
//! ```

// Module declarations
mod query;
mod search;
mod sort;
mod types;
mod utils;

// Re-exports for public API
pub use query::{validate_query, QueryError};
pub use search::{execute, search};
pub use sort::{sort_by_date, SortError};
pub use types::{
    MatchField, Page, SearchResult, SEARCH_FIELD_ORDER, TITLE_MATCH_SNIPPET, UNTITLED_PAGE_TITLE,
};
pub use utils::{contains_fold, fold};
