// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through a search: pages in, results out.
//!
//! `Page` mirrors the content store's JSON shape (camelCase keys, optional
//! fields). `SearchResult` is the derived, per-query record the presentation
//! layer renders. Neither persists across calls: pages are borrowed for the
//! duration of one `search`, results are freshly allocated and owned by the
//! caller.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Absent vs empty**: a `Page` field that is `None` never matches any
//!   query. `Some("")` is a present-but-empty field and can only "match" a
//!   query that is itself empty, which `validate_query` already rules out.
//!
//! - **One result per page**: a page contributes at most one `SearchResult`
//!   per query, no matter how many of its fields match. `SEARCH_FIELD_ORDER`
//!   decides which field wins.
//!
//! - **Dates stay strings**: `last_updated` is carried verbatim as the
//!   ISO-8601 string the content store supplied. Parsing happens on demand in
//!   `sort_by_date`, and a string that fails to parse there is surfaced as an
//!   error rather than silently ordered.

use serde::{Deserialize, Serialize};

/// Placeholder title for pages whose `title` is absent.
pub const UNTITLED_PAGE_TITLE: &str = "Untitled";

/// Snippet text used when the match landed in the page title.
///
/// Echoing the title back as its own snippet tells the user nothing, so title
/// hits get a fixed descriptive note instead.
pub const TITLE_MATCH_SNIPPET: &str = "Title matches search term";

/// A single unit of application content, as supplied by the content store.
///
/// All searchable fields are optional except `identifier` and `last_updated`.
/// The `email_module` list holds module-specific values (contact addresses)
/// that are matched entry by entry, in stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Opaque unique key. Deduplication during search keys on this alone.
    pub identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown or plain text body.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image_caption: Option<String>,
    #[serde(default)]
    pub image_accessibility_label: Option<String>,
    /// Reference to an attached image asset (key or URL), if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered module-specific values, e.g. contact email addresses.
    #[serde(default)]
    pub email_module: Vec<String>,
    /// Last-updated timestamp as an ISO-8601 string, kept unparsed.
    pub last_updated: String,
}

/// Which page field produced a match.
///
/// Doubles as source attribution on a result ("found in body" vs "found in
/// title") and as the unit of `SEARCH_FIELD_ORDER`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Title,
    Body,
    ImageCaption,
    ImageAccessibilityLabel,
    Email,
}

impl MatchField {
    /// Convert to the camelCase string representation.
    ///
    /// Matches the serde `rename_all = "camelCase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Title => "title",
            MatchField::Body => "body",
            MatchField::ImageCaption => "imageCaption",
            MatchField::ImageAccessibilityLabel => "imageAccessibilityLabel",
            MatchField::Email => "email",
        }
    }
}

/// The fields that participate in matching, in priority order.
///
/// The first field in this list that matches supplies the result's snippet,
/// and scanning stops there for that page. The order is a public constant so
/// the tie-break contract is inspectable rather than buried in a match
/// statement.
pub const SEARCH_FIELD_ORDER: [MatchField; 5] = [
    MatchField::Title,
    MatchField::Body,
    MatchField::ImageCaption,
    MatchField::ImageAccessibilityLabel,
    MatchField::Email,
];

/// What the presentation layer renders for one matching page.
///
/// Freshly allocated per query; carries copies, not references, so the caller
/// can drop the page collection and keep the results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Identifier of the matching page (for correlating back to the store).
    pub page_id: String,
    /// Page title, or [`UNTITLED_PAGE_TITLE`] when the page has none.
    pub page_title: String,
    /// Text of the field that satisfied the match; title hits use
    /// [`TITLE_MATCH_SNIPPET`] instead of echoing the title.
    pub matched_snippet: String,
    /// Which field the match landed in.
    pub matched_field: MatchField,
    /// ISO-8601 timestamp copied verbatim from the page.
    pub last_updated: String,
    /// The page's image reference, or empty when the page has no image.
    #[serde(default)]
    pub image_attached: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_starts_with_title_and_ends_with_email() {
        assert_eq!(SEARCH_FIELD_ORDER[0], MatchField::Title);
        assert_eq!(SEARCH_FIELD_ORDER[4], MatchField::Email);
    }

    #[test]
    fn match_field_as_str_is_camel_case() {
        assert_eq!(MatchField::ImageCaption.as_str(), "imageCaption");
        assert_eq!(
            MatchField::ImageAccessibilityLabel.as_str(),
            "imageAccessibilityLabel"
        );
    }

    #[test]
    fn page_deserializes_with_absent_optional_fields() {
        let page: Page = serde_json::from_str(
            r#"{"identifier": "p-1", "lastUpdated": "2024-01-10T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(page.identifier, "p-1");
        assert!(page.title.is_none());
        assert!(page.body.is_none());
        assert!(page.email_module.is_empty());
    }
}
