//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate exposing the handful of read-only
//! operations the engine needs: parsing, attribute lookup, tag names, text,
//! and HTML serialization. The engine never tokenizes HTML itself and never
//! mutates the tree.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for zero-copy text passing
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// Parsing is lenient: malformed input produces whatever partial tree the
/// parser can recover, never an error.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value from the first node of a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|value| value.to_string())
}

/// Get the tag name (lowercase) of the first node of a selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|tag| tag.to_string())
}

/// Get all text content of a selection's nodes and their descendants.
///
/// Returns `StrTendril` for zero-copy passing; call `.to_string()` only when
/// owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content (the node itself included).
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}
