//! Fallback-chained selector extraction.
//!
//! Each request field (`title`, `description`, `image`, `content`) carries a
//! selector chain; the chain is evaluated left to right and the first entry
//! that yields a usable value wins. Missing matches are expected and common
//! with third-party HTML, so every miss is an absent result, never an error.

pub mod chain;

pub use chain::{Selector, SelectorChain};

use crate::dom::{self, Document, Selection};

/// Evaluate a selector field to a single string value.
///
/// Per entry, in priority order:
/// - `Meta` entries find a `<meta>` whose named attribute equals the value
///   and return its trimmed `content`.
/// - `Query` entries take the **first** matched node only: an `<img>` yields
///   its `src`, a node carrying `href` yields that, anything else yields its
///   trimmed text.
///
/// An entry that matched nodes but produced no usable value fails as a
/// whole; the next entry is tried with its own rule, never the same entry
/// under a different rule.
#[must_use]
pub fn extract_value(doc: &Document, field: Option<&str>) -> Option<String> {
    let chain = SelectorChain::parse(field?);
    chain.iter().find_map(|selector| eval_value(doc, selector))
}

/// Resolve a selector field to the first matching DOM fragment.
///
/// Used for the content subtree: the fragment is kept as HTML and rendered
/// to text, so a match counts even when the element's text is empty.
#[must_use]
pub fn select_fragment<'a>(doc: &'a Document, field: Option<&str>) -> Option<Selection<'a>> {
    let chain = SelectorChain::parse(field?);
    chain.iter().find_map(|selector| {
        let matches = doc.try_select(&selector.as_css())?;
        matches.nodes().first().copied().map(Selection::from)
    })
}

fn eval_value(doc: &Document, selector: &Selector) -> Option<String> {
    match selector {
        Selector::Meta { attr, value } => meta_content(doc, attr, value),
        Selector::Query(css) => query_value(doc, css),
    }
}

/// Look up a `<meta>` element by exact attribute/value pair.
///
/// Meta selectors (Open Graph and friends) use attribute-value matching that
/// a generic selector engine may express differently, so they get a direct
/// scan over the document's meta tags.
fn meta_content(doc: &Document, attr: &str, value: &str) -> Option<String> {
    let binding = doc.select("meta");
    let node = binding.nodes().iter().find(|node| {
        let meta = Selection::from(**node);
        dom::get_attribute(&meta, attr).as_deref() == Some(value)
    })?;

    let meta = Selection::from(*node);
    let content = dom::get_attribute(&meta, "content")?;
    non_empty(content.trim())
}

/// Run a generic CSS query and pull a value from the first match.
fn query_value(doc: &Document, css: &str) -> Option<String> {
    // try_select tolerates invalid user-supplied CSS; a selector that does
    // not parse simply fails this chain entry.
    let matches = doc.try_select(css)?;
    let first = Selection::from(matches.nodes().first().copied()?);

    if dom::tag_name(&first).as_deref() == Some("img") {
        return dom::get_attribute(&first, "src").and_then(|src| non_empty(src.trim()));
    }

    if let Some(href) = dom::get_attribute(&first, "href") {
        return non_empty(href.trim());
    }

    non_empty(dom::text_content(&first).trim())
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn absent_field_is_absent() {
        let doc = parse("<h1>Title</h1>");
        assert_eq!(extract_value(&doc, None), None);
        assert_eq!(extract_value(&doc, Some("")), None);
        assert_eq!(extract_value(&doc, Some(" | ")), None);
    }

    #[test]
    fn first_matching_entry_wins() {
        let doc = parse(r#"<h1 class="title">From DOM</h1><meta property="og:title" content="From Meta">"#);
        let value = extract_value(&doc, Some("h1.title|meta[property='og:title']"));
        assert_eq!(value.as_deref(), Some("From DOM"));
    }

    #[test]
    fn falls_back_to_meta_entry() {
        let doc = parse(r#"<head><meta property="og:title" content="From Meta"></head><body></body>"#);
        let value = extract_value(&doc, Some("h1.title|meta[property='og:title']"));
        assert_eq!(value.as_deref(), Some("From Meta"));
    }

    #[test]
    fn meta_with_empty_content_falls_through() {
        let doc = parse(
            r#"<meta property="og:title" content=""><h2 class="headline">Fallback Headline</h2>"#,
        );
        let value = extract_value(&doc, Some("meta[property='og:title']|h2.headline"));
        assert_eq!(value.as_deref(), Some("Fallback Headline"));
    }

    #[test]
    fn img_match_yields_src() {
        let doc = parse(r#"<img class="hero" src="/img/hero.png" alt="ignored">"#);
        let value = extract_value(&doc, Some("img.hero"));
        assert_eq!(value.as_deref(), Some("/img/hero.png"));
    }

    #[test]
    fn img_without_src_fails_the_entry() {
        let doc = parse(r#"<img class="hero" alt="text alt"><p class="alt">next entry</p>"#);
        let value = extract_value(&doc, Some("img.hero|p.alt"));
        assert_eq!(value.as_deref(), Some("next entry"));
    }

    #[test]
    fn href_takes_priority_over_text() {
        let doc = parse(r#"<a class="download" href="/files/doc.pdf">Download the PDF</a>"#);
        let value = extract_value(&doc, Some("a.download"));
        assert_eq!(value.as_deref(), Some("/files/doc.pdf"));
    }

    #[test]
    fn plain_element_yields_trimmed_text() {
        let doc = parse("<h1 class=\"title\">  Spaced Title  </h1>");
        let value = extract_value(&doc, Some("h1.title"));
        assert_eq!(value.as_deref(), Some("Spaced Title"));
    }

    #[test]
    fn first_node_only_no_aggregation() {
        let doc = parse("<p class=\"x\">first</p><p class=\"x\">second</p>");
        let value = extract_value(&doc, Some("p.x"));
        assert_eq!(value.as_deref(), Some("first"));
    }

    #[test]
    fn empty_text_fails_the_entry() {
        let doc = parse(r#"<div class="empty"></div><div class="full">value</div>"#);
        let value = extract_value(&doc, Some("div.empty|div.full"));
        assert_eq!(value.as_deref(), Some("value"));
    }

    #[test]
    fn no_entry_matches() {
        let doc = parse("<p>text</p>");
        assert_eq!(extract_value(&doc, Some("h1|h2|h3")), None);
    }

    #[test]
    fn select_fragment_returns_first_match() {
        let doc = parse("<article><p>body</p></article><aside>side</aside>");
        let fragment = select_fragment(&doc, Some("article")).expect("should match");
        assert!(dom::outer_html(&fragment).contains("<p>body</p>"));
    }

    #[test]
    fn select_fragment_walks_the_chain() {
        let doc = parse("<main><p>main body</p></main>");
        let fragment = select_fragment(&doc, Some("article|main")).expect("should match");
        assert_eq!(dom::tag_name(&fragment).as_deref(), Some("main"));
    }

    #[test]
    fn select_fragment_absent_when_nothing_matches() {
        let doc = parse("<p>text</p>");
        assert!(select_fragment(&doc, Some("article")).is_none());
        assert!(select_fragment(&doc, None).is_none());
    }
}
