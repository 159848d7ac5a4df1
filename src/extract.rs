//! Extraction orchestration.
//!
//! Composes the selector, URL, and markdown modules into the public
//! contract: a `CrawlRequest` plus a parsed document in, a `CrawlData`
//! record out. Once the request itself is valid the call cannot fail -
//! every internal miss degrades to an absent field, because missing
//! metadata is normal with third-party HTML.

use chrono::Utc;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::markdown;
use crate::request::CrawlRequest;
use crate::result::CrawlData;
use crate::selector;
use crate::url_utils;

pub(crate) fn extract_page(doc: &Document, request: &CrawlRequest) -> Result<CrawlData> {
    if request.source_url.trim().is_empty() {
        return Err(Error::MissingSourceUrl);
    }

    let title = selector::extract_value(doc, request.title_selector.as_deref());
    let description = selector::extract_value(doc, request.description_selector.as_deref());

    // A raw image reference is only useful once anchored to the page URL;
    // a reference that cannot be resolved means no image, not a failure.
    let image = selector::extract_value(doc, request.image_selector.as_deref())
        .and_then(|raw| url_utils::resolve_reference(&raw, &request.source_url));

    // content_html keeps the matched subtree verbatim; the renderer walks
    // the subtree's own children as the block level.
    let fragment = selector::select_fragment(doc, request.content_selector.as_deref());
    let (content_html, plain_text) = match fragment {
        Some(node) => (
            Some(dom::outer_html(&node).to_string()),
            markdown::render(&dom::inner_html(&node)),
        ),
        None => (None, String::new()),
    };

    Ok(CrawlData {
        source_url: request.source_url.clone(),
        title,
        description,
        image,
        content_html,
        plain_text,
        fetched_at: Utc::now(),
    })
}
