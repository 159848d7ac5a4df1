//! # rs-unfurl
//!
//! A content-extraction engine for link unfurling. Given HTML that a caller
//! has already fetched, plus a set of CSS-like selector hints, it extracts a
//! small structured record (title, description, primary image, content
//! block) and renders the content block into a readable markdown-flavored
//! text format.
//!
//! The engine performs no network I/O itself. Callers gate fetch targets on
//! [`is_safe_url`], fetch the page, and hand the HTML here.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_unfurl::{crawl, CrawlRequest};
//!
//! let html = r#"<html><head><meta property="og:title" content="Widget"></head>
//! <body><h1 class="title">Widget</h1><p>A very good widget.</p></body></html>"#;
//!
//! let request = CrawlRequest {
//!     source_url: "https://shop.example/widget".into(),
//!     title_selector: Some("h1.title|meta[property='og:title']".into()),
//!     content_selector: Some("body".into()),
//!     ..CrawlRequest::default()
//! };
//!
//! let data = crawl(html, &request)?;
//! assert_eq!(data.title.as_deref(), Some("Widget"));
//! assert!(data.plain_text.contains("A very good widget."));
//! # Ok::<(), rs_unfurl::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Selector chains**: each selector field may hold several fallbacks
//!   separated by `|`, tried left to right; the first usable value wins.
//! - **Absence over errors**: a selector that matches nothing or a URL that
//!   does not resolve produces an absent field, never an error. Only a
//!   structurally invalid request fails.
//! - **Stateless**: every call is a pure transformation of its inputs;
//!   concurrent calls need no coordination.

mod error;
mod extract;
mod patterns;
mod request;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTML to markdown rendering.
pub mod markdown;

/// Fallback-chained selector extraction.
pub mod selector;

/// SSRF gate for fetch targets.
pub mod url_safety;

/// URL resolution utilities.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use request::CrawlRequest;
pub use result::{CrawlData, CrawlResponse};
pub use url_safety::is_safe_url;

/// Extract a structured record from an HTML document.
///
/// Parses the HTML leniently, evaluates the request's selector chains, and
/// assembles a [`CrawlData`] record. The only error condition is a request
/// without a source URL; every extraction miss is an absent field.
#[allow(clippy::missing_errors_doc)]
pub fn crawl(html: &str, request: &CrawlRequest) -> Result<CrawlData> {
    let doc = dom::parse(html);
    extract::extract_page(&doc, request)
}

/// Extract a structured record from an already-parsed document.
///
/// Useful when the caller parses once and runs several extractions over the
/// same page.
#[allow(clippy::missing_errors_doc)]
pub fn crawl_document(doc: &dom::Document, request: &CrawlRequest) -> Result<CrawlData> {
    extract::extract_page(doc, request)
}

/// Extract a structured record from raw HTML bytes.
///
/// Detects the character encoding from meta declarations, decodes to UTF-8
/// (replacing invalid sequences), then extracts as [`crawl`] does.
///
/// # Example
///
/// ```rust
/// use rs_unfurl::{crawl_bytes, CrawlRequest};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Caf\xE9</h1></body></html>";
/// let request = CrawlRequest {
///     source_url: "https://example.com/menu".into(),
///     title_selector: Some("h1".into()),
///     ..CrawlRequest::default()
/// };
///
/// let data = crawl_bytes(html, &request)?;
/// assert_eq!(data.title.as_deref(), Some("Caf\u{e9}"));
/// # Ok::<(), rs_unfurl::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn crawl_bytes(html: &[u8], request: &CrawlRequest) -> Result<CrawlData> {
    let html = encoding::transcode_to_utf8(html);
    crawl(&html, request)
}
