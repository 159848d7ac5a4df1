//! The crawl request contract.
//!
//! A `CrawlRequest` is the JSON-shaped input handed to the engine by the
//! caller that performed (or is about to perform) the fetch. Selector fields
//! may chain multiple fallbacks separated by `|`; see the `selector` module.

use serde::{Deserialize, Serialize};

/// Input record for one extraction call.
///
/// Deserializes from camelCase JSON; `url` is accepted as an alias for
/// `sourceUrl`. All selector fields are optional - an absent selector simply
/// leaves the corresponding result field empty.
///
/// # Example
///
/// ```rust
/// use rs_unfurl::CrawlRequest;
///
/// let request = CrawlRequest {
///     source_url: "https://example.com/article".into(),
///     title_selector: Some("h1.title|meta[property='og:title']".into()),
///     content_selector: Some("article".into()),
///     ..CrawlRequest::default()
/// };
/// assert!(request.description_selector.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlRequest {
    /// The page being described. Must pass `is_safe_url` before any fetch.
    #[serde(alias = "url")]
    pub source_url: String,

    /// Selector chain for the page title.
    pub title_selector: Option<String>,

    /// Selector chain for the page description.
    pub description_selector: Option<String>,

    /// Selector chain for the primary image.
    ///
    /// The extracted value is resolved against `source_url`, so relative
    /// `src` attributes and `og:image` paths both work.
    pub image_selector: Option<String>,

    /// Selector chain for the content block rendered to text.
    pub content_selector: Option<String>,

    /// Raw cookie header forwarded to the fetch layer. Never inspected here.
    pub cookies: Option<String>,

    /// Bearer token forwarded to the fetch layer. Never inspected here.
    pub auth_token: Option<String>,
}
