//! Result types for extraction output.
//!
//! `CrawlData` is the structured record produced by one extraction call;
//! `CrawlResponse` is the serialized envelope handed back over the caller
//! boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured record extracted from one page.
///
/// Constructed once per extraction call and immutable thereafter. All
/// metadata fields are nullable - missing metadata is normal, not
/// exceptional. `plain_text` is always present (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlData {
    /// The page this record describes.
    pub source_url: String,

    /// Page title, if a title selector matched.
    pub title: Option<String>,

    /// Page description, if a description selector matched.
    pub description: Option<String>,

    /// Primary image as an absolute URL, resolved against `source_url`.
    pub image: Option<String>,

    /// The matched content subtree's HTML, unmodified.
    pub content_html: Option<String>,

    /// Markdown-flavored rendering of the content subtree.
    pub plain_text: String,

    /// When this record was produced. Serializes as RFC 3339.
    pub fetched_at: DateTime<Utc>,
}

/// Serialized envelope for the caller boundary.
///
/// On success `ok` is `true` and `data` is populated; on failure `ok` is
/// `false` and `error` carries a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlResponse {
    /// Whether extraction produced a record.
    pub ok: bool,

    /// The extracted record, present when `ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CrawlData>,

    /// Failure message, present when not `ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrawlResponse {
    /// Wrap an extracted record.
    #[must_use]
    pub fn success(data: CrawlData) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wrap a failure message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl From<crate::Result<CrawlData>> for CrawlResponse {
    fn from(result: crate::Result<CrawlData>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
