//! Compiled regex patterns used across the extraction pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock` and shared
//! for the lifetime of the process.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches the textual meta-selector shape `meta[attr='value']`.
///
/// Both quote styles are accepted: `meta[property='og:image']` and
/// `meta[name="description"]`. The attribute name is capture 1; the value is
/// capture 2 (single-quoted) or capture 3 (double-quoted).
pub static META_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^meta\[\s*([A-Za-z][A-Za-z0-9_:.-]*)\s*=\s*(?:'([^']*)'|"([^"]*)")\s*\]$"#)
        .expect("META_SELECTOR regex")
});

/// Matches runs of three or more newlines for paragraph-gap normalization.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches a charset declaration inside a `<meta>` tag.
///
/// Covers both declaration forms in one pass: `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([A-Za-z0-9_\-]+)"#)
        .expect("META_CHARSET regex")
});
