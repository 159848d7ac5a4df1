//! URL resolution utilities.
//!
//! Extracted references (image `src`, anchor `href`, meta content) are often
//! relative; this module anchors them to the page URL. Failure to resolve is
//! reported as `None`, never an error - callers treat "could not resolve" as
//! "no image/link available".

use url::Url;

/// Resolve a possibly-relative reference against a base URL.
///
/// References that already start with `http://` or `https://` are returned
/// unchanged - they are never combined with the base. Anything else is
/// joined against the parsed base per standard relative resolution
/// (`//host/path`, `/abs/path`, `rel/path`, `../up`, query/fragment-only).
///
/// Returns `None` when the base does not parse or the reference cannot be
/// joined.
#[must_use]
pub fn resolve_reference(reference: &str, base: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Some(reference.to_string());
    }

    let base = Url::parse(base).ok()?;
    base.join(reference).ok().map(|resolved| resolved.to_string())
}
