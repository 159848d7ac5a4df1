//! SSRF gate for fetch targets.
//!
//! Classifies a URL string as safe to fetch or not. The check is an
//! allowlist-by-exclusion over the parsed URL: only http/https schemes pass,
//! and hostnames naming loopback, link-local, or private address space are
//! rejected. It is a static, non-resolving check - see `is_safe_url` for the
//! documented limits.

use url::Url;

/// Check whether a URL is safe to hand to the fetch layer.
///
/// Never panics; any parse failure yields `false`. Rules, in order:
///
/// 1. The string must parse as a URL.
/// 2. The scheme must be `http` or `https` (the parser lowercases schemes,
///    so the comparison is effectively case-insensitive).
/// 3. Loopback hosts (`localhost`, `127.0.0.1`, `::1`) are rejected.
/// 4. The link-local prefix `169.254.` is rejected.
/// 5. The `10.` and `192.168.` private prefixes are rejected.
/// 6. Dotted-quad hosts in `172.16.0.0`-`172.31.255.255` are rejected.
///
/// This check does not resolve DNS, so a domain name pointing at a private
/// address passes here; the connecting layer must refuse private IPs at
/// connect time.
///
/// # Example
///
/// ```rust
/// use rs_unfurl::is_safe_url;
///
/// assert!(is_safe_url("https://example.com/page"));
/// assert!(!is_safe_url("http://169.254.169.254/latest/meta-data/"));
/// assert!(!is_safe_url("ftp://example.com/file"));
/// ```
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();

    // The url crate reports IPv6 hosts in bracketed form.
    if host == "localhost" || host == "127.0.0.1" || host == "::1" || host == "[::1]" {
        return false;
    }

    if host.starts_with("169.254.") || host.starts_with("10.") || host.starts_with("192.168.") {
        return false;
    }

    !in_class_b_private_range(&host)
}

/// Whether a hostname is a dotted-quad inside `172.16.0.0/12`.
///
/// Non-numeric hostnames are not in range by definition; the other private
/// blocks are plain prefixes and handled by the caller.
fn in_class_b_private_range(host: &str) -> bool {
    let octets: Vec<u8> = host
        .split('.')
        .map(str::parse)
        .collect::<Result<Vec<u8>, _>>()
        .unwrap_or_default();

    matches!(octets.as_slice(), [172, second, _, _] if (16..=31).contains(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_public_hosts() {
        assert!(is_safe_url("https://example.com/"));
        assert!(is_safe_url("http://sub.example.co.uk/path?q=1"));
        assert!(is_safe_url("https://8.8.8.8/dns"));
    }

    #[test]
    fn rejects_unparseable_input() {
        assert!(!is_safe_url(""));
        assert!(!is_safe_url("not a url"));
        assert!(!is_safe_url("http://"));
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(!is_safe_url("ftp://example.com/"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,hi"));
    }

    #[test]
    fn scheme_check_is_case_insensitive() {
        // Url::parse lowercases the scheme before we compare.
        assert!(is_safe_url("HTTPS://example.com/"));
        assert!(!is_safe_url("FTP://example.com/"));
    }

    #[test]
    fn rejects_loopback() {
        assert!(!is_safe_url("http://localhost/"));
        assert!(!is_safe_url("http://localhost:8080/admin"));
        assert!(!is_safe_url("http://127.0.0.1/"));
        assert!(!is_safe_url("http://[::1]/"));
    }

    #[test]
    fn rejects_link_local() {
        assert!(!is_safe_url("http://169.254.169.254/latest/meta-data/"));
        assert!(!is_safe_url("http://169.254.0.1/"));
    }

    #[test]
    fn rejects_private_prefixes() {
        assert!(!is_safe_url("http://10.0.0.5/"));
        assert!(!is_safe_url("http://192.168.1.1/router"));
    }

    #[test]
    fn rejects_class_b_private_band() {
        assert!(!is_safe_url("http://172.16.0.1/"));
        assert!(!is_safe_url("http://172.20.0.1/"));
        assert!(!is_safe_url("http://172.31.255.255/"));
    }

    #[test]
    fn accepts_outside_class_b_band() {
        // Boundary: only second octets 16-31 are private.
        assert!(is_safe_url("http://172.15.0.1/"));
        assert!(is_safe_url("http://172.32.0.1/"));
        assert!(is_safe_url("http://172.40.0.1/"));
    }

    #[test]
    fn class_b_range_helper() {
        assert!(in_class_b_private_range("172.16.0.0"));
        assert!(in_class_b_private_range("172.31.1.2"));
        assert!(!in_class_b_private_range("172.32.0.0"));
        assert!(!in_class_b_private_range("172.example.com"));
        assert!(!in_class_b_private_range("example.com"));
    }
}
