//! Character encoding detection and transcoding.
//!
//! Callers that fetched raw bytes can hand them straight to `crawl_bytes`;
//! the charset is sniffed from meta declarations and the bytes are decoded
//! to UTF-8 before extraction. Invalid sequences are replaced rather than
//! rejected.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// Only the document head declares its charset; one kilobyte is plenty.
const SNIFF_WINDOW: usize = 1024;

/// Detect the character encoding declared in an HTML document.
///
/// Looks for `<meta charset="...">` or the `http-equiv` Content-Type form
/// within the first kilobyte, and falls back to UTF-8 (the web default)
/// when no usable declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string using the declared encoding.
///
/// Undecodable sequences become the Unicode replacement character.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_meta_charset() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head></html>";
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_http_equiv_charset() {
        let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">";
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body></body></html>"), UTF_8);
        assert_eq!(detect_encoding(b""), UTF_8);
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        let html = b"<meta charset=\"not-a-real-charset\">";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn transcodes_latin1_bytes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn utf8_passes_through() {
        let html = "<p>Caf\u{e9}</p>".as_bytes();
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }
}
