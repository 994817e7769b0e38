//! Content-Disposition values for delivering a normalized name over HTTP.
//!
//! Older clients only read the quoted `filename` parameter, so it carries an
//! ASCII-only rendition. The exact name travels percent-encoded in `filename*`
//! (RFC 6266 / RFC 5987).

pub const DOWNLOAD_FALLBACK: &str = "download";

fn is_fallback_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-')
}

/// ASCII-only stand-in for `name`: everything outside `[A-Za-z0-9._-]` becomes `_`.
pub fn ascii_fallback(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|ch| if is_fallback_safe(ch) { ch } else { '_' })
        .collect();
    if out.is_empty() {
        DOWNLOAD_FALLBACK.to_owned()
    } else {
        out
    }
}

/// Percent-encoded UTF-8 form of `name`; spaces become `%20`.
pub fn encode_exact(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// `attachment` header value carrying both the fallback and the exact name.
///
/// `filename*` is always present, even when the fallback is already exact.
pub fn content_disposition(name: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(name),
        encode_exact(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_keeps_safe_ascii() {
        assert_eq!(ascii_fallback("report-2024_v1.pdf"), "report-2024_v1.pdf");
    }

    #[test]
    fn fallback_replaces_everything_else() {
        assert_eq!(ascii_fallback("my file (1).txt"), "my_file__1_.txt");
        assert_eq!(ascii_fallback("r\u{e9}sum\u{e9}.pdf"), "r_sum_.pdf");
    }

    #[test]
    fn fallback_for_empty() {
        assert_eq!(ascii_fallback(""), "download");
    }

    #[test]
    fn encodes_spaces_and_utf8() {
        assert_eq!(encode_exact("a b.txt"), "a%20b.txt");
        assert_eq!(encode_exact("\u{e9}"), "%C3%A9");
    }

    #[test]
    fn plain_ascii_header() {
        assert_eq!(
            content_disposition("notes.txt"),
            "attachment; filename=\"notes.txt\"; filename*=UTF-8''notes.txt"
        );
    }

    #[test]
    fn extended_header() {
        assert_eq!(
            content_disposition("my notes.txt"),
            "attachment; filename=\"my_notes.txt\"; filename*=UTF-8''my%20notes.txt"
        );
    }
}
