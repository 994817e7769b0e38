/// Device names that cannot be used as a base filename, regardless of extension.
pub const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Split a name at its last period.
///
/// The extension keeps its leading period. A name without a period has an empty
/// extension.
pub fn split_base_ext(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

pub fn is_reserved(base: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(base))
}

/// Length in UTF-16 code units, the unit the target filesystem counts in.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Longest prefix of `s` that fits in `budget` UTF-16 code units.
///
/// Cuts only on `char` boundaries, so a surrogate pair is never split.
pub fn truncate_utf16(s: &str, budget: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        used += ch.len_utf16();
        if used > budget {
            return &s[..idx];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_with_extension() {
        assert_eq!(split_base_ext("report.final.pdf"), ("report.final", ".pdf"));
    }

    #[test]
    fn split_without_extension() {
        assert_eq!(split_base_ext("Makefile"), ("Makefile", ""));
    }

    #[test]
    fn split_leading_period() {
        assert_eq!(split_base_ext(".bashrc"), ("", ".bashrc"));
    }

    #[test]
    fn split_trailing_period() {
        assert_eq!(split_base_ext("name."), ("name", "."));
    }

    #[test]
    fn reserved_is_case_insensitive() {
        assert!(is_reserved("con"));
        assert!(is_reserved("Lpt9"));
        assert!(is_reserved("NUL"));
        assert!(!is_reserved("COM0"));
        assert!(!is_reserved("CONSOLE"));
        assert!(!is_reserved("_CON"));
        assert!(!is_reserved(""));
    }

    #[test]
    fn utf16_counts_astral_as_two() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("\u{D55C}"), 1);
        assert_eq!(utf16_len("\u{1F600}"), 2);
    }

    #[test]
    fn truncate_on_char_boundary() {
        assert_eq!(truncate_utf16("abcdef", 3), "abc");
        assert_eq!(truncate_utf16("abc", 10), "abc");
        assert_eq!(truncate_utf16("a\u{1F600}b", 2), "a");
        assert_eq!(truncate_utf16("a\u{1F600}b", 3), "a\u{1F600}");
        assert_eq!(truncate_utf16("abc", 0), "");
    }
}
