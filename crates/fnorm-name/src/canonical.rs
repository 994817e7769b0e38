use unicode_normalization::UnicodeNormalization;

/// Compose a name into NFC.
///
/// Filenames written on a decomposing filesystem store `é` as `e` followed by a
/// combining acute accent, and Hangul syllables as individual Jamo. Composing them
/// makes visually identical names compare equal.
pub fn canonicalize(raw: &str) -> String {
    raw.nfc().collect()
}

/// Whether `name` is already in NFC, so [`canonicalize`] would return it unchanged.
pub fn is_canonical(name: &str) -> bool {
    unicode_normalization::is_nfc(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_combining_marks() {
        assert_eq!(canonicalize("re\u{301}sume\u{301}.pdf"), "r\u{e9}sum\u{e9}.pdf");
    }

    #[test]
    fn composed_input_is_unchanged() {
        let name = "r\u{e9}sum\u{e9}.pdf";
        assert!(is_canonical(name));
        assert_eq!(canonicalize(name), name);
    }

    #[test]
    fn decomposed_is_not_canonical() {
        assert!(!is_canonical("e\u{301}"));
    }

    #[test]
    fn empty() {
        assert_eq!(canonicalize(""), "");
    }
}
