//! Filename normalization for a case-insensitive, length-bounded target filesystem.
//!
//! # Architecture
//!
//! - `canonical.rs` - Unicode composition (NFC)
//! - `sanitize.rs` - Per-name character, whitespace, reserved-word and length policy
//! - `dedupe.rs` - Case-insensitive collision resolution across a batch
//! - `split.rs` - Base/extension splitting and length helpers shared by both
//! - `options.rs` - Tunable limits
//!
//! Every operation here is pure: no state outlives a single call, so batches can be
//! normalized concurrently without coordination.

pub use canonical::{canonicalize, is_canonical};
pub use dedupe::{dedupe, dedupe_with_options, fold_key};
pub use error::{Error, Result};
pub use options::NameOptions;
pub use sanitize::{is_illegal, sanitize, sanitize_with_options};
pub use split::{RESERVED_NAMES, is_reserved, split_base_ext, truncate_utf16, utf16_len};

mod canonical;
mod dedupe;
mod error;
pub mod options;
mod sanitize;
mod split;

/// Canonicalize and sanitize a single raw name.
pub fn normalize_name(raw: &str, options: &NameOptions) -> String {
    if is_canonical(raw) {
        return sanitize_with_options(raw, options);
    }
    tracing::debug!(raw, "composing decomposed filename");
    sanitize_with_options(&canonicalize(raw), options)
}

/// Normalize a batch of raw names into unique, safe names.
///
/// The output is index-aligned with the input: `out[i]` is the name for `raws[i]`.
pub fn normalize_batch<I, S>(raws: I, options: &NameOptions) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sanitized: Vec<String> = raws
        .into_iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let name = normalize_name(raw, options);
            if name != raw {
                tracing::debug!(raw, name = %name, "normalized filename");
            }
            name
        })
        .collect();

    dedupe_with_options(sanitized, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_is_index_aligned() {
        let out = normalize_batch(["a.txt", "", "b?.txt"], &NameOptions::default());
        assert_eq!(out, vec!["a.txt", "unnamed", "b_.txt"]);
    }

    #[test]
    fn decomposed_and_composed_collide() {
        // "é" as e + U+0301 and as U+00E9
        let out = normalize_batch(["cafe\u{301}.txt", "caf\u{e9}.txt"], &NameOptions::default());
        assert_eq!(out, vec!["caf\u{e9}.txt", "caf\u{e9} (1).txt"]);
    }

    #[test]
    fn hangul_jamo_are_composed() {
        let decomposed = "\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}.hwp";
        assert_eq!(
            normalize_name(decomposed, &NameOptions::default()),
            "\u{D55C}\u{AE00}.hwp"
        );
    }

    #[test]
    fn decomposed_name_comes_out_composed() {
        let raw = "re\u{301}sume\u{301} draft?.pdf";
        assert!(!is_canonical(raw));
        let out = normalize_name(raw, &NameOptions::default());
        assert!(is_canonical(&out));
        assert_eq!(out, "r\u{e9}sum\u{e9} draft_.pdf");
        assert_eq!(normalize_name(&out, &NameOptions::default()), out);
    }

    #[test]
    fn empty_batch() {
        let out = normalize_batch(Vec::<String>::new(), &NameOptions::default());
        assert!(out.is_empty());
    }
}
