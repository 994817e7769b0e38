use tracing::debug;

use crate::options::NameOptions;
use crate::split::{is_reserved, split_base_ext, truncate_utf16, utf16_len};

/// Characters the target filesystem rejects or reserves for path syntax.
const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Trimmed from both ends of a name.
const EDGE_CHARS: [char; 2] = [' ', '.'];

pub fn is_illegal(ch: char) -> bool {
    (ch as u32) < 0x20 || ILLEGAL_CHARS.contains(&ch)
}

/// Sanitize a name with the default options.
pub fn sanitize(name: &str) -> String {
    sanitize_with_options(name, &NameOptions::default())
}

/// Turn an arbitrary name into one that is safe on the target filesystem.
///
/// 1. control and reserved characters become `options.replacement`
/// 2. runs of spaces collapse, leading/trailing spaces and periods are trimmed
/// 3. an empty result becomes `options.fallback`
/// 4. a reserved device base name gets a `_` prefix
/// 5. the name is cut to `options.max_len`, keeping the extension when it fits
///
/// Idempotent for options that pass [`NameOptions::validate`]; the input is
/// expected to be canonicalized already. A budget too small to hold any of the
/// name yields `options.fallback` uncut.
pub fn sanitize_with_options(name: &str, options: &NameOptions) -> String {
    let replaced: String = name
        .chars()
        .map(|ch| if is_illegal(ch) { options.replacement } else { ch })
        .collect();

    let collapsed = collapse_spaces(&replaced);
    let trimmed = collapsed.trim_matches(EDGE_CHARS);
    let name = if trimmed.is_empty() {
        options.fallback.as_str()
    } else {
        trimmed
    };

    let (base, ext) = split_base_ext(name);
    let fitted = if is_reserved(base) {
        debug!(base, "escaping reserved device name");
        fit_to_budget(&format!("_{base}"), ext, options.max_len)
    } else {
        fit_to_budget(base, ext, options.max_len)
    };
    if fitted.is_empty() {
        return options.fallback.clone();
    }
    fitted
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch.is_ascii_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

fn fit_to_budget(base: &str, ext: &str, max_len: usize) -> String {
    let ext_len = utf16_len(ext);
    if utf16_len(base) + ext_len <= max_len {
        return format!("{base}{ext}");
    }

    if ext_len < max_len {
        let keep = max_len - ext_len;
        let mut stem = truncate_utf16(base, keep);
        if ext.is_empty() {
            stem = stem.trim_end_matches(EDGE_CHARS);
        }
        if !stem.is_empty() {
            debug!(base, keep, "truncating base to preserve extension");
            if is_reserved(stem) {
                return format!("_{}{ext}", truncate_utf16(stem, keep - 1));
            }
            return format!("{stem}{ext}");
        }
    }

    // The extension cannot be kept: cut the whole name.
    let joined = format!("{base}{ext}");
    debug!(name = %joined, max_len, "hard-truncating name");
    let cut = truncate_utf16(&joined, max_len).trim_end_matches(EDGE_CHARS);
    if is_reserved(split_base_ext(cut).0) {
        let cut = truncate_utf16(cut, max_len.saturating_sub(1)).trim_end_matches(EDGE_CHARS);
        return format!("_{cut}");
    }
    cut.to_owned()
}
