use std::collections::HashMap;

use tracing::debug;

use crate::options::NameOptions;
use crate::split::{is_reserved, split_base_ext, truncate_utf16, utf16_len};

/// Key used for uniqueness comparison. Never emitted as a name.
pub fn fold_key(name: &str) -> String {
    name.to_lowercase()
}

/// Deduplicate with the default options.
pub fn dedupe(names: Vec<String>) -> Vec<String> {
    dedupe_with_options(names, &NameOptions::default())
}

/// Rewrite later case-insensitive duplicates into `base (n).ext` variants.
///
/// Order and length are preserved, so the result stays index-aligned with any
/// parallel payload sequence. Suffixes are handed out in input order starting at
/// `(1)`, skipping any candidate whose folded form is already taken, including
/// names that were literally present in the input.
pub fn dedupe_with_options<I>(names: I, options: &NameOptions) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let names = names.into_iter();
    let mut out = Vec::with_capacity(names.size_hint().0);
    // folded name -> next suffix counter to try
    let mut seen: HashMap<String, usize> = HashMap::new();

    for name in names {
        let key = fold_key(&name);
        let Some(&next) = seen.get(&key) else {
            seen.insert(key, 1);
            out.push(name);
            continue;
        };

        let (base, ext) = split_base_ext(&name);
        let mut counter = next;
        let candidate = loop {
            let candidate = numbered(base, ext, counter, options.max_len);
            let candidate_key = fold_key(&candidate);
            if !seen.contains_key(&candidate_key) {
                seen.insert(candidate_key, 1);
                break candidate;
            }
            counter += 1;
        };

        seen.insert(key, counter + 1);
        debug!(original = %name, renamed = %candidate, "resolved duplicate filename");
        out.push(candidate);
    }

    out
}

/// Build `base (counter)ext` within `max_len`.
///
/// The base is used as is when the candidate fits; trailing spaces are only
/// trimmed from a stem that had to be shortened. The suffix is never cut, so distinct counters always give distinct candidates.
fn numbered(base: &str, ext: &str, counter: usize, max_len: usize) -> String {
    let suffix = format!(" ({counter})");
    let candidate = format!("{base}{suffix}{ext}");
    if utf16_len(&candidate) <= max_len {
        return candidate;
    }

    let room = max_len.saturating_sub(utf16_len(&suffix));
    let ext_len = utf16_len(ext);
    if ext_len < room {
        let stem = truncate_utf16(base, room - ext_len).trim_end_matches(' ');
        if !stem.is_empty() {
            return format!("{stem}{suffix}{ext}");
        }
    }

    // No room for the extension: shorten the whole name and drop what does not fit.
    let joined = format!("{base}{ext}");
    let stem = truncate_utf16(&joined, room).trim_end_matches(' ');
    if is_reserved(split_base_ext(stem).0) {
        let stem = truncate_utf16(stem, room.saturating_sub(1)).trim_end_matches(' ');
        return format!("_{stem}{suffix}");
    }
    format!("{stem}{suffix}")
}
