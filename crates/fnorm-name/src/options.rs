use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sanitize::{is_illegal, sanitize_with_options};

pub const DEFAULT_MAX_LEN: usize = 255;
pub const DEFAULT_FALLBACK: &str = "unnamed";

/// Smallest budget that still leaves room for a dedupe suffix such as ` (99999)`.
pub const MIN_MAX_LEN: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameOptions {
    /// Maximum name length in UTF-16 code units.
    pub max_len: usize,
    /// Substituted when sanitization leaves nothing.
    pub fallback: String,
    /// Written in place of control and reserved characters.
    pub replacement: char,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            fallback: DEFAULT_FALLBACK.to_owned(),
            replacement: '_',
        }
    }
}

impl NameOptions {
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    /// Reject settings under which sanitized names could violate their own invariants.
    pub fn validate(&self) -> Result<()> {
        if self.max_len < MIN_MAX_LEN {
            return Err(Error::BudgetTooSmall {
                max_len: self.max_len,
                min: MIN_MAX_LEN,
            });
        }

        let ch = self.replacement;
        if is_illegal(ch) || ch == ' ' || ch == '.' || ch.is_ascii_whitespace() {
            return Err(Error::InvalidReplacement { ch });
        }

        if self.fallback.is_empty() || sanitize_with_options(&self.fallback, self) != self.fallback
        {
            return Err(Error::InvalidFallback {
                fallback: self.fallback.clone(),
            });
        }

        Ok(())
    }
}
