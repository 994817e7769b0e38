#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("max_len {max_len} is below the minimum of {min}")]
    BudgetTooSmall { max_len: usize, min: usize },

    #[error("fallback name '{fallback}' is not a valid sanitized name")]
    InvalidFallback { fallback: String },

    #[error("replacement character {ch:?} is itself illegal in filenames")]
    InvalidReplacement { ch: char },
}

pub type Result<T> = std::result::Result<T, Error>;
