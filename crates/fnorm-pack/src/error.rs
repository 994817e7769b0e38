use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no non-empty files were supplied")]
    EmptyBatch,

    #[error("invalid name options: {0}")]
    InvalidOptions(#[from] fnorm_name::Error),

    #[error("archive name '{name}' is not a valid sanitized name")]
    InvalidArchiveName { name: String },

    #[error("failed to write archive entry '{name}': {source}")]
    Archive {
        name: String,
        source: zip::result::ZipError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
