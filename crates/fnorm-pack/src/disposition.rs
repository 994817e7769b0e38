use fnorm_name::{NameOptions, normalize_batch};
use tracing::info;

use crate::archive::pack_archive;
use crate::error::{Error, Result};
use crate::header::content_disposition;
use crate::options::PackOptions;

pub const OCTET_STREAM: &str = "application/octet-stream";
pub const ZIP: &str = "application/zip";

/// A file as received from the caller: raw name plus content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// How a normalized batch is handed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Disposition {
    Single { name: String, bytes: Vec<u8> },
    Archive { entries: Vec<ArchiveEntry> },
}

impl Disposition {
    pub fn is_archive(&self) -> bool {
        matches!(self, Self::Archive { .. })
    }

    /// Name the caller should save the result under.
    pub fn download_name<'a>(&'a self, options: &'a PackOptions) -> &'a str {
        match self {
            Self::Single { name, .. } => name,
            Self::Archive { .. } => &options.archive_name,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Single { .. } => OCTET_STREAM,
            Self::Archive { .. } => ZIP,
        }
    }

    /// Materialize the bytes to deliver, packing the archive if needed.
    pub fn into_download(self, options: &PackOptions) -> Result<Download> {
        let file_name = self.download_name(options).to_owned();
        let content_type = self.content_type();
        let bytes = match self {
            Self::Single { bytes, .. } => bytes,
            Self::Archive { entries } => pack_archive(&entries, options)?,
        };

        Ok(Download {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// A ready-to-deliver blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Response headers for serving this blob as an attachment.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", self.content_type.to_owned()),
            ("Content-Length", self.bytes.len().to_string()),
            ("Content-Disposition", content_disposition(&self.file_name)),
            ("X-Content-Type-Options", "nosniff".to_owned()),
        ]
    }
}

/// Choose between a single file and an archive.
///
/// Entries without payload are dropped here; they still took part in
/// deduplication, so names of the remaining entries do not shift.
pub fn decide<I>(batch: I, force_archive: bool) -> Disposition
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut entries: Vec<ArchiveEntry> = batch
        .into_iter()
        .filter(|(_, bytes)| !bytes.is_empty())
        .map(|(name, bytes)| ArchiveEntry { name, bytes })
        .collect();

    if entries.len() == 1
        && !force_archive
        && let Some(ArchiveEntry { name, bytes }) = entries.pop()
    {
        return Disposition::Single { name, bytes };
    }

    Disposition::Archive { entries }
}

/// Normalize an upload batch and decide its disposition.
///
/// Rejects a batch with no content before any normalization happens.
pub fn prepare(
    uploads: Vec<Upload>,
    force_archive: bool,
    options: &NameOptions,
) -> Result<Disposition> {
    options.validate()?;
    if uploads.iter().all(Upload::is_empty) {
        return Err(Error::EmptyBatch);
    }

    let names = normalize_batch(uploads.iter().map(|u| u.name.as_str()), options);
    let batch = names.into_iter().zip(uploads.into_iter().map(|u| u.bytes));
    let disposition = decide(batch, force_archive);

    match &disposition {
        Disposition::Single { name, bytes } => {
            info!(name = %name, bytes = bytes.len(), "prepared single file")
        }
        Disposition::Archive { entries } => {
            info!(entries = entries.len(), "prepared archive")
        }
    }

    Ok(disposition)
}
