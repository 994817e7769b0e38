use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_ARCHIVE_NAME: &str = "normalized_files.zip";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Stored,
    #[default]
    Deflated,
}

impl Compression {
    pub fn method(self) -> zip::CompressionMethod {
        match self {
            Self::Stored => zip::CompressionMethod::Stored,
            Self::Deflated => zip::CompressionMethod::Deflated,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackOptions {
    pub archive_name: String,
    pub compression: Compression,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            archive_name: DEFAULT_ARCHIVE_NAME.to_owned(),
            compression: Compression::default(),
        }
    }
}

impl PackOptions {
    pub fn archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = name.into();
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// The archive name is used as a filename too, so it must already be safe.
    pub fn validate(&self) -> Result<()> {
        let name = &self.archive_name;
        if name.is_empty() || fnorm_name::sanitize(name) != *name {
            return Err(Error::InvalidArchiveName {
                name: self.archive_name.clone(),
            });
        }
        Ok(())
    }
}
