//! Packaging of normalized filename batches.
//!
//! # Architecture
//!
//! - `disposition.rs` - Single-file vs. archive policy and the upload boundary
//! - `archive.rs` - Zip packaging, one entry per sanitized name
//! - `header.rs` - Content-Disposition values with ASCII fallback and UTF-8 names
//! - `options.rs` - Archive name and compression

pub use archive::{pack_archive, write_archive};
pub use disposition::{ArchiveEntry, Disposition, Download, Upload, decide, prepare};
pub use error::{Error, Result};
pub use header::{ascii_fallback, content_disposition, encode_exact};
pub use options::{Compression, PackOptions};

mod archive;
mod disposition;
mod error;
pub mod header;
pub mod options;
