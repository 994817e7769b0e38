use std::io::{Cursor, Seek, Write};

use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::disposition::ArchiveEntry;
use crate::error::{Error, Result};
use crate::options::PackOptions;

/// Write `entries` as a zip archive into `writer` and hand the writer back.
///
/// Entry names are stored as given. Non-ASCII names are written as UTF-8 with the
/// language-encoding flag set, which current archive tools honor.
pub fn write_archive<W: Write + Seek>(
    entries: &[ArchiveEntry],
    writer: W,
    options: &PackOptions,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let base_options =
        SimpleFileOptions::default().compression_method(options.compression.method());

    for entry in entries {
        let large = entry.bytes.len() as u64 >= u64::from(u32::MAX);
        zip.start_file(entry.name.as_str(), base_options.large_file(large))
            .map_err(|source| Error::Archive {
                name: entry.name.clone(),
                source,
            })?;
        zip.write_all(&entry.bytes)?;
        debug!(name = %entry.name, bytes = entry.bytes.len(), "added archive entry");
    }

    zip.finish().map_err(|source| Error::Archive {
        name: options.archive_name.clone(),
        source,
    })
}

/// Pack `entries` into an in-memory zip archive.
pub fn pack_archive(entries: &[ArchiveEntry], options: &PackOptions) -> Result<Vec<u8>> {
    let cursor = write_archive(entries, Cursor::new(Vec::new()), options)?;
    Ok(cursor.into_inner())
}
