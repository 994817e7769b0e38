use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use fnorm_pack::{Upload, prepare};
use tracing::info;

use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct PackArg {
    #[arg(required = true, help = "Files to normalize")]
    pub files: Vec<PathBuf>,

    #[arg(short, long = "out-dir", default_value = ".", help = "Directory to write the result into")]
    pub out_dir: PathBuf,

    #[arg(long, help = "Write a zip archive even for a single file")]
    pub force_archive: bool,

    #[arg(long, help = "Name of the zip archive")]
    pub archive_name: Option<String>,

    #[arg(long, help = "Maximum filename length in UTF-16 units")]
    pub max_len: Option<usize>,

    #[arg(long, help = "Replace an existing output file")]
    pub overwrite: bool,
}

impl PackArg {
    pub fn run(self, mut config: Config) -> Result<()> {
        if let Some(name) = self.archive_name {
            config.pack.archive_name = name;
        }
        if let Some(max_len) = self.max_len {
            config.name.max_len = max_len;
        }
        config.validate()?;

        let uploads = self
            .files
            .iter()
            .map(|path| read_upload(path))
            .collect::<Result<Vec<_>>>()?;

        let disposition = prepare(uploads, self.force_archive, &config.name)
            .context("failed to normalize files")?;
        let download = disposition
            .into_download(&config.pack)
            .context("failed to package files")?;

        let dest = self.out_dir.join(&download.file_name);
        write_output(&dest, &download.bytes, self.overwrite)?;
        info!(path = %dest.display(), bytes = download.bytes.len(), "wrote output");
        println!("{}", dest.display());
        Ok(())
    }
}

fn read_upload(path: &Path) -> Result<Upload> {
    let name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let Some(name) = name.to_str() else {
        bail!("file name of {} is not valid UTF-8", path.display());
    };
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Upload::new(name, bytes))
}

/// Write through a temp file in the destination directory so a failed run never
/// leaves a partial output behind.
fn write_output(dest: &Path, bytes: &[u8], overwrite: bool) -> Result<()> {
    let dir = dest.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".fnorm-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let persisted = if overwrite {
        tmp.persist(dest)
    } else {
        tmp.persist_noclobber(dest)
    };
    persisted
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write {}", dest.display()))?;
    Ok(())
}
