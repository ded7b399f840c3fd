use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::Result;
use zip::ZipArchive;

use super::error::InstallError;

/// Unpack every entry of `archive_path` under `dest`, keeping the archive's
/// directory layout. Returns the number of files written.
pub fn extract_into(archive_path: &Path, dest: &Path) -> Result<usize, InstallError> {
    let result = (|| -> Result<usize> {
        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut count = 0usize;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
                tracing::warn!("skipping archive entry outside staging dir: {}", entry.name());
                continue;
            };

            let out_path = dest.join(relative);
            if entry.is_dir() {
                fs::create_dir_all(&out_path)?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
            tracing::debug!("extracted {}", out_path.display());
            count += 1;
        }

        Ok(count)
    })();

    result.map_err(|err| InstallError::extraction(archive_path, format!("{err:#}")))
}
