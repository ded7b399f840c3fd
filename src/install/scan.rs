use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use super::request::InstallSettings;

/// Every regular file under `root` whose name carries a recognized suffix.
/// Entries are visited depth-first, sorted by name within each directory.
pub fn find_candidates(root: &Path, settings: &InstallSettings) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("walk error in staging dir: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| settings.is_candidate_name(name))
        })
        .map(|entry| entry.into_path())
        .collect()
}
