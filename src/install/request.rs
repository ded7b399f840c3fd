use std::path::{Path, PathBuf};

/// What to install and where. Built by the form at the moment the user
/// presses install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub archive_path: PathBuf,
    pub destination_dir: PathBuf,
}

impl InstallRequest {
    pub fn new(archive_path: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            destination_dir: destination_dir.into(),
        }
    }
}

/// Fixed knobs of the install operation, sourced from `[install]` in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSettings {
    /// Archive extension without the leading dot.
    pub archive_extension: String,
    /// File name suffixes that mark an installable mod file.
    pub suffixes: Vec<String>,
    /// Where staging directories are created. System temp dir when `None`.
    pub staging_dir: Option<PathBuf>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            archive_extension: "zip".to_string(),
            suffixes: vec![".package".to_string(), ".ts4script".to_string()],
            staging_dir: None,
        }
    }
}

impl InstallSettings {
    pub fn new(
        archive_extension: &str,
        suffixes: Vec<String>,
        staging_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            archive_extension: archive_extension.trim().trim_start_matches('.').to_string(),
            suffixes,
            staging_dir,
        }
    }

    pub fn is_archive(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.archive_extension))
    }

    pub fn is_candidate_name(&self, file_name: &str) -> bool {
        let name = file_name.to_ascii_lowercase();
        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(&suffix.to_ascii_lowercase()))
    }
}
