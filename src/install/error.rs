use std::io;
use std::path::PathBuf;

/// Fatal failures of an install run. Per-file copy problems are not errors;
/// they are collected into the report.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("cannot create destination folder {}: {source}", path.display())]
    CreateDestination { path: PathBuf, source: io::Error },
    #[error("destination folder {} is not writable", .0.display())]
    PermissionDenied(PathBuf),
    #[error("cannot prepare staging directory: {0}")]
    Workspace(#[source] io::Error),
    #[error("cannot extract {}: {reason}", path.display())]
    Extraction { path: PathBuf, reason: String },
}

impl InstallError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn extraction(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Extraction {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
