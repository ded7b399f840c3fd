//! Archive-to-Mods-folder installation.
//!
//! One run validates the request, unpacks the archive into a private staging
//! directory, picks out files with a recognized suffix and copies them flat
//! into the destination. The staging directory is removed on every exit path.

pub mod archive;
pub mod error;
pub mod report;
pub mod request;
pub mod scan;
pub mod summary;

use std::collections::HashSet;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use tempfile::TempDir;

pub use error::InstallError;
pub use report::{FailedFile, InstallOutcome, InstallReport};
pub use request::{InstallRequest, InstallSettings};
pub use summary::{Summary, SummaryLevel};

/// Asked once per candidate whose target already exists in the destination.
/// Returning `false` skips that file.
pub trait ConfirmOverwrite {
    fn confirm_overwrite(&mut self, file_name: &str) -> bool;
}

impl<F> ConfirmOverwrite for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm_overwrite(&mut self, file_name: &str) -> bool {
        self(file_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Installer {
    settings: InstallSettings,
}

impl Installer {
    pub fn new(settings: InstallSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &InstallSettings {
        &self.settings
    }

    pub fn install<C>(
        &self,
        request: &InstallRequest,
        confirm: &mut C,
    ) -> Result<InstallOutcome, InstallError>
    where
        C: ConfirmOverwrite + ?Sized,
    {
        self.validate_archive(&request.archive_path)?;
        prepare_destination(&request.destination_dir)?;

        tracing::info!(
            "installing {} into {}",
            request.archive_path.display(),
            request.destination_dir.display()
        );

        let workspace = self.workspace()?;
        let extracted = archive::extract_into(&request.archive_path, workspace.path())?;
        let candidates = scan::find_candidates(workspace.path(), &self.settings);
        tracing::debug!(
            "extracted {extracted} files, {} candidates",
            candidates.len()
        );

        if candidates.is_empty() {
            close_workspace(workspace);
            tracing::info!("no installable files in {}", request.archive_path.display());
            return Ok(InstallOutcome::NoCandidates);
        }

        let mut report = InstallReport::default();
        // Names written by this run overwrite each other without asking.
        let mut written = HashSet::new();
        for source in candidates {
            let Some(file_name) = source
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
            else {
                continue;
            };

            let target = request.destination_dir.join(&file_name);
            if target.exists()
                && !written.contains(&file_name)
                && !confirm.confirm_overwrite(&file_name)
            {
                tracing::debug!("keeping existing {file_name}");
                continue;
            }

            match copy_preserving(&source, &target) {
                Ok(()) if target.exists() => {
                    written.insert(file_name.clone());
                    report.installed.push(file_name);
                }
                Ok(()) => report
                    .failed
                    .push(FailedFile::new(file_name, "file missing after copy")),
                Err(err) => {
                    tracing::warn!("copy of {file_name} failed: {err}");
                    report.failed.push(FailedFile::new(file_name, err.to_string()));
                }
            }
        }

        close_workspace(workspace);
        tracing::info!(
            "install finished: {} installed, {} failed",
            report.installed.len(),
            report.failed.len()
        );

        Ok(InstallOutcome::Completed(report))
    }

    fn validate_archive(&self, path: &Path) -> Result<(), InstallError> {
        let extension = &self.settings.archive_extension;
        if path.as_os_str().is_empty() || !self.settings.is_archive(path) {
            return Err(InstallError::invalid_input(format!(
                "Please select a valid .{extension} file."
            )));
        }

        if !path.is_file() {
            return Err(InstallError::invalid_input(format!(
                "Selected file does not exist: {}",
                path.display()
            )));
        }

        Ok(())
    }

    fn workspace(&self) -> Result<TempDir, InstallError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("ts4mod-");

        match &self.settings.staging_dir {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(InstallError::Workspace)?;
                builder.tempdir_in(dir)
            }
            None => builder.tempdir(),
        }
        .map_err(InstallError::Workspace)
    }
}

fn prepare_destination(dir: &Path) -> Result<(), InstallError> {
    if dir.as_os_str().is_empty() {
        return Err(InstallError::invalid_input(
            "Please select a destination folder.",
        ));
    }

    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|source| InstallError::CreateDestination {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::info!("created destination {}", dir.display());
    }

    // An anonymous file vanishes on drop, so the probe leaves nothing behind.
    tempfile::tempfile_in(dir).map_err(|err| {
        tracing::debug!("write probe in {} failed: {err}", dir.display());
        InstallError::PermissionDenied(dir.to_path_buf())
    })?;

    Ok(())
}

/// Copy contents and permissions, then carry over access and modification
/// times. Timestamps are best effort.
fn copy_preserving(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;

    let times = (|| -> io::Result<()> {
        let metadata = fs::metadata(source)?;
        let times = FileTimes::new()
            .set_accessed(metadata.accessed()?)
            .set_modified(metadata.modified()?);
        File::options().write(true).open(target)?.set_times(times)
    })();

    if let Err(err) = times {
        tracing::debug!("could not keep timestamps on {}: {err}", target.display());
    }

    Ok(())
}

fn close_workspace(workspace: TempDir) {
    let path = workspace.path().to_path_buf();
    if let Err(err) = workspace.close() {
        tracing::warn!("failed to remove staging dir {}: {err}", path.display());
    }
}
