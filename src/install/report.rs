/// A candidate that could not be copied, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub file_name: String,
    pub reason: String,
}

impl FailedFile {
    pub fn new(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            reason: reason.into(),
        }
    }
}

/// Per-run result. Skipped files (declined overwrites) appear in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub failed: Vec<FailedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// At least one candidate was found and processed.
    Completed(InstallReport),
    /// The archive held no file with a recognized suffix.
    NoCandidates,
}
