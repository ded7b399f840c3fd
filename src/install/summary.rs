use super::error::InstallError;
use super::report::{InstallOutcome, InstallReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLevel {
    Success,
    Partial,
    Warning,
    Error,
}

/// The one message shown after an install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub level: SummaryLevel,
    pub title: String,
    pub lines: Vec<String>,
}

impl Summary {
    pub fn from_result(result: &Result<InstallOutcome, InstallError>) -> Self {
        match result {
            Ok(InstallOutcome::Completed(report)) => Self::from_report(report),
            Ok(InstallOutcome::NoCandidates) => Self {
                level: SummaryLevel::Warning,
                title: "No Mod Installed".to_string(),
                lines: vec!["No valid files were found in the archive.".to_string()],
            },
            Err(err) => Self {
                level: SummaryLevel::Error,
                title: "Error".to_string(),
                lines: vec!["Error installing the mod:".to_string(), err.to_string()],
            },
        }
    }

    fn from_report(report: &InstallReport) -> Self {
        let mut lines = Vec::new();

        if !report.installed.is_empty() {
            lines.push("Files installed:".to_string());
            lines.push(String::new());
            lines.extend(report.installed.iter().cloned());
        }

        if !report.failed.is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push("Errors with:".to_string());
            lines.extend(
                report
                    .failed
                    .iter()
                    .map(|failed| format!("{} - {}", failed.file_name, failed.reason)),
            );
        }

        let (level, title) = match (report.installed.is_empty(), report.failed.is_empty()) {
            (false, true) => (SummaryLevel::Success, "Installation Finished"),
            (false, false) => (SummaryLevel::Partial, "Installation Finished"),
            (true, false) => (SummaryLevel::Error, "Installation Failed"),
            (true, true) => {
                lines.push("Every matching file already existed and was kept.".to_string());
                (SummaryLevel::Warning, "Nothing Installed")
            }
        };

        Self {
            level,
            title: title.to_string(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::install::FailedFile;

    use super::*;

    fn report(installed: &[&str], failed: &[(&str, &str)]) -> InstallReport {
        InstallReport {
            installed: installed.iter().map(|s| s.to_string()).collect(),
            failed: failed
                .iter()
                .map(|(name, reason)| FailedFile::new(*name, *reason))
                .collect(),
        }
    }

    #[test]
    fn all_installed_is_success() {
        let summary = Summary::from_result(&Ok(InstallOutcome::Completed(report(
            &["a.package", "b.ts4script"],
            &[],
        ))));

        assert_eq!(summary.level, SummaryLevel::Success);
        assert_eq!(summary.title, "Installation Finished");
        assert_eq!(
            summary.lines,
            vec!["Files installed:", "", "a.package", "b.ts4script"]
        );
    }

    #[test]
    fn partial_install_names_failures() {
        let summary = Summary::from_result(&Ok(InstallOutcome::Completed(report(
            &["a.package"],
            &[("b.package", "Is a directory")],
        ))));

        assert_eq!(summary.level, SummaryLevel::Partial);
        assert!(summary.lines.contains(&"Errors with:".to_string()));
        assert!(summary.lines.contains(&"b.package - Is a directory".to_string()));
    }

    #[test]
    fn only_failures_is_error() {
        let summary = Summary::from_result(&Ok(InstallOutcome::Completed(report(
            &[],
            &[("b.package", "denied")],
        ))));

        assert_eq!(summary.level, SummaryLevel::Error);
        assert_eq!(summary.title, "Installation Failed");
        assert_eq!(summary.lines[0], "Errors with:");
    }

    #[test]
    fn all_skipped_differs_from_no_candidates() {
        let skipped =
            Summary::from_result(&Ok(InstallOutcome::Completed(InstallReport::default())));
        let none = Summary::from_result(&Ok(InstallOutcome::NoCandidates));

        assert_eq!(skipped.title, "Nothing Installed");
        assert_eq!(none.title, "No Mod Installed");
        assert_ne!(skipped.lines, none.lines);
    }

    #[test]
    fn fatal_error_carries_message() {
        let summary = Summary::from_result(&Err(InstallError::invalid_input(
            "Please select a valid .zip file.",
        )));

        assert_eq!(summary.level, SummaryLevel::Error);
        assert_eq!(
            summary.lines,
            vec!["Error installing the mod:", "Please select a valid .zip file."]
        );
    }
}
