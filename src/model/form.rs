use std::path::{Path, PathBuf};

use crate::install::InstallRequest;
use crate::model::config::expand_tilde;

/// Focusable widgets of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Archive,
    Destination,
    BrowseFile,
    BrowseFolder,
    Install,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Archive,
        Focus::Destination,
        Focus::BrowseFile,
        Focus::BrowseFolder,
        Focus::Install,
    ];

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(Self::ORDER.len() - 1)
    }

    fn step(self, by: usize) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + by) % Self::ORDER.len()]
    }
}

/// What the user has typed or picked so far.
#[derive(Debug, Clone, Default)]
pub struct InstallForm {
    pub archive_input: String,
    pub destination_input: String,
    pub focus: Focus,
}

impl InstallForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Archive => Some(&mut self.archive_input),
            Focus::Destination => Some(&mut self.destination_input),
            _ => None,
        }
    }

    pub fn set_archive(&mut self, path: &Path) {
        self.archive_input = path.display().to_string();
    }

    pub fn set_destination(&mut self, path: &Path) {
        self.destination_input = path.display().to_string();
    }

    /// Build the request from the current inputs. A blank destination uses
    /// `default_destination`.
    pub fn request(&self, default_destination: &Path) -> InstallRequest {
        let archive = self.archive_input.trim();
        let archive_path = if archive.is_empty() {
            PathBuf::new()
        } else {
            expand_tilde(archive)
        };

        let destination = self.destination_input.trim();
        let destination_dir = if destination.is_empty() {
            default_destination.to_path_buf()
        } else {
            expand_tilde(destination)
        };

        InstallRequest::new(archive_path, destination_dir)
    }
}
