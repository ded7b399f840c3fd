use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::install::InstallSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseTarget {
    /// Pick an archive file.
    File,
    /// Pick a destination folder.
    Folder,
}

#[derive(Debug, Clone)]
pub struct BrowserEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

/// One-directory-at-a-time picker used for both browse actions.
pub struct FileBrowser {
    pub target: BrowseTarget,
    cwd: PathBuf,
    settings: InstallSettings,
    pub entries: Vec<BrowserEntry>,
    pub selected: usize,
}

impl FileBrowser {
    pub fn new(target: BrowseTarget, start: PathBuf, settings: InstallSettings) -> Result<Self> {
        let mut browser = Self {
            target,
            cwd: start,
            settings,
            entries: Vec::new(),
            selected: 0,
        };

        browser.refresh()?;
        Ok(browser)
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.entries.clear();

        if let Some(parent) = self.cwd.parent() {
            self.entries.push(BrowserEntry {
                path: parent.to_path_buf(),
                name: "..".to_string(),
                is_dir: true,
            });
        }

        let mut listed: Vec<BrowserEntry> = WalkBuilder::new(&self.cwd)
            .max_depth(Some(1))
            .standard_filters(false)
            .hidden(true)
            .build()
            .flatten()
            .filter_map(|entry| {
                let path = entry.path().to_path_buf();
                if path == self.cwd {
                    return None;
                }

                let metadata = entry.metadata().ok()?;
                let is_dir = metadata.is_dir();
                if !is_dir && !self.shows_file(&path) {
                    return None;
                }

                let name = entry.file_name().to_str()?.to_string();
                Some(BrowserEntry { path, name, is_dir })
            })
            .collect();

        listed.sort_by(|a, b| match (a.is_dir, b.is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });
        self.entries.extend(listed);

        if self.entries.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.entries.len() {
            self.selected = self.entries.len() - 1;
        }

        Ok(())
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.selected = 0;
            return;
        }

        let max = self.entries.len().saturating_sub(1) as isize;
        let next = (self.selected as isize + delta).clamp(0, max);
        self.selected = next as usize;
    }

    pub fn selected_entry(&self) -> Option<&BrowserEntry> {
        self.entries.get(self.selected)
    }

    /// Descend into the selected directory, or return the selected file when
    /// picking archives.
    pub fn enter(&mut self) -> Result<Option<PathBuf>> {
        let Some(entry) = self.selected_entry().cloned() else {
            return Ok(None);
        };

        if entry.is_dir {
            self.change_dir(entry.path)?;
            return Ok(None);
        }

        Ok((self.target == BrowseTarget::File).then_some(entry.path))
    }

    pub fn ascend(&mut self) -> Result<()> {
        match self.cwd.parent() {
            Some(parent) => self.change_dir(parent.to_path_buf()),
            None => Ok(()),
        }
    }

    fn change_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.cwd = dir;
        self.selected = 0;
        self.refresh()
    }

    fn shows_file(&self, path: &Path) -> bool {
        self.target == BrowseTarget::File && self.settings.is_archive(path)
    }
}
