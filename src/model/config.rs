use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::install::InstallSettings;

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub install: InstallConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    pub default_destination: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstallConfig {
    pub archive_extension: String,
    pub suffixes: Vec<String>,
    pub staging_dir: String,
}

/// Colors as written in the config file (`#RRGGBB` or a color name).
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub background: String,
    pub text: String,
    pub input: String,
    pub accent: String,
    pub button: String,
    pub button_text: String,
    pub error: String,
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        let user = match config_path() {
            Some(path) if path.exists() => Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
            ),
            _ => None,
        };

        Self::from_layers(user.as_deref())
    }

    /// Merge an optional user TOML document over the built-in defaults.
    /// Tables merge key by key, so a user file may set a single value.
    pub fn from_layers(user: Option<&str>) -> Result<Self> {
        let mut merged: toml::Table = toml::from_str(DEFAULTS)?;

        if let Some(user) = user {
            let user: toml::Table = toml::from_str(user).context("parsing user config")?;
            merge_tables(&mut merged, user);
        }

        let config: AppConfig = toml::Value::Table(merged).try_into()?;
        Ok(config)
    }

    /// Where mods go when the destination field is left blank.
    pub fn default_destination(&self) -> PathBuf {
        let configured = self.general.default_destination.trim();
        if configured.is_empty() {
            default_mods_dir()
        } else {
            expand_tilde(configured)
        }
    }

    pub fn install_settings(&self) -> InstallSettings {
        let staging = self.install.staging_dir.trim();
        let staging_dir = (!staging.is_empty()).then(|| expand_tilde(staging));

        InstallSettings::new(
            &self.install.archive_extension,
            self.install.suffixes.clone(),
            staging_dir,
        )
    }

    pub fn log_filter(&self) -> String {
        format!("ts4mod={}", self.general.log_level.trim())
    }
}

/// Config file path: `<config dir>/ts4mod/config.toml`
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ts4mod").map(|d| d.config_dir().join("config.toml"))
}

/// `<Documents>/Electronic Arts/The Sims 4/Mods`. The documents folder comes
/// from the OS, so localized names ("Documentos", "Dokumente") resolve on
/// their own.
pub fn default_mods_dir() -> PathBuf {
    let documents = directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .or_else(|| dirs_home().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("Documents"));

    documents
        .join("Electronic Arts")
        .join("The Sims 4")
        .join("Mods")
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if !path.starts_with('~') {
        return PathBuf::from(path);
    }

    match dirs_home() {
        Some(home) => PathBuf::from(path.replacen('~', &home.to_string_lossy(), 1)),
        None => PathBuf::from(path),
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(overlay_table) = value {
            if let Some(toml::Value::Table(base_table)) = base.get_mut(&key) {
                merge_tables(base_table, overlay_table);
                continue;
            }
            base.insert(key, toml::Value::Table(overlay_table));
        } else {
            base.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = AppConfig::from_layers(None).unwrap();
        assert_eq!(config.install.archive_extension, "zip");
        assert_eq!(config.install.suffixes, vec![".package", ".ts4script"]);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.theme.background, "#F0F4F8");
    }

    #[test]
    fn partial_user_config_overrides_single_keys() {
        let config = AppConfig::from_layers(Some(
            r##"
[general]
default_destination = "/games/Mods"

[theme]
button = "#112233"
"##,
        ))
        .unwrap();

        assert_eq!(config.default_destination(), PathBuf::from("/games/Mods"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.theme.button, "#112233");
        assert_eq!(config.theme.background, "#F0F4F8");
        assert_eq!(config.install.archive_extension, "zip");
    }

    #[test]
    fn invalid_user_config_is_an_error() {
        assert!(AppConfig::from_layers(Some("[general\nbroken")).is_err());
        assert!(AppConfig::from_layers(Some("[install]\nsuffixes = 3")).is_err());
    }

    #[test]
    fn blank_default_destination_points_at_mods_folder() {
        let config = AppConfig::from_layers(None).unwrap();
        let dest = config.default_destination();
        assert!(dest.ends_with("Electronic Arts/The Sims 4/Mods"));
    }

    #[test]
    fn install_settings_follow_config() {
        let config = AppConfig::from_layers(Some(
            r#"
[install]
archive_extension = ".ZIP"
suffixes = [".package"]
staging_dir = "/var/tmp/ts4mod"
"#,
        ))
        .unwrap();

        let settings = config.install_settings();
        assert_eq!(settings.archive_extension, "ZIP");
        assert_eq!(settings.suffixes, vec![".package"]);
        assert_eq!(settings.staging_dir, Some(PathBuf::from("/var/tmp/ts4mod")));

        let defaults = AppConfig::from_layers(None).unwrap().install_settings();
        assert_eq!(defaults.staging_dir, None);
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_tilde("~/Mods");
        if let Some(home) = dirs_home() {
            assert_eq!(expanded, home.join("Mods"));
        }
        assert_eq!(expand_tilde("/abs/Mods"), PathBuf::from("/abs/Mods"));
    }

    #[test]
    fn log_filter_targets_binary() {
        let config = AppConfig::from_layers(Some("[general]\nlog_level = \"debug\"")).unwrap();
        assert_eq!(config.log_filter(), "ts4mod=debug");
    }
}
