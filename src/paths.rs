//! Location of the per-user configuration directory and its two documents.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wtconf";
const SETTINGS_FILE: &str = "settings.yaml";
const CONFIGLIST_FILE: &str = "configlist.yaml";

/// Paths of the settings and registry documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Directory holding both documents, e.g. `~/.config/wtconf`.
    pub dir: PathBuf,
    /// The settings document (`settings.yaml`).
    pub settings: PathBuf,
    /// The registry document (`configlist.yaml`).
    pub configlist: PathBuf,
}

impl ConfigPaths {
    /// Resolve the paths from `$XDG_CONFIG_HOME`, falling back to `~/.config`.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
            .context("Could not determine home directory")
    }

    /// Pick the config base from an optional `XDG_CONFIG_HOME` value and home directory.
    /// An empty `XDG_CONFIG_HOME` is treated as unset.
    #[must_use]
    pub fn resolve(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<Self> {
        let base = match xdg_config_home.filter(|v| !v.is_empty()) {
            Some(xdg) => PathBuf::from(xdg),
            None => home?.join(".config"),
        };
        Some(Self::under(&base))
    }

    /// Lay the documents out under `base/wtconf/`.
    #[must_use]
    pub fn under(base: &Path) -> Self {
        let dir = base.join(APP_DIR);
        Self {
            settings: dir.join(SETTINGS_FILE),
            configlist: dir.join(CONFIGLIST_FILE),
            dir,
        }
    }

    /// File name of the settings document, for user-facing messages.
    #[must_use]
    pub fn settings_name(&self) -> String {
        self.settings
            .file_name()
            .map_or_else(|| SETTINGS_FILE.to_string(), |n| n.to_string_lossy().into_owned())
    }
}
