//! `wtconf --add <path>`: register a file without entering the menu.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::paths::ConfigPaths;
use crate::registry::default_label;
use crate::store;

/// A registry entry written by [`add_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    /// Label derived from the file name.
    pub label: String,
    /// Absolute path that was stored.
    pub path: PathBuf,
    /// Path previously stored under the same label, if it was overwritten.
    pub replaced: Option<String>,
}

/// Resolve `raw` to an absolute path, store it under its default label and
/// persist the registry. An existing entry with the same label is overwritten.
///
/// The label comes from the name as typed, so a symlink keeps its own name
/// while the stored path points at its target. Arguments without a usable
/// name (`.`, `..`) take the label of the resolved path.
pub fn add_entry(paths: &ConfigPaths, raw: &Path) -> Result<Added> {
    let path = absolutize(raw)?;
    let label = default_label(&expand_home(raw)?)
        .or_else(|| default_label(&path))
        .with_context(|| format!("Cannot derive a label from {}", path.display()))?;

    let mut registry = store::load_registry(&paths.configlist)?;
    let replaced = registry.insert(label.clone(), path.to_string_lossy().into_owned());
    if let Some(old) = &replaced {
        tracing::warn!(%label, %old, new = %path.display(), "overwriting existing entry");
    }
    store::save_registry(&paths.configlist, &registry)?;

    Ok(Added {
        label,
        path,
        replaced,
    })
}

/// Expand a leading `~`, make the path absolute and resolve symlinks as far
/// as the path exists.
pub fn absolutize(raw: &Path) -> Result<PathBuf> {
    let expanded = expand_home(raw)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .context("Could not determine current directory")?
            .join(expanded)
    };
    let normalized = normalize(&absolute);

    if let Ok(canonical) = normalized.canonicalize() {
        return Ok(canonical);
    }
    match (normalized.parent(), normalized.file_name()) {
        (Some(parent), Some(name)) => Ok(parent
            .canonicalize()
            .map_or_else(|_| normalized.clone(), |p| p.join(name))),
        _ => Ok(normalized),
    }
}

fn expand_home(raw: &Path) -> Result<PathBuf> {
    let mut components = raw.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir().context("Could not determine home directory")?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(raw.to_path_buf()),
    }
}

/// Remove `.` and fold `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
