//! Load and save the registry and settings documents.
//!
//! Both documents are YAML. A missing or empty document loads as the empty
//! value; a document that is present but not the expected shape is an error.
//! Saving always replaces the whole document.

mod error;

pub use error::StoreError;

use serde_yaml::{Mapping, Value};
use std::path::Path;

use crate::paths::ConfigPaths;
use crate::registry::Registry;
use crate::settings::Settings;

/// Create the config directory and any missing document. Existing documents
/// are left untouched, so running this repeatedly is harmless.
pub fn ensure_initialized(paths: &ConfigPaths) -> Result<(), StoreError> {
    std::fs::create_dir_all(&paths.dir).map_err(|e| StoreError::io(&paths.dir, e))?;

    if !paths.configlist.exists() {
        tracing::info!(path = %paths.configlist.display(), "creating empty registry");
        write(&paths.configlist, "")?;
    }
    if !paths.settings.exists() {
        tracing::info!(path = %paths.settings.display(), "creating default settings");
        let content = serde_yaml::to_string(&Settings::initial())
            .map_err(|e| StoreError::parse(&paths.settings, e))?;
        write(&paths.settings, &content)?;
    }
    Ok(())
}

/// Read the registry document at `path`.
pub fn load_registry(path: &Path) -> Result<Registry, StoreError> {
    let Some(value) = read_document(path)? else {
        return Ok(Registry::new());
    };
    let Value::Mapping(mapping) = value else {
        return Err(StoreError::malformed(path, "expected a mapping of labels to paths"));
    };

    let mut registry = Registry::new();
    for (key, value) in mapping {
        let label = scalar_to_string(&key)
            .ok_or_else(|| StoreError::malformed(path, "labels must be plain strings"))?;
        if label.is_empty() {
            return Err(StoreError::malformed(path, "labels must not be empty"));
        }
        let target = scalar_to_string(&value).ok_or_else(|| {
            StoreError::malformed(path, format!("path for `{label}` must be a plain string"))
        })?;
        registry.insert(label, target);
    }
    tracing::debug!(path = %path.display(), entries = registry.len(), "loaded registry");
    Ok(registry)
}

/// Overwrite the registry document at `path` with `registry`, in order.
pub fn save_registry(path: &Path, registry: &Registry) -> Result<(), StoreError> {
    let mapping: Mapping = registry
        .iter()
        .map(|e| (Value::String(e.label.clone()), Value::String(e.path.clone())))
        .collect();
    let content = serde_yaml::to_string(&mapping).map_err(|e| StoreError::parse(path, e))?;
    write(path, &content)?;
    tracing::debug!(path = %path.display(), entries = registry.len(), "saved registry");
    Ok(())
}

/// Read the settings document at `path`.
pub fn load_settings(path: &Path) -> Result<Settings, StoreError> {
    let Some(value) = read_document(path)? else {
        return Ok(Settings::default());
    };
    if !value.is_mapping() {
        return Err(StoreError::malformed(path, "expected a mapping of settings"));
    }
    let settings: Settings =
        serde_yaml::from_value(value).map_err(|e| StoreError::parse(path, e))?;
    tracing::debug!(path = %path.display(), editor = ?settings.editor, "loaded settings");
    Ok(settings)
}

/// Parse the document at `path`, returning `None` when it is missing, empty or `null`.
fn read_document(path: &Path) -> Result<Option<Value>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_yaml::from_str(&content).map_err(|e| StoreError::parse(path, e))?;
    Ok(if value.is_null() { None } else { Some(value) })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn write(path: &Path, content: &str) -> Result<(), StoreError> {
    std::fs::write(path, content).map_err(|e| StoreError::io(path, e))
}
