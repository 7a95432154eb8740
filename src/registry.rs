//! The ordered label → path mapping shown in the menu.

use std::path::Path;

/// One registered config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique, non-empty display label.
    pub label: String,
    /// Path handed to the editor.
    pub path: String,
}

/// Registered config files in insertion (display) order. Labels are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Look up an entry by its 1-based menu id.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Entry> {
        id.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    #[cfg(test)]
    pub(crate) fn find(&self, label: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Insert or overwrite `label`. An existing label keeps its position and
    /// the previous path is returned.
    pub fn insert(&mut self, label: impl Into<String>, path: impl Into<String>) -> Option<String> {
        let label = label.into();
        let path = path.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.label == label) {
            return Some(std::mem::replace(&mut existing.path, path));
        }
        self.entries.push(Entry { label, path });
        None
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Into<String>, P: Into<String>> FromIterator<(L, P)> for Registry {
    fn from_iter<I: IntoIterator<Item = (L, P)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (label, path) in iter {
            registry.insert(label, path);
        }
        registry
    }
}

/// Default label for a file: its base name without the last extension.
/// `/etc/foo.conf` → `foo`, `~/.bashrc` → `.bashrc`.
#[must_use]
pub fn default_label(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}
