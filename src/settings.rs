//! The settings record and editor resolution.

use serde::{Deserialize, Serialize};

/// Editor used when neither the settings document nor `$EDITOR` name one.
pub const DEFAULT_EDITOR: &str = "nano";

/// Environment variable consulted as the second tier of editor resolution.
pub const EDITOR_ENV: &str = "EDITOR";

/// Contents of `settings.yaml`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name or path of the editor executable, optionally followed by arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Settings {
    /// Settings written into a freshly initialized settings document.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            editor: Some(DEFAULT_EDITOR.to_string()),
        }
    }

    /// Resolve the editor command: settings value, then `env_editor`, then
    /// [`DEFAULT_EDITOR`]. Empty values count as absent.
    #[must_use]
    pub fn resolve_editor(&self, env_editor: Option<&str>) -> String {
        [self.editor.as_deref(), env_editor]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|e| !e.is_empty())
            .unwrap_or(DEFAULT_EDITOR)
            .to_string()
    }
}

/// Current value of `$EDITOR`, if set.
#[must_use]
pub fn env_editor() -> Option<String> {
    std::env::var(EDITOR_ENV).ok()
}
