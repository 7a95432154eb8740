//! Self-service recovery when the configured editor cannot be started.
//!
//! The flow offers to open the settings document in [`FALLBACK_EDITOR`],
//! reloads the settings and then offers to retry the previous action once.
//! No step leads back to an earlier one, so there is at most one retry.

use std::io;
use std::path::Path;

use crate::launcher::{ExitResult, Launcher};
use crate::paths::ConfigPaths;
use crate::store;
use crate::terminal::{ask_yes_no, Line, Terminal, Tone};

/// Last-resort editor used to repair the settings document.
pub const FALLBACK_EDITOR: &str = "nano";

/// Where the flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user did not want to fix the settings now.
    Declined,
    /// The fallback editor could not be started either.
    FallbackMissing,
    /// The settings were edited but no longer load.
    SettingsUnreadable(String),
    /// The settings were fixed but the user did not want to retry.
    RetryDeclined,
    /// The previous action was retried once with `editor`.
    Retried {
        /// Editor used for the retry.
        editor: String,
        /// How the retry went.
        result: ExitResult,
    },
}

/// Result of a recovery flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// Editor resolved from the reloaded settings, when the fallback editor ran.
    pub editor: Option<String>,
    /// Where the flow ended.
    pub outcome: Outcome,
}

enum Step {
    Report,
    OfferFix,
    OpenFallback,
    OfferRetry(String),
    Retry(String),
    Done(Outcome),
}

/// Run the recovery flow after `editor` failed to open `target`.
pub fn recover<T, L>(
    terminal: &mut T,
    launcher: &mut L,
    paths: &ConfigPaths,
    env_editor: Option<&str>,
    editor: &str,
    target: &Path,
) -> io::Result<Recovery>
where
    T: Terminal + ?Sized,
    L: Launcher + ?Sized,
{
    let settings_name = paths.settings_name();
    let mut updated = None;
    let mut step = Step::Report;

    let outcome = loop {
        step = match step {
            Step::Report => {
                tracing::warn!(%editor, "editor not found");
                terminal.write_line(&Line::blank())?;
                terminal.write_line(&Line::centered(Tone::Error, format!("{editor} not found")))?;
                Step::OfferFix
            }
            Step::OfferFix => {
                let question = format!("Open {settings_name} in {FALLBACK_EDITOR} to fix it now?");
                if ask_yes_no(terminal, &question, true)? {
                    Step::OpenFallback
                } else {
                    Step::Done(Outcome::Declined)
                }
            }
            Step::OpenFallback => match launcher.open(FALLBACK_EDITOR, &paths.settings) {
                ExitResult::NotFound => Step::Done(Outcome::FallbackMissing),
                ExitResult::Exited(code) => {
                    tracing::debug!(code, "fallback editor closed, reloading settings");
                    match store::load_settings(&paths.settings) {
                        Ok(settings) => {
                            let editor = settings.resolve_editor(env_editor);
                            updated = Some(editor.clone());
                            Step::OfferRetry(editor)
                        }
                        Err(e) => Step::Done(Outcome::SettingsUnreadable(e.to_string())),
                    }
                }
            },
            Step::OfferRetry(editor) => {
                let question = "Retry the previous action with the updated editor?";
                if ask_yes_no(terminal, question, true)? {
                    Step::Retry(editor)
                } else {
                    Step::Done(Outcome::RetryDeclined)
                }
            }
            Step::Retry(editor) => {
                let result = launcher.open(&editor, target);
                Step::Done(Outcome::Retried { editor, result })
            }
            Step::Done(outcome) => break outcome,
        };
    };

    tracing::debug!(?outcome, "recovery finished");
    Ok(Recovery {
        editor: updated,
        outcome,
    })
}

impl Recovery {
    /// Status line to show once the flow has ended, if any.
    #[must_use]
    pub fn status(&self, settings_name: &str) -> Option<Line> {
        let text = match &self.outcome {
            Outcome::Declined => {
                return Some(Line::centered(
                    Tone::Plain,
                    format!("Set a valid editor in {settings_name} and try again."),
                ))
            }
            Outcome::FallbackMissing => {
                format!("{FALLBACK_EDITOR} not found. Please edit {settings_name} manually.")
            }
            Outcome::SettingsUnreadable(reason) => reason.clone(),
            Outcome::RetryDeclined => return None,
            Outcome::Retried { editor, result } => match result {
                ExitResult::NotFound => {
                    format!("{editor} still not found. Please verify your settings.")
                }
                ExitResult::Exited(0) => return None,
                ExitResult::Exited(code) => super::exited_with(editor, *code),
            },
        };
        Some(Line::centered(Tone::Error, text))
    }
}
