//! The interactive menu loop.
//!
//! Each cycle renders the menu, reads one command and dispatches it. Opening
//! an entry, the settings or the registry runs the editor in the foreground,
//! falls back to the recovery flow when the editor is missing, and reloads
//! both documents after a clean exit.

mod command;
mod menu;
mod recovery;

pub use command::{Command, SelectionError};
pub use menu::render;
pub use recovery::{recover, Outcome, Recovery, FALLBACK_EDITOR};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::launcher::{ExitResult, Launcher};
use crate::paths::ConfigPaths;
use crate::registry::Registry;
use crate::store::{self, StoreError};
use crate::terminal::{Line, Terminal, Tone};

const PROMPT: &str = "> ";

/// In-memory state owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Current copy of the registry.
    pub registry: Registry,
    /// Resolved editor command.
    pub editor: String,
    /// Message shown once on the next render.
    pub status: Option<Line>,
}

impl SessionState {
    /// Load the registry and resolve the editor from disk.
    pub fn load(paths: &ConfigPaths, env_editor: Option<&str>) -> Result<Self, StoreError> {
        let registry = store::load_registry(&paths.configlist)?;
        let editor = store::load_settings(&paths.settings)?.resolve_editor(env_editor);
        Ok(Self {
            registry,
            editor,
            status: None,
        })
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Leave the loop.
    Quit,
}

/// The menu controller.
pub struct Session<T, L> {
    paths: ConfigPaths,
    env_editor: Option<String>,
    terminal: T,
    launcher: L,
    state: SessionState,
}

impl<T: Terminal, L: Launcher> Session<T, L> {
    /// Load the persisted state and build a session around it.
    pub fn new(
        paths: ConfigPaths,
        env_editor: Option<String>,
        terminal: T,
        launcher: L,
    ) -> Result<Self, StoreError> {
        let state = SessionState::load(&paths, env_editor.as_deref())?;
        tracing::info!(entries = state.registry.len(), editor = %state.editor, "session started");
        Ok(Self {
            paths,
            env_editor,
            terminal,
            launcher,
            state,
        })
    }

    /// Current in-memory state.
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The terminal the session talks to.
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// The launcher the session opens files with.
    pub const fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render()?;
            let Some(input) = self.terminal.read_line(PROMPT)? else {
                tracing::debug!("end of input");
                break;
            };
            if self.handle(&input)? == Flow::Quit {
                break;
            }
        }
        self.terminal.write_line(&Line::blank())?;
        Ok(())
    }

    /// Dispatch one line of input.
    pub fn handle(&mut self, input: &str) -> Result<Flow> {
        let command = match Command::parse(input, self.state.registry.len()) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(input, "rejected selection: {e}");
                self.state.status = Some(Line::centered(Tone::Error, e.to_string()));
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(?command, "dispatching");

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Settings => {
                let path = self.paths.settings.clone();
                self.open(&path)?;
            }
            Command::ConfigList => {
                let path = self.paths.configlist.clone();
                self.open(&path)?;
            }
            Command::Reload => {
                if self.reload() {
                    self.state.status =
                        Some(Line::centered(Tone::Success, "Config files reloaded"));
                }
            }
            Command::Open(id) => {
                if let Some(entry) = self.state.registry.get(id) {
                    let path = PathBuf::from(&entry.path);
                    self.open(&path)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn render(&mut self) -> Result<()> {
        let status = self.state.status.take();
        self.terminal.clear()?;
        self.terminal.write_line(&Line::blank())?;
        for line in render(&self.state.registry, status.as_ref()) {
            self.terminal.write_line(&line)?;
        }
        self.terminal.write_line(&Line::blank())?;
        Ok(())
    }

    /// Open `path` in the editor; recover if the editor is missing; reload
    /// after a clean exit.
    fn open(&mut self, path: &Path) -> Result<()> {
        let editor = self.state.editor.clone();
        match self.launcher.open(&editor, path) {
            ExitResult::Exited(0) => {
                self.reload();
            }
            ExitResult::Exited(code) => {
                self.state.status = Some(Line::centered(Tone::Error, exited_with(&editor, code)));
            }
            ExitResult::NotFound => {
                let recovery = recover(
                    &mut self.terminal,
                    &mut self.launcher,
                    &self.paths,
                    self.env_editor.as_deref(),
                    &editor,
                    path,
                )?;
                if let Some(editor) = &recovery.editor {
                    self.state.editor.clone_from(editor);
                }
                self.state.status = recovery.status(&self.paths.settings_name());
                // reload() only touches the status on failure, so it goes last
                if matches!(recovery.outcome, Outcome::Retried { result, .. } if result.is_success())
                {
                    self.reload();
                }
            }
        }
        Ok(())
    }

    /// Re-read both documents. On failure the previous state is kept and the
    /// error becomes the status line.
    fn reload(&mut self) -> bool {
        match SessionState::load(&self.paths, self.env_editor.as_deref()) {
            Ok(fresh) => {
                tracing::debug!(entries = fresh.registry.len(), editor = %fresh.editor, "reloaded");
                self.state.registry = fresh.registry;
                self.state.editor = fresh.editor;
                true
            }
            Err(e) => {
                tracing::warn!("reload failed: {e}");
                self.state.status = Some(Line::centered(Tone::Error, e.to_string()));
                false
            }
        }
    }
}

fn exited_with(editor: &str, code: i32) -> String {
    format!("{editor} exited with code {code}")
}

#[cfg(test)]
mod tests;
