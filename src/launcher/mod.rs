//! Running the editor in the foreground.

mod shell;

pub use shell::split_command;

use std::path::Path;
use std::process::Command;

/// How a foreground editor run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitResult {
    /// The editor ran and exited with this code. Termination by signal is
    /// reported as the negated signal number.
    Exited(i32),
    /// The editor could not be started at all.
    NotFound,
}

impl ExitResult {
    /// Whether the editor ran and exited with code 0.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

/// Runs an editor on a path, blocking until it exits.
pub trait Launcher {
    /// Run `command` with `path` as the final argument, inheriting the
    /// caller's standard streams.
    fn open(&mut self, command: &str, path: &Path) -> ExitResult;
}

/// Spawns a real child process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&mut self, command: &str, path: &Path) -> ExitResult {
        let mut parts = split_command(command);
        if parts.is_empty() {
            tracing::warn!("empty editor command");
            return ExitResult::NotFound;
        }
        let program = parts.remove(0);
        tracing::info!(%program, args = ?parts, path = %path.display(), "launching editor");

        match Command::new(&program).args(&parts).arg(path).status() {
            Ok(status) => {
                let result = ExitResult::Exited(exit_code(status));
                tracing::debug!(?result, "editor exited");
                result
            }
            Err(e) => {
                tracing::warn!(%program, kind = ?e.kind(), "failed to spawn editor: {e}");
                ExitResult::NotFound
            }
        }
    }
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
