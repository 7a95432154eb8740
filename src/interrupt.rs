//! Ctrl-C handling for the interactive session.
//!
//! An interrupt while the process waits for a line of input ends the program
//! cleanly with status 0. While an editor runs in the foreground the
//! interrupt belongs to the editor and is ignored here.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static AWAITING_INPUT: AtomicBool = AtomicBool::new(false);

/// What the handler does with an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Leave the program with status 0.
    Exit,
    /// Let the foreground editor deal with it.
    Ignore,
}

fn action() -> Action {
    if AWAITING_INPUT.load(Ordering::SeqCst) {
        Action::Exit
    } else {
        Action::Ignore
    }
}

/// Install the process-wide interrupt handler.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| match action() {
        Action::Exit => {
            let mut out = std::io::stdout();
            let _ = writeln!(out, "\n");
            let _ = out.flush();
            std::process::exit(0);
        }
        Action::Ignore => tracing::debug!("interrupt ignored while the editor is running"),
    })
}

/// Marks the current thread as waiting for input until dropped.
#[derive(Debug)]
pub struct InputWait(());

impl InputWait {
    /// Start waiting for input.
    #[must_use]
    pub fn begin() -> Self {
        AWAITING_INPUT.store(true, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for InputWait {
    fn drop(&mut self) {
        AWAITING_INPUT.store(false, Ordering::SeqCst);
    }
}
