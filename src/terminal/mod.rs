//! Line-oriented terminal I/O used by the session.

mod console;
mod prompt;

pub use console::Console;
pub use prompt::ask_yes_no;

use std::io;

/// Width of the menu block; the console centres this block on screen.
pub const MENU_WIDTH: usize = 64;

/// Colour role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Default foreground.
    Plain,
    /// The title banner.
    Title,
    /// Column headers and ids.
    Accent,
    /// Secondary text such as rules and placeholders.
    Dim,
    /// Confirmation messages.
    Success,
    /// Failure messages.
    Error,
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Text without any styling.
    pub text: String,
    /// Colour role.
    pub tone: Tone,
    /// Centre the text inside the menu block instead of left-aligning it.
    pub centered: bool,
}

impl Line {
    /// A left-aligned line.
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone,
            centered: false,
        }
    }

    /// A line centred inside the menu block.
    pub fn centered(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            centered: true,
            ..Self::new(tone, text)
        }
    }

    /// An empty line.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(Tone::Plain, "")
    }
}

/// Render lines and read user input.
pub trait Terminal {
    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Print one line.
    fn write_line(&mut self, line: &Line) -> io::Result<()>;

    /// Show `prompt` and read one line without its terminator.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}
