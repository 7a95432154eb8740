use crossterm::{
    cursor::MoveTo,
    execute,
    style::{style, StyledContent, Stylize},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, BufRead, IsTerminal, Stdout, Write};

use super::{Line, Terminal, Tone, MENU_WIDTH};
use crate::interrupt::InputWait;

/// The real terminal: stdout for output, stdin for input.
#[derive(Debug)]
pub struct Console {
    out: Stdout,
    styled: bool,
}

impl Console {
    /// Attach to the process's standard streams. Colours and screen clearing
    /// are only used when stdout is a terminal.
    #[must_use]
    pub fn new() -> Self {
        let out = io::stdout();
        let styled = out.is_terminal();
        Self { out, styled }
    }

    fn block_pad(&self) -> usize {
        if !self.styled {
            return 0;
        }
        terminal::size()
            .map(|(cols, _)| usize::from(cols).saturating_sub(MENU_WIDTH) / 2)
            .unwrap_or(0)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(line: &Line) -> StyledContent<&str> {
    let content = style(line.text.as_str());
    match line.tone {
        Tone::Plain => content,
        Tone::Title => content.bold().black().on_blue(),
        Tone::Accent => content.bold().blue(),
        Tone::Dim => content.dim(),
        Tone::Success => content.green(),
        Tone::Error => content.red(),
    }
}

impl Terminal for Console {
    fn clear(&mut self) -> io::Result<()> {
        if self.styled {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        let mut pad = self.block_pad();
        if line.centered {
            pad += MENU_WIDTH.saturating_sub(line.text.chars().count()) / 2;
        }
        let indent = " ".repeat(pad);
        if self.styled {
            writeln!(self.out, "{indent}{}", paint(line))
        } else {
            writeln!(self.out, "{indent}{}", line.text)
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let _wait = InputWait::begin();
        let indent = " ".repeat(self.block_pad());
        write!(self.out, "{indent}{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
