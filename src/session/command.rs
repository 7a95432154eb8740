use thiserror::Error;

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the entry with this 1-based id.
    Open(usize),
    /// Open the settings document.
    Settings,
    /// Open the registry document.
    ConfigList,
    /// Reload both documents from disk.
    Reload,
    /// Leave the program.
    Quit,
}

/// Input that does not name a command or a valid entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Neither a command letter nor a number.
    #[error("ID must be a number")]
    NotANumber,
    /// A number outside `1..=count`.
    #[error("ID out of range")]
    OutOfRange,
}

impl Command {
    /// Parse user input against a registry of `count` entries.
    pub fn parse(input: &str, count: usize) -> Result<Self, SelectionError> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "q" => return Ok(Self::Quit),
            "s" => return Ok(Self::Settings),
            "c" => return Ok(Self::ConfigList),
            "r" => return Ok(Self::Reload),
            _ => {}
        }

        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SelectionError::NotANumber);
        }
        if negative {
            return Err(SelectionError::OutOfRange);
        }
        match digits.parse::<usize>() {
            Ok(id) if (1..=count).contains(&id) => Ok(Self::Open(id)),
            _ => Err(SelectionError::OutOfRange),
        }
    }
}
