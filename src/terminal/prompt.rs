use std::io;

use super::Terminal;

/// Ask a yes/no question. An empty answer picks `default`; unrecognised
/// answers ask again; end of input answers no.
pub fn ask_yes_no<T: Terminal + ?Sized>(
    terminal: &mut T,
    question: &str,
    default: bool,
) -> io::Result<bool> {
    let suffix = if default { " [Y/n]: " } else { " [y/N]: " };
    let prompt = format!("{question}{suffix}");
    loop {
        let Some(answer) = terminal.read_line(&prompt)? else {
            return Ok(false);
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}
