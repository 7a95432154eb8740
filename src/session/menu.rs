use crate::registry::Registry;
use crate::terminal::{Line, Tone, MENU_WIDTH};

const TITLE: &str = "wtconf  a tiny config launcher";
const LEGEND: &str = "ID = open | s = settings | c = configlist | r = reload | q = quit";
const EMPTY_HINT: &str = "wtconf --add /path/to/file.conf";

fn row(id: &str, label: &str, path: &str) -> String {
    format!("{id:<4}{label:<16} {path}")
}

/// Lines of one menu screen: banner, entry table, optional status, legend.
pub fn render(registry: &Registry, status: Option<&Line>) -> Vec<Line> {
    let mut lines = vec![
        Line::centered(Tone::Title, TITLE),
        Line::blank(),
        Line::new(Tone::Accent, row("#", "Config", "Path")),
        Line::new(Tone::Dim, "-".repeat(MENU_WIDTH)),
    ];

    if registry.is_empty() {
        lines.push(Line::new(Tone::Dim, row("-", "<empty>", EMPTY_HINT)));
    }
    for (i, entry) in registry.iter().enumerate() {
        lines.push(Line::new(
            Tone::Plain,
            row(&(i + 1).to_string(), &entry.label, &entry.path),
        ));
    }

    lines.push(Line::blank());
    if let Some(status) = status {
        lines.push(status.clone());
    }
    lines.push(Line::centered(Tone::Plain, LEGEND));
    lines
}
