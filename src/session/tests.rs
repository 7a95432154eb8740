use super::*;
use std::collections::VecDeque;
use std::io;
use tempfile::TempDir;

#[derive(Default)]
struct FakeTerminal {
    inputs: VecDeque<String>,
    lines: Vec<Line>,
    prompts: Vec<String>,
}

impl FakeTerminal {
    fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.text.contains(needle)).count()
    }
}

impl Terminal for FakeTerminal {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }
}

/// One scripted editor run: its result, plus a file the "user" writes while
/// the editor is open.
struct Run {
    result: ExitResult,
    writes: Option<(PathBuf, String)>,
}

#[derive(Default)]
struct FakeLauncher {
    script: VecDeque<Run>,
    calls: Vec<(String, PathBuf)>,
}

impl FakeLauncher {
    fn then(mut self, result: ExitResult) -> Self {
        self.script.push_back(Run {
            result,
            writes: None,
        });
        self
    }

    fn then_writing(mut self, result: ExitResult, path: &Path, content: &str) -> Self {
        self.script.push_back(Run {
            result,
            writes: Some((path.to_path_buf(), content.to_string())),
        });
        self
    }
}

impl Launcher for FakeLauncher {
    fn open(&mut self, command: &str, path: &Path) -> ExitResult {
        self.calls.push((command.to_string(), path.to_path_buf()));
        let run = self
            .script
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected launch of {command} on {}", path.display()));
        if let Some((target, content)) = run.writes {
            std::fs::write(target, content).unwrap();
        }
        run.result
    }
}

const REGISTRY: &str = "hosts: /etc/hosts\nbashrc: /home/user/.bashrc\n";

fn setup(settings: &str, registry: &str) -> (TempDir, ConfigPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = ConfigPaths::under(dir.path());
    store::ensure_initialized(&paths).unwrap();
    std::fs::write(&paths.settings, settings).unwrap();
    std::fs::write(&paths.configlist, registry).unwrap();
    (dir, paths)
}

fn session(
    paths: &ConfigPaths,
    inputs: &[&str],
    launcher: FakeLauncher,
) -> Session<FakeTerminal, FakeLauncher> {
    Session::new(
        paths.clone(),
        None,
        FakeTerminal::with_inputs(inputs),
        launcher,
    )
    .unwrap()
}

fn calls(session: &Session<FakeTerminal, FakeLauncher>) -> Vec<(&str, &Path)> {
    session
        .launcher()
        .calls
        .iter()
        .map(|(cmd, path)| (cmd.as_str(), path.as_path()))
        .collect()
}

fn status_text(session: &Session<FakeTerminal, FakeLauncher>) -> Option<&str> {
    session.state().status.as_ref().map(|l| l.text.as_str())
}

#[test]
fn test_open_by_id_targets_the_listed_entry() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::Exited(0))
        .then(ExitResult::Exited(0));
    let mut s = session(&paths, &[], launcher);

    for id in 1..=2 {
        assert_eq!(s.handle(&id.to_string()).unwrap(), Flow::Continue);
    }

    assert_eq!(
        calls(&s),
        [
            ("vim", Path::new("/etc/hosts")),
            ("vim", Path::new("/home/user/.bashrc")),
        ]
    );
    assert!(s.state().status.is_none());
}

#[test]
fn test_clean_exit_reloads_registry() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let launcher = FakeLauncher::default().then_writing(
        ExitResult::Exited(0),
        &paths.configlist,
        "hosts: /etc/hosts\nfstab: /etc/fstab\n",
    );
    let mut s = session(&paths, &[], launcher);

    s.handle("c").unwrap();

    assert_eq!(calls(&s), [("vim", paths.configlist.as_path())]);
    let labels: Vec<_> = s.state().registry.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["hosts", "fstab"]);
}

#[test]
fn test_editing_settings_switches_editor() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: hx\n")
        .then(ExitResult::Exited(0));
    let mut s = session(&paths, &[], launcher);

    s.handle("S").unwrap();
    assert_eq!(s.state().editor, "hx");

    s.handle("1").unwrap();
    assert_eq!(
        calls(&s),
        [
            ("vim", paths.settings.as_path()),
            ("hx", Path::new("/etc/hosts")),
        ]
    );
}

#[test]
fn test_nonzero_exit_is_reported_without_reload() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let launcher = FakeLauncher::default().then_writing(
        ExitResult::Exited(2),
        &paths.configlist,
        "other: /other\n",
    );
    let mut s = session(&paths, &[], launcher);

    s.handle("2").unwrap();

    assert_eq!(status_text(&s), Some("vim exited with code 2"));
    assert_eq!(s.state().registry.len(), 2);
    assert_eq!(s.state().registry.get(1).unwrap().label, "hosts");
}

#[test]
fn test_out_of_range_never_launches() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let mut s = session(&paths, &[], FakeLauncher::default());

    for input in ["0", "3", "-1", "99"] {
        s.handle(input).unwrap();
        assert_eq!(status_text(&s), Some("ID out of range"), "{input}");
    }
    assert!(calls(&s).is_empty());
}

#[test]
fn test_non_numeric_input() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let mut s = session(&paths, &[], FakeLauncher::default());

    s.handle("open hosts").unwrap();
    assert_eq!(status_text(&s), Some("ID must be a number"));
    assert!(calls(&s).is_empty());
}

#[test]
fn test_quit() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let mut s = session(&paths, &[], FakeLauncher::default());
    assert_eq!(s.handle("q").unwrap(), Flow::Quit);
    assert_eq!(s.handle(" Q").unwrap(), Flow::Quit);
}

#[test]
fn test_reload_picks_up_external_edits() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let mut s = session(&paths, &[], FakeLauncher::default());

    std::fs::write(&paths.configlist, "zshrc: /home/user/.zshrc\n").unwrap();
    std::fs::write(&paths.settings, "editor: micro\n").unwrap();
    s.handle("r").unwrap();

    assert_eq!(status_text(&s), Some("Config files reloaded"));
    assert_eq!(s.state().editor, "micro");
    assert_eq!(s.state().registry.len(), 1);
    assert_eq!(s.state().registry.get(1).unwrap().label, "zshrc");
}

#[test]
fn test_failed_reload_keeps_previous_state() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let mut s = session(&paths, &[], FakeLauncher::default());

    std::fs::write(&paths.configlist, "- not\n- a mapping\n").unwrap();
    s.handle("r").unwrap();

    let status = status_text(&s).unwrap();
    assert!(status.starts_with("malformed"), "{status}");
    assert_eq!(s.state().registry.len(), 2);
}

#[test]
fn test_env_editor_used_when_settings_have_none() {
    let (_dir, paths) = setup("theme: dark\n", REGISTRY);
    let s = Session::new(
        paths,
        Some("emacs".to_string()),
        FakeTerminal::default(),
        FakeLauncher::default(),
    )
    .unwrap();
    assert_eq!(s.state().editor, "emacs");
}

#[test]
fn test_run_shows_each_status_once() {
    let (_dir, paths) = setup("editor: vim\n", REGISTRY);
    let mut s = session(&paths, &["x", "5", "q"], FakeLauncher::default());

    s.run().unwrap();

    let term = s.terminal();
    assert_eq!(term.prompts, ["> ", "> ", "> "]);
    assert_eq!(term.count("ID must be a number"), 1);
    assert_eq!(term.count("ID out of range"), 1);
    assert_eq!(term.count("/etc/hosts"), 3);
    assert!(s.state().status.is_none());
}

#[test]
fn test_run_ends_at_end_of_input() {
    let (_dir, paths) = setup("editor: vim\n", "");
    let mut s = session(&paths, &[], FakeLauncher::default());

    s.run().unwrap();

    assert_eq!(s.terminal().prompts.len(), 1);
    assert_eq!(s.terminal().count("<empty>"), 1);
}

#[test]
fn test_recovery_fix_and_retry() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: vim\n")
        .then_writing(
            ExitResult::Exited(0),
            &paths.configlist,
            "hosts: /etc/hosts\nbashrc: /home/user/.bashrc\nfstab: /etc/fstab\n",
        );
    let mut s = session(&paths, &["1", "y", "", "q"], launcher);

    s.run().unwrap();

    assert_eq!(
        calls(&s),
        [
            ("doesnotexist123", Path::new("/etc/hosts")),
            ("nano", paths.settings.as_path()),
            ("vim", Path::new("/etc/hosts")),
        ]
    );
    assert_eq!(s.state().editor, "vim");
    assert_eq!(s.state().registry.len(), 3);
    assert_eq!(s.terminal().count("doesnotexist123 not found"), 1);
    assert_eq!(
        s.terminal().prompts,
        [
            "> ",
            "Open settings.yaml in nano to fix it now? [Y/n]: ",
            "Retry the previous action with the updated editor? [Y/n]: ",
            "> ",
        ]
    );
}

#[test]
fn test_recovery_declined() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default().then(ExitResult::NotFound);
    let mut s = session(&paths, &["n"], launcher);

    s.handle("2").unwrap();

    assert_eq!(calls(&s).len(), 1);
    assert_eq!(s.state().editor, "doesnotexist123");
    assert_eq!(
        status_text(&s),
        Some("Set a valid editor in settings.yaml and try again.")
    );
}

#[test]
fn test_recovery_fixed_but_retry_declined() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: vim\n");
    let mut s = session(&paths, &["y", "no"], launcher);

    s.handle("1").unwrap();

    assert_eq!(calls(&s).len(), 2);
    assert_eq!(s.state().editor, "vim");
    assert!(s.state().status.is_none());
}

#[test]
fn test_recovery_fallback_missing() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then(ExitResult::NotFound);
    let mut s = session(&paths, &["Y"], launcher);

    s.handle("s").unwrap();

    assert_eq!(
        calls(&s),
        [
            ("doesnotexist123", paths.settings.as_path()),
            ("nano", paths.settings.as_path()),
        ]
    );
    assert_eq!(
        status_text(&s),
        Some("nano not found. Please edit settings.yaml manually.")
    );
}

#[test]
fn test_recovery_retries_at_most_once() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: stillmissing\n")
        .then(ExitResult::NotFound);
    let mut s = session(&paths, &["y", "y"], launcher);

    s.handle("1").unwrap();

    assert_eq!(calls(&s).len(), 3);
    assert_eq!(calls(&s)[2], ("stillmissing", Path::new("/etc/hosts")));
    assert_eq!(
        status_text(&s),
        Some("stillmissing still not found. Please verify your settings.")
    );
}

#[test]
fn test_recovery_retry_shows_reload_failure() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: vim\n")
        .then_writing(ExitResult::Exited(0), &paths.configlist, "- broken\n- list\n");
    let mut s = session(&paths, &["y", "y"], launcher);

    s.handle("1").unwrap();

    assert_eq!(calls(&s).len(), 3);
    let status = status_text(&s).unwrap();
    assert!(status.starts_with("malformed"), "{status}");
    assert_eq!(s.state().registry.len(), 2);
    assert_eq!(s.state().editor, "vim");
}

#[test]
fn test_recovery_retry_nonzero_exit() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: vim\n")
        .then(ExitResult::Exited(1));
    let mut s = session(&paths, &["", ""], launcher);

    s.handle("1").unwrap();

    assert_eq!(status_text(&s), Some("vim exited with code 1"));
}

#[test]
fn test_recovery_with_broken_settings() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default()
        .then(ExitResult::NotFound)
        .then_writing(ExitResult::Exited(0), &paths.settings, "editor: [vim\n");
    let mut s = session(&paths, &["y"], launcher);

    s.handle("1").unwrap();

    assert_eq!(calls(&s).len(), 2);
    assert_eq!(s.state().editor, "doesnotexist123");
    let status = status_text(&s).unwrap();
    assert!(status.starts_with("failed to parse"), "{status}");
}

#[test]
fn test_recovery_end_of_input_declines() {
    let (_dir, paths) = setup("editor: doesnotexist123\n", REGISTRY);
    let launcher = FakeLauncher::default().then(ExitResult::NotFound);
    let mut s = session(&paths, &[], launcher);

    s.handle("1").unwrap();

    assert_eq!(calls(&s).len(), 1);
    assert_eq!(
        status_text(&s),
        Some("Set a valid editor in settings.yaml and try again.")
    );
}
