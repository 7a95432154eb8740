//! Command-line entry point for `wtconf`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use wtconf::{
    add,
    interrupt,
    launcher::SystemLauncher,
    logging,
    paths::ConfigPaths,
    session::Session,
    settings,
    store,
    terminal::Console,
};

#[derive(Parser)]
#[command(name = "wtconf", version, about = "wtconf is a tiny config file launcher")]
struct Cli {
    /// Register a config file (e.g. /etc/foo.conf) and exit
    #[arg(long, value_name = "PATH")]
    add: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let paths = ConfigPaths::from_env()?;
    store::ensure_initialized(&paths)
        .with_context(|| format!("Failed to initialize {}", paths.dir.display()))?;

    match cli.add {
        Some(path) => cmd_add(&paths, &path),
        None => cmd_menu(paths),
    }
}

fn cmd_add(paths: &ConfigPaths, path: &Path) -> Result<()> {
    let added = add::add_entry(paths, path)?;
    if let Some(old) = &added.replaced {
        println!("Replaced previous path {old}");
    }
    println!("Added {}: {}", added.label, added.path.display());
    Ok(())
}

fn cmd_menu(paths: ConfigPaths) -> Result<()> {
    if let Err(e) = interrupt::install() {
        tracing::warn!("could not install interrupt handler: {e}");
    }
    let mut session = Session::new(paths, settings::env_editor(), Console::new(), SystemLauncher)
        .context("Failed to load config files")?;
    session.run()
}
