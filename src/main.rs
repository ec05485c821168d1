//! todo-tui - A single-screen terminal to-do list.
//!
//! # Usage
//!
//! ```bash
//! todo-tui
//! todo-tui --lang ja
//! todo-tui --theme light --no-mouse --save
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_tui::app::App;
use todo_tui::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use todo_tui::labels::Lang;
use todo_tui::ui::style::ThemeMode;

/// A single-screen terminal to-do list
#[derive(Parser, Debug)]
#[command(name = "todo-tui", version, about, long_about = None)]
struct Cli {
    /// Language of the on-screen labels
    #[arg(long, value_enum)]
    lang: Option<Lang>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Do not capture the mouse (keeps terminal text selection working)
    #[arg(long)]
    no_mouse: bool,

    /// Write log events to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
            )
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_file = effective
        .log_file
        .clone()
        .or_else(|| std::env::var_os("TODO_TUI_LOG_FILE").map(PathBuf::from));
    init_logging(log_file.as_deref())?;
    tracing::debug!(?effective, global = %global_path.display(), "resolved flags");

    let mut app = App::new()
        .with_lang(cli.lang.or(effective.lang).unwrap_or_default())
        .with_theme(cli.theme.or(effective.theme).unwrap_or_default())
        .with_mouse(!(cli.no_mouse || effective.no_mouse));

    app.run().context("Application error")
}
