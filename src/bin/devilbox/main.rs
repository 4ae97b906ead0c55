//! devilbox - audition the game's music and sound effects from a terminal
//!
//! Run with: cargo run --bin devilbox
//!
//! Logs go to `devilbox.log` in the system temp directory (`RUST_LOG`
//! controls the filter). Preferences are read from and saved to
//! `DEVILBOX_PREFS`, or `devilbox_settings.json` in the working directory.

mod app;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::App;

fn init_logging() -> EyreResult<()> {
    let path = std::env::temp_dir().join("devilbox.log");
    let file = File::create(&path).wrap_err_with(|| format!("creating {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let prefs_path = std::env::var_os("DEVILBOX_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("devilbox_settings.json"));

    let mut app = App::new(prefs_path)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    app.save_preferences()
}
