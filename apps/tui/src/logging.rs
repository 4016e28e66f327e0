use crate::config::Settings;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Debug logging goes to a file so it never lands on the alternate screen.
/// Without `--debug` nothing is installed.
pub fn init(settings: &Settings) -> Result<()> {
    if !settings.debug {
        return Ok(());
    }

    let file = File::create(&settings.log_path).wrap_err_with(|| {
        format!("failed to create log file {}", settings.log_path.display())
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))
}
