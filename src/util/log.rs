use std::{fs, sync::Mutex};

use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "MUSEDRAFT_LOG";
pub const LOG_FILE: &str = "musedraft.log";

/// Logs go to a file in the platform data directory; the terminal itself is
/// owned by the TUI.
pub fn initialize_logging() -> Result<()> {
    let dirs = ProjectDirs::from("", "", "musedraft")
        .ok_or_else(|| eyre!("could not resolve a data directory for logs"))?;
    let log_dir = dirs.data_local_dir();
    fs::create_dir_all(log_dir)?;
    let log_file = fs::File::create(log_dir.join(LOG_FILE))?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
