//! File logging, enabled through `LINEART_LOG`.
//!
//! The terminal belongs to the UI, so records go to
//! `<data_dir>/lineart.log` instead of stderr.

use std::fs::{self, File};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;

/// Environment variable holding the log filter, e.g. `debug`.
pub const LOG_ENV: &str = "LINEART_LOG";

/// Start logging if `LINEART_LOG` is set. Returns the log file path.
pub fn init() -> Result<Option<PathBuf>> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(None);
    }

    let dir = ProjectDirs::from("", "", "lineart")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    fs::create_dir_all(&dir).wrap_err_with(|| format!("creating {}", dir.display()))?;
    let path = dir.join("lineart.log");
    let file = File::create(&path).wrap_err_with(|| format!("creating {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(Some(path))
}
