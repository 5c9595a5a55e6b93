//! Application directory helpers anchored to a single `.tickdial` folder.
//!
//! Config and log files live under one app directory inside the OS config
//! root (e.g. `%APPDATA%` on Windows, `~/.config` on Linux). The
//! `TICKDIAL_CONFIG_HOME` environment variable relocates the base for
//! portable setups and integration tests; an in-process override exists
//! for unit tests that must not touch the environment.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory under the OS config root.
pub const APP_DIR_NAME: &str = ".tickdial";

static BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Errors raised while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No platform config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Creating a directory under the config root failed.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// The `.tickdial` root directory, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// The logs directory inside the `.tickdial` root, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn base_dir() -> Option<PathBuf> {
    let overridden = BASE_OVERRIDE
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .clone();
    if overridden.is_some() {
        return overridden;
    }
    if let Ok(path) = std::env::var("TICKDIAL_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
pub(crate) fn set_base_override(path: Option<PathBuf>) {
    *BASE_OVERRIDE.lock().unwrap_or_else(|err| err.into_inner()) = path;
}
