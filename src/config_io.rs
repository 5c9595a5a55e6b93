//! Loading and saving the counter configuration.
//!
//! The configuration round-trips through a TOML file in the `.tickdial`
//! app directory. A missing file yields the defaults; writes go through a
//! temp file in the same directory and are renamed into place so a crash
//! never leaves a half-written config behind. The selected value itself is
//! deliberately not persisted.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{app_dirs, counter::CounterConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigIoError {
    /// The config directory could not be resolved or created.
    #[error("Failed to prepare config directory: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    /// Reading the config file failed.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML for the config shape.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// Serializing the configuration to TOML failed.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(toml::ser::Error),
    /// Writing or renaming the config file failed.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Resolve the configuration file path, creating the app directory.
pub fn config_path() -> Result<PathBuf, ConfigIoError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration from disk, returning defaults if missing.
pub fn load_or_default() -> Result<CounterConfig, ConfigIoError> {
    load_from(&config_path()?)
}

/// Persist the configuration, overwriting any previous contents.
pub fn save(config: &CounterConfig) -> Result<(), ConfigIoError> {
    save_to_path(config, &config_path()?)
}

pub(crate) fn load_from(path: &Path) -> Result<CounterConfig, ConfigIoError> {
    if !path.exists() {
        return Ok(CounterConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn save_to_path(config: &CounterConfig, path: &Path) -> Result<(), ConfigIoError> {
    let data = toml::to_string_pretty(config).map_err(ConfigIoError::Serialize)?;
    atomic_write(path, data.as_bytes())
}

/// Write via a same-directory temp file renamed over the target.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigIoError> {
    let map_io = |source: std::io::Error| ConfigIoError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path.parent().ok_or_else(|| {
        map_io(std::io::Error::other("config path has no parent directory"))
    })?;
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(map_io)?;
    file.write_all(data).map_err(map_io)?;
    file.persist(path).map_err(|err| map_io(err.error))?;
    Ok(())
}
