//! Preference Store
//!
//! A process-wide key/value store persisted as a flat TOML table of strings,
//! by default at `$XDG_CONFIG_HOME/novacloud/preferences.toml`.
//!
//! Read once on [`PreferenceStore::open`], written on every changing
//! [`PreferenceStore::set`]. Last write wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Errors from reading or writing the preference file
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Failed to read the preference file
    #[error("Failed to read preferences at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to write the preference file
    #[error("Failed to write preferences at {path}: {source}")]
    WriteError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The file is not a flat table of strings
    #[error("Failed to parse preferences: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Values could not be encoded
    #[error("Failed to encode preferences: {0}")]
    EncodeError(#[from] toml::ser::Error),
}

/// Small persisted key/value store
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore {
    /// Backing file; `None` keeps everything in memory
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Default location: `$XDG_CONFIG_HOME/novacloud/preferences.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("novacloud").join("preferences.toml"))
    }

    /// Store that never touches disk
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from `path`
    ///
    /// A missing file is an empty store, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();

        let values = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| PreferenceError::ReadError {
                    path: path.clone(),
                    source: e,
                })?;
            let values: BTreeMap<String, String> = toml::from_str(&content)?;
            info!(path = %path.display(), keys = values.len(), "Loaded preferences");
            values
        } else {
            debug!(path = %path.display(), "No preference file, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// Backing file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Write a value, persisting only if it changed
    ///
    /// Returns whether the stored value changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. The in-memory value is
    /// updated regardless.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, PreferenceError> {
        if !self.stage(key, value) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Update a value in memory only, returning whether it changed
    ///
    /// Follow with [`save`](Self::save), possibly on another thread.
    pub fn stage(&mut self, key: &str, value: &str) -> bool {
        if self.get(key) == Some(value) {
            return false;
        }
        self.values.insert(key.to_string(), value.to_string());
        true
    }

    /// Write every value to the backing file
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), PreferenceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let write_error = |e| PreferenceError::WriteError {
            path: path.clone(),
            source: e,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string(&self.values)?;
        std::fs::write(path, content).map_err(write_error)?;

        debug!(path = %path.display(), "Preferences persisted");
        Ok(())
    }
}
