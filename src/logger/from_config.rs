//! Building a log straight from a config file.

use super::Log;
use crate::config::ConfigModule;
use crate::internal;
use std::path::Path;

impl Log {
    /// Loads `path` and builds the log defined under the top-level table `attribute`.
    ///
    /// # Errors
    /// Read or parse failures, [`Error::AttributeNotFound`](crate::Error::AttributeNotFound)
    /// when the table is missing, or any handler validation failure.
    pub fn from_file(path: impl AsRef<Path>, attribute: &str) -> Result<Self, crate::Error> {
        ConfigModule::load(path.as_ref())?.log(attribute)
    }

    /// Same as [`Log::from_file`] on [`ConfigModule::default_path`].
    ///
    /// # Errors
    /// Same as [`Log::from_file`], plus a missing platform config directory.
    pub fn from_default_config(attribute: &str) -> Result<Self, crate::Error> {
        let path = ConfigModule::default_path()?;
        internal::debug(
            "config",
            &format!("Using default config {}", path.display()),
        );
        Self::from_file(path, attribute)
    }
}

/// Loads the config file at `path` and returns the log named `attribute`.
///
/// # Errors
/// See [`Log::from_file`].
pub fn from_file(path: impl AsRef<Path>, attribute: &str) -> Result<Log, crate::Error> {
    Log::from_file(path, attribute)
}
