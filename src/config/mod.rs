//! Loading log definitions from TOML files.
//!
//! A config file is treated like a module: each top-level table is a named
//! attribute, and the file stem is the module's identity. `source = "..."` lines pull
//! in other files, whose attributes never override the including file's.

mod structs;

pub use structs::{FormatterConfig, HandlerConfig, LogConfig, TargetConfig};

use crate::internal;
use crate::logger::Log;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded config file with every include resolved.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    name: String,
    path: PathBuf,
    attributes: toml::Table,
}

/// Pulls `source = "..."` lines out before TOML parsing, since they are include
/// directives rather than data. Returns the paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        if let Some((key, value)) = line.split_once('=')
            && key.trim() == "source"
        {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl ConfigModule {
    /// Reads `path` and its includes.
    ///
    /// # Errors
    /// The file can't be read, isn't valid TOML, or includes itself.
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        internal::debug("config", &format!("Loading {}", path.display()));
        let attributes = Self::load_with_sources(path, &mut HashSet::new())?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            attributes,
        })
    }

    /// `$XDG_CONFIG_HOME/chipper/chipper.toml` or the platform equivalent.
    ///
    /// # Errors
    /// The platform has no config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("chipper").join("chipper.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Recursive loader; `seen` holds canonical paths on the current include chain.
    fn load_with_sources(
        path: &Path,
        seen: &mut HashSet<PathBuf>,
    ) -> Result<toml::Table, crate::Error> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            internal::warn(
                "config",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut table: toml::Table = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("config", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let included = Self::load_with_sources(source_file, seen)?;
                for (key, value) in included {
                    table.entry(key).or_insert(value);
                }
            } else {
                internal::warn("config", &format!("Source file not found: {source_path}"));
            }
        }

        seen.remove(&canonical);
        Ok(table)
    }

    /// Module identity: the file stem.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of every top-level attribute, sorted.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// # Errors
    /// [`Error::AttributeNotFound`](crate::Error::AttributeNotFound) naming this module and `name`.
    pub fn attribute(&self, name: &str) -> Result<&toml::Value, crate::Error> {
        self.attributes
            .get(name)
            .ok_or_else(|| crate::Error::AttributeNotFound {
                module: self.name.clone(),
                attribute: name.to_string(),
            })
    }

    /// Reads attribute `name` as a log definition without building it.
    ///
    /// # Errors
    /// Missing attribute, or one that doesn't match the log schema.
    pub fn log_config(&self, name: &str) -> Result<LogConfig, crate::Error> {
        let value = self.attribute(name)?.clone();
        Ok(value.try_into::<LogConfig>()?)
    }

    /// Reads and builds attribute `name`.
    ///
    /// # Errors
    /// Anything [`ConfigModule::log_config`] or [`LogConfig::build`] reports.
    pub fn log(&self, name: &str) -> Result<Log, crate::Error> {
        let log = self.log_config(name)?.build()?;
        internal::debug(
            "config",
            &format!(
                "Built log '{name}' from '{}' with {} handlers",
                self.name,
                log.handlers().len()
            ),
        );
        Ok(log)
    }
}
