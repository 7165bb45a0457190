//! Unified error type for all chipper operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// One sink that refused a write during a log call.
#[derive(Debug)]
pub struct SinkFailure {
    /// Name of the sink (`stdout`, `stderr`, the file path, or a custom name).
    pub sink: String,
    /// The underlying I/O failure.
    pub source: io::Error,
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sink, self.source)
    }
}

/// Error type for chipper operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while opening a target file or reading a config file.
    Io(io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// A configuration unit has no attribute with the requested name.
    AttributeNotFound {
        /// Identity of the configuration unit (the file stem).
        module: String,
        /// The attribute that was asked for.
        attribute: String,
    },
    /// A handler was built without any tags to listen for.
    EmptyTags {
        /// Name of the offending handler.
        handler: String,
    },
    /// A handler was built without a target.
    MissingTarget {
        /// Name of the offending handler.
        handler: String,
    },
    /// A strftime pattern chrono cannot parse.
    InvalidFormat {
        /// Which formatter field held the pattern.
        field: &'static str,
        /// The rejected pattern.
        format: String,
    },
    /// Unknown tag transform name in a config file.
    InvalidTransform(String),
    /// One or more sinks failed during a single log call. Every sink was still attempted.
    Write(Vec<SinkFailure>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::AttributeNotFound { module, attribute } => {
                write!(f, "'{module}' has no log attribute '{attribute}'")
            }
            Self::EmptyTags { handler } => write!(
                f,
                "handler '{handler}': tags list must contain at least one tag name"
            ),
            Self::MissingTarget { handler } => write!(f, "handler '{handler}' has no target"),
            Self::InvalidFormat { field, format } => {
                write!(f, "invalid {field} pattern: '{format}'")
            }
            Self::InvalidTransform(name) => write!(f, "unknown tag transform: '{name}'"),
            Self::Write(failures) => {
                write!(f, "write failed on ")?;
                for (i, failure) in failures.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{failure}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Write(failures) => failures
                .first()
                .map(|f| &f.source as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
