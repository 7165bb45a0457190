//! Source-location fields attached to a log call.

use std::panic::Location;
use std::path::Path;

/// Where a message came from. All fields empty means "no trace", and the
/// formatter then renders no trace block at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// File basename, e.g. `main.rs`.
    pub file: String,
    pub line: Option<u32>,
    /// Module path or function name, whatever the caller could capture.
    pub module: String,
}

impl Trace {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            file: String::new(),
            line: None,
            module: String::new(),
        }
    }

    /// Builds a trace from a full path, keeping only the basename.
    #[must_use]
    pub fn new(file: &str, line: u32, module: &str) -> Self {
        let file = Path::new(file)
            .file_name()
            .map_or_else(|| file.to_string(), |name| name.to_string_lossy().into_owned());
        Self {
            file,
            line: Some(line),
            module: module.to_string(),
        }
    }

    /// Location of whoever called the `#[track_caller]` chain that ends here.
    /// Rust has no runtime name for the calling function, so `module` stays empty.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), "")
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.file.is_empty() && self.line.is_none() && self.module.is_empty()
    }
}

/// Logs through a [`Log`](crate::Log) with the call site's file, line and module path
/// attached, e.g. `log_traced!(log, "cache miss", "cache", "trace")`.
#[macro_export]
macro_rules! log_traced {
    ($log:expr, $msg:expr, $($tag:expr),+ $(,)?) => {{
        let __trace = $crate::Trace::new(file!(), line!(), module_path!());
        $log.log_traced($msg, &[$($tag),+], &__trace);
    }};
}
