//! The process-wide log.
//!
//! Lifecycle: created once, on the first call to [`global`] or by an explicit
//! [`install`] at startup, and never reset or replaced afterwards.

use super::Log;
use crate::internal;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Log> = OnceLock::new();

/// The shared log. If nothing was installed it starts as [`Log::default`].
#[must_use]
pub fn global() -> &'static Log {
    GLOBAL.get_or_init(|| {
        internal::debug("global", "Initializing default process-wide log");
        Log::default()
    })
}

/// Makes `log` the process-wide instance. Only the first caller wins, and only if
/// [`global`] hasn't already initialized the default.
///
/// # Errors
/// Hands `log` back when an instance already exists.
pub fn install(log: Log) -> Result<(), Log> {
    GLOBAL.set(log)?;
    internal::debug("global", "Installed process-wide log");
    Ok(())
}
