//! chipper's own diagnostic log: write failures, missing includes, config tracing.
//!
//! It is an ordinary [`Log`] whose catch-all writes to stderr, built once through a
//! `OnceLock` on first use. Warnings and errors always print; debug output needs the
//! `CHIPPER_DEBUG` environment variable. Failures of the diagnostic log itself are
//! dropped, never re-reported.

use crate::fmt::{Formatter, Transform};
use crate::handler::Handler;
use crate::logger::Log;
use crate::output::Target;
use std::sync::OnceLock;

static INTERNAL_LOG: OnceLock<Log> = OnceLock::new();
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub const DEBUG_ENV: &str = "CHIPPER_DEBUG";

fn internal_log() -> &'static Log {
    INTERNAL_LOG.get_or_init(build_internal_log)
}

fn build_internal_log() -> Log {
    let formatter = Formatter::builder()
        .template("chipper {tags} ")
        .tags_template("[{tags}]")
        .tag_delimiter("/")
        .tag_transform(Transform::None)
        .build()
        .unwrap_or_default();

    let handler = Handler::builder("chipper")
        .tag("*")
        .target(Target::stderr())
        .formatter(formatter)
        .build()
        .unwrap_or_else(|_| Handler::fallback());

    Log::builder().default_handler(handler).build()
}

fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty()))
}

fn emit(kind: &str, scope: &str, msg: &str) {
    let _ = internal_log().try_log(msg, &[kind, scope]);
}

/// Startup and config tracing, only with `CHIPPER_DEBUG` set.
pub fn debug(scope: &str, msg: &str) {
    if debug_enabled() {
        emit("debug", scope, msg);
    }
}

/// Recoverable oddities: a missing include, an ignored setting.
pub fn warn(scope: &str, msg: &str) {
    emit("warn", scope, msg);
}

/// Failures the caller never sees directly, such as a sink write error inside `Log::log`.
pub fn error(scope: &str, msg: &str) {
    emit("error", scope, msg);
}
