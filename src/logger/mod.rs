//! The router. Each call's tags are partitioned across every handler that listens
//! for them; whatever no handler claims goes to the default handler.

mod builder;
mod from_config;
mod global;
mod tagged;

pub use builder::LogBuilder;
pub use from_config::from_file;
pub use global::{global, install};
pub use tagged::TaggedLog;

use crate::error::SinkFailure;
use crate::fmt::Trace;
use crate::handler::Handler;
use crate::internal;
use crate::tag;
use chrono::{Local, NaiveDateTime};

/// Tag name used by [`Log::untagged`].
pub const UNTAGGED: &str = "default";

/// Immutable after build, `Send + Sync`, so one instance can serve every thread.
#[derive(Debug)]
pub struct Log {
    handlers: Vec<Handler>,
    default: Handler,
}

impl Default for Log {
    /// No handlers; everything lands on the stock stdout catch-all.
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            default: Handler::fallback(),
        }
    }
}

impl Log {
    #[must_use]
    pub fn builder() -> LogBuilder {
        LogBuilder::new()
    }

    /// Routes `message` by `tags`. Write failures are reported on the crate's
    /// diagnostic channel instead of reaching the caller.
    pub fn log<S: AsRef<str>>(&self, message: &str, tags: &[S]) {
        if let Err(e) = self.dispatch(message, tags, &Trace::none()) {
            internal::error("log", &e.to_string());
        }
    }

    /// [`Log::log`] with source-location fields, forwarded to every receiving handler.
    pub fn log_traced<S: AsRef<str>>(&self, message: &str, tags: &[S], trace: &Trace) {
        if let Err(e) = self.dispatch(message, tags, trace) {
            internal::error("log", &e.to_string());
        }
    }

    /// Routes `message` and hands back any write failures. Every dispatch is attempted
    /// before returning.
    ///
    /// # Errors
    /// [`Error::Write`](crate::Error::Write) collecting every failed sink of every handler.
    pub fn try_log<S: AsRef<str>>(&self, message: &str, tags: &[S]) -> Result<(), crate::Error> {
        self.dispatch(message, tags, &Trace::none())
    }

    /// # Errors
    /// Same as [`Log::try_log`].
    pub fn try_log_traced<S: AsRef<str>>(
        &self,
        message: &str,
        tags: &[S],
        trace: &Trace,
    ) -> Result<(), crate::Error> {
        self.dispatch(message, tags, trace)
    }

    /// Sends `message` straight to the default handler under the single tag `default`.
    pub fn untagged(&self, message: &str) {
        let timestamp = now();
        if let Err(e) = self
            .default
            .log(message, &[UNTAGGED], timestamp, &Trace::none())
        {
            internal::error("log", &e.to_string());
        }
    }

    /// A cursor that logs under `tags` every time.
    #[must_use]
    pub fn tagged<I, S>(&self, tags: I) -> TaggedLog<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TaggedLog::new(self, tags)
    }

    /// Shorthand: `log.named("general_info")` is `log.tagged(["general", "info"])`.
    #[must_use]
    pub fn named(&self, name: &str) -> TaggedLog<'_> {
        TaggedLog::new(self, tag::split_name(name))
    }

    #[must_use]
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// First configured handler with this name. The default handler is not searched.
    #[must_use]
    pub fn handler(&self, name: &str) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.name() == name)
    }

    #[must_use]
    pub const fn default_handler(&self) -> &Handler {
        &self.default
    }

    /// # Errors
    /// [`Error::Write`](crate::Error::Write) collecting every sink that failed to flush.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let mut failures = Vec::new();
        for handler in self.handlers.iter().chain(std::iter::once(&self.default)) {
            collect(handler.flush(), &mut failures)?;
        }
        finish(failures)
    }

    fn dispatch<S: AsRef<str>>(
        &self,
        message: &str,
        tags: &[S],
        trace: &Trace,
    ) -> Result<(), crate::Error> {
        // One timestamp per call so every receiving handler prints the same instant.
        let timestamp = now();

        let mut matched: Vec<Vec<&str>> = vec![Vec::new(); self.handlers.len()];
        let mut unhandled: Vec<&str> = Vec::new();

        for tag in tags {
            let tag = tag.as_ref();
            let mut found = false;
            for (slot, handler) in matched.iter_mut().zip(&self.handlers) {
                if handler.listens_to(tag) {
                    slot.push(tag);
                    found = true;
                }
            }
            if !found {
                unhandled.push(tag);
            }
        }

        let mut failures = Vec::new();
        for (handler, tags) in self.handlers.iter().zip(&matched) {
            if !tags.is_empty() {
                collect(
                    handler.log(message, tags.as_slice(), timestamp, trace),
                    &mut failures,
                )?;
            }
        }

        if !unhandled.is_empty() {
            collect(
                self.default
                    .log(message, unhandled.as_slice(), timestamp, trace),
                &mut failures,
            )?;
        }

        finish(failures)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Write failures accumulate; anything else is a bug worth surfacing immediately.
fn collect(
    result: Result<(), crate::Error>,
    failures: &mut Vec<SinkFailure>,
) -> Result<(), crate::Error> {
    match result {
        Ok(()) => Ok(()),
        Err(crate::Error::Write(mut failed)) => {
            failures.append(&mut failed);
            Ok(())
        }
        Err(other) => Err(other),
    }
}

fn finish(failures: Vec<SinkFailure>) -> Result<(), crate::Error> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Write(failures))
    }
}
