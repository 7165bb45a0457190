//! A cursor bound to a fixed tag list, for code that logs under the same tags
//! over and over.

use super::Log;
use crate::fmt::Trace;
use crate::tag::TRACE_TAG;

/// Borrowed from a [`Log`]; cheap to create and drop.
///
/// ```
/// let log = chipper::Log::default();
/// let db = log.tagged(["db", "info"]);
/// db.log("pool ready");
/// log.named("general_info").log("started");
/// ```
#[derive(Debug, Clone)]
pub struct TaggedLog<'a> {
    log: &'a Log,
    tags: Vec<String>,
}

impl<'a> TaggedLog<'a> {
    pub(super) fn new<I, S>(log: &'a Log, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            log,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Same as `log.log(message, tags)`. When the tags include `trace`, the caller's
    /// file and line ride along.
    #[track_caller]
    pub fn log(&self, message: &str) {
        if self.is_traced() {
            self.log
                .log_traced(message, self.tags.as_slice(), &Trace::caller());
        } else {
            self.log.log(message, self.tags.as_slice());
        }
    }

    /// # Errors
    /// Same as [`Log::try_log`].
    #[track_caller]
    pub fn try_log(&self, message: &str) -> Result<(), crate::Error> {
        if self.is_traced() {
            self.log
                .try_log_traced(message, self.tags.as_slice(), &Trace::caller())
        } else {
            self.log.try_log(message, self.tags.as_slice())
        }
    }

    /// A new cursor with one more tag.
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    fn is_traced(&self) -> bool {
        self.tags.iter().any(|t| t == TRACE_TAG)
    }
}
