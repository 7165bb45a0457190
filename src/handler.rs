//! A handler is the unit of subscription: a name, the tags it listens for, where its
//! lines go, and how they look.

use crate::fmt::{Formatter, Trace};
use crate::output::Target;
use crate::tag::WILDCARD;
use chrono::NaiveDateTime;

/// Template used by the stock catch-all handler.
pub const FALLBACK_TEMPLATE: &str = "{trace}{tags}:";

/// Immutable once built. The router decides which of its tags a call carries;
/// the handler just renders and writes.
#[derive(Debug)]
pub struct Handler {
    name: String,
    tags: Vec<String>,
    target: Target,
    formatter: Formatter,
}

impl Handler {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> HandlerBuilder {
        HandlerBuilder {
            name: name.into(),
            tags: Vec::new(),
            target: None,
            formatter: None,
        }
    }

    /// The stock catch-all: named `default`, listens on `*`, writes to stdout.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            name: "default".to_string(),
            tags: vec![WILDCARD.to_string()],
            target: Target::stdout(),
            formatter: fallback_formatter(),
        }
    }

    /// Renders once and writes once.
    ///
    /// # Errors
    /// [`Error::Write`](crate::Error::Write) when one or more sinks of the target failed.
    pub fn log<S: AsRef<str>>(
        &self,
        message: &str,
        tags: &[S],
        timestamp: NaiveDateTime,
        trace: &Trace,
    ) -> Result<(), crate::Error> {
        let line = self
            .formatter
            .format_message(message, &self.name, tags, timestamp, trace);
        self.target.log(&line)
    }

    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn listens_to(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// # Errors
    /// [`Error::Write`](crate::Error::Write) when a sink failed to flush.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.target.flush()
    }
}

fn fallback_formatter() -> Formatter {
    Formatter::builder()
        .template(FALLBACK_TEMPLATE)
        .build()
        .unwrap_or_default()
}

/// Collects handler settings; `build` is the single validation point.
#[derive(Debug)]
pub struct HandlerBuilder {
    name: String,
    tags: Vec<String>,
    target: Option<Target>,
    formatter: Option<Formatter>,
}

impl HandlerBuilder {
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Defaults to [`Formatter::default`].
    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Duplicate tags collapse to their first occurrence.
    ///
    /// # Errors
    /// [`Error::EmptyTags`](crate::Error::EmptyTags) without tags,
    /// [`Error::MissingTarget`](crate::Error::MissingTarget) without a target.
    pub fn build(self) -> Result<Handler, crate::Error> {
        if self.tags.is_empty() {
            return Err(crate::Error::EmptyTags { handler: self.name });
        }
        let Some(target) = self.target else {
            return Err(crate::Error::MissingTarget { handler: self.name });
        };

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(Handler {
            name: self.name,
            tags,
            target,
            formatter: self.formatter.unwrap_or_default(),
        })
    }
}
