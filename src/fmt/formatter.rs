//! The formatter renders one log line in layers: each tag, the tag list, the date,
//! the time, the combined datetime, the optional trace block, and finally the main
//! template with the raw message appended.

use super::format::{FormatTemplate, FormatValues, terminate_line};
use super::tag::{TagFormatter, Transform};
use super::trace::Trace;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

pub const DEFAULT_TEMPLATE: &str = "{datetime}{trace}{tags} :";
pub const DEFAULT_TAGS_TEMPLATE: &str = "[{tags}]";
pub const DEFAULT_TAG_TEMPLATE: &str = "{tag}";
pub const DEFAULT_TAG_DELIMITER: &str = ", ";
pub const DEFAULT_DATE_TEMPLATE: &str = "{date}";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_TIME_TEMPLATE: &str = "{time}";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_DATETIME_TEMPLATE: &str = "[{date} {time}]";
pub const DEFAULT_FILE_TEMPLATE: &str = "{file}";
pub const DEFAULT_LINE_TEMPLATE: &str = ":{line}";
pub const DEFAULT_MODULE_TEMPLATE: &str = ":{module}";
pub const DEFAULT_TRACE_TEMPLATE: &str = "[{file}{line}]";

/// Immutable rendering configuration shared by one handler.
///
/// Placeholders available per template:
/// - `template`: `{datetime}`, `{trace}`, `{tags}`, `{handler}`
/// - `tags_template`: `{tags}`; `tag_template`: `{tag}`
/// - `date_template`: `{date}`; `time_template`: `{time}`
/// - `datetime_template`: `{date}`, `{time}` (already formatted)
/// - `file_template`: `{file}`; `line_template`: `{line}`; `module_template`: `{module}`
/// - `trace_template`: `{file}`, `{line}`, `{module}` (already formatted)
#[derive(Debug, Clone)]
pub struct Formatter {
    template: FormatTemplate,
    tags_template: FormatTemplate,
    tag_template: FormatTemplate,
    tag_delimiter: String,
    tag_formatter: TagFormatter,
    date_template: FormatTemplate,
    date_format: String,
    time_template: FormatTemplate,
    time_format: String,
    datetime_template: FormatTemplate,
    file_template: FormatTemplate,
    line_template: FormatTemplate,
    module_template: FormatTemplate,
    trace_template: FormatTemplate,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            template: FormatTemplate::parse(DEFAULT_TEMPLATE),
            tags_template: FormatTemplate::parse(DEFAULT_TAGS_TEMPLATE),
            tag_template: FormatTemplate::parse(DEFAULT_TAG_TEMPLATE),
            tag_delimiter: DEFAULT_TAG_DELIMITER.to_string(),
            tag_formatter: TagFormatter::default(),
            date_template: FormatTemplate::parse(DEFAULT_DATE_TEMPLATE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_template: FormatTemplate::parse(DEFAULT_TIME_TEMPLATE),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            datetime_template: FormatTemplate::parse(DEFAULT_DATETIME_TEMPLATE),
            file_template: FormatTemplate::parse(DEFAULT_FILE_TEMPLATE),
            line_template: FormatTemplate::parse(DEFAULT_LINE_TEMPLATE),
            module_template: FormatTemplate::parse(DEFAULT_MODULE_TEMPLATE),
            trace_template: FormatTemplate::parse(DEFAULT_TRACE_TEMPLATE),
        }
    }
}

impl Formatter {
    #[must_use]
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::default()
    }

    /// Renders one complete line for `handler`. The result always ends in exactly one `\n`,
    /// and depends only on the arguments.
    #[must_use]
    pub fn format_message<S: AsRef<str>>(
        &self,
        message: &str,
        handler: &str,
        tags: &[S],
        timestamp: NaiveDateTime,
        trace: &Trace,
    ) -> String {
        let tags = self.format_tags(tags);
        let datetime = self.format_datetime(timestamp);
        let trace = self.format_trace(trace);

        let values = FormatValues::new()
            .handler(handler)
            .tags(&tags)
            .datetime(&datetime)
            .trace(&trace);

        let mut line = self.template.render(&values);
        line.push_str(message);
        terminate_line(line)
    }

    /// Transform, wrap, join, wrap again: `["info", "general"]` → `[INFO, GENERAL]`.
    #[must_use]
    pub fn format_tags<S: AsRef<str>>(&self, tags: &[S]) -> String {
        let joined = tags
            .iter()
            .map(|tag| {
                let shown = self.tag_formatter.apply(tag.as_ref());
                self.tag_template.render(&FormatValues::new().tag(&shown))
            })
            .collect::<Vec<_>>()
            .join(&self.tag_delimiter);
        self.tags_template.render(&FormatValues::new().tags(&joined))
    }

    #[must_use]
    pub fn format_datetime(&self, timestamp: NaiveDateTime) -> String {
        let date = strftime(timestamp, &self.date_format);
        let date = self.date_template.render(&FormatValues::new().date(&date));

        let time = strftime(timestamp, &self.time_format);
        let time = self.time_template.render(&FormatValues::new().time(&time));

        self.datetime_template
            .render(&FormatValues::new().date(&date).time(&time))
    }

    /// Empty when the trace carries nothing.
    #[must_use]
    pub fn format_trace(&self, trace: &Trace) -> String {
        if trace.is_empty() {
            return String::new();
        }

        let line = trace.line.map(|l| l.to_string()).unwrap_or_default();
        let file = self
            .file_template
            .render(&FormatValues::new().location(&trace.file, "", ""));
        let line = self
            .line_template
            .render(&FormatValues::new().location("", &line, ""));
        let module = self
            .module_template
            .render(&FormatValues::new().location("", "", &trace.module));

        self.trace_template
            .render(&FormatValues::new().location(&file, &line, &module))
    }

    #[must_use]
    pub const fn template(&self) -> &FormatTemplate {
        &self.template
    }

    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    #[must_use]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}

/// Patterns are validated at build time, so a write error here cannot happen.
fn strftime(timestamp: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", timestamp.format(pattern));
    out
}

/// Renders a fixed instant to prove chrono accepts the pattern for a naive timestamp.
/// This also rejects offset specifiers like `%z`, which have nothing to render.
fn validate_pattern(field: &'static str, pattern: &str) -> Result<(), crate::Error> {
    let probe = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        NaiveTime::MIN,
    );
    let mut out = String::new();
    write!(out, "{}", probe.format(pattern)).map_err(|_| crate::Error::InvalidFormat {
        field,
        format: pattern.to_string(),
    })
}

/// Every field starts at its documented default; `build` validates once.
#[derive(Debug, Clone, Default)]
pub struct FormatterBuilder {
    formatter: Formatter,
}

impl FormatterBuilder {
    /// Main layout. Placeholders: `{datetime}`, `{trace}`, `{tags}`, `{handler}`.
    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.formatter.template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn tags_template(mut self, template: &str) -> Self {
        self.formatter.tags_template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn tag_template(mut self, template: &str) -> Self {
        self.formatter.tag_template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn tag_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.formatter.tag_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn tag_formatter(mut self, formatter: impl Into<TagFormatter>) -> Self {
        self.formatter.tag_formatter = formatter.into();
        self
    }

    /// Shorthand for a closure-based tag formatter.
    #[must_use]
    pub fn tag_fn<F>(self, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.tag_formatter(TagFormatter::custom(func))
    }

    #[must_use]
    pub fn tag_transform(self, transform: Transform) -> Self {
        self.tag_formatter(transform)
    }

    #[must_use]
    pub fn date_template(mut self, template: &str) -> Self {
        self.formatter.date_template = FormatTemplate::parse(template);
        self
    }

    /// strftime pattern.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.formatter.date_format = format.into();
        self
    }

    #[must_use]
    pub fn time_template(mut self, template: &str) -> Self {
        self.formatter.time_template = FormatTemplate::parse(template);
        self
    }

    /// strftime pattern.
    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.formatter.time_format = format.into();
        self
    }

    #[must_use]
    pub fn datetime_template(mut self, template: &str) -> Self {
        self.formatter.datetime_template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn file_template(mut self, template: &str) -> Self {
        self.formatter.file_template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn line_template(mut self, template: &str) -> Self {
        self.formatter.line_template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn module_template(mut self, template: &str) -> Self {
        self.formatter.module_template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn trace_template(mut self, template: &str) -> Self {
        self.formatter.trace_template = FormatTemplate::parse(template);
        self
    }

    /// # Errors
    /// [`Error::InvalidFormat`](crate::Error::InvalidFormat) when the date or time pattern
    /// can't render a naive timestamp.
    pub fn build(self) -> Result<Formatter, crate::Error> {
        validate_pattern("date_format", &self.formatter.date_format)?;
        validate_pattern("time_format", &self.formatter.time_format)?;
        Ok(self.formatter)
    }
}
