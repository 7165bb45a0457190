//! Serde schema for log definitions in a config file, and its conversion into the
//! typed builders. Every `build` funnels through the builders' own validation.

use crate::fmt::{Formatter, Transform};
use crate::handler::Handler;
use crate::logger::Log;
use crate::output::Target;
use serde::Deserialize;

/// One named log definition: `[name]` with `[[name.handlers]]` and an optional `[name.default]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Routing order follows file order.
    pub handlers: Vec<HandlerConfig>,
    /// Catch-all override. Absent means the stock stdout handler.
    pub default: Option<HandlerConfig>,
}

impl LogConfig {
    /// # Errors
    /// The first handler that fails validation or can't open its file.
    pub fn build(&self) -> Result<Log, crate::Error> {
        let mut builder = Log::builder();
        for handler in &self.handlers {
            builder = builder.handler(handler.build()?);
        }
        if let Some(default) = &self.default {
            builder = builder.default_handler(default.build()?);
        }
        Ok(builder.build())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    pub name: String,
    /// Must not be empty.
    pub tags: Vec<String>,
    pub target: TargetConfig,
    #[serde(default)]
    pub formatter: Option<FormatterConfig>,
}

impl HandlerConfig {
    /// # Errors
    /// Empty tags, a bad formatter pattern, or an unopenable file.
    pub fn build(&self) -> Result<Handler, crate::Error> {
        let mut builder = Handler::builder(&self.name)
            .tags(self.tags.iter().cloned())
            .target(self.target.build()?);
        if let Some(formatter) = &self.formatter {
            builder = builder.formatter(formatter.build()?);
        }
        builder.build()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Append-mode log file; empty for none. `~` is expanded.
    pub filename: String,
    pub stdout: bool,
    pub stderr: bool,
}

impl TargetConfig {
    /// # Errors
    /// The file can't be opened.
    pub fn build(&self) -> Result<Target, crate::Error> {
        Target::builder()
            .filename(&self.filename)
            .stdout(self.stdout)
            .stderr(self.stderr)
            .build()
    }
}

/// Any key left out keeps the formatter default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub template: Option<String>,
    pub tags_template: Option<String>,
    pub tag_template: Option<String>,
    pub tag_delimiter: Option<String>,
    /// `none`, `uppercase`, `lowercase` or `capitalize`. Tags are always trimmed.
    pub tag_transform: Option<String>,
    pub date_template: Option<String>,
    pub date_format: Option<String>,
    pub time_template: Option<String>,
    pub time_format: Option<String>,
    pub datetime_template: Option<String>,
    pub file_template: Option<String>,
    pub line_template: Option<String>,
    pub module_template: Option<String>,
    pub trace_template: Option<String>,
}

impl FormatterConfig {
    /// # Errors
    /// Unknown transform name or an invalid strftime pattern.
    pub fn build(&self) -> Result<Formatter, crate::Error> {
        let mut b = Formatter::builder();
        if let Some(t) = &self.template {
            b = b.template(t);
        }
        if let Some(t) = &self.tags_template {
            b = b.tags_template(t);
        }
        if let Some(t) = &self.tag_template {
            b = b.tag_template(t);
        }
        if let Some(d) = &self.tag_delimiter {
            b = b.tag_delimiter(d);
        }
        if let Some(name) = &self.tag_transform {
            b = b.tag_transform(name.parse::<Transform>()?);
        }
        if let Some(t) = &self.date_template {
            b = b.date_template(t);
        }
        if let Some(f) = &self.date_format {
            b = b.date_format(f);
        }
        if let Some(t) = &self.time_template {
            b = b.time_template(t);
        }
        if let Some(f) = &self.time_format {
            b = b.time_format(f);
        }
        if let Some(t) = &self.datetime_template {
            b = b.datetime_template(t);
        }
        if let Some(t) = &self.file_template {
            b = b.file_template(t);
        }
        if let Some(t) = &self.line_template {
            b = b.line_template(t);
        }
        if let Some(t) = &self.module_template {
            b = b.module_template(t);
        }
        if let Some(t) = &self.trace_template {
            b = b.trace_template(t);
        }
        b.build()
    }
}
