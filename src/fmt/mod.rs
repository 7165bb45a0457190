//! Rendering is split by concern: the template engine, tag display transforms,
//! source-trace capture, and the layered `Formatter` that combines them.

mod format;
mod formatter;
mod tag;
mod trace;

pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder, terminate_line};
pub use formatter::{
    DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_TEMPLATE, DEFAULT_TAG_DELIMITER, DEFAULT_TAGS_TEMPLATE,
    DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT, DEFAULT_TRACE_TEMPLATE, Formatter, FormatterBuilder,
};
pub use tag::{TagFormatter, Transform};
pub use trace::Trace;
