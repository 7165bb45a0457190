#![forbid(unsafe_code)]

//! `chipper` - tag-routed logging.
//!
//! Messages carry free-form tags instead of a severity level. A [`Log`] holds an
//! ordered list of [`Handler`]s, each listening for a set of tags; every handler
//! whose tags intersect a call's tags receives that call once, with only the tags it
//! matched. Tags nobody listens for go to the default handler.
//!
//! # Example
//!
//! ```
//! use chipper::{Formatter, Handler, Log, MemorySink, Target};
//!
//! let errors = MemorySink::new("errors");
//! let log = Log::builder()
//!     .handler(
//!         Handler::builder("errs")
//!             .tags(["error"])
//!             .target(Target::sink(errors.clone()))
//!             .formatter(Formatter::builder().template("{tags} ").build()?)
//!             .build()?,
//!     )
//!     .build();
//!
//! log.log("connection refused", &["error", "db"]);
//! assert_eq!(errors.contents(), "[ERROR] connection refused\n");
//!
//! log.named("general_info").log("started");
//! # Ok::<(), chipper::Error>(())
//! ```
//!
//! Beyond the builders, logs can be declared in TOML and loaded with [`from_file`].

pub mod config;
mod error;
pub mod fmt;
pub mod handler;
mod internal;
pub mod logger;
pub mod output;
pub mod tag;

pub use config::ConfigModule;
pub use error::{Error, SinkFailure};
pub use fmt::{Formatter, FormatterBuilder, TagFormatter, Trace, Transform};
pub use handler::{Handler, HandlerBuilder};
pub use logger::{Log, LogBuilder, TaggedLog, from_file, global, install};
pub use output::{MemorySink, Sink, Target, TargetBuilder};
pub use tag::{TRACE_TAG, WILDCARD};
