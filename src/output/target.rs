//! A target resolves its configuration into an ordered sink list once, at build time.

use super::{FileSink, Sink, StderrSink, StdoutSink};
use crate::error::SinkFailure;
use crate::fmt::terminate_line;
use std::fmt;

/// Sinks in attach order: file, stdout, stderr, then custom sinks.
/// A target with no sinks is valid and drops everything.
pub struct Target {
    sinks: Vec<Box<dyn Sink>>,
}

impl Target {
    #[must_use]
    pub fn builder() -> TargetBuilder {
        TargetBuilder::default()
    }

    /// Standard output only.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            sinks: vec![Box::new(StdoutSink)],
        }
    }

    /// Standard error only.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            sinks: vec![Box::new(StderrSink)],
        }
    }

    /// A single append-mode file.
    ///
    /// # Errors
    /// The file or its parent directory can't be created.
    pub fn file(path: &str) -> Result<Self, crate::Error> {
        Ok(Self {
            sinks: vec![Box::new(FileSink::open(path)?)],
        })
    }

    /// A single custom sink.
    #[must_use]
    pub fn sink(sink: impl Sink + 'static) -> Self {
        Self {
            sinks: vec![Box::new(sink)],
        }
    }

    /// Writes `text` (newline-terminated) to every sink in order. A failing sink doesn't
    /// stop the rest.
    ///
    /// # Errors
    /// [`Error::Write`](crate::Error::Write) listing every sink that failed.
    pub fn log(&self, text: &str) -> Result<(), crate::Error> {
        if self.sinks.is_empty() {
            return Ok(());
        }

        let line = terminate_line(text.to_string());
        let failures: Vec<SinkFailure> = self
            .sinks
            .iter()
            .filter_map(|sink| {
                sink.write(&line).err().map(|source| SinkFailure {
                    sink: sink.name().to_string(),
                    source,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(crate::Error::Write(failures))
        }
    }

    /// # Errors
    /// [`Error::Write`](crate::Error::Write) listing every sink that failed to flush.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let failures: Vec<SinkFailure> = self
            .sinks
            .iter()
            .filter_map(|sink| {
                sink.flush().err().map(|source| SinkFailure {
                    sink: sink.name().to_string(),
                    source,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(crate::Error::Write(failures))
        }
    }

    #[must_use]
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("sinks", &self.sink_names())
            .finish()
    }
}

/// Declarative target settings; `build` opens the file, if any.
#[derive(Default)]
pub struct TargetBuilder {
    filename: String,
    stdout: bool,
    stderr: bool,
    extra: Vec<Box<dyn Sink>>,
}

impl TargetBuilder {
    /// Path of an append-mode log file. Empty means no file.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    #[must_use]
    pub const fn stdout(mut self, enabled: bool) -> Self {
        self.stdout = enabled;
        self
    }

    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    /// Attached after the file and standard stream sinks.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.extra.push(Box::new(sink));
        self
    }

    /// # Errors
    /// The configured file can't be opened.
    pub fn build(self) -> Result<Target, crate::Error> {
        let mut sinks: Vec<Box<dyn Sink>> = Vec::with_capacity(3 + self.extra.len());
        if !self.filename.is_empty() {
            sinks.push(Box::new(FileSink::open(&self.filename)?));
        }
        if self.stdout {
            sinks.push(Box::new(StdoutSink));
        }
        if self.stderr {
            sinks.push(Box::new(StderrSink));
        }
        sinks.extend(self.extra);
        Ok(Target { sinks })
    }
}

impl fmt::Debug for TargetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetBuilder")
            .field("filename", &self.filename)
            .field("stdout", &self.stdout)
            .field("stderr", &self.stderr)
            .field("extra", &self.extra.len())
            .finish()
    }
}
