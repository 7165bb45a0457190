//! Targets fan rendered text out to sinks. The built-in sinks cover files and the two
//! standard streams; the `Sink` trait lets callers attach anything else (sockets, ring
//! buffers, test captures) without touching the routing code.

mod file;
mod memory;
mod target;
mod terminal;

pub use file::FileSink;
pub use memory::MemorySink;
pub use target::{Target, TargetBuilder};
pub use terminal::{StderrSink, StdoutSink};

use std::io;

/// One write destination. `Send + Sync` because a router may be shared across threads;
/// each implementation serializes its own writes so lines never interleave.
pub trait Sink: Send + Sync {
    /// Shown in diagnostics and in [`SinkFailure`](crate::SinkFailure).
    fn name(&self) -> &str;

    /// Writes `text` in full. Callers pass newline-terminated lines.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn write(&self, text: &str) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
