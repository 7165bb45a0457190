//! In-memory sink. Clones share one buffer, so a test can keep a handle and
//! inspect what a target wrote.

use super::Sink;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone)]
pub struct MemorySink {
    name: String,
    writes: Arc<Mutex<Vec<String>>>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl MemorySink {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Each `write` call as it arrived.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything written, concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .concat()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, text: &str) -> io::Result<()> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}
