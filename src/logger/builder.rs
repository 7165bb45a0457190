//! Handlers are built (and validated) on their own; the log builder only orders them
//! and picks the catch-all.

use super::Log;
use crate::handler::Handler;
use crate::internal;
use crate::tag::WILDCARD;

#[derive(Debug, Default)]
pub struct LogBuilder {
    handlers: Vec<Handler>,
    default: Option<Handler>,
}

impl LogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appended after previously added handlers; routing scans them in this order.
    #[must_use]
    pub fn handler(mut self, handler: Handler) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use]
    pub fn handlers(mut self, handlers: impl IntoIterator<Item = Handler>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Replaces the stock stdout catch-all.
    #[must_use]
    pub fn default_handler(mut self, handler: Handler) -> Self {
        self.default = Some(handler);
        self
    }

    #[must_use]
    pub fn build(self) -> Log {
        for handler in &self.handlers {
            if handler.listens_to(WILDCARD) {
                internal::debug(
                    "log",
                    &format!(
                        "handler '{}' listens on '{WILDCARD}', which only matches calls tagged '{WILDCARD}'",
                        handler.name()
                    ),
                );
            }
        }

        Log {
            handlers: self.handlers,
            default: self.default.unwrap_or_else(Handler::fallback),
        }
    }
}
