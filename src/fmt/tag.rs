//! Tags are matched exactly as the caller wrote them, but displayed however the
//! formatter wants (`info` routes as `info`, renders as `INFO`).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Named casing transforms. Config files can only name one of these; code can pass any closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Leave casing alone.
    None,
    /// `info` → `INFO`. The stock tag display.
    #[default]
    Uppercase,
    Lowercase,
    /// `info` → `Info`.
    Capitalize,
}

impl Transform {
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::Uppercase => s.to_uppercase(),
            Self::Lowercase => s.to_lowercase(),
            Self::Capitalize => {
                let mut chars = s.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>()
                        + chars.as_str().to_lowercase().as_str()
                })
            }
        }
    }
}

impl FromStr for Transform {
    type Err = crate::Error;

    /// Accepts the short aliases users tend to type (`upper`, `cap`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "uppercase" | "upper" => Ok(Self::Uppercase),
            "lowercase" | "lower" => Ok(Self::Lowercase),
            "capitalize" | "cap" => Ok(Self::Capitalize),
            _ => Err(crate::Error::InvalidTransform(s.to_string())),
        }
    }
}

type TagFn = dyn Fn(&str) -> String + Send + Sync;

/// The per-tag display callable. Shared so formatters stay cheap to clone.
#[derive(Clone)]
pub struct TagFormatter {
    describe: String,
    func: Arc<TagFn>,
}

impl TagFormatter {
    /// Trims the tag, then applies `transform`.
    #[must_use]
    pub fn transform(transform: Transform) -> Self {
        Self {
            describe: format!("{transform:?}"),
            func: Arc::new(move |tag: &str| transform.apply(tag.trim())),
        }
    }

    /// Any caller-supplied mapping.
    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            describe: "custom".to_string(),
            func: Arc::new(func),
        }
    }

    #[must_use]
    pub fn apply(&self, tag: &str) -> String {
        (self.func)(tag)
    }
}

impl Default for TagFormatter {
    fn default() -> Self {
        Self::transform(Transform::Uppercase)
    }
}

impl From<Transform> for TagFormatter {
    fn from(transform: Transform) -> Self {
        Self::transform(transform)
    }
}

impl fmt::Debug for TagFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TagFormatter").field(&self.describe).finish()
    }
}
