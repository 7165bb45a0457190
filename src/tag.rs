//! Tags are plain case-sensitive strings. Nothing here normalizes them.

/// Conventional "everything" tag the stock default handler listens on. The router
/// gives it no special meaning.
pub const WILDCARD: &str = "*";

/// Separator for the name shorthand (`general_info`).
pub const NAME_DELIMITER: char = '_';

/// Splits a shorthand name into tags, keeping order and dropping empty pieces:
/// `"general_info"` → `["general", "info"]`, `"_a__b_"` → `["a", "b"]`.
#[must_use]
pub fn split_name(name: &str) -> Vec<String> {
    name.split(NAME_DELIMITER)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A [`TaggedLog`](crate::TaggedLog) carrying this tag captures the caller's source location.
pub const TRACE_TAG: &str = "trace";
