//! Compiled regex patterns.
//!
//! Patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches an `<iframe` tag up to a quoted `src=` value inside it.
///
/// Group 1 is the quoted value without its quotes. The whole pattern is
/// case-insensitive, the value itself is returned verbatim. `[^>]*` is
/// greedy, so with several `src=` attributes in one tag the last one wins.
/// Either quote character closes the value.
pub static IFRAME_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<iframe[^>]*src=["']([^"']*)["']"#).expect("IFRAME_SRC regex")
});
