//! Configuration options for a single extraction run.
//!
//! The `Options` struct names the input file and tunes how its text is
//! presented to the scanner and the reporter.

use std::path::PathBuf;

/// Relative path read when no other path is configured.
pub const DEFAULT_PATH: &str = "sejm_dump.html";

/// Number of characters shown in the no-match preview by default.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use iframe_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.preview_chars, 500);
///
/// // Point at another file
/// let options = Options {
///     path: "saved/page.html".into(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// File to read.
    ///
    /// Default: `sejm_dump.html` (relative to the working directory)
    pub path: PathBuf,

    /// Maximum number of characters printed as a preview when no iframe
    /// is found.
    ///
    /// Default: `500`
    pub preview_chars: usize,

    /// Translate `\r\n` and lone `\r` line endings to `\n` after decoding.
    ///
    /// This affects the reported length, so disable it to count the raw
    /// decoded characters.
    ///
    /// Default: `true`
    pub translate_newlines: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            translate_newlines: true,
        }
    }
}

impl Options {
    /// Default options reading from `path`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
