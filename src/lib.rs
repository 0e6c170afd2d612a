//! # iframe-extract
//!
//! Finds the first `<iframe>` in a saved HTML page and reports where it
//! points.
//!
//! Saved dumps come in as either UTF-16LE or UTF-8. The file is decoded as
//! UTF-16LE first; if that fails the same bytes are decoded as UTF-8 with
//! malformed sequences dropped. The decoded text is then scanned with a
//! single case-insensitive regex for `<iframe ... src="...">`.
//!
//! ## Quick Start
//!
//! ```rust
//! use iframe_extract::scan::find_iframe_src;
//!
//! let html = r#"<div><iframe class="live" src="https://example.com/embed"></iframe></div>"#;
//! assert_eq!(find_iframe_src(html), Some("https://example.com/embed"));
//! ```
//!
//! Running the whole pipeline against a file:
//!
//! ```no_run
//! use iframe_extract::{run, Options};
//!
//! let options = Options::with_path("sejm_dump.html");
//! let found = run(&options, &mut std::io::stdout())?;
//! # let _ = found;
//! # Ok::<(), iframe_extract::Error>(())
//! ```

use std::fs;
use std::io::Write;

use tracing::debug;

mod error;
mod options;
mod patterns;

/// Decoded text and scan outcome types.
pub mod document;

/// UTF-16LE decoding with a lenient UTF-8 fallback.
pub mod encoding;

/// Report formatting.
pub mod report;

/// Regex scan for iframe sources.
pub mod scan;

// Public API - re-exports
pub use document::{DecodedDocument, MatchResult, SourceEncoding};
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_PATH, DEFAULT_PREVIEW_CHARS};

/// Read and decode the file named by `options.path`.
///
/// The file is read in one go and closed before decoding starts. Decoding
/// itself cannot fail; see [`encoding::decode_with_fallback`].
///
/// # Errors
///
/// Returns [`Error::FileAccess`] if the file cannot be opened or read.
pub fn load_document(options: &Options) -> Result<DecodedDocument> {
    let bytes = fs::read(&options.path).map_err(|source| Error::FileAccess {
        path: options.path.clone(),
        source,
    })?;
    debug!(path = %options.path.display(), bytes = bytes.len(), "read input file");

    let (text, encoding) = encoding::decode_with_fallback(&bytes);
    let text = if options.translate_newlines {
        encoding::normalize_newlines(text)
    } else {
        text
    };

    Ok(DecodedDocument::new(text, encoding))
}

/// Scan a decoded document for the first iframe source.
#[must_use]
pub fn scan_document(document: &DecodedDocument) -> MatchResult {
    MatchResult::from(scan::find_iframe_src(document.content()))
}

/// Load, scan and report in one pass.
///
/// Nothing is written to `out` unless the file was read successfully.
///
/// # Errors
///
/// Returns [`Error::FileAccess`] for an unreadable input file and
/// [`Error::Output`] if writing the report fails.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<MatchResult> {
    let document = load_document(options)?;
    let found = scan_document(&document);
    debug!(
        chars = document.char_len(),
        fallback = document.encoding().is_fallback(),
        found = found.is_found(),
        "scanned document"
    );
    report::write_report(out, &document, &found, options)?;
    Ok(found)
}
