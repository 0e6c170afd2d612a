//! Human-readable report of a scan.
//!
//! Output shape:
//!
//! ```text
//! File len: <chars>
//! IFRAME SRC: <src>
//! ```
//!
//! or, when nothing matched,
//!
//! ```text
//! File len: <chars>
//! No iframe found.
//! Preview: <first preview_chars characters>
//! ```

use std::io::{self, Write};

use crate::document::{DecodedDocument, MatchResult};
use crate::options::Options;

/// Write the report for `document` and its scan outcome to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    document: &DecodedDocument,
    found: &MatchResult,
    options: &Options,
) -> io::Result<()> {
    writeln!(out, "File len: {}", document.char_len())?;
    match found {
        MatchResult::Found(src) => writeln!(out, "IFRAME SRC: {src}"),
        MatchResult::NotFound => {
            writeln!(out, "No iframe found.")?;
            writeln!(out, "Preview: {}", document.preview(options.preview_chars))
        }
    }
}
