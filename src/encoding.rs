//! Character decoding for saved HTML dumps.
//!
//! Files are decoded as UTF-16LE first. When the bytes are not valid
//! UTF-16LE the same bytes are decoded as UTF-8, with malformed sequences
//! dropped instead of replaced.

use std::borrow::Cow;

use encoding_rs::{DecoderResult, UTF_16LE, UTF_8};
use tracing::{debug, warn};

use crate::document::SourceEncoding;

/// Failure to decode bytes under the primary encoding.
///
/// Always recovered by [`decode_with_fallback`]; callers of the pipeline
/// never see it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// UTF-16 needs an even number of bytes.
    #[error("odd byte length {len} is not valid UTF-16LE")]
    OddLength { len: usize },

    /// A lone surrogate code unit.
    #[error("unpaired surrogate in UTF-16LE input")]
    UnpairedSurrogate,
}

/// Strictly decode UTF-16LE.
///
/// A leading byte order mark is kept as U+FEFF in the output.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength { len: bytes.len() });
    }

    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
        .ok_or(DecodeError::UnpairedSurrogate)
}

/// Decode UTF-8, silently dropping every byte that is not part of a valid
/// sequence.
///
/// Returns the text and the number of dropped bytes. A UTF-8 byte order
/// mark is kept as U+FEFF.
///
/// # Examples
///
/// ```
/// use iframe_extract::encoding::decode_utf8_ignoring_errors;
///
/// let (text, dropped) = decode_utf8_ignoring_errors(b"ab\xFFcd");
/// assert_eq!(text, "abcd");
/// assert_eq!(dropped, 1);
/// ```
#[must_use]
pub fn decode_utf8_ignoring_errors(bytes: &[u8]) -> (String, usize) {
    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len());
    let mut text = String::with_capacity(capacity);
    let mut remaining = bytes;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(remaining, &mut text, true);
        remaining = &remaining[read..];
        match result {
            DecoderResult::InputEmpty => break,
            // Malformed bytes are already consumed; keep going without them.
            DecoderResult::Malformed(_, _) => {}
            DecoderResult::OutputFull => {
                let extra = decoder
                    .max_utf8_buffer_length_without_replacement(remaining.len())
                    .unwrap_or(remaining.len() + 4);
                text.reserve(extra);
            }
        }
    }

    // Valid UTF-8 input bytes are copied through unchanged, so whatever is
    // missing from the output was dropped.
    let dropped = bytes.len() - text.len();
    (text, dropped)
}

/// Decode as UTF-16LE, falling back to lenient UTF-8.
///
/// Never fails. The returned [`SourceEncoding`] records which branch
/// produced the text.
#[must_use]
pub fn decode_with_fallback(bytes: &[u8]) -> (String, SourceEncoding) {
    match decode_utf16le(bytes) {
        Ok(text) => {
            debug!(bytes = bytes.len(), "decoded as UTF-16LE");
            (text, SourceEncoding::Utf16Le)
        }
        Err(err) => {
            debug!(%err, "UTF-16LE decode failed, falling back to UTF-8");
            let (text, dropped_bytes) = decode_utf8_ignoring_errors(bytes);
            if dropped_bytes > 0 {
                warn!(dropped_bytes, "dropped malformed UTF-8 bytes");
            }
            (text, SourceEncoding::Utf8Lossy { dropped_bytes })
        }
    }
}

/// Translate `\r\n` and lone `\r` into `\n`.
#[must_use]
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
