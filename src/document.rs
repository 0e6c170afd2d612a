//! Decoded input and scan outcome types.

use encoding_rs::{Encoding, UTF_16LE, UTF_8};

/// Which decoding branch produced a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// Strict UTF-16LE succeeded.
    Utf16Le,

    /// UTF-16LE failed and the bytes were decoded as UTF-8 with malformed
    /// sequences dropped.
    Utf8Lossy {
        /// Number of input bytes that were discarded.
        dropped_bytes: usize,
    },
}

impl SourceEncoding {
    /// The `encoding_rs` encoding behind this branch.
    #[must_use]
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf16Le => UTF_16LE,
            Self::Utf8Lossy { .. } => UTF_8,
        }
    }

    /// Whether the UTF-8 fallback was used.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Utf8Lossy { .. })
    }
}

/// The full text of one input file, as decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    content: String,
    encoding: SourceEncoding,
}

impl DecodedDocument {
    #[must_use]
    pub fn new(content: String, encoding: SourceEncoding) -> Self {
        Self { content, encoding }
    }

    /// Decoded text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Length in Unicode scalar values, not bytes.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// The first `max_chars` characters, or the whole text if shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use iframe_extract::{DecodedDocument, SourceEncoding};
    ///
    /// let doc = DecodedDocument::new("żółw".to_string(), SourceEncoding::Utf16Le);
    /// assert_eq!(doc.preview(2), "żó");
    /// assert_eq!(doc.preview(10), "żółw");
    /// ```
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }
}

/// Outcome of scanning a document for an iframe source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The captured `src` value, case preserved.
    Found(String),
    /// No qualifying `<iframe ... src=...>` in the text.
    NotFound,
}

impl MatchResult {
    /// The captured source, if any.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Found(src) => Some(src),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<&str>> for MatchResult {
    fn from(src: Option<&str>) -> Self {
        src.map_or(Self::NotFound, |s| Self::Found(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let doc = DecodedDocument::new("ąę<a>".to_string(), SourceEncoding::Utf16Le);
        assert_eq!(doc.char_len(), 5);
        assert_eq!(doc.content().len(), 7);
    }

    #[test]
    fn preview_of_short_text_is_whole_text() {
        let doc = DecodedDocument::new("short".to_string(), SourceEncoding::Utf16Le);
        assert_eq!(doc.preview(500), "short");
    }

    #[test]
    fn preview_truncates_at_char_boundary() {
        let text = "ł".repeat(600);
        let doc = DecodedDocument::new(text, SourceEncoding::Utf16Le);
        let preview = doc.preview(500);
        assert_eq!(preview.chars().count(), 500);
        assert_eq!(preview.len(), 1000);
    }

    #[test]
    fn preview_of_zero_chars_is_empty() {
        let doc = DecodedDocument::new("abc".to_string(), SourceEncoding::Utf16Le);
        assert_eq!(doc.preview(0), "");
    }

    #[test]
    fn source_encoding_maps_to_encoding_rs() {
        assert_eq!(SourceEncoding::Utf16Le.encoding(), UTF_16LE);
        assert_eq!(SourceEncoding::Utf8Lossy { dropped_bytes: 0 }.encoding(), UTF_8);
        assert!(!SourceEncoding::Utf16Le.is_fallback());
        assert!(SourceEncoding::Utf8Lossy { dropped_bytes: 2 }.is_fallback());
    }

    #[test]
    fn match_result_from_option() {
        assert_eq!(MatchResult::from(Some("a.html")), MatchResult::Found("a.html".to_string()));
        assert_eq!(MatchResult::from(None), MatchResult::NotFound);
        assert_eq!(MatchResult::Found("x".to_string()).src(), Some("x"));
        assert!(!MatchResult::NotFound.is_found());
    }
}
