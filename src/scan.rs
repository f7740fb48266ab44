// src/scan.rs

//! Logical-line scanner over raw solution text.
//!
//! The legacy format is line-oriented but inconsistently line-ended: the same
//! document may carry CRLF from the original tooling and bare LF where Git or
//! an editor normalized it. The scanner accepts both, strips one trailing
//! `\r` per line, and skips a leading UTF-8 BOM exactly once.
//!
//! The primitive is [`next_line`], "next line starting at offset X", so a
//! caller can re-enter scanning at an arbitrary byte offset (used to walk the
//! interior of a located section). [`Lines`] wraps it as an iterator.

/// UTF-8 byte-order marker as it appears after lossy decoding.
const BOM: char = '\u{feff}';

/// Byte offset of the first content byte, past a leading BOM if present.
///
/// A BOM anywhere later in the document is ordinary content.
pub fn content_start(content: &str) -> usize {
    if content.starts_with(BOM) {
        BOM.len_utf8()
    } else {
        0
    }
}

/// Return the logical line starting at `offset` and the offset of the line
/// after it, or `None` when `offset` is at or past the end of `content`.
///
/// The returned slice excludes the line terminator; a trailing `\r` left by a
/// CRLF ending is stripped. The final line needs no terminator.
pub fn next_line(content: &str, offset: usize) -> Option<(&str, usize)> {
    if offset >= content.len() {
        return None;
    }

    let rest = &content[offset..];
    let (line_len, next) = match rest.find('\n') {
        Some(nl) => (nl, offset + nl + 1),
        None => (rest.len(), content.len()),
    };

    let mut line = &rest[..line_len];
    if let Some(stripped) = line.strip_suffix('\r') {
        line = stripped;
    }
    Some((line, next))
}

/// Lazy, restartable iterator over logical lines.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    content: &'a str,
    offset: usize,
}

impl<'a> Lines<'a> {
    /// Scan from the start of the document, skipping a leading BOM.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            offset: content_start(content),
        }
    }

    /// Resume scanning from an arbitrary byte offset.
    pub fn starting_at(content: &'a str, offset: usize) -> Self {
        Self { content, offset }
    }

    /// Byte offset of the next unread line.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (line, next) = next_line(self.content, self.offset)?;
        self.offset = next;
        Some(line)
    }
}
