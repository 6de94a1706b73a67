//! Sentinel-padded, immutable source text.
//!
//! The text is stored followed by `\0` padding up to the next 64-byte
//! boundary (at least [`PADDING`] bytes), so the cursor can look a few
//! bytes past the end without bounds checks failing. Interior NULs are
//! told apart from the sentinel by comparing against [`SourceText::len`].

use std::io::Read;
use std::path::{Path, PathBuf};

use brim_ir::{Span, Token};

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of sentinel bytes after the text.
pub(crate) const PADDING: usize = 4;

/// Failure to obtain source text from outside the process.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` is {len} bytes, larger than the 4 GiB source limit", .path.display())]
    TooLarge { path: PathBuf, len: u64 },
}

/// Immutable source text shared by every stage of one lex or parse.
#[derive(Clone, Debug)]
pub struct SourceText {
    /// `[text..., '\0' sentinel, '\0' padding...]`
    buf: String,
    len: u32,
    name: Option<String>,
}

impl SourceText {
    /// Wrap in-memory text.
    ///
    /// Texts longer than `u32::MAX` bytes are accepted but addressed only
    /// up to `u32::MAX`; [`SourceText::read`] rejects them up front.
    pub fn new(text: &str) -> Self {
        let text_len = text.len();
        let padded_len = (text_len + PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(text);
        buf.extend(std::iter::repeat('\0').take(padded_len - text_len));

        SourceText {
            buf,
            len: u32::try_from(text_len).unwrap_or(u32::MAX),
            name: None,
        }
    }

    /// Wrap in-memory text under a display name (file path, `<stdin>`).
    pub fn named(name: impl Into<String>, text: &str) -> Self {
        let mut source = Self::new(text);
        source.name = Some(name.into());
        source
    }

    /// Read a UTF-8 file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let io_err = |source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        };
        let len = std::fs::metadata(path).map_err(io_err)?.len();
        check_len(path, len)?;
        let text = std::fs::read_to_string(path).map_err(io_err)?;
        Ok(Self::named(path.display().to_string(), &text))
    }

    /// Read all of `reader` as UTF-8 (used for stdin).
    pub fn from_reader(name: &str, mut reader: impl Read) -> Result<Self, SourceError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| SourceError::Io {
                path: PathBuf::from(name),
                source,
            })?;
        check_len(Path::new(name), text.len() as u64)?;
        Ok(Self::named(name, &text))
    }

    /// The text, without sentinel or padding.
    pub fn as_str(&self) -> &str {
        self.buf.get(..self.len as usize).unwrap_or_default()
    }

    /// Length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Character starting at byte `offset`, if `offset` is a boundary.
    pub fn char_at(&self, offset: u32) -> Option<char> {
        self.as_str().get(offset as usize..)?.chars().next()
    }

    /// Text of `length` bytes at `offset`.
    ///
    /// Out-of-range or non-boundary requests yield `""`.
    pub fn slice(&self, offset: u32, length: u32) -> &str {
        let start = offset as usize;
        let end = start.saturating_add(length as usize);
        self.as_str().get(start..end).unwrap_or_default()
    }

    /// Text covered by a token.
    pub fn text(&self, token: &Token) -> &str {
        self.slice(token.offset, token.length)
    }

    pub fn span_text(&self, span: Span) -> &str {
        self.slice(span.start, span.len())
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len)
    }
}

fn check_len(path: &Path, len: u64) -> Result<(), SourceError> {
    if len > u64::from(u32::MAX) {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
