//! Position-tracking cursor over a sentinel-padded buffer.
//!
//! The cursor advances byte by byte and keeps `line`/`column` current as
//! it goes, so a token's position is read off the cursor when the token
//! starts instead of being recomputed from its offset. Columns count
//! Unicode scalar values: only leading bytes move the column.
//!
//! The cursor never moves past the end of the text. Reads past the end
//! land in the `\0` padding.

/// Returns the earliest (minimum) of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Cheap, `Copy` cursor over a [`SourceText`](crate::SourceText).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Text plus sentinel padding.
    buf: &'a str,
    pos: u32,
    /// Length of the text (excludes padding).
    len: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// `buf[len..]` must be at least [`PADDING`](crate::source::PADDING)
    /// zero bytes.
    pub(crate) fn new(buf: &'a str, len: u32) -> Self {
        debug_assert!(
            (len as usize) + crate::source::PADDING <= buf.len(),
            "sentinel padding missing"
        );
        Cursor {
            buf,
            pos: 0,
            len,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.as_bytes()[pos as usize]
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Decode the scalar at the current position.
    ///
    /// `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.buf.get(self.pos as usize..)?.chars().next()
    }

    /// Bytes from the current position through the padding.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf.as_bytes()[self.pos as usize..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column, in scalars.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Consume one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let byte = self.current();
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(byte) {
            self.column += 1;
        }
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Consume one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(Self::utf8_char_width(self.current()));
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Jump forward to `target` across bytes known to hold no `\n`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "skipped.len() <= len which fits in u32"
    )]
    fn skip_to(&mut self, target: u32) {
        let skipped = &self.buf.as_bytes()[self.pos as usize..target as usize];
        debug_assert!(!skipped.contains(&b'\n'));
        let scalars = skipped.iter().filter(|&&b| !is_continuation(b)).count();
        self.column += scalars as u32;
        self.pos = target;
    }

    /// Remaining text bytes (no padding).
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.buf.as_bytes()[self.pos as usize..self.len as usize]
    }

    /// Advance to the line break (`\n` or `\r\n`) or EOF.
    ///
    /// Used by the comment scanner; the break itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset <= remaining.len() which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let target = match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => {
                let nl = self.pos + offset as u32;
                if nl > self.pos && self.byte_at(nl - 1) == b'\r' {
                    nl - 1
                } else {
                    nl
                }
            }
            None => self.len,
        };
        self.skip_to(target);
    }

    /// Advance past ordinary string content to the next interesting byte.
    ///
    /// Interesting bytes are `"`, `\`, `\n`, `\r`. Returns the byte found,
    /// or 0 for EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset <= remaining.len() which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        match earliest_of(primary, cr) {
            Some(offset) => {
                self.skip_to(self.pos + offset as u32);
                self.current()
            }
            None => {
                self.skip_to(self.len);
                0
            }
        }
    }

    /// Text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.buf
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }
}
