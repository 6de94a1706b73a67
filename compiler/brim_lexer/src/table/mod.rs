//! Maximal-munch glyph table.
//!
//! One entry per 7-bit ASCII leading byte. An entry holds the kind for the
//! lone byte (if any) and the longer glyphs that start with it, sorted by
//! descending length so the first full match is the longest one.

use brim_ir::TokenKind;

/// Result of a successful table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMatch {
    pub kind: TokenKind,
    /// Bytes consumed.
    pub len: u32,
}

/// Glyph text and the kind it produces.
pub type Sequence = (&'static str, TokenKind);

#[derive(Clone, Copy, Debug)]
struct Entry {
    single: Option<TokenKind>,
    sequences: &'static [Sequence],
}

impl Entry {
    const EMPTY: Entry = Entry {
        single: None,
        sequences: &[],
    };

    const fn single(kind: TokenKind) -> Entry {
        Entry {
            single: Some(kind),
            sequences: &[],
        }
    }

    const fn with(kind: TokenKind, sequences: &'static [Sequence]) -> Entry {
        Entry {
            single: Some(kind),
            sequences,
        }
    }
}

/// Number of entries: one per 7-bit ASCII value.
pub const TABLE_SIZE: usize = 128;

/// Static per-leading-byte glyph table.
#[derive(Debug)]
pub struct CharTable {
    entries: [Entry; TABLE_SIZE],
}

/// The process-wide table. Built at compile time and read-only.
pub static CHAR_TABLE: CharTable = CharTable::build();

impl CharTable {
    #[allow(clippy::enum_glob_use, reason = "dense table of token kinds")]
    const fn build() -> CharTable {
        use TokenKind::*;

        let mut entries = [Entry::EMPTY; TABLE_SIZE];
        entries[b':' as usize] = Entry::with(Colon, &[(":=", ColonEqual), ("::", ColonColon)]);
        entries[b'=' as usize] = Entry::with(Equal, &[("=>", FatArrow)]);
        entries[b'-' as usize] = Entry::with(Minus, &[("->", Arrow)]);
        entries[b'|' as usize] = Entry::with(Pipe, &[("|{", PipeBrace)]);
        entries[b'%' as usize] = Entry::with(Percent, &[("%{", PercentBrace)]);
        entries[b'#' as usize] = Entry::with(Hash, &[("#{", HashBrace)]);
        entries[b'^' as usize] = Entry::with(Caret, &[("^{", CaretBrace)]);
        entries[b'.' as usize] = Entry::with(Dot, &[("...", Ellipsis), ("..", DotDot)]);
        entries[b',' as usize] = Entry::single(Comma);
        entries[b';' as usize] = Entry::single(Terminator);
        entries[b'(' as usize] = Entry::single(LeftParen);
        entries[b')' as usize] = Entry::single(RightParen);
        entries[b'{' as usize] = Entry::single(LeftBrace);
        entries[b'}' as usize] = Entry::single(RightBrace);
        entries[b'[' as usize] = Entry::single(LeftBracket);
        entries[b']' as usize] = Entry::single(RightBracket);
        entries[b'<' as usize] = Entry::single(Less);
        entries[b'>' as usize] = Entry::single(Greater);
        entries[b'?' as usize] = Entry::single(Question);
        entries[b'!' as usize] = Entry::single(Bang);
        entries[b'&' as usize] = Entry::single(Ampersand);
        entries[b'*' as usize] = Entry::single(Star);
        entries[b'+' as usize] = Entry::single(Plus);
        entries[b'/' as usize] = Entry::single(Slash);
        entries[b'@' as usize] = Entry::single(At);
        CharTable { entries }
    }

    #[inline]
    fn entry(&self, lead: u8) -> Option<&Entry> {
        self.entries.get(lead as usize)
    }

    /// Longest glyph at the start of `bytes`.
    ///
    /// `None` when the leading byte is outside 7-bit ASCII or has no entry.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "glyph sequences are at most a few bytes"
    )]
    pub fn try_match(&self, bytes: &[u8]) -> Option<GlyphMatch> {
        let entry = self.entry(*bytes.first()?)?;
        for &(sequence, kind) in entry.sequences {
            if bytes.starts_with(sequence.as_bytes()) {
                return Some(GlyphMatch {
                    kind,
                    len: sequence.len() as u32,
                });
            }
        }
        entry.single.map(|kind| GlyphMatch { kind, len: 1 })
    }

    /// Kind produced by `lead` on its own.
    #[inline]
    pub fn single_kind(&self, lead: u8) -> Option<TokenKind> {
        self.entry(lead)?.single
    }

    #[inline]
    pub fn is_single_kind(&self, lead: u8) -> bool {
        self.single_kind(lead).is_some()
    }

    /// Multi-byte glyphs starting with `lead`, longest first.
    pub fn sequences(&self, lead: u8) -> &'static [Sequence] {
        self.entry(lead).map_or(&[], |entry| entry.sequences)
    }
}
