//! Banded token kind enumeration.

/// Token kind, with a semantic range layout.
///
/// All values fit in a single `u8` (max 127). Categories occupy contiguous
/// bands whose boundaries are the `*_START` constants below, so band
/// membership is a pair of integer comparisons:
///
/// | Range   | Band       |
/// |---------|------------|
/// | 0-1     | Fixed (`Eob`, `Error`) |
/// | 16-31   | Keywords   |
/// | 32-95   | Glyphs     |
/// | 96-111  | Literals   |
/// | 112-119 | Trivia     |
/// | 120-127 | Synthetic  |
///
/// Gaps inside a band are reserved for future kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Fixed (0-15) ===
    Eob = 0,
    Error = 1,

    // === Keywords (16-31) ===
    KwOwn = 16,
    KwBorrow = 17,
    KwAsync = 18,

    // === Glyphs (32-95) ===
    /// `;` or a line break.
    Terminator = 32,
    ColonEqual = 33,
    ColonColon = 34,
    Colon = 35,
    FatArrow = 36,
    Equal = 37,
    Arrow = 38,
    Minus = 39,
    PipeBrace = 40,
    Pipe = 41,
    PercentBrace = 42,
    Percent = 43,
    HashBrace = 44,
    Hash = 45,
    CaretBrace = 46,
    Caret = 47,
    Ellipsis = 48,
    DotDot = 49,
    Dot = 50,
    Comma = 51,
    LeftParen = 52,
    RightParen = 53,
    LeftBrace = 54,
    RightBrace = 55,
    LeftBracket = 56,
    RightBracket = 57,
    Less = 58,
    Greater = 59,
    Question = 60,
    Bang = 61,
    Ampersand = 62,
    Star = 63,
    Plus = 64,
    Slash = 65,
    At = 66,

    // === Literals (96-111) ===
    Identifier = 96,
    IntegerLiteral = 97,
    DecimalLiteral = 98,
    StringLiteral = 99,
    RuneLiteral = 100,

    // === Trivia (112-119) ===
    WhitespaceTrivia = 112,
    CommentTrivia = 113,

    // === Synthetic (120-127) ===
    /// Placeholder manufactured by the parser for an absent token.
    Missing = 120,
}

/// Classification band of a [`TokenKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Fixed,
    Keyword,
    Glyph,
    Literal,
    Trivia,
    Synthetic,
}

impl TokenKind {
    pub const KEYWORD_START: u8 = 16;
    pub const GLYPH_START: u8 = 32;
    pub const LITERAL_START: u8 = 96;
    pub const TRIVIA_START: u8 = 112;
    pub const SYNTHETIC_START: u8 = 120;
    /// One past the last discriminant any kind may use.
    pub const END: u8 = 128;

    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 48] = [
        Self::Eob,
        Self::Error,
        Self::KwOwn,
        Self::KwBorrow,
        Self::KwAsync,
        Self::Terminator,
        Self::ColonEqual,
        Self::ColonColon,
        Self::Colon,
        Self::FatArrow,
        Self::Equal,
        Self::Arrow,
        Self::Minus,
        Self::PipeBrace,
        Self::Pipe,
        Self::PercentBrace,
        Self::Percent,
        Self::HashBrace,
        Self::Hash,
        Self::CaretBrace,
        Self::Caret,
        Self::Ellipsis,
        Self::DotDot,
        Self::Dot,
        Self::Comma,
        Self::LeftParen,
        Self::RightParen,
        Self::LeftBrace,
        Self::RightBrace,
        Self::LeftBracket,
        Self::RightBracket,
        Self::Less,
        Self::Greater,
        Self::Question,
        Self::Bang,
        Self::Ampersand,
        Self::Star,
        Self::Plus,
        Self::Slash,
        Self::At,
        Self::Identifier,
        Self::IntegerLiteral,
        Self::DecimalLiteral,
        Self::StringLiteral,
        Self::RuneLiteral,
        Self::WhitespaceTrivia,
        Self::CommentTrivia,
        Self::Missing,
    ];

    /// Discriminant as a `u8`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Band this kind belongs to.
    pub const fn band(self) -> Band {
        let i = self as u8;
        if i < Self::KEYWORD_START {
            Band::Fixed
        } else if i < Self::GLYPH_START {
            Band::Keyword
        } else if i < Self::LITERAL_START {
            Band::Glyph
        } else if i < Self::TRIVIA_START {
            Band::Literal
        } else if i < Self::SYNTHETIC_START {
            Band::Trivia
        } else {
            Band::Synthetic
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let i = self as u8;
        i >= Self::KEYWORD_START && i < Self::GLYPH_START
    }

    #[inline]
    pub const fn is_glyph(self) -> bool {
        let i = self as u8;
        i >= Self::GLYPH_START && i < Self::LITERAL_START
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        let i = self as u8;
        i >= Self::LITERAL_START && i < Self::TRIVIA_START
    }

    #[inline]
    pub const fn is_trivia(self) -> bool {
        let i = self as u8;
        i >= Self::TRIVIA_START && i < Self::SYNTHETIC_START
    }

    #[inline]
    pub const fn is_synthetic(self) -> bool {
        let i = self as u8;
        i >= Self::SYNTHETIC_START && i < Self::END
    }

    /// Resolve identifier text to a keyword kind.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "own" => Some(Self::KwOwn),
            "borrow" => Some(Self::KwBorrow),
            "async" => Some(Self::KwAsync),
            _ => None,
        }
    }

    /// Get a human-readable name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eob => "end of input",
            Self::Error => "invalid token",
            Self::KwOwn => "`own`",
            Self::KwBorrow => "`borrow`",
            Self::KwAsync => "`async`",
            Self::Terminator => "terminator",
            Self::ColonEqual => "`:=`",
            Self::ColonColon => "`::`",
            Self::Colon => "`:`",
            Self::FatArrow => "`=>`",
            Self::Equal => "`=`",
            Self::Arrow => "`->`",
            Self::Minus => "`-`",
            Self::PipeBrace => "`|{`",
            Self::Pipe => "`|`",
            Self::PercentBrace => "`%{`",
            Self::Percent => "`%`",
            Self::HashBrace => "`#{`",
            Self::Hash => "`#`",
            Self::CaretBrace => "`^{`",
            Self::Caret => "`^`",
            Self::Ellipsis => "`...`",
            Self::DotDot => "`..`",
            Self::Dot => "`.`",
            Self::Comma => "`,`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::Question => "`?`",
            Self::Bang => "`!`",
            Self::Ampersand => "`&`",
            Self::Star => "`*`",
            Self::Plus => "`+`",
            Self::Slash => "`/`",
            Self::At => "`@`",
            Self::Identifier => "identifier",
            Self::IntegerLiteral => "integer",
            Self::DecimalLiteral => "decimal",
            Self::StringLiteral => "string",
            Self::RuneLiteral => "rune",
            Self::WhitespaceTrivia => "whitespace",
            Self::CommentTrivia => "comment",
            Self::Missing => "missing token",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
