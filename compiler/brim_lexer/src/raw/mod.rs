//! Raw lexer: every byte of the source becomes part of some token.
//!
//! Dispatch order per position: whitespace and line breaks, line
//! comments, string and rune literals, numbers, identifiers, the glyph
//! table, and finally the invalid-character fallback. Trivia is emitted;
//! filtering it out is [`SignificantTokens`](crate::SignificantTokens)'s job.
//!
//! Unsupported whitespace is the only input that produces no token: it is
//! diagnosed and skipped.

use brim_diagnostic::{Diagnostic, DiagnosticCode, DiagnosticSink, Phase};
use brim_ir::{Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::table::CHAR_TABLE;
use crate::{Next, SourceText, TokenSource};

/// Byte-order mark; accepted nowhere in Brim source.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Position where the token being scanned began.
#[derive(Clone, Copy, Debug)]
struct Start {
    offset: u32,
    line: u32,
    column: u32,
}

/// Pull-driven lexer over a [`SourceText`].
pub struct RawLexer<'src> {
    cursor: Cursor<'src>,
    finished: bool,
}

impl<'src> RawLexer<'src> {
    pub fn new(source: &'src SourceText) -> Self {
        RawLexer {
            cursor: source.cursor(),
            finished: false,
        }
    }

    #[inline]
    fn start(&self) -> Start {
        Start {
            offset: self.cursor.pos(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    fn finish(&self, start: Start, kind: TokenKind) -> Token {
        Token::new(
            kind,
            start.offset,
            self.cursor.pos() - start.offset,
            start.line,
            start.column,
        )
    }

    fn report(&self, sink: &mut DiagnosticSink, code: DiagnosticCode, start: Start) {
        sink.report(Diagnostic::at(
            code,
            Phase::Lexing,
            start.offset,
            self.cursor.pos() - start.offset,
            start.line,
            start.column,
        ));
    }

    /// Produce the next token. Returns `Eob` (zero length) once exhausted.
    fn next_token(&mut self, sink: &mut DiagnosticSink) -> Token {
        loop {
            let start = self.start();
            let kind = match self.cursor.current() {
                _ if self.cursor.is_eof() => TokenKind::Eob,
                b' ' | b'\t' => {
                    self.cursor.eat_while(|b| b == b' ' || b == b'\t');
                    TokenKind::WhitespaceTrivia
                }
                b'\n' => {
                    self.cursor.advance();
                    TokenKind::Terminator
                }
                b'\r' if self.cursor.peek() == b'\n' => {
                    self.cursor.advance_n(2);
                    TokenKind::Terminator
                }
                b'\r' | 0x0B | 0x0C => {
                    self.unsupported_whitespace(sink, start);
                    continue;
                }
                b'/' if self.cursor.peek() == b'/' => {
                    self.cursor.eat_until_newline_or_eof();
                    TokenKind::CommentTrivia
                }
                b'"' => self.string(sink, start),
                b'\'' => self.rune(sink, start),
                b'0'..=b'9' => self.number(),
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
                0x80..=0xFF => match self.cursor.current_char() {
                    Some(c) if c.is_whitespace() || c == BYTE_ORDER_MARK => {
                        self.unsupported_whitespace(sink, start);
                        continue;
                    }
                    Some(c) if c.is_alphabetic() => self.identifier(start),
                    _ => self.invalid(sink, start),
                },
                _ => match CHAR_TABLE.try_match(self.cursor.rest()) {
                    Some(glyph) => {
                        self.cursor.advance_n(glyph.len);
                        glyph.kind
                    }
                    None => self.invalid(sink, start),
                },
            };
            return self.finish(start, kind);
        }
    }

    fn unsupported_whitespace(&mut self, sink: &mut DiagnosticSink, start: Start) {
        self.cursor.advance_char();
        self.report(sink, DiagnosticCode::UnsupportedWhitespace, start);
    }

    fn invalid(&mut self, sink: &mut DiagnosticSink, start: Start) -> TokenKind {
        self.cursor.advance_char();
        self.report(sink, DiagnosticCode::InvalidCharacter, start);
        TokenKind::Error
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: Start) -> TokenKind {
        self.cursor.advance_char();
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_some_and(char::is_alphanumeric) {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
        TokenKind::keyword(self.cursor.slice_from(start.offset)).unwrap_or(TokenKind::Identifier)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn number(&mut self) -> TokenKind {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0'
            && matches!(self.cursor.current(), b'x' | b'X')
            && (self.cursor.peek().is_ascii_hexdigit() || self.cursor.peek() == b'_')
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
            self.eat_suffix();
            return TokenKind::IntegerLiteral;
        }

        if first == b'0'
            && matches!(self.cursor.current(), b'b' | b'B')
            && matches!(self.cursor.peek(), b'0' | b'1' | b'_')
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b == b'0' || b == b'1' || b == b'_');
            self.eat_suffix();
            return TokenKind::IntegerLiteral;
        }

        self.eat_decimal_digits();

        // Fraction needs a digit after the dot, so `1..2` stays a range.
        let kind = if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_decimal_digits();
            TokenKind::DecimalLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        self.eat_suffix();
        kind
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    /// Width suffix: `u8`, `i64`, `f32`.
    fn eat_suffix(&mut self) {
        if matches!(self.cursor.current(), b'u' | b'i' | b'f') && self.cursor.peek().is_ascii_digit()
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
    }

    // ─── Strings & Runes ───────────────────────────────────────────

    fn string(&mut self, sink: &mut DiagnosticSink, start: Start) -> TokenKind {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return TokenKind::StringLiteral;
                }
                b'\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.current(), b'\n' | b'\r') {
                        self.cursor.advance_char();
                    }
                }
                b'\r' if self.cursor.peek() != b'\n' => self.cursor.advance(),
                // Line break or EOF; the break is not part of the literal.
                _ => break,
            }
        }
        self.report(sink, DiagnosticCode::UnterminatedString, start);
        TokenKind::StringLiteral
    }

    fn rune(&mut self, sink: &mut DiagnosticSink, start: Start) -> TokenKind {
        self.cursor.advance(); // opening quote
        let mut scalars = 0u32;
        let terminated = loop {
            match self.cursor.current() {
                _ if self.cursor.is_eof() => break false,
                b'\'' => {
                    self.cursor.advance();
                    break true;
                }
                b'\n' => break false,
                b'\r' if self.cursor.peek() == b'\n' => break false,
                b'\\' => {
                    self.cursor.advance();
                    self.escape();
                    scalars += 1;
                }
                _ => {
                    self.cursor.advance_char();
                    scalars += 1;
                }
            }
        };
        if !terminated {
            self.report(sink, DiagnosticCode::UnterminatedRune, start);
        } else if scalars != 1 {
            self.report(sink, DiagnosticCode::MultipleRunesInLiteral, start);
        }
        TokenKind::RuneLiteral
    }

    /// Body of an escape, after the backslash: `\u{…}` or one character.
    fn escape(&mut self) {
        if self.cursor.current() == b'u' && self.cursor.peek() == b'{' {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            if self.cursor.current() == b'}' {
                self.cursor.advance();
            }
        } else if !matches!(self.cursor.current(), b'\n' | b'\r') {
            self.cursor.advance_char();
        }
    }
}

impl TokenSource for RawLexer<'_> {
    fn try_read(&mut self, sink: &mut DiagnosticSink) -> Next {
        if self.finished {
            let start = self.start();
            return Next::Exhausted(self.finish(start, TokenKind::Eob));
        }
        let token = self.next_token(sink);
        trace!(
            kind = ?token.kind,
            offset = token.offset,
            len = token.length,
            line = token.line,
            column = token.column,
            "raw token"
        );
        if token.kind == TokenKind::Eob {
            self.finished = true;
        }
        Next::Token(token)
    }
}
