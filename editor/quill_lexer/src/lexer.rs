//! The scanning state machine.
//!
//! [`Lexer::next_token`] trims leading whitespace, then tries each rule in
//! a fixed order. Earlier rules win:
//!
//! 1. end of content
//! 2. digit run
//! 3. `"` string literal
//! 4. `#` preprocessor directive
//! 5. `//` line comment
//! 6. single-byte operator
//! 7. literal table (brackets, semicolon)
//! 8. identifier / keyword
//! 9. one invalid byte
//!
//! Layout is tracked inside [`Lexer::chop`], the only place that consumes
//! bytes: a `\n` starts a new line and resets `x`, any other byte advances
//! `x` by its glyph width.

use crate::cursor::Cursor;
use crate::glyph::GlyphMetrics;
use crate::layout::LayoutConfig;
use crate::tables::{
    is_digit, is_escape, is_keyword, is_operator, is_symbol, is_symbol_start, is_whitespace,
    match_literal,
};
use crate::token::{Position, Span, Token, TokenKind};

/// Pull-based lexer over a borrowed byte buffer.
///
/// # Invariants
///
/// - `line` increases by exactly one per consumed `\n`.
/// - `x` is reset to 0 on every new line and otherwise only grows.
/// - Every call to [`next_token`](Self::next_token) either consumes at least
///   one byte or returns [`TokenKind::End`].
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    line: usize,
    /// Offset of the first byte of the current line.
    bol: usize,
    x: f32,
    metrics: Option<&'a dyn GlyphMetrics>,
    layout: LayoutConfig,
}

impl<'a> Lexer<'a> {
    /// Create a lexer at the start of `content`.
    ///
    /// Without `metrics`, `x` stays 0 and only line tracking is meaningful.
    pub fn new(content: &'a [u8], metrics: Option<&'a dyn GlyphMetrics>) -> Self {
        Self {
            cursor: Cursor::new(content),
            line: 0,
            bol: 0,
            x: 0.0,
            metrics,
            layout: LayoutConfig::default(),
        }
    }

    /// Replace the font size / line spacing used for `y` positions.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Scan and return the next token.
    ///
    /// At end of content this returns a zero-length [`TokenKind::End`]
    /// token, and keeps returning it on every further call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.trim_left();

        let start = self.cursor.pos();
        let position = Position {
            x: self.x,
            y: self.layout.line_y(self.line),
        };

        let kind = self.scan();
        let end = self.cursor.pos();
        Token {
            kind,
            text: self.cursor.slice(start, end),
            span: Span::new(start, end),
            position,
        }
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor.pos()
    }

    /// Zero-based line of the next unconsumed byte.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Offset where the current line begins.
    #[inline]
    pub fn line_begin(&self) -> usize {
        self.bol
    }

    /// Accumulated horizontal advance on the current line.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn layout(&self) -> LayoutConfig {
        self.layout
    }

    // ─── Dispatch ───────────────────────────────────────────────

    fn scan(&mut self) -> TokenKind {
        if self.cursor.is_eof() {
            return TokenKind::End;
        }

        let b = self.cursor.current();
        if is_digit(b) {
            return self.number();
        }
        if b == b'"' {
            return self.string();
        }
        if b == b'#' {
            return self.preproc();
        }
        if self.cursor.starts_with(b"//") {
            return self.comment();
        }
        if is_operator(b) {
            self.chop(1);
            return TokenKind::Operator;
        }
        if let Some((len, kind)) = match_literal(self.cursor.remaining()) {
            self.chop(len);
            return kind;
        }
        if is_symbol_start(b) {
            return self.symbol();
        }

        self.chop(1);
        TokenKind::Invalid
    }

    // ─── Rules ──────────────────────────────────────────────────

    fn number(&mut self) -> TokenKind {
        self.chop_while(is_digit);
        TokenKind::Number
    }

    /// `"` up to an unescaped `"`, a newline, or EOF. The closing quote is
    /// consumed when present; the newline never is.
    fn string(&mut self) -> TokenKind {
        self.chop(1); // opening quote
        loop {
            let plain = self.cursor.distance_to3(b'"', b'\\', b'\n');
            self.chop(plain);
            match self.cursor.current() {
                _ if self.cursor.is_eof() => break,
                b'"' => {
                    self.chop(1);
                    break;
                }
                b'\\' => {
                    self.chop(1);
                    if !self.cursor.is_eof() && is_escape(self.cursor.current()) {
                        self.chop(1);
                    }
                }
                // b'\n': unterminated, the newline belongs to the next token
                _ => break,
            }
        }
        TokenKind::String
    }

    /// `#` through the first space (consumed) or up to a line end / EOF.
    fn preproc(&mut self) -> TokenKind {
        let body = self.cursor.distance_to2(b' ', b'\n');
        self.chop(body);
        if self.cursor.current() == b' ' {
            self.chop(1);
        }
        TokenKind::Preproc
    }

    /// `//` through the end of the line, newline included.
    fn comment(&mut self) -> TokenKind {
        let body = self.cursor.distance_to(b'\n');
        self.chop(body);
        if !self.cursor.is_eof() {
            self.chop(1);
        }
        TokenKind::Comment
    }

    fn symbol(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        self.chop_while(is_symbol);
        if is_keyword(self.cursor.slice_from(start)) {
            TokenKind::Keyword
        } else {
            TokenKind::Symbol
        }
    }

    // ─── Consumption & layout ───────────────────────────────────

    fn trim_left(&mut self) {
        self.chop_while(is_whitespace);
    }

    fn chop_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.cursor.is_eof() && pred(self.cursor.current()) {
            self.chop(1);
        }
    }

    /// Consume `n` bytes, updating line and `x` for each one.
    fn chop(&mut self, n: usize) {
        for _ in 0..n {
            debug_assert!(!self.cursor.is_eof(), "chop past end of content");
            let b = self.cursor.current();
            self.cursor.advance();
            if b == b'\n' {
                self.line += 1;
                self.bol = self.cursor.pos();
                self.x = 0.0;
            } else if let Some(metrics) = self.metrics {
                self.x += metrics.advance(b);
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token before [`TokenKind::End`], then `None`.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.kind == TokenKind::End {
            None
        } else {
            Some(token)
        }
    }
}

/// Scan all of `content` and collect the tokens, excluding the final `End`.
#[tracing::instrument(level = "debug", skip_all, fields(len = content.len()))]
pub fn tokenize<'a>(content: &'a [u8], metrics: Option<&'a dyn GlyphMetrics>) -> Vec<Token<'a>> {
    let tokens: Vec<Token<'a>> = Lexer::new(content, metrics).collect();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
