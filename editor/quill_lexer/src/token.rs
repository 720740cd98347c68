//! Token kinds and scan results.

use std::borrow::Cow;
use std::fmt;

/// Classification of a scanned token.
///
/// Discriminants are stable so highlighters can index color tables by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// End of content. Always zero-length.
    End = 0,
    /// A byte no other rule accepts. Always one byte long.
    Invalid = 1,
    /// `#` up to the first space or line end.
    Preproc = 2,
    /// Identifier that is not a keyword.
    Symbol = 3,
    OpenParen = 4,
    CloseParen = 5,
    OpenCurly = 6,
    CloseCurly = 7,
    Semicolon = 8,
    /// Identifier found in the keyword table.
    Keyword = 9,
    /// Single-byte operator or punctuation.
    Operator = 10,
    /// Run of ASCII digits.
    Number = 11,
    /// Double-quoted string literal, possibly unterminated.
    String = 12,
    /// `//` line comment including its newline.
    Comment = 13,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::End,
        TokenKind::Invalid,
        TokenKind::Preproc,
        TokenKind::Symbol,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Semicolon,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Comment,
    ];

    /// Human-readable name, as shown in diagnostics and debug dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::End => "end of content",
            TokenKind::Invalid => "invalid token",
            TokenKind::Preproc => "preprocessor directive",
            TokenKind::Symbol => "symbol",
            TokenKind::OpenParen => "open paren",
            TokenKind::CloseParen => "close paren",
            TokenKind::OpenCurly => "open curly",
            TokenKind::CloseCurly => "close curly",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open byte range `start..end` into the scanned buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Screen position of a token's first glyph.
///
/// `x` is the accumulated advance width since the start of the line; `y`
/// grows downward as negative multiples of the line height.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// One scan result.
///
/// `text` borrows from the buffer the producing [`Lexer`](crate::Lexer) was
/// built over, and `span` locates the same bytes by offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
    pub span: Span,
    pub position: Position,
}

impl Token<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Token text for display. Non-UTF-8 bytes are replaced.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text)
    }
}
