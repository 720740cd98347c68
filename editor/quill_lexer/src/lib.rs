//! Highlighting lexer for C/C++-like text.
//!
//! [`Lexer`] walks a borrowed byte buffer and produces one [`Token`] per
//! call. While it classifies each token it also lays it out: every consumed
//! byte advances a horizontal pixel position by that glyph's advance width
//! (from an optional [`GlyphMetrics`] source) and every `\n` moves to the
//! next line. A highlighter can therefore colorize and place glyphs without
//! a second pass over the text.
//!
//! The lexer is total. Any byte sequence, including binary garbage and
//! half-typed constructs, produces a finite token stream ending in
//! [`TokenKind::End`].

mod cursor;
mod glyph;
mod layout;
mod lexer;
mod tables;
mod token;

pub use cursor::Cursor;
pub use glyph::{GlyphMetrics, GlyphMetricsTable, FALLBACK_GLYPH, GLYPH_METRICS_CAPACITY};
pub use layout::LayoutConfig;
pub use lexer::{tokenize, Lexer};
pub use tables::{is_keyword, KEYWORDS, LITERAL_TOKENS};
pub use token::{Position, Span, Token, TokenKind};
