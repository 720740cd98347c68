//! Static classification data: literal tokens, keywords, byte classes.
//!
//! Everything here is process-wide constant data. Nothing is configurable
//! at runtime.

use crate::TokenKind;

/// Fixed-text tokens, matched by exact prefix in this order.
///
/// Only brackets and the semicolon live here. Operator characters are
/// classified before this table is consulted.
pub const LITERAL_TOKENS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    (";", TokenKind::Semicolon),
];

/// Reserved words of C and C++.
#[rustfmt::skip]
pub const KEYWORDS: &[&str] = &[
    // data types
    "int", "short", "long", "float", "double",
    "char", "wchar_t", "char8_t", "char16_t", "char32_t",
    "int8_t", "int16_t", "int32_t", "int64_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t",
    "bool", "void",
    // control flow
    "if", "else", "while", "for",
    "do", "switch", "case", "break",
    "goto", "default", "return", "continue",
    // storage classes
    "const", "auto", "register", "static",
    "extern", "thread_local", "mutable",
    // type modifiers
    "signed", "unsigned", "volatile", "inline",
    // memory management
    "new", "delete",
    // boolean and pointer literals
    "false", "true", "nullptr",
    // type information
    "typeid", "typename", "decltype",
    // exceptions
    "try", "catch", "throw",
    // classes, templates, namespaces
    "class", "struct", "union", "enum",
    "public", "private", "protected", "virtual",
    "friend", "explicit", "operator", "template",
    "namespace", "using", "static_assert", "concept",
    "requires", "consteval", "constexpr", "constinit",
    // alignment
    "alignas", "alignof",
    // coroutines
    "co_await", "co_return", "co_yield",
    // casts
    "dynamic_cast", "static_cast", "reinterpret_cast", "const_cast",
    // transactional memory
    "atomic_cancel", "atomic_commit", "atomic_noexcept",
    // miscellaneous
    "sizeof", "typedef", "asm", "noexcept", "this", "reflexpr", "synchronized",
    // alternative operator spellings
    "and", "or", "not",
    "and_eq", "or_eq", "not_eq",
    "bitand", "bitor",
    "xor", "xor_eq",
    // modules and contextual identifiers
    "import", "module", "concepts", "final", "override",
];

const MIN_KEYWORD_LEN: usize = {
    let mut min = usize::MAX;
    let mut i = 0;
    while i < KEYWORDS.len() {
        if KEYWORDS[i].len() < min {
            min = KEYWORDS[i].len();
        }
        i += 1;
    }
    min
};

const MAX_KEYWORD_LEN: usize = {
    let mut max = 0;
    let mut i = 0;
    while i < KEYWORDS.len() {
        if KEYWORDS[i].len() > max {
            max = KEYWORDS[i].len();
        }
        i += 1;
    }
    max
};

/// Returns `true` if `text` is exactly one of [`KEYWORDS`].
///
/// Case-sensitive. Lengths are compared before bytes, and identifiers whose
/// length falls outside the keyword range are rejected without a scan.
pub fn is_keyword(text: &[u8]) -> bool {
    let len = text.len();
    if !(MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&len) {
        return false;
    }
    KEYWORDS
        .iter()
        .any(|keyword| keyword.len() == len && keyword.as_bytes() == text)
}

/// Look up the literal token that prefixes `rest`, if any.
pub(crate) fn match_literal(rest: &[u8]) -> Option<(usize, TokenKind)> {
    LITERAL_TOKENS
        .iter()
        .find(|(text, _)| rest.starts_with(text.as_bytes()))
        .map(|(text, kind)| (text.len(), *kind))
}

// Byte classes, packed as bit flags into one 256-entry table so each
// classification is a single indexed read.

const CLASS_WHITESPACE: u8 = 1 << 0;
const CLASS_DIGIT: u8 = 1 << 1;
const CLASS_SYMBOL_START: u8 = 1 << 2;
const CLASS_SYMBOL: u8 = 1 << 3;
const CLASS_OPERATOR: u8 = 1 << 4;

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static BYTE_CLASS: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut class = 0;
        // Same set as C `isspace` in the "C" locale, vertical tab included.
        if matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') {
            class |= CLASS_WHITESPACE;
        }
        if b.is_ascii_digit() {
            class |= CLASS_DIGIT;
        }
        if b.is_ascii_alphabetic() || b == b'_' {
            class |= CLASS_SYMBOL_START;
        }
        if b.is_ascii_alphanumeric() || b == b'_' {
            class |= CLASS_SYMBOL;
        }
        if matches!(
            b,
            b'+' | b'-'
                | b'*'
                | b'/'
                | b'%'
                | b'<'
                | b'>'
                | b'='
                | b'!'
                | b'&'
                | b'|'
                | b'^'
                | b'~'
                | b'['
                | b']'
                | b','
                | b'.'
                | b':'
                | b'?'
        ) {
            class |= CLASS_OPERATOR;
        }
        table[i as usize] = class;
        i += 1;
    }
    table
};

#[inline]
fn has_class(b: u8, class: u8) -> bool {
    BYTE_CLASS[b as usize] & class != 0
}

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    has_class(b, CLASS_WHITESPACE)
}

#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    has_class(b, CLASS_DIGIT)
}

#[inline]
pub(crate) fn is_symbol_start(b: u8) -> bool {
    has_class(b, CLASS_SYMBOL_START)
}

#[inline]
pub(crate) fn is_symbol(b: u8) -> bool {
    has_class(b, CLASS_SYMBOL)
}

#[inline]
pub(crate) fn is_operator(b: u8) -> bool {
    has_class(b, CLASS_OPERATOR)
}

/// Bytes that complete a recognized escape after `\` in a string literal.
#[inline]
pub(crate) fn is_escape(b: u8) -> bool {
    matches!(b, b'n' | b't' | b'\\' | b'"' | b'\'')
}
